use serde::{Deserialize, Serialize};
use std::fmt;

// ===== CONFIG TYPES =====

/// Global carousel configuration, usually parsed from `carousel.toml`.
///
/// Every section and every key is optional; missing entries fall back
/// to the values in the corresponding `Default` impl.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub app: AppSection,
    pub markup: MarkupSection,
    pub layout: LayoutSection,
    pub gestures: GestureSection,
}

// AppSection only carries the config format version so older files can be recognized
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

/// CSS selectors and class names forming the markup contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarkupSection {
    pub container: String,
    pub track: String,
    pub prev: String,
    pub next: String,
    pub active_class: String,
}

impl Default for MarkupSection {
    fn default() -> Self {
        Self {
            container: "[data-carousel]".to_string(),
            track: "[data-carousel-track]".to_string(),
            prev: "[data-carousel-prev]".to_string(),
            next: "[data-carousel-next]".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutSection {
    /// Horizontal gap between slides in CSS pixels
    pub slide_gap: f64,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            slide_gap: DEFAULT_SLIDE_GAP,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GestureSection {
    /// Minimum horizontal pointer displacement (exclusive) counted as a swipe
    pub drag_threshold: f64,
    pub wheel_navigation: bool,
    pub suppress_wheel_scroll: bool,
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            wheel_navigation: true,
            suppress_wheel_scroll: true,
        }
    }
}

pub const DEFAULT_SLIDE_GAP: f64 = 16.0;
pub const DEFAULT_DRAG_THRESHOLD: f64 = 30.0;

// ===== ERRORS =====

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The TOML document could not be deserialized
    Parse(String),
    /// A field parsed fine but holds an unusable value
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => {
                write!(f, "failed to parse carousel config: {}", message)
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid carousel config value '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

// ===== LOADING & VALIDATION =====

impl CarouselConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CarouselConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.app.is_supported_version() {
            return Err(ConfigError::Invalid {
                field: "app.version",
                reason: format!("unsupported version '{}'", self.app.version),
            });
        }

        let selectors = [
            ("markup.container", &self.markup.container),
            ("markup.track", &self.markup.track),
            ("markup.prev", &self.markup.prev),
            ("markup.next", &self.markup.next),
            ("markup.active_class", &self.markup.active_class),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        check_length("layout.slide_gap", self.layout.slide_gap)?;
        check_length("gestures.drag_threshold", self.gestures.drag_threshold)?;
        Ok(())
    }
}

/// Parse a user-supplied pixel length (e.g. from a data attribute).
///
/// Returns `None` for anything that isn't a finite, non-negative number.
pub fn parse_length(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
    trimmed
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn check_length(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite non-negative length, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_contract() {
        let config = CarouselConfig::default();
        assert_eq!(config.markup.container, "[data-carousel]");
        assert_eq!(config.markup.track, "[data-carousel-track]");
        assert_eq!(config.markup.prev, "[data-carousel-prev]");
        assert_eq!(config.markup.next, "[data-carousel-next]");
        assert_eq!(config.markup.active_class, "active");
        assert_eq!(config.layout.slide_gap, 16.0);
        assert_eq!(config.gestures.drag_threshold, 30.0);
        assert!(config.gestures.wheel_navigation);
        assert!(config.gestures.suppress_wheel_scroll);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = CarouselConfig::from_toml_str("").unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let source = r#"
            [layout]
            slide_gap = 24.0

            [gestures]
            suppress_wheel_scroll = false
        "#;
        let config = CarouselConfig::from_toml_str(source).unwrap();
        assert_eq!(config.layout.slide_gap, 24.0);
        assert!(!config.gestures.suppress_wheel_scroll);
        assert_eq!(config.gestures.drag_threshold, 30.0);
        assert_eq!(config.markup, MarkupSection::default());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let source = "[gestures]\ndrag_threshold = -1.0\n";
        let error = CarouselConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid { field: "gestures.drag_threshold", .. }
        ));
    }

    #[test]
    fn test_empty_selector_rejected() {
        let source = "[markup]\ntrack = \"  \"\n";
        let error = CarouselConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { field: "markup.track", .. }));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let source = "[app]\nversion = \"9.9.9\"\n";
        let error = CarouselConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { field: "app.version", .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let error = CarouselConfig::from_toml_str("[layout\nslide_gap = ").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error.to_string().starts_with("failed to parse carousel config"));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("24"), Some(24.0));
        assert_eq!(parse_length(" 12.5px "), Some(12.5));
        assert_eq!(parse_length("0"), Some(0.0));
        assert_eq!(parse_length("-4"), None);
        assert_eq!(parse_length("wide"), None);
        assert_eq!(parse_length("NaN"), None);
        assert_eq!(parse_length("inf"), None);
    }
}
