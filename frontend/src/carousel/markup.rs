//! Markup discovery for one carousel container
//!
//! Reads the track, its slides and the optional controls, plus the
//! per-container `data-carousel-*` overrides.

use shared::{CarouselConfig, MarkupSection};
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub const GAP_ATTRIBUTE: &str = "data-carousel-gap";
pub const DRAG_THRESHOLD_ATTRIBUTE: &str = "data-carousel-drag-threshold";

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupError {
    /// The browser rejected a configured selector
    InvalidSelector { selector: String },
    MissingTrack,
    /// The track exists but has no children; the container is left alone
    NoSlides,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::InvalidSelector { selector } => {
                write!(f, "invalid selector '{}'", selector)
            }
            MarkupError::MissingTrack => write!(f, "container has no track element"),
            MarkupError::NoSlides => write!(f, "track has no slides"),
        }
    }
}

impl std::error::Error for MarkupError {}

/// DOM references of a single carousel.
#[derive(Clone, Debug)]
pub struct CarouselMarkup {
    pub container: Element,
    pub track: HtmlElement,
    /// Fixed at discovery; later DOM mutations are not picked up
    pub slides: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
}

impl CarouselMarkup {
    pub fn discover(container: Element, markup: &MarkupSection) -> Result<Self, MarkupError> {
        let track = query(&container, &markup.track)?
            .and_then(|track| track.dyn_into::<HtmlElement>().ok())
            .ok_or(MarkupError::MissingTrack)?;

        let children = track.children();
        let slides: Vec<Element> = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        if slides.is_empty() {
            return Err(MarkupError::NoSlides);
        }

        let prev = query(&container, &markup.prev)?;
        let next = query(&container, &markup.next)?;

        Ok(Self {
            container,
            track,
            slides,
            prev,
            next,
        })
    }
}

fn query(container: &Element, selector: &str) -> Result<Option<Element>, MarkupError> {
    container
        .query_selector(selector)
        .map_err(|_| MarkupError::InvalidSelector {
            selector: selector.to_string(),
        })
}

/// Effective settings of one instance after applying data-attribute overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceOptions {
    pub slide_gap: f64,
    pub drag_threshold: f64,
    pub active_class: String,
    pub wheel_navigation: bool,
    pub suppress_wheel_scroll: bool,
}

/// A data attribute that could not be used as a length.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidOverride {
    pub attribute: &'static str,
    pub value: String,
}

impl fmt::Display for InvalidOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignoring {}=\"{}\": expected a non-negative length",
            self.attribute, self.value
        )
    }
}

impl InstanceOptions {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            slide_gap: config.layout.slide_gap,
            drag_threshold: config.gestures.drag_threshold,
            active_class: config.markup.active_class.clone(),
            wheel_navigation: config.gestures.wheel_navigation,
            suppress_wheel_scroll: config.gestures.suppress_wheel_scroll,
        }
    }

    /// Apply raw override values. Invalid ones keep the configured value
    /// and are returned so the caller can report them.
    pub fn with_overrides(
        mut self,
        gap: Option<&str>,
        drag_threshold: Option<&str>,
    ) -> (Self, Vec<InvalidOverride>) {
        let mut rejected = Vec::new();
        match resolve_length(self.slide_gap, GAP_ATTRIBUTE, gap) {
            Ok(value) => self.slide_gap = value,
            Err(invalid) => rejected.push(invalid),
        }
        match resolve_length(self.drag_threshold, DRAG_THRESHOLD_ATTRIBUTE, drag_threshold) {
            Ok(value) => self.drag_threshold = value,
            Err(invalid) => rejected.push(invalid),
        }
        (self, rejected)
    }

    pub fn for_container(
        container: &Element,
        config: &CarouselConfig,
    ) -> (Self, Vec<InvalidOverride>) {
        let gap = container.get_attribute(GAP_ATTRIBUTE);
        let drag_threshold = container.get_attribute(DRAG_THRESHOLD_ATTRIBUTE);
        Self::from_config(config).with_overrides(gap.as_deref(), drag_threshold.as_deref())
    }
}

fn resolve_length(
    current: f64,
    attribute: &'static str,
    raw: Option<&str>,
) -> Result<f64, InvalidOverride> {
    let Some(raw) = raw else {
        return Ok(current);
    };
    shared::parse_length(raw).ok_or_else(|| InvalidOverride {
        attribute,
        value: raw.to_string(),
    })
}
