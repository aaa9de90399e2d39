//! Carousel configuration embedded at build time

use shared::{CarouselConfig, ConfigError};
use zoon::eprintln;

const EMBEDDED_CONFIG: &str = include_str!("../carousel.toml");

/// Parse the embedded `carousel.toml`.
pub fn embedded() -> Result<CarouselConfig, ConfigError> {
    CarouselConfig::from_toml_str(EMBEDDED_CONFIG)
}

/// Embedded config, or defaults when it cannot be used.
pub fn load() -> CarouselConfig {
    match embedded() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("⚠️ {} - falling back to default carousel config", error);
            CarouselConfig::default()
        }
    }
}
