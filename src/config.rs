use std::path::Path;

use crate::{
    animation::spring::SpringConfig,
    filters::range::DEFAULT_DEAD_ZONE,
    foundation::error::{ArclightError, ArclightResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables for the filter menu. Every field has a default, so an empty
/// JSON object is a valid config.
pub struct EditorConfig {
    /// Values with magnitude below this snap to zero.
    pub dead_zone: f64,
    pub carousel: CarouselConfig,
    pub raster: RasterConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            carousel: CarouselConfig::default(),
            raster: RasterConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tool-strip gesture tuning. Velocities are in px/ms as reported by the
/// pointer layer.
pub struct CarouselConfig {
    pub item_width_px: f64,
    /// Damping applied to displacement beyond the scroll range.
    pub rubber_band: f64,
    pub distance_threshold_px: f64,
    pub velocity_threshold: f64,
    /// Release speed above which the strip skips extra items.
    pub fling_velocity: f64,
    pub max_fling_steps: u32,
    pub spring: SpringConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width_px: 72.0,
            rubber_band: 0.3,
            distance_threshold_px: 30.0,
            velocity_threshold: 0.5,
            fling_velocity: 1.0,
            max_fling_steps: 3,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Color behind the base image when brightness dims it.
    pub backdrop_rgb: [u8; 3],
}

impl EditorConfig {
    pub fn validate(&self) -> ArclightResult<()> {
        if !self.dead_zone.is_finite() || self.dead_zone < 0.0 {
            return Err(ArclightError::validation(
                "dead_zone must be finite and >= 0",
            ));
        }
        self.carousel.validate()
    }

    pub fn from_json_str(s: &str) -> ArclightResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ArclightError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ArclightResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ArclightError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> ArclightResult<()> {
        if !self.item_width_px.is_finite() || self.item_width_px <= 0.0 {
            return Err(ArclightError::validation(
                "carousel.item_width_px must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.rubber_band) {
            return Err(ArclightError::validation(
                "carousel.rubber_band must be in [0, 1]",
            ));
        }
        for (name, v) in [
            ("distance_threshold_px", self.distance_threshold_px),
            ("velocity_threshold", self.velocity_threshold),
            ("fling_velocity", self.fling_velocity),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ArclightError::validation(format!(
                    "carousel.{name} must be finite and >= 0"
                )));
            }
        }
        self.spring.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
