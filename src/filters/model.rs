use std::{fmt, str::FromStr};

use crate::foundation::error::{ArclightError, ArclightResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
/// One named, ranged adjustment exposed by the filter menu.
pub enum FilterId {
    /// Overall lightness.
    Brightness,
    /// Tonal separation. Wider range than the rest, see [`REGISTRY`].
    Contrast,
    /// Color intensity.
    Saturation,
    /// Blue/orange balance.
    Temperature,
    /// Edge crispness.
    Sharpen,
    /// Grain.
    Noise,
    /// Raised black point.
    BlackLift,
    /// Warm tint.
    Warmth,
    /// Shadow recovery.
    Shadows,
    /// Highlight recovery.
    Highlights,
}

impl FilterId {
    /// Number of filters.
    pub const COUNT: usize = 10;

    /// All filters, in registry (carousel) order.
    pub const ALL: [FilterId; Self::COUNT] = [
        FilterId::Brightness,
        FilterId::Contrast,
        FilterId::Saturation,
        FilterId::Temperature,
        FilterId::Sharpen,
        FilterId::Noise,
        FilterId::BlackLift,
        FilterId::Warmth,
        FilterId::Shadows,
        FilterId::Highlights,
    ];

    /// Stable camelCase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::Temperature => "temperature",
            Self::Sharpen => "sharpen",
            Self::Noise => "noise",
            Self::BlackLift => "blackLift",
            Self::Warmth => "warmth",
            Self::Shadows => "shadows",
            Self::Highlights => "highlights",
        }
    }

    /// Static range descriptor for this filter.
    pub fn range(self) -> &'static ToolRange {
        &REGISTRY[self.index()]
    }

    /// Position in [`FilterId::ALL`] / [`REGISTRY`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterId {
    type Err = ArclightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ArclightError::validation(format!("unknown filter id '{wanted}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Immutable `{ id, label, min, max }` entry of the tool registry.
pub struct ToolRange {
    /// Filter this entry configures.
    pub id: FilterId,
    /// Carousel label.
    pub label: &'static str,
    /// Inclusive lower bound of the domain value.
    pub min: i32,
    /// Inclusive upper bound of the domain value.
    pub max: i32,
}

impl ToolRange {
    const fn new(id: FilterId, label: &'static str, min: i32, max: i32) -> Self {
        Self {
            id,
            label,
            min,
            max,
        }
    }

    /// Clamp a domain value into `[min, max]`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

pub(crate) const DEFAULT_MIN: i32 = -50;
pub(crate) const DEFAULT_MAX: i32 = 50;

/// Ordered tool registry shared by the range mapper and the carousel.
///
/// Contrast spans `[-100, 100]` while its preview overlays are tuned for
/// `[-50, 50]`; the export path passes the raw value through.
pub static REGISTRY: [ToolRange; FilterId::COUNT] = [
    ToolRange::new(FilterId::Brightness, "Brightness", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Contrast, "Contrast", -100, 100),
    ToolRange::new(FilterId::Saturation, "Saturation", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Temperature, "Temperature", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Sharpen, "Sharpen", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Noise, "Noise", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::BlackLift, "Black Lift", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Warmth, "Warmth", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Shadows, "Shadows", DEFAULT_MIN, DEFAULT_MAX),
    ToolRange::new(FilterId::Highlights, "Highlights", DEFAULT_MIN, DEFAULT_MAX),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Current domain value of every filter; all zero means "no adjustment".
pub struct FilterValues {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub temperature: i32,
    pub sharpen: i32,
    pub noise: i32,
    pub black_lift: i32,
    pub warmth: i32,
    pub shadows: i32,
    pub highlights: i32,
}

impl FilterValues {
    pub fn get(&self, id: FilterId) -> i32 {
        match id {
            FilterId::Brightness => self.brightness,
            FilterId::Contrast => self.contrast,
            FilterId::Saturation => self.saturation,
            FilterId::Temperature => self.temperature,
            FilterId::Sharpen => self.sharpen,
            FilterId::Noise => self.noise,
            FilterId::BlackLift => self.black_lift,
            FilterId::Warmth => self.warmth,
            FilterId::Shadows => self.shadows,
            FilterId::Highlights => self.highlights,
        }
    }

    fn slot(&mut self, id: FilterId) -> &mut i32 {
        match id {
            FilterId::Brightness => &mut self.brightness,
            FilterId::Contrast => &mut self.contrast,
            FilterId::Saturation => &mut self.saturation,
            FilterId::Temperature => &mut self.temperature,
            FilterId::Sharpen => &mut self.sharpen,
            FilterId::Noise => &mut self.noise,
            FilterId::BlackLift => &mut self.black_lift,
            FilterId::Warmth => &mut self.warmth,
            FilterId::Shadows => &mut self.shadows,
            FilterId::Highlights => &mut self.highlights,
        }
    }

    /// Store `value`, silently clamped to the filter's registry range.
    /// Returns what was actually stored.
    pub fn set(&mut self, id: FilterId, value: i32) -> i32 {
        let stored = id.range().clamp(value);
        *self.slot(id) = stored;
        stored
    }

    pub fn reset(&mut self, id: FilterId) {
        *self.slot(id) = 0;
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Non-zero filters in registry order.
    pub fn active(&self) -> impl Iterator<Item = (FilterId, i32)> + '_ {
        FilterId::ALL
            .into_iter()
            .map(|id| (id, self.get(id)))
            .filter(|&(_, v)| v != 0)
    }

    /// Re-clamp every entry; used after deserializing untrusted values.
    pub fn clamped(mut self) -> Self {
        for id in FilterId::ALL {
            let v = self.get(id);
            self.set(id, v);
        }
        self
    }

    pub fn from_json_str(s: &str) -> ArclightResult<Self> {
        let values: Self =
            serde_json::from_str(s).map_err(|e| ArclightError::serde(e.to_string()))?;
        Ok(values.clamped())
    }
}

/// Parse a `name=value` assignment such as `contrast=-20`.
pub fn parse_assignment(s: &str) -> ArclightResult<(FilterId, i32)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ArclightError::validation(format!("expected <filter>=<value>, got '{s}'")))?;
    let id: FilterId = name.parse()?;
    let value: i32 = value.trim().parse().map_err(|_| {
        ArclightError::validation(format!("filter '{id}' value must be an integer"))
    })?;
    Ok((id, value))
}

#[cfg(test)]
#[path = "../../tests/unit/filters/model.rs"]
mod tests;
