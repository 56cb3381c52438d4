//! Slider pixel position <-> filter domain value mapping.

use crate::{
    filters::model::ToolRange,
    foundation::math::{is_positive_extent, round_half_up},
};

/// Magnitude below which a value snaps to exactly zero.
pub const DEFAULT_DEAD_ZONE: f64 = 4.0;

/// Map a domain value onto the slider track.
///
/// Returns `None` when the track has no usable width yet (before layout) or
/// the range is degenerate.
pub fn value_to_position(value: f64, track_width: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if !is_positive_extent(track_width) || !is_positive_extent(span) || !value.is_finite() {
        return None;
    }
    if value <= min {
        return Some(0.0);
    }
    if value >= max {
        return Some(track_width);
    }
    Some(((value - min) / span) * track_width)
}

/// Inverse of [`value_to_position`]. The position is clamped to the track
/// first, so the result always lies in `[min, max]`.
pub fn position_to_value(position: f64, track_width: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if !is_positive_extent(track_width) || !is_positive_extent(span) || position.is_nan() {
        return None;
    }
    let p = position.clamp(0.0, track_width);
    if p <= 0.0 {
        return Some(min);
    }
    if p >= track_width {
        return Some(max);
    }
    Some(min + (p / track_width) * span)
}

/// Zero out values whose magnitude is inside the dead zone.
pub fn snap_dead_zone(value: f64, dead_zone: f64) -> f64 {
    if value.abs() < dead_zone { 0.0 } else { value }
}

/// Turn a raw mapped value into what gets stored and displayed:
/// dead-zone snap, integer rounding, then clamp to the tool's range.
pub fn commit_value(raw: f64, range: &ToolRange, dead_zone: f64) -> i32 {
    let snapped = snap_dead_zone(raw, dead_zone);
    let rounded = round_half_up(snapped);
    // `as` saturates on overflow; the clamp keeps it inside the tool range.
    range.clamp(rounded as i32)
}

/// [`value_to_position`] against a registry entry.
pub fn tool_value_to_position(value: i32, track_width: f64, range: &ToolRange) -> Option<f64> {
    value_to_position(
        f64::from(value),
        track_width,
        f64::from(range.min),
        f64::from(range.max),
    )
}

/// [`position_to_value`] + [`commit_value`] against a registry entry.
pub fn tool_position_to_value(
    position: f64,
    track_width: f64,
    range: &ToolRange,
    dead_zone: f64,
) -> Option<i32> {
    let raw = position_to_value(
        position,
        track_width,
        f64::from(range.min),
        f64::from(range.max),
    )?;
    Some(commit_value(raw, range, dead_zone))
}

#[cfg(test)]
#[path = "../../tests/unit/filters/range.rs"]
mod tests;
