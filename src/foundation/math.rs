/// Round to nearest integer with halves going toward positive infinity.
///
/// Matches the slider's historical rounding (`-2.5 -> -2`, `2.5 -> 3`).
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// `true` when `v` is a usable, strictly positive extent.
pub(crate) fn is_positive_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
