//! Live preview approximation: filter values -> stacked translucent overlays.
//!
//! The preview has no access to pixels. Each filter instead contributes
//! zero or more full-frame solid overlays (plus, for strong sharpening, a
//! thin border) drawn over the base image in a fixed order. Later overlays
//! visually dominate, so the order below is part of the contract:
//!
//! 1. brightness, 2. contrast, 3. saturation, 4. sharpen,
//! 5. warmth, 6. temperature, 7. shadows, 8. highlights, 9. black lift, 10. noise.
//!
//! Denominators for the first four are tuned so that the full `[-50, 50]`
//! domain stays inside a sane opacity envelope. Contrast's registry range is
//! wider (`[-100, 100]`) and is passed through unscaled.

use crate::{
    filters::model::{FilterId, FilterValues},
    foundation::core::Rgb8,
};

/// Lowest base-image opacity reachable through negative brightness.
pub const MIN_BASE_OPACITY: f64 = 0.3;

/// Sharpen value above which the edge border is drawn.
pub const SHARPEN_BORDER_THRESHOLD: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Sign-keyed decision for one filter value.
pub enum Tone {
    /// Negative value; payload is the magnitude.
    Darkening(f64),
    /// Positive value; payload is the magnitude.
    Brightening(f64),
    /// Zero: contributes nothing.
    Neutral,
}

impl Tone {
    pub fn of(value: i32) -> Self {
        match value {
            0 => Self::Neutral,
            v if v < 0 => Self::Darkening(f64::from(v.unsigned_abs())),
            v => Self::Brightening(f64::from(v)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the renderer should blend an overlay. Purely advisory for UI layers;
/// the reference rasterizer always uses source-over.
pub enum BlendHint {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One full-frame translucent layer.
pub struct Overlay {
    /// Filter that produced this layer.
    pub source: FilterId,
    pub color: Rgb8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub blend: BlendHint,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Thin frame stroke approximating edge enhancement.
pub struct Border {
    pub width_px: f64,
    pub color: Rgb8,
    /// Stroke alpha in `[0, 1]`.
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a renderer needs to draw the live preview.
pub struct PreviewPlan {
    /// Opacity of the base image itself, in `[MIN_BASE_OPACITY, 1]`.
    pub base_opacity: f64,
    /// Overlays in draw order. Never reorder.
    pub overlays: Vec<Overlay>,
    pub border: Option<Border>,
}

impl PreviewPlan {
    /// `true` when the plan draws the image untouched.
    pub fn is_identity(&self) -> bool {
        self.base_opacity == 1.0 && self.overlays.is_empty() && self.border.is_none()
    }

    /// Overlays emitted for a single filter, in draw order.
    pub fn overlays_for(&self, id: FilterId) -> impl Iterator<Item = &Overlay> + '_ {
        self.overlays.iter().filter(move |o| o.source == id)
    }
}

/// Build the overlay stack for `values`. Called on every slider move.
pub fn compose(values: &FilterValues) -> PreviewPlan {
    let mut out = Stack::default();

    brightness(&mut out, values.brightness);
    contrast(&mut out, values.contrast);
    saturation(&mut out, values.saturation);
    let border = sharpen(&mut out, values.sharpen);
    warmth(&mut out, values.warmth);
    temperature(&mut out, values.temperature);
    shadows(&mut out, values.shadows);
    highlights(&mut out, values.highlights);
    black_lift(&mut out, values.black_lift);
    noise(&mut out, values.noise);

    tracing::trace!(overlays = out.0.len(), "preview composed");

    PreviewPlan {
        base_opacity: base_opacity(values.brightness),
        overlays: out.0,
        border,
    }
}

/// Base image opacity for a brightness value: `clamp(1 + b/100, 0.3, 1)`.
pub fn base_opacity(brightness: i32) -> f64 {
    (1.0 + f64::from(brightness) / 100.0).clamp(MIN_BASE_OPACITY, 1.0)
}

#[derive(Default)]
struct Stack(Vec<Overlay>);

impl Stack {
    fn push(&mut self, source: FilterId, color: Rgb8, opacity: f64, blend: BlendHint) {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        self.0.push(Overlay {
            source,
            color,
            opacity,
            blend,
        });
    }
}

fn brightness(out: &mut Stack, v: i32) {
    let id = FilterId::Brightness;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::WHITE, m / 200.0, BlendHint::Screen),
        Tone::Darkening(m) => out.push(id, Rgb8::BLACK, m / 100.0, BlendHint::Multiply),
        Tone::Neutral => {}
    }
}

fn contrast(out: &mut Stack, v: i32) {
    let id = FilterId::Contrast;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::BLACK, m / 250.0, BlendHint::Multiply),
        Tone::Darkening(m) => out.push(id, Rgb8::GRAY, m / 150.0, BlendHint::Normal),
        Tone::Neutral => {}
    }
}

fn saturation(out: &mut Stack, v: i32) {
    let id = FilterId::Saturation;
    match Tone::of(v) {
        Tone::Darkening(m) => out.push(id, Rgb8::GRAY, m / 50.0, BlendHint::Normal),
        // Color-pop approximation: per-channel saturation needs pixels.
        Tone::Brightening(m) => {
            out.push(id, Rgb8::BLACK, m / 300.0, BlendHint::Multiply);
            out.push(id, Rgb8::ORANGE_RED, m / 600.0, BlendHint::Overlay);
            out.push(id, Rgb8::CYAN, m / 800.0, BlendHint::Overlay);
        }
        Tone::Neutral => {}
    }
}

fn sharpen(out: &mut Stack, v: i32) -> Option<Border> {
    let id = FilterId::Sharpen;
    match Tone::of(v) {
        Tone::Darkening(m) => {
            out.push(id, Rgb8::WHITE, m / 200.0, BlendHint::Screen);
            out.push(id, Rgb8::LIGHT_GRAY, m / 300.0, BlendHint::Normal);
            None
        }
        Tone::Brightening(m) => {
            out.push(id, Rgb8::BLACK, m / 400.0, BlendHint::Multiply);
            (v > SHARPEN_BORDER_THRESHOLD).then(|| Border {
                width_px: 1.0,
                color: Rgb8::BLACK,
                alpha: (m / 200.0).clamp(0.0, 1.0),
            })
        }
        Tone::Neutral => None,
    }
}

// Preview-only filters below; none of them reach the export transform.

fn warmth(out: &mut Stack, v: i32) {
    let id = FilterId::Warmth;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::ORANGE, m / 250.0, BlendHint::Overlay),
        Tone::Darkening(m) => out.push(id, Rgb8::DODGER_BLUE, m / 250.0, BlendHint::Overlay),
        Tone::Neutral => {}
    }
}

fn temperature(out: &mut Stack, v: i32) {
    let id = FilterId::Temperature;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::DARK_ORANGE, m / 300.0, BlendHint::Overlay),
        Tone::Darkening(m) => out.push(id, Rgb8::STEEL_BLUE, m / 300.0, BlendHint::Overlay),
        Tone::Neutral => {}
    }
}

fn shadows(out: &mut Stack, v: i32) {
    let id = FilterId::Shadows;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::WHITE, m / 400.0, BlendHint::Screen),
        Tone::Darkening(m) => out.push(id, Rgb8::BLACK, m / 300.0, BlendHint::Multiply),
        Tone::Neutral => {}
    }
}

fn highlights(out: &mut Stack, v: i32) {
    let id = FilterId::Highlights;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::WHITE, m / 300.0, BlendHint::Screen),
        Tone::Darkening(m) => out.push(id, Rgb8::BLACK, m / 400.0, BlendHint::Multiply),
        Tone::Neutral => {}
    }
}

fn black_lift(out: &mut Stack, v: i32) {
    let id = FilterId::BlackLift;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::DARK_GRAY, m / 250.0, BlendHint::Screen),
        Tone::Darkening(m) => out.push(id, Rgb8::BLACK, m / 250.0, BlendHint::Multiply),
        Tone::Neutral => {}
    }
}

fn noise(out: &mut Stack, v: i32) {
    let id = FilterId::Noise;
    match Tone::of(v) {
        Tone::Brightening(m) => out.push(id, Rgb8::GRAY, m / 500.0, BlendHint::Overlay),
        Tone::Darkening(m) => out.push(id, Rgb8::WHITE, m / 400.0, BlendHint::Screen),
        Tone::Neutral => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/compositor.rs"]
mod tests;
