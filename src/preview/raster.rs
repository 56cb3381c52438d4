//! Offline reference renderer for [`PreviewPlan`]s.
//!
//! Not used by the live preview; it exists so a plan can be inspected as
//! pixels (CLI, tests) with the same draw order a UI layer would use.

use std::path::Path;

use image::RgbaImage;

use crate::{
    config::RasterConfig,
    filters::model::FilterValues,
    foundation::core::{Rgb8, Rgba8Premul},
    foundation::error::{ArclightError, ArclightResult},
    foundation::math::mul_div255_u8,
    preview::compositor::{PreviewPlan, compose},
};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of `src` scaled by `opacity` onto `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f64) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Render `plan` over `base`. Output is opaque and has `base`'s dimensions.
#[tracing::instrument(skip(base, plan), fields(width = base.width(), height = base.height()))]
pub fn rasterize_preview(
    base: &RgbaImage,
    plan: &PreviewPlan,
    config: &RasterConfig,
) -> ArclightResult<RgbaImage> {
    let (width, height) = base.dimensions();
    if width == 0 || height == 0 {
        return Err(ArclightError::render("base image must be non-empty"));
    }

    let backdrop = Rgba8Premul::opaque(Rgb8::from(config.backdrop_rgb)).to_array();
    let fills: Vec<(PremulRgba8, f64)> = plan
        .overlays
        .iter()
        .map(|o| (Rgba8Premul::opaque(o.color).to_array(), o.opacity))
        .collect();
    let border = plan
        .border
        .map(|b| (Rgba8Premul::opaque(b.color).to_array(), b.alpha, stroke_px(b.width_px)));

    let mut out = RgbaImage::new(width, height);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let s = base.get_pixel(x, y).0;
        let src = Rgba8Premul::from_straight_rgba(s[0], s[1], s[2], s[3]).to_array();

        let mut acc = over(backdrop, src, plan.base_opacity);
        for &(color, opacity) in &fills {
            acc = over(acc, color, opacity);
        }
        if let Some((color, alpha, stroke)) = border
            && on_edge(x, y, width, height, stroke)
        {
            acc = over(acc, color, alpha);
        }
        // Backdrop is opaque, so premultiplied == straight here.
        px.0 = acc;
    }

    Ok(out)
}

/// Decode `input`, render the preview for `values`, and write a PNG to `output`.
pub fn preview_file(
    input: &Path,
    output: &Path,
    values: &FilterValues,
    config: &RasterConfig,
) -> ArclightResult<()> {
    let base = image::open(input)
        .map_err(|e| ArclightError::render(format!("decode '{}': {e}", input.display())))?
        .to_rgba8();
    let plan = compose(values);
    let rendered = rasterize_preview(&base, &plan, config)?;
    rendered
        .save_with_format(output, image::ImageFormat::Png)
        .map_err(|e| ArclightError::render(format!("write png '{}': {e}", output.display())))?;
    tracing::info!(path = %output.display(), "wrote preview");
    Ok(())
}

fn stroke_px(width_px: f64) -> u32 {
    if width_px.is_finite() && width_px > 0.0 {
        width_px.ceil() as u32
    } else {
        0
    }
}

fn on_edge(x: u32, y: u32, width: u32, height: u32, stroke: u32) -> bool {
    stroke > 0
        && (x < stroke
            || y < stroke
            || x >= width.saturating_sub(stroke)
            || y >= height.saturating_sub(stroke))
}

#[cfg(test)]
#[path = "../../tests/unit/preview/raster.rs"]
mod tests;
