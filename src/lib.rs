//! Arclight's filter core: the part of the image editor that turns a handful of
//! named slider values into pixels the user can trust.
//!
//! Two independent render paths have to agree closely enough that exports hold
//! no surprises:
//!
//! 1. **Live preview**: `FilterValues -> PreviewPlan`, a fixed-order stack of
//!    translucent overlays drawn over the displayed image (no pixel access).
//! 2. **Export**: `FilterValues + delivery URL -> URL` with a CDN transform
//!    segment injected, rendered server-side when the image is fetched.
//!
//! Input arrives through two gesture state machines (value slider and tool
//! carousel) owned by a [`FilterEditor`]. Everything here is synchronous,
//! single-owner and free of I/O, except the offline [`rasterize_preview`]
//! helpers.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod export;
mod filters;
mod foundation;
mod interaction;
mod preview;

pub use animation::spring::{MAX_STEP_SECS, Spring, SpringConfig};
pub use config::{CarouselConfig, EditorConfig, RasterConfig};
pub use export::url::{
    DeliveryUrl, EXPORTED_FILTERS, ExportOutcome, ExportStatus, Segment, SegmentKind,
    UPLOAD_MARKER, apply_filters, is_transform_segment, is_version_segment, transform_token,
};
pub use filters::model::{FilterId, FilterValues, REGISTRY, ToolRange, parse_assignment};
pub use filters::range::{
    DEFAULT_DEAD_ZONE, commit_value, position_to_value, snap_dead_zone, tool_position_to_value,
    tool_value_to_position, value_to_position,
};
pub use foundation::core::{Rgb8, Rgba8Premul};
pub use foundation::error::{ArclightError, ArclightResult};
pub use interaction::carousel::{CarouselEvent, CarouselPhase, CarouselState};
pub use interaction::controller::{EditorEvent, EditorUpdate, FilterEditor};
pub use interaction::slider::{SliderEvent, SliderPhase, SliderState};
pub use preview::compositor::{
    BlendHint, Border, MIN_BASE_OPACITY, Overlay, PreviewPlan, SHARPEN_BORDER_THRESHOLD, Tone,
    base_opacity, compose,
};
pub use preview::raster::{PremulRgba8, over, preview_file, rasterize_preview};
