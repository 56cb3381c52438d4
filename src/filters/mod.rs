/// Filter ids, the tool registry, and per-image filter values.
pub(crate) mod model;
/// Slider position <-> value mapping.
pub(crate) mod range;
