//! Export-time filter encoding into CDN delivery URLs.
//!
//! A delivery URL looks like
//! `{host}/{cloud}/image/upload/[transform/]*[v<digits>/]folder/.../identifier`.
//! Filters are encoded as one comma-joined transform segment that the CDN
//! applies when the image is fetched.
//!
//! Only brightness, contrast and saturation are exported. The remaining
//! filters are preview-only for now.

use crate::filters::model::{FilterId, FilterValues};

/// Path marker that identifies a structured delivery URL.
pub const UPLOAD_MARKER: &str = "/image/upload/";

/// Filters honored by the CDN, in token order, with their effect names.
pub const EXPORTED_FILTERS: [(FilterId, &str); 3] = [
    (FilterId::Brightness, "e_brightness"),
    (FilterId::Contrast, "e_contrast"),
    (FilterId::Saturation, "e_saturation"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// `v<digits>`.
    Version,
    /// Contains `:`, `_` or `,` and precedes the version segment.
    Transform,
    /// Folder or identifier.
    Path,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A parsed delivery URL. [`DeliveryUrl::to_url_string`] reproduces the input
/// byte for byte.
pub struct DeliveryUrl {
    /// Everything up to and including `/image/upload`.
    pub base: String,
    /// `/`-delimited segments after the marker, verbatim.
    pub segments: Vec<Segment>,
    /// `?query` and/or `#fragment`, verbatim (empty when absent).
    pub suffix: String,
    #[serde(skip)]
    version_index: Option<usize>,
}

impl DeliveryUrl {
    /// Parse `url`; `None` when it has no `/image/upload/` marker.
    pub fn parse(url: &str) -> Option<Self> {
        let suffix_at = url.find(['?', '#']).unwrap_or(url.len());
        let (path, suffix) = url.split_at(suffix_at);

        let marker_at = path.find(UPLOAD_MARKER)?;
        // Keep the marker's trailing slash out of `base`.
        let base = &path[..marker_at + UPLOAD_MARKER.len() - 1];
        let rest = &path[marker_at + UPLOAD_MARKER.len()..];

        let raw: Vec<&str> = rest.split('/').collect();

        // The version may only be preceded by transforms; a folder segment
        // ends the scan so a later `v<digits>` folder is never mistaken for it.
        let mut version_index = None;
        for (i, s) in raw.iter().enumerate() {
            if is_version_segment(s) {
                version_index = Some(i);
                break;
            }
            if !is_transform_segment(s) {
                break;
            }
        }

        let segments = raw
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let kind = match version_index {
                    Some(v) if i == v => SegmentKind::Version,
                    Some(v) if i < v => SegmentKind::Transform,
                    _ => SegmentKind::Path,
                };
                Segment {
                    text: (*s).to_string(),
                    kind,
                }
            })
            .collect();

        Some(Self {
            base: base.to_string(),
            segments,
            suffix: suffix.to_string(),
            version_index,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version_index.map(|i| self.segments[i].text.as_str())
    }

    /// Existing transform segments ahead of the version, in order.
    pub fn transforms(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Transform)
            .map(|s| s.text.as_str())
    }

    /// Insert `token` as its own segment.
    ///
    /// With a version segment the token goes immediately before it, after any
    /// existing transforms. Without one it goes ahead of every remaining
    /// segment. Nothing else moves.
    pub fn inject_transform(&mut self, token: &str) {
        let at = self.version_index.unwrap_or(0);
        self.segments.insert(
            at,
            Segment {
                text: token.to_string(),
                kind: SegmentKind::Transform,
            },
        );
        if let Some(v) = self.version_index.as_mut() {
            *v += 1;
        }
    }

    pub fn to_url_string(&self) -> String {
        let mut out = String::with_capacity(
            self.base.len()
                + self.suffix.len()
                + self.segments.iter().map(|s| s.text.len() + 1).sum::<usize>(),
        );
        out.push_str(&self.base);
        for s in &self.segments {
            out.push('/');
            out.push_str(&s.text);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// `v` followed by one or more ASCII digits.
pub fn is_version_segment(s: &str) -> bool {
    s.strip_prefix('v')
        .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
}

pub fn is_transform_segment(s: &str) -> bool {
    s.contains([':', '_', ','])
}

/// `e_brightness:10,e_contrast:-20,...` for the active exported filters,
/// or `None` when none of them is active.
pub fn transform_token(values: &FilterValues) -> Option<String> {
    let tokens: Vec<String> = EXPORTED_FILTERS
        .iter()
        .filter_map(|&(id, effect)| {
            let v = values.get(id);
            (v != 0).then(|| format!("{effect}:{v}"))
        })
        .collect();
    (!tokens.is_empty()).then(|| tokens.join(","))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    /// A transform segment was injected.
    Applied,
    /// Recognized URL, nothing to encode; URL returned as-is.
    NoActiveFilters,
    /// URL shape not recognized while some filter is active; the unfiltered
    /// original will be used.
    NotApplied,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExportOutcome {
    pub url: String,
    pub status: ExportStatus,
}

impl ExportOutcome {
    /// `false` only when active filters had to be dropped.
    pub fn filters_applied(&self) -> bool {
        self.status != ExportStatus::NotApplied
    }
}

/// Rewrite `url` so the CDN renders `values`. Never fails: unrecognized URLs
/// come back unchanged with [`ExportStatus::NotApplied`].
#[tracing::instrument(skip(values))]
pub fn apply_filters(url: &str, values: &FilterValues) -> ExportOutcome {
    let Some(mut parsed) = DeliveryUrl::parse(url) else {
        // Any adjustment, exported or preview-only, is lost on the original image.
        let status = if !values.is_default() {
            tracing::warn!("url is not a delivery url; filters not applied");
            ExportStatus::NotApplied
        } else {
            ExportStatus::NoActiveFilters
        };
        return ExportOutcome {
            url: url.to_string(),
            status,
        };
    };

    let Some(token) = transform_token(values) else {
        return ExportOutcome {
            url: url.to_string(),
            status: ExportStatus::NoActiveFilters,
        };
    };

    parsed.inject_transform(&token);
    let out = parsed.to_url_string();
    tracing::debug!(%token, url = %out, "filters encoded");
    ExportOutcome {
        url: out,
        status: ExportStatus::Applied,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/url.rs"]
mod tests;
