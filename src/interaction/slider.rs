use crate::{
    filters::{
        model::ToolRange,
        range::{tool_position_to_value, tool_value_to_position},
    },
    foundation::math::is_positive_extent,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pointer events delivered to the slider.
pub enum SliderEvent {
    /// Track measured (or re-measured) by the layout pass.
    Layout { track_width: f64 },
    /// Pointer went down on the thumb.
    Grant,
    /// Cumulative horizontal delta since [`SliderEvent::Grant`].
    Move { dx: f64 },
    Release,
    /// Gesture abandoned (menu dismissed, responder stolen).
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderPhase {
    Idle,
    Dragging { anchor: f64 },
}

#[derive(Clone, Debug, PartialEq)]
/// Thumb state for the currently selected tool.
pub struct SliderState {
    range: ToolRange,
    track_width: f64,
    position: f64,
    value: i32,
    dead_zone: f64,
    phase: SliderPhase,
}

impl SliderState {
    /// State for `range` showing `value`. The thumb position is rebuilt from
    /// the value under this range, never carried over from another tool.
    pub fn for_tool(range: ToolRange, value: i32, track_width: f64, dead_zone: f64) -> Self {
        let mut s = Self {
            range,
            track_width: 0.0,
            position: 0.0,
            value: range.clamp(value),
            dead_zone,
            phase: SliderPhase::Idle,
        };
        s.set_track_width(track_width);
        s
    }

    pub fn range(&self) -> &ToolRange {
        &self.range
    }

    /// Committed value; this is also what the label shows.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn phase(&self) -> SliderPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SliderPhase::Dragging { .. })
    }

    /// Apply one event. Returns the new value whenever a move changed it.
    pub fn apply(&mut self, event: SliderEvent) -> Option<i32> {
        match (self.phase, event) {
            (phase, SliderEvent::Layout { track_width }) => {
                let old_width = self.track_width;
                self.set_track_width(track_width);
                // Keep an in-flight drag anchored in the new pixel space.
                if let SliderPhase::Dragging { anchor } = phase
                    && is_positive_extent(old_width)
                    && self.track_width != old_width
                {
                    self.phase = SliderPhase::Dragging {
                        anchor: anchor * self.track_width / old_width,
                    };
                }
                None
            }
            (SliderPhase::Idle, SliderEvent::Grant) => {
                self.phase = SliderPhase::Dragging {
                    anchor: self.position,
                };
                None
            }
            (SliderPhase::Dragging { anchor }, SliderEvent::Move { dx }) => self.drag_to(anchor + dx),
            (SliderPhase::Dragging { .. }, SliderEvent::Release | SliderEvent::Cancel) => {
                self.phase = SliderPhase::Idle;
                None
            }
            // Stray events (move without grant, double grant, ...) are ignored.
            _ => None,
        }
    }

    /// Replace the value from outside a gesture (reset, image reload).
    pub fn set_value(&mut self, value: i32) {
        self.value = self.range.clamp(value);
        self.phase = SliderPhase::Idle;
        if let Some(p) = tool_value_to_position(self.value, self.track_width, &self.range) {
            self.position = p;
        }
    }

    fn drag_to(&mut self, target: f64) -> Option<i32> {
        if target.is_nan() {
            return None;
        }
        // Zero width before layout: leave state untouched.
        let value = tool_position_to_value(target, self.track_width, &self.range, self.dead_zone)?;
        self.position = target.clamp(0.0, self.track_width);
        tracing::trace!(position = self.position, value, "slider move");
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    fn set_track_width(&mut self, track_width: f64) {
        if !is_positive_extent(track_width) {
            return;
        }
        self.track_width = track_width;
        if let Some(p) = tool_value_to_position(self.value, track_width, &self.range) {
            self.position = p;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/slider.rs"]
mod tests;
