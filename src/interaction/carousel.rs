use crate::{
    animation::spring::Spring,
    config::CarouselConfig,
    foundation::error::{ArclightError, ArclightResult},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pointer and frame events delivered to the tool strip.
///
/// `dx` is the cumulative horizontal delta since [`CarouselEvent::Grant`] and
/// `vx` the pointer velocity in px/ms; positive means the finger moves right,
/// which scrolls toward lower indices.
pub enum CarouselEvent {
    Grant,
    Move { dx: f64 },
    Release { dx: f64, vx: f64 },
    /// Animation frame.
    Tick { dt_secs: f64 },
    /// Tap on an icon.
    Select { index: usize },
    /// Gesture abandoned; settle back to the current tool.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Dragging { start_offset: f64, start_index: usize },
    Settling(Spring),
}

#[derive(Clone, Debug, PartialEq)]
/// Scroll state of the tool strip. `offset` is the scroll distance in px;
/// the canonical offset of tool `i` is `i * item_width_px`.
pub struct CarouselState {
    tool_count: usize,
    index: usize,
    offset: f64,
    phase: CarouselPhase,
    config: CarouselConfig,
}

impl CarouselState {
    pub fn new(tool_count: usize, config: CarouselConfig) -> ArclightResult<Self> {
        if tool_count == 0 {
            return Err(ArclightError::validation("carousel needs at least one tool"));
        }
        config.validate()?;
        Ok(Self {
            tool_count,
            index: 0,
            offset: 0.0,
            phase: CarouselPhase::Idle,
            config,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> &CarouselPhase {
        &self.phase
    }

    pub fn tool_count(&self) -> usize {
        self.tool_count
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging { .. })
    }

    pub fn canonical_offset(&self, index: usize) -> f64 {
        index as f64 * self.config.item_width_px
    }

    fn max_offset(&self) -> f64 {
        self.canonical_offset(self.tool_count - 1)
    }

    /// Apply one event. Returns the newly selected index when it changes.
    pub fn apply(&mut self, event: CarouselEvent) -> Option<usize> {
        match event {
            CarouselEvent::Grant => {
                // Grabbing a settling strip stops it where it is.
                self.phase = CarouselPhase::Dragging {
                    start_offset: self.offset,
                    start_index: self.index,
                };
                None
            }
            CarouselEvent::Move { dx } => {
                if let CarouselPhase::Dragging { start_offset, .. } = self.phase
                    && dx.is_finite()
                {
                    self.offset = self.rubber_band(start_offset - dx);
                }
                None
            }
            CarouselEvent::Release { dx, vx } => {
                let CarouselPhase::Dragging { start_index, .. } = self.phase else {
                    return None;
                };
                let dx = if dx.is_finite() { dx } else { 0.0 };
                let vx = if vx.is_finite() { vx } else { 0.0 };
                let target = self.release_target(start_index, dx, vx);
                tracing::debug!(start_index, target, dx, vx, "carousel release");
                // px/ms -> px/s, and scroll runs opposite to the finger.
                self.settle_to(target, -vx * 1000.0)
            }
            CarouselEvent::Tick { dt_secs } => {
                if let CarouselPhase::Settling(mut spring) = self.phase {
                    let done = spring.step(dt_secs);
                    self.offset = spring.position();
                    self.phase = if done {
                        CarouselPhase::Idle
                    } else {
                        CarouselPhase::Settling(spring)
                    };
                }
                None
            }
            CarouselEvent::Select { index } => {
                if self.is_dragging() {
                    return None;
                }
                self.settle_to(index, 0.0)
            }
            CarouselEvent::Cancel => {
                if !self.is_dragging() {
                    return None;
                }
                self.settle_to(self.index, 0.0)
            }
        }
    }

    /// Elastic ends: displacement past either end is damped, not clamped.
    pub fn rubber_band(&self, raw: f64) -> f64 {
        let max = self.max_offset();
        let k = self.config.rubber_band;
        if raw < 0.0 {
            raw * k
        } else if raw > max {
            max + (raw - max) * k
        } else {
            raw
        }
    }

    /// Index the strip should settle on after a release.
    pub fn release_target(&self, start_index: usize, dx: f64, vx: f64) -> usize {
        let cfg = &self.config;
        let mut target = (self.offset / cfg.item_width_px).round() as i64;

        let direction = if vx.abs() > cfg.velocity_threshold {
            -vx.signum() as i64
        } else if dx != 0.0 {
            -dx.signum() as i64
        } else {
            0
        };

        let swiped = dx.abs() > cfg.distance_threshold_px || vx.abs() > cfg.velocity_threshold;
        if swiped && target == start_index as i64 {
            target += direction;
        }

        if vx.abs() > cfg.fling_velocity {
            let extra = (vx.abs().floor() as i64).min(i64::from(cfg.max_fling_steps));
            target += direction * extra;
        }

        target.clamp(0, self.tool_count as i64 - 1) as usize
    }

    fn settle_to(&mut self, index: usize, velocity: f64) -> Option<usize> {
        let index = index.min(self.tool_count - 1);
        let spring = Spring::new(
            self.offset,
            self.canonical_offset(index),
            velocity,
            self.config.spring,
        );
        if spring.is_at_rest() {
            self.offset = spring.position();
            self.phase = CarouselPhase::Idle;
        } else {
            self.phase = CarouselPhase::Settling(spring);
        }

        let previous = self.index;
        self.index = index;
        (index != previous).then_some(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/carousel.rs"]
mod tests;
