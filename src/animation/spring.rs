use crate::foundation::error::{ArclightError, ArclightResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Damped harmonic oscillator parameters.
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may come to rest.
    pub rest_displacement: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> ArclightResult<()> {
        for (name, v) in [
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("rest_displacement", self.rest_displacement),
            ("rest_speed", self.rest_speed),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ArclightError::validation(format!(
                    "spring.{name} must be finite and > 0"
                )));
            }
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ArclightError::validation(
                "spring.damping must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Substep used by [`Spring::step`], in seconds.
const SUBSTEP_SECS: f64 = 0.001;

/// Longest time a single [`Spring::step`] integrates; larger frames are cut.
pub const MAX_STEP_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// A one-dimensional spring animating `position` toward `target`.
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    /// `velocity` is in units per second.
    pub fn new(from: f64, target: f64, velocity: f64, config: SpringConfig) -> Self {
        let mut spring = Self {
            position: from,
            velocity: if velocity.is_finite() { velocity } else { 0.0 },
            target,
            config,
            at_rest: false,
        };
        spring.at_rest = spring.settled();
        if spring.at_rest {
            spring.position = target;
            spring.velocity = 0.0;
        }
        spring
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Advance by `dt_secs` (semi-implicit Euler, fixed substeps), capped at
    /// [`MAX_STEP_SECS`]. Returns `true` once the spring has come to rest on
    /// its target.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.at_rest || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.at_rest;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        let mut remaining = dt_secs.min(MAX_STEP_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let accel = (-stiffness * (self.position - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;

            if self.settled() {
                self.position = self.target;
                self.velocity = 0.0;
                self.at_rest = true;
                break;
            }
        }
        self.at_rest
    }

    fn settled(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_speed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
