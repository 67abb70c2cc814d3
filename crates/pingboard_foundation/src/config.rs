//! Simulation configuration supplied by the surrounding runtime.
//!
//! Board text never carries the frame rate; the simulation decides it and
//! hands it to the scene finalizer through [`SimulationConfig`].

use std::num::NonZeroU32;

/// Gravity applied when a board does not set `gravity` (board units / s²).
pub const DEFAULT_GRAVITY: f64 = 25.0;

/// Linear friction coefficient applied when a board does not set `friction1` (per second).
pub const DEFAULT_MU1: f64 = 0.025;

/// Quadratic friction coefficient applied when a board does not set `friction2` (per board unit).
pub const DEFAULT_MU2: f64 = 0.025;

/// Frames per second the simulation steps at unless configured otherwise.
pub const DEFAULT_FRAME_RATE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(rate) => rate,
    None => unreachable!(),
};

/// Configuration for building scenes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Frames per second; the scene time-step is its reciprocal.
    pub frame_rate: NonZeroU32,

    /// Gravity used when the board omits it.
    pub default_gravity: f64,

    /// `friction1` used when the board omits it.
    pub default_mu1: f64,

    /// `friction2` used when the board omits it.
    pub default_mu2: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            default_gravity: DEFAULT_GRAVITY,
            default_mu1: DEFAULT_MU1,
            default_mu2: DEFAULT_MU2,
        }
    }
}

impl SimulationConfig {
    /// Builder method to set the frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: NonZeroU32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Builder method to set the default gravity.
    #[must_use]
    pub fn with_default_gravity(mut self, gravity: f64) -> Self {
        self.default_gravity = gravity;
        self
    }

    /// Builder method to set both default friction coefficients.
    #[must_use]
    pub fn with_default_friction(mut self, mu1: f64, mu2: f64) -> Self {
        self.default_mu1 = mu1;
        self.default_mu2 = mu2;
        self
    }

    /// Returns the simulation time-step in seconds.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.get())
    }
}
