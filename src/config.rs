use std::time::Duration;

use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the showcase needs at least one section")]
    NoSections,

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("swipe threshold must be a positive number, got {0}")]
    SwipeThreshold(String),

    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: i32, height: i32 },

    #[error("fps must be greater than zero")]
    ZeroFps,
}

/// Durations of the two-step transition and the auto-advance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Time the outgoing section gets to leave before the incoming one attaches.
    pub exit: Duration,
    /// Time between attaching the incoming section and finalizing.
    pub settle: Duration,
    /// `None` turns auto-advance off entirely, hover resume included.
    pub auto_advance: Option<Duration>,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            exit: Duration::from_millis(EXIT_DURATION_MS),
            settle: Duration::from_millis(SETTLE_DELAY_MS),
            auto_advance: Some(Duration::from_millis(AUTO_ADVANCE_MS)),
        }
    }
}

impl Timings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exit.is_zero() {
            return Err(ConfigError::ZeroDuration("exit duration"));
        }
        // A zero settle delay is fine: finalize runs on the same tick as enter.
        if self.auto_advance.is_some_and(|p| p.is_zero()) {
            return Err(ConfigError::ZeroDuration("auto-advance period"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub timings: Timings,
    pub swipe_threshold: f32,
    pub particle_count: usize,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            particle_count: PARTICLE_COUNT,
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            fps: FPS,
        }
    }
}

impl ShowcaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timings.validate()?;
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::SwipeThreshold(self.swipe_threshold.to_string()));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::WindowSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }
}
