//! A full-screen car showcase that cycles through product sections on a
//! timer or on user input, with a headless-testable transition core.

pub mod app;
pub mod config;
pub mod constants;
pub mod controller;
pub mod cta;
pub mod effects;
pub mod engine;
pub mod input;
pub mod intro;
pub mod logging;
pub mod parallax;
pub mod particles;
pub mod render;
pub mod section;
pub mod state;
pub mod timer;

pub use config::{ConfigError, ShowcaseConfig, Timings};
pub use controller::{Navigation, SectionController};
pub use engine::{ParticleLayer, Renderer};
pub use input::{Command, InputEvent, InputRouter};
pub use section::{SHOWCASE, Section};
