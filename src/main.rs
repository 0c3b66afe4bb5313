use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use showcase::config::{ShowcaseConfig, Timings};
use showcase::constants::*;

#[derive(Debug, Parser)]
#[command(name = "car-showcase", about = "Full-screen car showcase slideshow")]
struct Cli {
    /// Milliseconds between automatic section changes
    #[arg(long, default_value_t = AUTO_ADVANCE_MS)]
    period_ms: u64,

    /// Turn timer-driven navigation off
    #[arg(long)]
    no_auto_advance: bool,

    /// Milliseconds the outgoing section takes to leave
    #[arg(long, default_value_t = EXIT_DURATION_MS)]
    exit_ms: u64,

    /// Milliseconds between attaching the incoming section and finalizing
    #[arg(long, default_value_t = SETTLE_DELAY_MS)]
    settle_ms: u64,

    /// Minimum horizontal travel, in pixels, for a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    swipe_threshold: f32,

    #[arg(long, default_value_t = PARTICLE_COUNT)]
    particles: usize,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> ShowcaseConfig {
        ShowcaseConfig {
            timings: Timings {
                exit: Duration::from_millis(self.exit_ms),
                settle: Duration::from_millis(self.settle_ms),
                auto_advance: (!self.no_auto_advance).then(|| Duration::from_millis(self.period_ms)),
            },
            swipe_threshold: self.swipe_threshold,
            particle_count: self.particles,
            width: self.width,
            height: self.height,
            fps: self.fps,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    showcase::logging::init(&cli.log_level);

    let config = cli.into_config();
    config.validate().context("invalid showcase settings")?;
    tracing::info!(timings = ?config.timings, "starting showcase");

    showcase::app::run(&config).context("showcase failed")?;
    Ok(())
}
