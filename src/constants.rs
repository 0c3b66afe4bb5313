pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_MS: u64 = 8000;        // Period between automatic section changes
pub const EXIT_DURATION_MS: u64 = 400;        // Outgoing section slide-out before the incoming one attaches
pub const SETTLE_DELAY_MS: u64 = 50;          // Incoming section settle before finalize
pub const ENTER_DURATION: f32 = 0.6;          // Incoming slide-in tween after finalize (seconds)

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe

pub const PARTICLE_COUNT: usize = 50;
pub const BURST_COUNT: usize = 15;

pub const CTA_PRESS_MS: u64 = 150;            // Button press scale-down
pub const CTA_PROCESSING_MS: u64 = 1500;      // "PROCESSING..." label
pub const CTA_SUCCESS_MS: u64 = 2000;         // "SUCCESS!" label before restoring
pub const SUCCESS_RING_MS: u64 = 800;
