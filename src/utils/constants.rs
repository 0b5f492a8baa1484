//! Application constants

/// Gating video, copied into dist/media/ by the Trunk build.
pub const VIDEO_SRC: &str = "/media/entrance.mp4";

/// Jump-scare mask image.
pub const MASK_SRC: &str = "/media/mask.png";

/// Where clicking the mask sends the visitor. Full-page redirect, no return path.
pub const DESTINATION_URL: &str = "https://example.com/next-page";

// UI constants
pub const GRAIN_SPECK_COUNT: u32 = 140;
pub const GRAIN_MOUNT_DELAY_MS: u32 = 60;

/// How long the initial play attempt may stay pending before a diagnostic
/// warning is logged. The attempt itself is never cancelled.
pub const PLAY_ATTEMPT_WATCHDOG_MS: u32 = 5_000;
