//! Playback configuration.
//!
//! The frame rate is an explicit setting, never a constant baked into a
//! call site: the log stores frame numbers, and only the caller knows the
//! true rate of the underlying media.

use thiserror::Error;

/// Fallback frame rate when the environment provides none.
pub const DEFAULT_FRAME_RATE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackConfigError {
    #[error("frame rate must be non-zero")]
    ZeroFrameRate,
}

/// Playback settings for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Frame rate of the underlying media, frames per second
    pub frame_rate: u32,
    /// Follow each seek with a brief play-then-pause so players that do
    /// not redraw on seek while paused still show the target frame
    pub seek_nudge: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            seek_nudge: false,
        }
    }
}

impl PlaybackConfig {
    /// Create a config for media at the given frame rate.
    pub fn new(frame_rate: u32) -> Result<Self, PlaybackConfigError> {
        if frame_rate == 0 {
            return Err(PlaybackConfigError::ZeroFrameRate);
        }
        Ok(Self {
            frame_rate,
            seek_nudge: false,
        })
    }

    /// Enable or disable the post-seek nudge.
    pub fn with_seek_nudge(mut self, on: bool) -> Self {
        self.seek_nudge = on;
        self
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            frame_rate: std::env::var("WDLOG_FRAME_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&r| r > 0)
                .unwrap_or(DEFAULT_FRAME_RATE),
            seek_nudge: std::env::var("WDLOG_SEEK_NUDGE")
                .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Playback position of a frame number, in seconds.
    pub fn frame_time_secs(&self, frame: u64) -> f64 {
        frame as f64 / self.frame_rate as f64
    }
}
