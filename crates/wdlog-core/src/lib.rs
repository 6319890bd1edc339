//! Detection-log compaction and playback synchronization.
//!
//! Two collaborating units sit at the core of the client:
//!
//! - [`compact`] derives the ordered list of detection events shown in a
//!   result or catalog view from the raw per-frame log.
//! - [`FrameNavigator`] maps a clicked event to a seek on an externally
//!   owned player and tracks which frame is highlighted.
//!
//! Both are synchronous and single-threaded; each view owns one compacted
//! event list and one navigator.

pub mod compactor;
pub mod config;
pub mod navigator;

pub use compactor::compact;
pub use config::{PlaybackConfig, PlaybackConfigError, DEFAULT_FRAME_RATE};
pub use navigator::{FrameNavigator, SeekHandle};
