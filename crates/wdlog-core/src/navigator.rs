//! Click-to-seek playback synchronization.
//!
//! The navigator bridges a clicked detection event and an externally owned
//! media player. The player is injected as a [`SeekHandle`] rather than
//! looked up from ambient state, and may be absent while the view is still
//! mounting.

use tracing::debug;

use crate::config::PlaybackConfig;

/// Seek capability of an externally owned media player.
///
/// Implementations wrap whatever playback surface the embedding UI uses.
/// Seeks are fire-and-forget; whether the underlying seek is asynchronous
/// is the player's concern.
#[cfg_attr(test, mockall::automock)]
pub trait SeekHandle {
    /// Position the player at the given offset in seconds.
    fn seek_to(&mut self, seconds: f64);

    /// Force a visual refresh after a seek.
    ///
    /// Some players do not redraw on seek while paused; implementations
    /// typically play briefly and pause again. Default is a no-op.
    fn nudge(&mut self) {}
}

/// Tracks the highlighted frame and drives the player to it.
///
/// One navigator per view; selecting an event always records it as active,
/// whether or not a player is currently attached, so the UI reflects intent
/// even when playback cannot yet follow.
pub struct FrameNavigator {
    config: PlaybackConfig,
    handle: Option<Box<dyn SeekHandle>>,
    active_frame: Option<u64>,
}

impl FrameNavigator {
    /// Create a navigator with no player attached yet.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            handle: None,
            active_frame: None,
        }
    }

    /// Attach the player once the media resource is loaded.
    pub fn attach(&mut self, handle: impl SeekHandle + 'static) {
        self.handle = Some(Box::new(handle));
    }

    /// Detach the player, e.g. when the view unmounts.
    pub fn detach(&mut self) -> Option<Box<dyn SeekHandle>> {
        self.handle.take()
    }

    /// Highlight a frame and seek the player to it.
    ///
    /// With no player attached the seek is silently skipped; the active
    /// frame is updated either way.
    pub fn select_frame(&mut self, frame: u64) {
        self.active_frame = Some(frame);

        let seconds = self.config.frame_time_secs(frame);
        match self.handle.as_mut() {
            Some(handle) => {
                debug!(frame, seconds, "seeking player to frame");
                handle.seek_to(seconds);
                if self.config.seek_nudge {
                    handle.nudge();
                }
            }
            None => debug!(frame, "no player attached, seek skipped"),
        }
    }

    /// Whether the given frame is the highlighted one.
    pub fn is_active(&self, frame: u64) -> bool {
        self.active_frame == Some(frame)
    }

    /// The currently highlighted frame, if any.
    pub fn active_frame(&self) -> Option<u64> {
        self.active_frame
    }

    /// Clear the highlight. Call when a new log is supplied.
    pub fn reset(&mut self) {
        self.active_frame = None;
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate;

    fn config(frame_rate: u32) -> PlaybackConfig {
        PlaybackConfig::new(frame_rate).unwrap()
    }

    #[test]
    fn test_select_frame_seeks_player() {
        let mut handle = MockSeekHandle::new();
        handle
            .expect_seek_to()
            .with(predicate::function(|s: &f64| (s - 4.0 / 60.0).abs() < 1e-9))
            .times(1)
            .return_const(());

        let mut nav = FrameNavigator::new(config(60));
        nav.attach(handle);
        nav.select_frame(4);

        assert!(nav.is_active(4));
        assert!(!nav.is_active(1));
    }

    #[test]
    fn test_select_without_player_still_highlights() {
        let mut nav = FrameNavigator::new(config(30));
        nav.select_frame(90);
        assert_eq!(nav.active_frame(), Some(90));
    }

    #[test]
    fn test_nudge_follows_seek_when_enabled() {
        let mut handle = MockSeekHandle::new();
        handle.expect_seek_to().times(1).return_const(());
        handle.expect_nudge().times(1).return_const(());

        let mut nav = FrameNavigator::new(config(30).with_seek_nudge(true));
        nav.attach(handle);
        nav.select_frame(10);
    }

    #[test]
    fn test_no_nudge_by_default() {
        let mut handle = MockSeekHandle::new();
        handle.expect_seek_to().times(1).return_const(());
        handle.expect_nudge().never();

        let mut nav = FrameNavigator::new(config(30));
        nav.attach(handle);
        nav.select_frame(10);
    }

    #[test]
    fn test_reset_clears_highlight() {
        let mut nav = FrameNavigator::new(config(30));
        nav.select_frame(5);
        nav.select_frame(12);
        nav.reset();

        assert_eq!(nav.active_frame(), None);
        assert!(!nav.is_active(5));
        assert!(!nav.is_active(12));
    }

    #[test]
    fn test_detach_stops_seeking() {
        let mut handle = MockSeekHandle::new();
        handle.expect_seek_to().times(1).return_const(());

        let mut nav = FrameNavigator::new(config(30));
        nav.attach(handle);
        nav.select_frame(3);

        assert!(nav.detach().is_some());
        nav.select_frame(7);
        assert!(nav.is_active(7));
    }
}
