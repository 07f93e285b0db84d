use std::time::Instant;

use crate::animation::ScrollPlugin;
use crate::config::Config;
use crate::page::Page;

/// Below this width the nav links fold into the menu button.
pub const COMPACT_WIDTH: f32 = 768.0;

/// Longest frame step fed to the animations, so a stalled window does not
/// skip whole tweens.
const MAX_FRAME_SECS: f32 = 0.1;

#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub window_width: f32,
    last_frame: Option<Instant>,
}

impl AppState {
    pub fn new(plugin: ScrollPlugin, config: &Config) -> Self {
        let mut page = Page::new(plugin, config);
        page.mount_all();
        Self {
            page,
            window_width: config.window.width,
            last_frame: None,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.window_width < COMPACT_WIDTH
    }

    /// Seconds since the previous frame, zero on the first one.
    pub fn frame_delta(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt.min(MAX_FRAME_SECS)
    }

    /// Step the page for the frame at `now`. Once nothing animates the
    /// frame clock is dropped, so the next run starts from a zero delta.
    pub fn on_frame(&mut self, now: Instant) -> Option<f32> {
        let dt = self.frame_delta(now);
        let scroll = self.page.tick(dt);
        if !self.page.is_animating() {
            self.last_frame = None;
        }
        scroll
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation;

    #[test]
    fn frame_clock_restarts_after_idle() {
        let mut state = AppState::new(animation::init(), &Config::default());
        let start = Instant::now();

        state.on_frame(start);
        assert!((state.frame_delta(start + Duration::from_millis(50)) - 0.05).abs() < 1e-6);

        // nothing left to animate: the next frame must not jump
        state.page.unmount_all();
        state.on_frame(start + Duration::from_millis(100));
        assert!(state.last_frame.is_none());
        assert_eq!(state.frame_delta(start + Duration::from_secs(5)), 0.0);
    }
}
