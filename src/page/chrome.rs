use tracing::debug;

use crate::animation::{Ease, Glide};
use crate::page::layout::Layout;

/// Nav bar style: transparent at the top of the page, compact once
/// scrolled past the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBar {
    threshold: f32,
    scrolled: bool,
}

impl NavBar {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns the new state only when it flips.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Scroll offset for an in-page link, or `None` when the link has no
/// target on this page. `#id` lands `offset` above the section.
pub fn resolve_anchor(href: &str, layout: &Layout, offset: f32) -> Option<f32> {
    if href == "/" {
        return Some(0.0);
    }
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    match layout.anchor(id) {
        Some(bounds) => Some((bounds.top - offset).max(0.0)),
        None => {
            debug!(href, "no anchor target, ignoring link");
            None
        }
    }
}

/// Animated scrolling towards a target offset. A new request takes over
/// from the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    glide: Glide,
    duration: f32,
    active: bool,
}

impl SmoothScroll {
    pub fn new(duration: f32) -> Self {
        Self {
            glide: Glide::at(0.0),
            duration,
            active: false,
        }
    }

    pub fn start(&mut self, from: f32, to: f32) {
        if self.active {
            self.glide.retarget(to, self.duration, Ease::Power2Out);
        } else {
            self.glide.snap(from);
            self.glide.retarget(to, self.duration, Ease::Power2Out);
        }
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<f32> {
        self.active.then(|| self.glide.target())
    }

    /// Next scroll offset while a scroll is in flight.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.glide.advance(dt);
        if self.glide.is_settled() {
            self.active = false;
        }
        Some(self.glide.value())
    }
}
