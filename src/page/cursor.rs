use crate::animation::{Ease, Glide};

/// Where one cursor mark is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorMark {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Mark {
    x: Glide,
    y: Glide,
    opacity: Glide,
    scale: Glide,
}

impl Mark {
    fn hidden() -> Self {
        Self {
            x: Glide::at(0.0),
            y: Glide::at(0.0),
            opacity: Glide::at(0.0),
            scale: Glide::at(0.5),
        }
    }

    fn move_to(&mut self, x: f32, y: f32, duration: f32, ease: Ease) {
        self.x.retarget(x, duration, ease);
        self.y.retarget(y, duration, ease);
    }

    fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.opacity.advance(dt);
        self.scale.advance(dt);
    }

    fn settled(&self) -> bool {
        self.x.is_settled()
            && self.y.is_settled()
            && self.opacity.is_settled()
            && self.scale.is_settled()
    }

    fn snapshot(&self) -> CursorMark {
        CursorMark {
            x: self.x.value(),
            y: self.y.value(),
            opacity: self.opacity.value(),
            scale: self.scale.value(),
        }
    }
}

const FADE_SECS: f32 = 0.3;

/// Custom pointer: a ring that trails the pointer and a dot that tracks
/// it closely. Hidden until the first pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    ring: Mark,
    dot: Mark,
    shown: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            ring: Mark::hidden(),
            dot: Mark::hidden(),
            shown: false,
        }
    }
}

impl CursorFollower {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn ring(&self) -> CursorMark {
        self.ring.snapshot()
    }

    pub fn dot(&self) -> CursorMark {
        self.dot.snapshot()
    }

    pub fn is_animating(&self) -> bool {
        !(self.ring.settled() && self.dot.settled())
    }

    /// First pointer move: jump to the pointer and fade in.
    pub fn reveal(&mut self, x: f32, y: f32) {
        self.shown = true;
        for mark in [&mut self.ring, &mut self.dot] {
            mark.x.snap(x);
            mark.y.snap(y);
            mark.opacity.retarget(1.0, 0.4, Ease::Power2Out);
            mark.scale.retarget(1.0, 0.4, Ease::Power2Out);
        }
    }

    pub fn track(&mut self, x: f32, y: f32) {
        self.ring.move_to(x, y, 0.5, Ease::Power2Out);
        self.dot.move_to(x, y, 0.1, Ease::Linear);
    }

    /// Pointer over an interactive element.
    pub fn hover(&mut self, hovering: bool) {
        let (ring_scale, ring_opacity, dot_scale) = if hovering {
            (1.5, 0.7, 0.5)
        } else {
            (1.0, 1.0, 1.0)
        };
        self.ring.scale.retarget(ring_scale, FADE_SECS, Ease::default());
        self.ring.opacity.retarget(ring_opacity, FADE_SECS, Ease::default());
        self.dot.scale.retarget(dot_scale, FADE_SECS, Ease::default());
    }

    /// Pointer left (`false`) or re-entered (`true`) the window.
    pub fn window_presence(&mut self, inside: bool) {
        let opacity = if inside { 1.0 } else { 0.0 };
        self.ring.opacity.retarget(opacity, FADE_SECS, Ease::default());
        self.dot.opacity.retarget(opacity, FADE_SECS, Ease::default());
    }

    pub fn tick(&mut self, dt: f32) {
        self.ring.advance(dt);
        self.dot.advance(dt);
    }
}
