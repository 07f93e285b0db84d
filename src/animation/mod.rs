//! Declarative entrance animations and the scroll triggers that drive them.
//!
//! A [`Timeline`] is plain data: tweens with a target, property, start and
//! end value, duration and offset. A [`Player`] interprets one timeline, and
//! the [`TriggerRegistry`] decides when each player runs forward or backward
//! as the page scrolls.

pub mod easing;
pub mod glide;
pub mod player;
pub mod timeline;
pub mod trigger;

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use easing::Ease;
pub use glide::Glide;
pub use player::{Direction, Player, PlayerEvent, Style, StyleSheet};
pub use timeline::{ElementId, Position, Property, Repeat, Timeline, TimelineBuilder, Timing, Tween, Vars};
pub use trigger::{
    Action, Bounds, Callback, ElementBounds, Fired, ToggleActions, TriggerId, TriggerPosition,
    TriggerRegistry, TriggerSpec,
};

/// Proof that [`init`] ran. Needed to build a [`TriggerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPlugin {
    _private: (),
}

static PLUGIN: OnceLock<ScrollPlugin> = OnceLock::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Register the scroll plugin. Call once at startup; later calls return the
/// same token and do nothing else.
pub fn init() -> ScrollPlugin {
    *PLUGIN.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("scroll trigger plugin registered");
        ScrollPlugin { _private: () }
    })
}

pub fn is_initialized() -> bool {
    PLUGIN.get().is_some()
}

/// How many times registration actually ran in this process (0 or 1).
pub fn registrations() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}
