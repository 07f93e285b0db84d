use serde::Serialize;
use tracing::trace;
use uuid::Uuid;

use crate::page::sections::Section;

/// Stable identity of a registered listener. Removal goes by id, never by
/// handler value, so the listener that was attached is the one removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    PointerMove,
    PointerHover,
    PointerLeave,
    PointerEnter,
    AnchorClick,
}

/// What a listener does when its event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Toggle the nav bar's scrolled style.
    NavScroll,
    /// Re-evaluate the section's scroll triggers.
    ScrollTriggers,
    /// Reveal the cursor, then hand over to [`Handler::CursorTrack`].
    CursorFirstMove,
    CursorTrack,
    CursorHover,
    CursorLeave,
    CursorEnter,
    /// Smooth-scroll to in-page link targets.
    AnchorNavigation,
}

impl Handler {
    pub fn kind(self) -> EventKind {
        match self {
            Handler::NavScroll | Handler::ScrollTriggers => EventKind::Scroll,
            Handler::CursorFirstMove | Handler::CursorTrack => EventKind::PointerMove,
            Handler::CursorHover => EventKind::PointerHover,
            Handler::CursorLeave => EventKind::PointerLeave,
            Handler::CursorEnter => EventKind::PointerEnter,
            Handler::AnchorNavigation => EventKind::AnchorClick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub id: ListenerId,
    pub scope: Section,
    pub handler: Handler,
}

/// Every listener attached by a mounted section.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn add(&mut self, scope: Section, handler: Handler) -> ListenerId {
        let id = ListenerId::new();
        trace!(%scope, ?handler, "listener added");
        self.listeners.push(Listener { id, scope, handler });
        id
    }

    /// Returns `true` only for the call that actually removed `id`.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        before != self.listeners.len()
    }

    /// Swap the listener `id` for a new one in the same scope.
    pub fn replace(&mut self, id: ListenerId, handler: Handler) -> Option<ListenerId> {
        let scope = self.get(id)?.scope;
        self.remove(id);
        Some(self.add(scope, handler))
    }

    pub fn remove_scope(&mut self, scope: Section) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.scope != scope);
        let removed = before - self.listeners.len();
        trace!(%scope, removed, "listeners removed");
        removed
    }

    pub fn get(&self, id: ListenerId) -> Option<&Listener> {
        self.listeners.iter().find(|listener| listener.id == id)
    }

    /// Snapshot of the listeners for `kind`, in registration order.
    pub fn for_event(&self, kind: EventKind) -> Vec<Listener> {
        self.listeners
            .iter()
            .filter(|listener| listener.handler.kind() == kind)
            .copied()
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.handler.kind() == kind)
            .count()
    }

    pub fn scope_len(&self, scope: Section) -> usize {
        self.listeners.iter().filter(|listener| listener.scope == scope).count()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.listeners.iter()
    }
}
