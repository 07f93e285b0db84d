use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::animation::ScrollPlugin;
use crate::animation::player::{Player, PlayerEvent, StyleSheet};
use crate::animation::timeline::{ElementId, Timeline};
use crate::error::Error;

/// What a trigger callback does to its player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Action::Play),
            "pause" => Ok(Action::Pause),
            "resume" => Ok(Action::Resume),
            "reverse" => Ok(Action::Reverse),
            "restart" => Ok(Action::Restart),
            "reset" => Ok(Action::Reset),
            "complete" => Ok(Action::Complete),
            "none" => Ok(Action::None),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// Trigger callbacks, named after the scroll direction that fires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Callback {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

/// Actions for enter, leave, enter-back and leave-back, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// `play none none reverse`: animate in once, undo when scrolled back above.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::Reverse,
    };

    /// `play none none none`: animate in once and stay.
    pub const PLAY_ONCE: Self = Self {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::None,
    };

    pub fn action(&self, callback: Callback) -> Action {
        match callback {
            Callback::Enter => self.on_enter,
            Callback::Leave => self.on_leave,
            Callback::EnterBack => self.on_enter_back,
            Callback::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl FromStr for ToggleActions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse::<Action>)
            .collect::<Result<Vec<_>, _>>()?;
        match actions.as_slice() {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter: *on_enter,
                on_leave: *on_leave,
                on_enter_back: *on_enter_back,
                on_leave_back: *on_leave_back,
            }),
            other => Err(Error::ToggleArity(other.len())),
        }
    }
}

/// Vertical extent of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Looks up where an element currently sits on the page.
pub trait ElementBounds {
    fn bounds(&self, id: &ElementId) -> Option<Bounds>;
}

impl ElementBounds for HashMap<ElementId, Bounds> {
    fn bounds(&self, id: &ElementId) -> Option<Bounds> {
        self.get(id).copied()
    }
}

/// A point on the element matched against a point on the viewport, both as
/// fractions from the top. `top 80%` is `{ element: 0.0, viewport: 0.8 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerPosition {
    pub element: f32,
    pub viewport: f32,
}

impl TriggerPosition {
    pub fn top(viewport: f32) -> Self {
        Self { element: 0.0, viewport }
    }

    pub fn bottom(viewport: f32) -> Self {
        Self { element: 1.0, viewport }
    }

    /// Scroll offset at which the two points line up.
    pub fn scroll_offset(&self, bounds: Bounds, viewport_height: f32) -> f32 {
        bounds.top + self.element * bounds.height - self.viewport * viewport_height
    }
}

impl FromStr for TriggerPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition(s.to_string());
        let mut parts = s.split_whitespace();
        let element = parts.next().ok_or_else(invalid)?;
        let viewport = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            element: fraction(element).ok_or_else(invalid)?,
            viewport: fraction(viewport).ok_or_else(invalid)?,
        })
    }
}

fn fraction(token: &str) -> Option<f32> {
    match token {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|pct| pct.parse::<f32>().ok())
            .map(|pct| pct / 100.0),
    }
}

/// When a trigger becomes active and what its callbacks do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerSpec {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub actions: ToggleActions,
}

impl TriggerSpec {
    /// Trigger starting at `start`, ending when the element's bottom leaves
    /// the top of the viewport.
    pub fn new(start: TriggerPosition) -> Self {
        Self {
            start,
            end: TriggerPosition::bottom(0.0),
            actions: ToggleActions::default(),
        }
    }

    pub fn end(mut self, end: TriggerPosition) -> Self {
        self.end = end;
        self
    }

    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Region {
    #[default]
    Before,
    Active,
    After,
}

fn crossings(from: Region, to: Region) -> &'static [Callback] {
    use Region::*;
    match (from, to) {
        (Before, Active) => &[Callback::Enter],
        (Before, After) => &[Callback::Enter, Callback::Leave],
        (Active, After) => &[Callback::Leave],
        (After, Active) => &[Callback::EnterBack],
        (After, Before) => &[Callback::EnterBack, Callback::LeaveBack],
        (Active, Before) => &[Callback::LeaveBack],
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TriggerId(u64);

/// A callback that fired during [`TriggerRegistry::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TriggerId,
    pub callback: Callback,
    pub action: Action,
}

#[derive(Debug)]
struct Entry {
    id: TriggerId,
    scope: &'static str,
    anchor: Option<(ElementId, TriggerSpec)>,
    region: Region,
    player: Player,
}

/// Scroll-linked animations grouped by the section that owns them.
#[derive(Debug)]
pub struct TriggerRegistry {
    entries: Vec<Entry>,
    next_id: u64,
    time_scale: f32,
    reduced_motion: bool,
}

impl TriggerRegistry {
    /// Needs the token from [`crate::animation::init`].
    pub fn new(_plugin: ScrollPlugin) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            time_scale: 1.0,
            reduced_motion: false,
        }
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Jump every animation straight to where it is heading.
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Play `timeline` whenever `element` scrolls through `spec`'s region.
    pub fn register(
        &mut self,
        scope: &'static str,
        element: ElementId,
        spec: TriggerSpec,
        timeline: Timeline,
    ) -> TriggerId {
        debug!(scope, %element, "registering scroll trigger");
        self.push(scope, Some((element, spec)), timeline)
    }

    /// Play `timeline` right away, independent of scrolling.
    pub fn autoplay(&mut self, scope: &'static str, timeline: Timeline) -> TriggerId {
        debug!(scope, "registering autoplay timeline");
        let id = self.push(scope, None, timeline);
        if let Some(entry) = self.entries.last_mut() {
            entry.player.play();
            if self.reduced_motion {
                entry.player.settle();
            }
        }
        id
    }

    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Remove every trigger owned by `scope`. Their styles stop applying.
    pub fn kill_scope(&mut self, scope: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.scope != scope);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(scope, removed, "killed scroll triggers");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scope_len(&self, scope: &str) -> usize {
        self.entries.iter().filter(|entry| entry.scope == scope).count()
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn player(&self, id: TriggerId) -> Option<&Player> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| &entry.player)
    }

    /// Re-evaluate every trigger against the scroll position and apply the
    /// toggle actions of the callbacks that fire. Triggers whose element has
    /// no bounds are skipped.
    pub fn update(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        layout: &impl ElementBounds,
    ) -> Vec<Fired> {
        let mut fired = Vec::new();
        for entry in &mut self.entries {
            let Some((element, spec)) = &entry.anchor else {
                continue;
            };
            let Some(bounds) = layout.bounds(element) else {
                trace!(%element, "trigger element missing, skipped");
                continue;
            };
            let start = spec.start.scroll_offset(bounds, viewport_height);
            let end = spec.end.scroll_offset(bounds, viewport_height).max(start);
            let region = if scroll_y < start {
                Region::Before
            } else if scroll_y > end {
                Region::After
            } else {
                Region::Active
            };

            for &callback in crossings(entry.region, region) {
                let action = spec.actions.action(callback);
                debug!(%element, ?callback, ?action, "scroll trigger fired");
                entry.player.apply(action);
                if self.reduced_motion {
                    entry.player.settle();
                }
                fired.push(Fired {
                    id: entry.id,
                    callback,
                    action,
                });
            }
            entry.region = region;
        }
        fired
    }

    /// Step every running player by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Vec<(TriggerId, PlayerEvent)> {
        let dt = dt * self.time_scale;
        self.entries
            .iter_mut()
            .filter_map(|entry| entry.player.advance(dt).map(|event| (entry.id, event)))
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.entries.iter().any(|entry| entry.player.is_running())
    }

    /// Current styles of every animated element, later registrations
    /// winning over earlier ones.
    pub fn render(&self) -> StyleSheet {
        let mut sheet = StyleSheet::default();
        for entry in &self.entries {
            entry.player.render_into(&mut sheet);
        }
        sheet
    }

    fn push(
        &mut self,
        scope: &'static str,
        anchor: Option<(ElementId, TriggerSpec)>,
        timeline: Timeline,
    ) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            scope,
            anchor,
            region: Region::Before,
            player: Player::new(timeline),
        });
        id
    }
}
