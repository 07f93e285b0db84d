use std::collections::HashMap;

use serde::Serialize;

use crate::animation::timeline::{ElementId, Property, Repeat, Timeline};
use crate::animation::trigger::Action;

/// Resolved visual state of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: Property::Opacity.natural(),
            x: Property::X.natural(),
            y: Property::Y.natural(),
            scale: Property::Scale.natural(),
            width: Property::Width.natural(),
        }
    }
}

impl Style {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Width => self.width,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Scale => self.scale = value,
            Property::Width => self.width = value,
        }
    }
}

/// Styles of every animated element. Elements not present are at rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: HashMap<ElementId, Style>,
}

impl StyleSheet {
    pub fn get(&self, id: &ElementId) -> Style {
        self.styles.get(id).copied().unwrap_or_default()
    }

    /// Style by element name, for views that only know the string.
    pub fn of(&self, id: &str) -> Style {
        self.get(&ElementId::new(id))
    }

    pub fn set(&mut self, id: &ElementId, property: Property, value: f32) {
        self.styles.entry(id.clone()).or_default().set(property, value);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Paused,
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Completed,
    ReverseCompleted,
}

/// Plays a [`Timeline`] forwards or backwards, one frame delta at a time.
///
/// A new direction supersedes the old one from the current playhead.
#[derive(Debug, Clone)]
pub struct Player {
    timeline: Timeline,
    playhead: f32,
    direction: Direction,
    last_moving: Direction,
    time_scale: f32,
}

impl Player {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            playhead: 0.0,
            direction: Direction::Paused,
            last_moving: Direction::Forward,
            time_scale: 1.0,
        }
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Progress through one iteration, 0..=1.
    pub fn progress(&self) -> f32 {
        let duration = self.timeline.duration();
        if duration <= 0.0 {
            return if self.playhead > 0.0 { 1.0 } else { 0.0 };
        }
        (self.local_time() / duration).clamp(0.0, 1.0)
    }

    pub fn is_running(&self) -> bool {
        self.direction != Direction::Paused
    }

    pub fn play(&mut self) {
        self.set_direction(Direction::Forward);
    }

    pub fn reverse(&mut self) {
        self.set_direction(Direction::Reverse);
    }

    pub fn pause(&mut self) {
        self.direction = Direction::Paused;
    }

    pub fn resume(&mut self) {
        self.set_direction(self.last_moving);
    }

    pub fn restart(&mut self) {
        self.playhead = 0.0;
        self.play();
    }

    /// Back to the start, paused.
    pub fn reset(&mut self) {
        self.playhead = 0.0;
        self.pause();
    }

    /// Jump to the end, paused.
    pub fn complete(&mut self) {
        self.playhead = self.end();
        self.pause();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play => self.play(),
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::Reverse => self.reverse(),
            Action::Restart => self.restart(),
            Action::Reset => self.reset(),
            Action::Complete => self.complete(),
            Action::None => {}
        }
    }

    /// Skip whatever is in flight: forward jumps to the end, reverse to the
    /// start. Endless timelines are parked at the start.
    pub fn settle(&mut self) {
        match (self.direction, self.timeline.repeat()) {
            (_, Repeat::Forever { .. }) => self.reset(),
            (Direction::Forward, Repeat::Once) => self.complete(),
            (Direction::Reverse, Repeat::Once) => self.reset(),
            (Direction::Paused, Repeat::Once) => {}
        }
    }

    /// Move the playhead by `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f32) -> Option<PlayerEvent> {
        let step = dt.max(0.0) * self.time_scale;
        match self.direction {
            Direction::Paused => None,
            Direction::Forward => {
                self.playhead += step;
                if let Some(period) = self.cycle() {
                    // keep the playhead small so frame deltas never round away
                    self.playhead = if period > 0.0 {
                        self.playhead.rem_euclid(period)
                    } else {
                        0.0
                    };
                    return None;
                }
                let end = self.end();
                if self.playhead >= end {
                    self.playhead = end;
                    self.direction = Direction::Paused;
                    Some(PlayerEvent::Completed)
                } else {
                    None
                }
            }
            Direction::Reverse => {
                self.playhead -= step;
                if self.playhead <= 0.0 {
                    self.playhead = 0.0;
                    self.direction = Direction::Paused;
                    Some(PlayerEvent::ReverseCompleted)
                } else {
                    None
                }
            }
        }
    }

    /// Write the sampled values into `sheet`.
    pub fn render_into(&self, sheet: &mut StyleSheet) {
        for (target, property, value) in self.timeline.sample(self.local_time()) {
            sheet.set(target, property, value);
        }
    }

    pub fn render(&self) -> StyleSheet {
        let mut sheet = StyleSheet::default();
        self.render_into(&mut sheet);
        sheet
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if direction != Direction::Paused {
            self.last_moving = direction;
        }
    }

    fn end(&self) -> f32 {
        match self.timeline.repeat() {
            Repeat::Once => self.timeline.duration(),
            Repeat::Forever { .. } => f32::INFINITY,
        }
    }

    /// Length after which an endless timeline looks the same again: one
    /// iteration, or a forward and a backward pass when it yoyos.
    fn cycle(&self) -> Option<f32> {
        let duration = self.timeline.duration();
        match self.timeline.repeat() {
            Repeat::Forever { .. } if duration <= 0.0 => Some(0.0),
            Repeat::Forever { yoyo: true } => Some(2.0 * duration),
            Repeat::Forever { yoyo: false } => Some(duration),
            Repeat::Once => None,
        }
    }

    fn local_time(&self) -> f32 {
        let duration = self.timeline.duration();
        match self.timeline.repeat() {
            Repeat::Once => self.playhead.min(duration),
            Repeat::Forever { yoyo } => {
                if duration <= 0.0 {
                    return 0.0;
                }
                let iteration = (self.playhead / duration).floor();
                let local = self.playhead - iteration * duration;
                if yoyo && iteration as u64 % 2 == 1 {
                    duration - local
                } else {
                    local
                }
            }
        }
    }
}
