use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::animation::easing::Ease;
use crate::error::Error;

/// Identifies an animated element, e.g. `about.title` or `skills.card[3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Element `index` of a repeated group, in source order.
    pub fn indexed(group: &str, index: usize) -> Self {
        Self(format!("{group}[{index}]"))
    }

    /// Ids `group[0]` .. `group[count - 1]`.
    pub fn group(group: &str, count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::indexed(group, i)).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    /// Horizontal offset in logical pixels.
    X,
    /// Vertical offset in logical pixels.
    Y,
    Scale,
    /// Fraction of the element's natural width.
    Width,
}

impl Property {
    /// Value of the property when nothing animates it.
    pub fn natural(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale | Property::Width => 1.0,
            Property::X | Property::Y => 0.0,
        }
    }
}

/// One property transition of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tween {
    pub target: ElementId,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    /// Seconds.
    pub duration: f32,
    /// Start time in seconds from the beginning of the timeline.
    pub offset: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.offset + self.duration
    }

    /// Value at timeline time `t`. Before the tween starts this is `from`.
    pub fn value_at(&self, t: f32) -> f32 {
        let progress = if self.duration <= 0.0 {
            if t >= self.offset { 1.0 } else { 0.0 }
        } else {
            ((t - self.offset) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Once,
    Forever {
        yoyo: bool,
    },
}

/// Declarative animation: a flat list of tweens interpreted by [`Player`].
///
/// [`Player`]: crate::animation::Player
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timeline {
    tweens: Vec<Tween>,
    repeat: Repeat,
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Length of one iteration in seconds.
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    /// Distinct targets in first-appearance order.
    pub fn targets(&self) -> Vec<&ElementId> {
        let mut seen: Vec<&ElementId> = Vec::new();
        for tween in &self.tweens {
            if !seen.contains(&&tween.target) {
                seen.push(&tween.target);
            }
        }
        seen
    }

    /// Every animated (target, property) pair with its value at time `t`.
    ///
    /// The latest tween that has started owns the value; when none has
    /// started the earliest tween's start value is shown.
    pub fn sample(&self, t: f32) -> Vec<(&ElementId, Property, f32)> {
        let mut owners: Vec<(&ElementId, Property, &Tween)> = Vec::new();
        for tween in &self.tweens {
            let slot = owners
                .iter_mut()
                .find(|(target, property, _)| **target == tween.target && *property == tween.property);
            match slot {
                None => owners.push((&tween.target, tween.property, tween)),
                Some((_, _, owner)) => {
                    let owner_started = owner.offset <= t;
                    let started = tween.offset <= t;
                    if started && (!owner_started || tween.offset >= owner.offset) {
                        *owner = tween;
                    } else if !started && !owner_started && tween.offset < owner.offset {
                        *owner = tween;
                    }
                }
            }
        }
        owners
            .into_iter()
            .map(|(target, property, tween)| (target, property, tween.value_at(t)))
            .collect()
    }
}

/// Where a builder step starts relative to the timeline built so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// At the current end of the timeline.
    #[default]
    Sequential,
    /// Shifted from the current end, `"-=0.4"` is `Relative(-0.4)`.
    Relative(f32),
    /// Absolute time in seconds.
    At(f32),
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidPosition(s.to_string());
        if let Some(rest) = s.strip_prefix("-=") {
            rest.parse::<f32>().map(|v| Position::Relative(-v)).map_err(|_| invalid())
        } else if let Some(rest) = s.strip_prefix("+=") {
            rest.parse::<f32>().map(Position::Relative).map_err(|_| invalid())
        } else if s.is_empty() {
            Ok(Position::Sequential)
        } else {
            s.parse::<f32>().map(Position::At).map_err(|_| invalid())
        }
    }
}

/// Property values for one builder step. Unset properties are not animated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vars {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub width: Option<f32>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    fn entries(&self) -> impl Iterator<Item = (Property, f32)> {
        [
            (Property::Opacity, self.opacity),
            (Property::X, self.x),
            (Property::Y, self.y),
            (Property::Scale, self.scale),
            (Property::Width, self.width),
        ]
        .into_iter()
        .filter_map(|(property, value)| value.map(|v| (property, v)))
    }
}

/// Duration, easing and placement of a builder step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f32,
    pub ease: Ease,
    /// Delay between successive targets, in source order.
    pub stagger: f32,
    pub delay: f32,
    pub position: Position,
}

impl Timing {
    pub fn secs(duration: f32) -> Self {
        Self {
            duration,
            ease: Ease::default(),
            stagger: 0.0,
            delay: 0.0,
            position: Position::Sequential,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    From,
    To,
}

/// Builds a [`Timeline`] from chained steps.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    tweens: Vec<Tween>,
    end: f32,
    repeat: Repeat,
}

impl TimelineBuilder {
    /// Animate `targets` from `vars` to their natural values.
    pub fn from<I>(self, targets: I, vars: Vars, timing: Timing) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.step(targets, vars, timing, Direction::From)
    }

    /// Animate `targets` from their natural values to `vars`.
    pub fn to<I>(self, targets: I, vars: Vars, timing: Timing) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.step(targets, vars, timing, Direction::To)
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn build(self) -> Timeline {
        Timeline {
            tweens: self.tweens,
            repeat: self.repeat,
        }
    }

    fn step<I>(mut self, targets: I, vars: Vars, timing: Timing, direction: Direction) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        let base = match timing.position {
            Position::Sequential => self.end,
            Position::Relative(shift) => (self.end + shift).max(0.0),
            Position::At(at) => at.max(0.0),
        };
        let start = base + timing.delay.max(0.0);
        let duration = timing.duration.max(0.0);

        for (index, target) in targets.into_iter().enumerate() {
            let offset = start + timing.stagger * index as f32;
            for (property, value) in vars.entries() {
                let (from, to) = match direction {
                    Direction::From => (value, property.natural()),
                    Direction::To => (property.natural(), value),
                };
                self.tweens.push(Tween {
                    target: target.clone(),
                    property,
                    from,
                    to,
                    duration,
                    offset,
                    ease: timing.ease,
                });
            }
            self.end = self.end.max(offset + duration);
        }
        self
    }
}
