use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::animation::{
    Ease, ElementId, Position, Repeat, Timeline, Timing, ToggleActions, TriggerPosition,
    TriggerSpec, Vars,
};
use crate::content::{EXPERIENCES, SKILLS, SOCIALS};
use crate::error::Error;

/// Parts of the page that mount and unmount as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Page root: in-page links and the scroll-to-top button.
    Shell,
    Navbar,
    Cursor,
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Shell,
        Section::Navbar,
        Section::Cursor,
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections stacked in the scrolling content, top to bottom.
    pub const CONTENT: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Shell => "shell",
            Section::Navbar => "navbar",
            Section::Cursor => "cursor",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// Fragment id used by in-page links, `#about` and friends.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::About => Some("about"),
            Section::Skills => Some("skills"),
            Section::Projects => Some("projects"),
            Section::Contact => Some("contact"),
            _ => None,
        }
    }

    /// Entrance animations, as the section registers them on mount.
    /// `visible_projects` sizes the project card group.
    pub fn animations(self, visible_projects: usize) -> Vec<Animation> {
        match self {
            Section::Shell | Section::Cursor => Vec::new(),
            Section::Navbar => vec![Animation::Autoplay(navbar_intro())],
            Section::Hero => vec![
                Animation::Autoplay(hero_intro()),
                Animation::Autoplay(hero_portrait()),
                Animation::Autoplay(hero_float()),
            ],
            Section::About => vec![
                title_reveal("about.title"),
                Animation::Scroll {
                    element: ElementId::new("about.text"),
                    spec: reveal_spec(0.80, 0.60),
                    timeline: Timeline::builder()
                        .from(
                            [ElementId::new("about.text")],
                            Vars::new().y(30.0).opacity(0.0),
                            Timing::secs(0.8).delay(0.2),
                        )
                        .build(),
                },
                Animation::Scroll {
                    element: ElementId::new("about.cards"),
                    spec: reveal_spec(0.75, 0.60),
                    timeline: Timeline::builder()
                        .from(
                            ElementId::group("about.card", EXPERIENCES.len()),
                            Vars::new().y(50.0).opacity(0.0),
                            Timing::secs(0.6).stagger(0.2),
                        )
                        .build(),
                },
            ],
            Section::Skills => vec![
                title_reveal("skills.title"),
                Animation::Scroll {
                    element: ElementId::new("skills.cards"),
                    spec: reveal_spec(0.75, 0.30),
                    timeline: Timeline::builder()
                        .from(
                            ElementId::group("skills.card", SKILLS.len()),
                            Vars::new().y(50.0).opacity(0.0),
                            Timing::secs(0.6).stagger(0.1),
                        )
                        .build(),
                },
                Animation::Scroll {
                    element: ElementId::new("skills.cards"),
                    spec: TriggerSpec::new(TriggerPosition::top(0.70))
                        .actions(ToggleActions::PLAY_REVERSE),
                    timeline: Timeline::builder()
                        .from(
                            ElementId::group("skills.bar", SKILLS.len()),
                            Vars::new().width(0.0),
                            Timing::secs(1.5).ease(Ease::Power2Out).stagger(0.1),
                        )
                        .build(),
                },
            ],
            Section::Projects => vec![
                title_reveal("projects.title"),
                project_cards(visible_projects),
            ],
            Section::Contact => vec![
                title_reveal("contact.title"),
                Animation::Scroll {
                    element: ElementId::new("contact.form"),
                    spec: reveal_spec(0.75, 0.60),
                    timeline: Timeline::builder()
                        .from(
                            [ElementId::new("contact.form")],
                            Vars::new().x(-50.0).opacity(0.0),
                            Timing::secs(0.8),
                        )
                        .build(),
                },
                Animation::Scroll {
                    element: ElementId::new("contact.info"),
                    spec: reveal_spec(0.75, 0.60),
                    timeline: Timeline::builder()
                        .from(
                            ElementId::group("contact.info", CONTACT_INFO_CARDS),
                            Vars::new().x(50.0).opacity(0.0),
                            Timing::secs(0.8).stagger(0.2),
                        )
                        .build(),
                },
                Animation::Scroll {
                    element: ElementId::new("contact.socials"),
                    spec: TriggerSpec::new(TriggerPosition::top(0.80))
                        .actions(ToggleActions::PLAY_REVERSE),
                    timeline: Timeline::builder()
                        .from(
                            ElementId::group("contact.social", SOCIALS.len()),
                            Vars::new().y(20.0).opacity(0.0),
                            Timing::secs(0.4).stagger(0.1),
                        )
                        .build(),
                },
            ],
            Section::Footer => vec![Animation::Scroll {
                element: ElementId::new("footer"),
                spec: TriggerSpec::new(TriggerPosition::top(0.90))
                    .actions(ToggleActions::PLAY_ONCE),
                timeline: Timeline::builder()
                    .from(
                        [ElementId::new("footer")],
                        Vars::new().y(50.0).opacity(0.0),
                        Timing::secs(0.8).ease(Ease::Power3Out),
                    )
                    .build(),
            }],
        }
    }
}

/// Email, location, socials and working-hours cards.
pub const CONTACT_INFO_CARDS: usize = 4;

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// One animation a section registers when it mounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    /// Runs as soon as the section mounts.
    Autoplay(Timeline),
    /// Runs when `element` scrolls into the trigger region.
    Scroll {
        element: ElementId,
        spec: TriggerSpec,
        timeline: Timeline,
    },
}

/// Card reveal for the currently visible projects. Re-registered whenever
/// the category changes.
pub fn project_cards(count: usize) -> Animation {
    Animation::Scroll {
        element: ElementId::new("projects.cards"),
        spec: reveal_spec(0.75, 0.30),
        timeline: Timeline::builder()
            .from(
                ElementId::group("projects.card", count),
                Vars::new().y(50.0).opacity(0.0),
                Timing::secs(0.6).stagger(0.1),
            )
            .build(),
    }
}

fn reveal_spec(start: f32, end: f32) -> TriggerSpec {
    TriggerSpec::new(TriggerPosition::top(start))
        .end(TriggerPosition::bottom(end))
        .actions(ToggleActions::PLAY_REVERSE)
}

fn title_reveal(id: &str) -> Animation {
    Animation::Scroll {
        element: ElementId::new(id),
        spec: reveal_spec(0.80, 0.60),
        timeline: Timeline::builder()
            .from([ElementId::new(id)], Vars::new().y(50.0).opacity(0.0), Timing::secs(0.8))
            .build(),
    }
}

fn navbar_intro() -> Timeline {
    Timeline::builder()
        .from(
            [ElementId::new("nav.bar")],
            Vars::new().y(-100.0).opacity(0.0),
            Timing::secs(0.5),
        )
        .build()
}

fn hero_intro() -> Timeline {
    let rise = Vars::new().y(20.0).opacity(0.0);
    let settle = |secs: f32, shift: f32| {
        Timing::secs(secs).ease(Ease::Power3Out).at(Position::Relative(shift))
    };
    Timeline::builder()
        .from(
            ElementId::group("hero.title", 2),
            Vars::new().y(50.0).opacity(0.0),
            Timing::secs(0.8).ease(Ease::Power3Out).stagger(0.1),
        )
        .from([ElementId::new("hero.subtitle")], rise, settle(0.6, -0.4))
        .from([ElementId::new("hero.description")], rise, settle(0.6, -0.3))
        .from([ElementId::new("hero.buttons")], rise, settle(0.6, -0.3))
        .from(
            ElementId::group("hero.social", SOCIALS.len()),
            rise,
            settle(0.4, -0.3).stagger(0.1),
        )
        .build()
}

fn hero_portrait() -> Timeline {
    Timeline::builder()
        .from(
            [ElementId::new("hero.portrait")],
            Vars::new().scale(0.8).opacity(0.0),
            Timing::secs(0.8).ease(Ease::EaseOut),
        )
        .build()
}

fn hero_float() -> Timeline {
    Timeline::builder()
        .to(
            [ElementId::new("hero.float")],
            Vars::new().y(10.0),
            Timing::secs(2.0).ease(Ease::Power1InOut),
        )
        .repeat(Repeat::Forever { yoyo: true })
        .build()
}
