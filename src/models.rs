use serde::Serialize;

/// Sentinel category id that disables filtering.
pub const ALL_CATEGORY: &str = "all";

/// A project card. Defined at build time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub repo_url: &'static str,
    /// Empty when the project has no live demo.
    pub demo_url: &'static str,
}

impl Project {
    pub fn demo_url(&self) -> Option<&'static str> {
        if self.demo_url.is_empty() {
            None
        } else {
            Some(self.demo_url)
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.category == category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub image: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
}

impl Skill {
    /// Level as a fraction of a full progress bar.
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

/// Tab in the projects section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One of the "coding philosophy" tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::GitHub => "GitHub",
            Network::LinkedIn => "LinkedIn",
            Network::Twitter => "Twitter",
            Network::Instagram => "Instagram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: Network,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavRoute {
    pub href: &'static str,
    pub label: &'static str,
}

/// Owner details shared by hero, about, contact and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub journey: &'static [&'static str],
    pub email: &'static str,
    pub location: &'static str,
    pub blurb: &'static str,
    pub portrait: &'static str,
    pub repositories_url: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
