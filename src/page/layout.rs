use std::collections::HashMap;

use crate::animation::{Bounds, ElementBounds, ElementId};
use crate::content::SKILLS;
use crate::page::sections::Section;

/// Height of the fixed header overlay.
pub const NAV_HEIGHT: f32 = 72.0;

pub const HERO_HEIGHT: f32 = 760.0;
pub const ABOUT_HEIGHT: f32 = 1180.0;
pub const SKILLS_HEADER: f32 = 280.0;
pub const SKILL_ROW_HEIGHT: f32 = 220.0;
pub const SKILLS_FOOTER: f32 = 420.0;
pub const PROJECTS_HEADER: f32 = 360.0;
pub const PROJECT_ROW_HEIGHT: f32 = 420.0;
pub const PROJECTS_EMPTY: f32 = 160.0;
pub const PROJECTS_FOOTER: f32 = 140.0;
pub const CONTACT_HEIGHT: f32 = 1040.0;
pub const FOOTER_HEIGHT: f32 = 360.0;

pub const SKILLS_PER_ROW: usize = 4;
pub const PROJECTS_PER_ROW: usize = 3;

/// Fixed page geometry: every content section is a block of known height,
/// stacked top to bottom, and animated elements sit at fixed offsets inside
/// their section.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    sections: Vec<(Section, Bounds)>,
    elements: HashMap<ElementId, Bounds>,
}

impl Layout {
    pub fn new(visible_projects: usize) -> Self {
        let mut layout = Self {
            sections: Vec::new(),
            elements: HashMap::new(),
        };
        let mut top = 0.0;
        for section in Section::CONTENT {
            let height = section_height(section, visible_projects);
            layout.sections.push((section, Bounds::new(top, height)));
            for (name, offset, element_height) in elements(section, visible_projects) {
                layout
                    .elements
                    .insert(ElementId::new(name), Bounds::new(top + offset, element_height));
            }
            top += height;
        }
        layout
    }

    pub fn section(&self, section: Section) -> Option<Bounds> {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, bounds)| *bounds)
    }

    /// Bounds of the section whose anchor is `anchor` (without `#`).
    pub fn anchor(&self, anchor: &str) -> Option<Bounds> {
        self.sections
            .iter()
            .find(|(section, _)| section.anchor() == Some(anchor))
            .map(|(_, bounds)| *bounds)
    }

    pub fn page_height(&self) -> f32 {
        self.sections.last().map(|(_, bounds)| bounds.bottom()).unwrap_or(0.0)
    }
}

impl ElementBounds for Layout {
    fn bounds(&self, id: &ElementId) -> Option<Bounds> {
        self.elements.get(id).copied()
    }
}

fn rows(count: usize, per_row: usize) -> f32 {
    count.div_ceil(per_row) as f32
}

pub fn section_height(section: Section, visible_projects: usize) -> f32 {
    match section {
        Section::Hero => HERO_HEIGHT,
        Section::About => ABOUT_HEIGHT,
        Section::Skills => {
            SKILLS_HEADER + rows(SKILLS.len(), SKILLS_PER_ROW) * SKILL_ROW_HEIGHT + SKILLS_FOOTER
        }
        Section::Projects => {
            let body = if visible_projects == 0 {
                PROJECTS_EMPTY
            } else {
                rows(visible_projects, PROJECTS_PER_ROW) * PROJECT_ROW_HEIGHT
            };
            PROJECTS_HEADER + body + PROJECTS_FOOTER
        }
        Section::Contact => CONTACT_HEIGHT,
        Section::Footer => FOOTER_HEIGHT,
        Section::Shell | Section::Navbar | Section::Cursor => 0.0,
    }
}

/// (element, offset from section top, height) for the trigger elements.
fn elements(section: Section, visible_projects: usize) -> Vec<(&'static str, f32, f32)> {
    match section {
        Section::About => vec![
            ("about.title", 80.0, 48.0),
            ("about.text", 150.0, 110.0),
            ("about.cards", 340.0, 420.0),
        ],
        Section::Skills => vec![
            ("skills.title", 80.0, 48.0),
            ("skills.cards", SKILLS_HEADER, rows(SKILLS.len(), SKILLS_PER_ROW) * SKILL_ROW_HEIGHT),
        ],
        Section::Projects => vec![
            ("projects.title", 80.0, 48.0),
            (
                "projects.cards",
                PROJECTS_HEADER,
                rows(visible_projects, PROJECTS_PER_ROW) * PROJECT_ROW_HEIGHT,
            ),
        ],
        Section::Contact => vec![
            ("contact.title", 80.0, 48.0),
            ("contact.form", 300.0, 560.0),
            ("contact.info", 300.0, 660.0),
            ("contact.socials", 560.0, 60.0),
        ],
        Section::Footer => vec![("footer", 0.0, FOOTER_HEIGHT)],
        _ => Vec::new(),
    }
}
