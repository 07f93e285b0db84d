use crate::content::{NO_PROJECTS_NOTICE, PROJECTS};
use crate::models::{ALL_CATEGORY, Project};

/// Projects in `category`, in their original order. `all` keeps every
/// project; a category nobody uses yields nothing.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects.iter().filter(|project| project.matches(category)).collect()
}

/// Active tab of the projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: ALL_CATEGORY.to_string(),
        }
    }
}

impl CategoryFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns whether the active category changed.
    pub fn set_category(&mut self, category: &str) -> bool {
        if self.active == category {
            return false;
        }
        self.active = category.to_string();
        true
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        filter_projects(PROJECTS, &self.active)
    }

    /// The "no projects" notice when the active category is empty.
    pub fn notice(&self) -> Option<&'static str> {
        if self.visible().is_empty() {
            Some(NO_PROJECTS_NOTICE)
        } else {
            None
        }
    }
}
