use crate::models::Project;

/// The single selected project, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<&'static Project>,
}

impl ProjectSelection {
    /// Select `project`, returning whatever it replaced.
    pub fn select(&mut self, project: &'static Project) -> Option<&'static Project> {
        self.selected.replace(project)
    }

    pub fn clear(&mut self) -> Option<&'static Project> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }
}

/// Project detail modal. Opening always selects first, so an open dialog
/// always has a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailDialog {
    selection: ProjectSelection,
    open: bool,
}

impl DetailDialog {
    pub fn open_for(&mut self, project: &'static Project) {
        self.selection.select(project);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.selection.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Project shown by the open dialog.
    pub fn project(&self) -> Option<&'static Project> {
        if self.open { self.selection.selected() } else { None }
    }

    pub fn selection(&self) -> &ProjectSelection {
        &self.selection
    }
}
