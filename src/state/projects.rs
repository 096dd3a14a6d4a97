//! Project panel state: tab selection plus the responsive layout.
//!
//! DESIGN
//! ======
//! The selected index lives here, not in the rendered markup, so it survives
//! any number of layout switches. The panel rebuilds every card whenever this
//! state changes, which also returns each card to its front face.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

use super::layout::ProjectLayout;
use super::tabs::TabList;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub tabs: TabList<Project>,
    pub layout: ProjectLayout,
}

impl ProjectsState {
    pub fn new(projects: Vec<Project>, layout: ProjectLayout) -> Self {
        Self { tabs: TabList::new(projects), layout }
    }

    /// Switch layouts. Returns whether the boundary was actually crossed.
    pub fn set_layout(&mut self, layout: ProjectLayout) -> bool {
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        true
    }

    /// Tab click. Ignored while stacked, where every project is visible.
    pub fn select(&mut self, index: usize) -> bool {
        if self.layout == ProjectLayout::Stacked {
            return false;
        }
        self.tabs.select(index)
    }

    pub fn tabs_hidden(&self) -> bool {
        self.layout == ProjectLayout::Stacked
    }

    /// Indices of the projects rendered as cards, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        match self.layout {
            ProjectLayout::Stacked => (0..self.tabs.len()).collect(),
            ProjectLayout::Tabbed if self.tabs.is_empty() => Vec::new(),
            ProjectLayout::Tabbed => vec![self.tabs.selected_index()],
        }
    }
}
