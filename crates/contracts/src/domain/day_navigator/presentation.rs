//! State-to-presentation mapping: tab and panel attributes derived from
//! [`NavigatorState`] in one place.

use super::aggregate::{DayId, NavigatorState};

/// Attributes of one tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub day: DayId,
    pub dom_id: String,
    pub selected: bool,
    pub aria_label: String,
}

impl TabView {
    pub fn aria_selected(&self) -> &'static str {
        if self.selected {
            "true"
        } else {
            "false"
        }
    }

    /// Roving tabindex: only the selected tab is in the tab order
    pub fn tab_index(&self) -> &'static str {
        if self.selected {
            "0"
        } else {
            "-1"
        }
    }
}

/// Attributes of one panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub day: DayId,
    pub visible: bool,
    pub labelled_by: String,
}

impl PanelView {
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible {
            "false"
        } else {
            "true"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigatorView {
    pub tabs: Vec<TabView>,
    pub panels: Vec<PanelView>,
}

impl NavigatorView {
    pub fn tab(&self, day: DayId) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.day == day)
    }

    pub fn panel(&self, day: DayId) -> Option<&PanelView> {
        self.panels.iter().find(|panel| panel.day == day)
    }
}

pub fn tab_dom_id(day: DayId) -> String {
    format!("day-tab-{}", day)
}

/// Compute every tab and panel attribute from the state
pub fn render(state: &NavigatorState, aria_label_prefix: &str) -> NavigatorView {
    let days = state.days().days();
    let tabs = days
        .iter()
        .map(|&day| TabView {
            day,
            dom_id: tab_dom_id(day),
            selected: state.is_selected(day),
            aria_label: format!("{} {}", aria_label_prefix, day),
        })
        .collect();
    let panels = days
        .iter()
        .map(|&day| PanelView {
            day,
            visible: state.is_selected(day),
            labelled_by: tab_dom_id(day),
        })
        .collect();
    NavigatorView { tabs, panels }
}

/// Which feedback the tabs give: pressed state on touch layouts, hover on pointer layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Touch,
    Pointer,
}

impl LayoutMode {
    pub fn from_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            LayoutMode::Touch
        } else {
            LayoutMode::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        self == LayoutMode::Touch
    }
}
