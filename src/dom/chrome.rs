use super::class_list::ClassList;
use crate::model::Filter;

/// Class marking the filter link for the current route
pub const SELECTED: &str = "selected";

/// Footer elements: the active counter, the pluralize suffix, and the
/// footer's own class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    /// Text of the active-count element
    pub active_count: String,
    /// Text of the pluralize element (`""` or `"s"`)
    pub pluralize: String,
    pub classes: ClassList,
}

impl Footer {
    pub fn hidden(&self) -> bool {
        self.classes.contains(super::node::HIDDEN)
    }

    /// "3 items left", "1 item left"
    pub fn counter_text(&self) -> String {
        format!("{} item{} left", self.active_count, self.pluralize)
    }
}

/// One `<li><a href=..>` entry of the filter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLink {
    pub label: String,
    /// Hash the link navigates to
    pub href: String,
    pub classes: ClassList,
}

impl FilterLink {
    pub fn new(label: &str, href: &str) -> Self {
        FilterLink {
            label: label.to_string(),
            href: href.to_string(),
            classes: ClassList::new(),
        }
    }

    pub fn selected(&self) -> bool {
        self.classes.contains(SELECTED)
    }
}

/// The standard All / Active / Completed links
pub fn default_filter_links() -> Vec<FilterLink> {
    Filter::ALL
        .iter()
        .map(|f| FilterLink::new(f.label(), f.hash()))
        .collect()
}
