use serde::Serialize;

use crate::controller::{ItemView, ListController};
use crate::model::Filter;

/// Point-in-time view of the whole list
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Location hash
    pub route: String,
    /// Filter for the hash, `null` when unrecognized
    pub filter: Option<Filter>,
    pub active: usize,
    pub total: usize,
    /// Footer counter text
    pub counter: String,
    pub footer_hidden: bool,
    pub items: Vec<ItemView>,
}

impl Snapshot {
    pub fn capture(list: &ListController) -> Self {
        Snapshot {
            route: list.location.hash().to_string(),
            filter: list.current_filter(),
            active: list.active_count(),
            total: list.todo_count(),
            counter: list.footer.counter_text(),
            footer_hidden: list.footer.hidden(),
            items: list.views(),
        }
    }
}

/// Plain-text rendering: a route line, one line per item, then the footer
/// counter unless the footer is hidden.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let filter = snapshot.filter.map_or("none", |f| f.label());
    out.push_str(&format!("route {} ({})\n", route_display(&snapshot.route), filter));
    if snapshot.items.is_empty() {
        out.push_str("  (no items)\n");
    }
    for (i, item) in snapshot.items.iter().enumerate() {
        let check = if item.completed { "[x]" } else { "[ ]" };
        let hidden = if item.visible { "" } else { "  (hidden)" };
        out.push_str(&format!("{:>3}. {} {}{}\n", i + 1, check, item.value, hidden));
    }
    if !snapshot.footer_hidden {
        out.push_str(&snapshot.counter);
        out.push('\n');
    }
    out
}

fn route_display(route: &str) -> &str {
    if route.is_empty() { "#/" } else { route }
}
