use tracing::{debug, warn};

use super::item::{ItemController, ItemView};
use crate::dom::{
    FilterLink, Footer, HIDDEN, ItemId, ListRoot, Location, SELECTED, Template, TemplateError,
    TextInput, default_filter_links,
};
use crate::events::{Notification, SubscriptionId};
use crate::model::{AppConfig, Filter};

/// Key pressed in the new-item input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other,
}

/// Result of a key press in the new-item input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keydown {
    /// The key's default handling was suppressed
    pub default_prevented: bool,
    /// Item created by the key press
    pub added: Option<ItemId>,
}

/// Controller for the whole list: the items container, the new-item input,
/// the item template, the footer, and the filter links. Routes location hash
/// changes into item visibility.
#[derive(Debug)]
pub struct ListController {
    pub items: ListRoot,
    pub new_todo: TextInput,
    pub template: Template,
    pub footer: Footer,
    pub filters: Vec<FilterLink>,
    pub location: Location,
    connected: bool,
}

impl ListController {
    pub fn new(template: Template, location: Location) -> Self {
        ListController {
            items: ListRoot::new(),
            new_todo: TextInput::new(),
            template,
            footer: Footer::default(),
            filters: default_filter_links(),
            location,
            connected: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let location = Location::new(config.initial_route.as_deref().unwrap_or(""));
        ListController::new(Template::from_config(&config.template), location)
    }

    /// Start listening for hash changes, then compute counts and apply the
    /// current route. Returns the applied filter, or `None` if the hash was
    /// unrecognized and got reset.
    pub fn connect(&mut self) -> Option<Filter> {
        self.connected = true;
        self.update_count();
        self.handle_hash_change()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Navigate the location to a new hash. Once connected, the resulting
    /// hash change is routed through `handle_hash_change`.
    pub fn navigate(&mut self, hash: &str) -> Option<Filter> {
        if self.location.set_hash(hash) && self.connected {
            self.handle_hash_change()
        } else {
            None
        }
    }

    /// Apply the current hash. A recognized hash selects its filter link and
    /// recomputes visibility. Anything else is reset to `#/` without a hash
    /// change, leaving selection and visibility alone.
    pub fn handle_hash_change(&mut self) -> Option<Filter> {
        let Some(filter) = Filter::from_hash(self.location.hash()) else {
            warn!(hash = self.location.hash(), "unrecognized route, resetting to #/");
            self.location.push_state(Filter::All.hash());
            return None;
        };

        for link in &mut self.filters {
            link.classes.toggle(SELECTED, link.href == filter.hash());
        }
        self.for_each_item(|item| {
            let completed = item.completed();
            item.set_visible(filter.shows(completed));
        });
        debug!(filter = filter.label(), "applied route");
        Some(filter)
    }

    /// Filter for the current hash, if it is recognized
    pub fn current_filter(&self) -> Option<Filter> {
        Filter::from_hash(self.location.hash())
    }

    /// Filter whose link is marked selected
    pub fn selected_filter(&self) -> Option<Filter> {
        self.filters
            .iter()
            .find(|l| l.selected())
            .and_then(|l| Filter::from_hash(&l.href))
    }

    /// Trimmed text of the new-item input
    pub fn new_todo(&self) -> String {
        self.new_todo.value().trim().to_string()
    }

    pub fn set_new_todo(&mut self, value: &str) {
        self.new_todo.set_value(value.trim());
    }

    /// Enter adds the typed item when there is non-empty text. Other keys
    /// pass through untouched.
    pub fn new_todo_keydown(&mut self, key: Key) -> Result<Keydown, TemplateError> {
        match key {
            Key::Enter => {
                let added = if self.new_todo().is_empty() {
                    None
                } else {
                    self.add_new_todo()?
                };
                Ok(Keydown {
                    default_prevented: true,
                    added,
                })
            }
            _ => Ok(Keydown::default()),
        }
    }

    /// Stamp a new item from the template, attach its controller, move the
    /// input's text into it, and refresh counts. The item is fully attached
    /// when this returns.
    pub fn add_new_todo(&mut self) -> Result<Option<ItemId>, TemplateError> {
        let value = self.new_todo();
        if value.is_empty() {
            return Ok(None);
        }
        let node = self.template.stamp()?;
        let id = self.items.append_child(node);
        if let Some(mut item) = ItemController::find(&mut self.items, id) {
            item.connect();
            item.set_value(&value);
        }
        self.set_new_todo("");
        self.update_count();
        debug!(item = %id, "added item");
        Ok(Some(id))
    }

    /// Items not completed
    pub fn active_count(&self) -> usize {
        self.reduce_items(0, |c, item| c + usize::from(!item.completed))
    }

    /// All attached items
    pub fn todo_count(&self) -> usize {
        self.reduce_items(0, |c, _| c + 1)
    }

    /// Refresh the counter text, its plural suffix, and footer visibility
    pub fn update_count(&mut self) {
        let active = self.active_count();
        self.footer.active_count = active.to_string();
        self.footer.pluralize = if active == 1 { "" } else { "s" }.to_string();
        let total = self.todo_count();
        self.footer.classes.toggle(HIDDEN, total == 0);
    }

    /// Recount and re-apply the current route to every item
    pub fn refresh(&mut self) {
        self.update_count();
        if self.current_filter().is_some() {
            self.handle_hash_change();
        }
    }

    /// Mark every item completed. There is no inverse.
    pub fn toggle_all(&mut self) {
        self.for_each_item(|item| item.set_completed(true));
    }

    /// Destroy every item that is completed, judged against a snapshot taken
    /// before any removal. Returns the destroyed ids.
    pub fn clear_completed(&mut self) -> Vec<ItemId> {
        let snapshot: Vec<ItemView> = self.views();
        let mut destroyed = Vec::new();
        for view in snapshot.into_iter().filter(|v| v.completed) {
            if let Some(item) = ItemController::find(&mut self.items, view.id) {
                item.destroy();
                destroyed.push(view.id);
            }
        }
        destroyed
    }

    /// Close an item's editor, keeping the edited text. An edit that leaves
    /// the text empty destroys the item. Returns whether the item remains.
    pub fn commit_edit(&mut self, id: ItemId) -> bool {
        let Some(mut item) = self.item(id) else {
            return false;
        };
        if !item.editing() {
            return true;
        }
        let value = item.value();
        if value.is_empty() {
            item.destroy();
            return false;
        }
        item.set_value(&value);
        item.unedit();
        true
    }

    /// Close an item's editor, restoring the editor from the label
    pub fn cancel_edit(&mut self, id: ItemId) {
        if let Some(mut item) = self.item(id) {
            item.unedit();
            let value = item.value();
            item.set_value(&value);
        }
    }

    /// Controller for an attached item
    pub fn item(&mut self, id: ItemId) -> Option<ItemController<'_>> {
        if !self.items.child(id)?.connected {
            return None;
        }
        ItemController::find(&mut self.items, id)
    }

    /// Snapshots of every attached item in list order
    pub fn views(&self) -> Vec<ItemView> {
        self.items
            .children()
            .iter()
            .filter(|c| c.connected)
            .map(ItemView::of)
            .collect()
    }

    /// Ids of every attached item in list order
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items
            .children()
            .iter()
            .filter(|c| c.connected)
            .map(|c| c.id)
            .collect()
    }

    /// Snapshots of the attached items not hidden by the filter
    pub fn visible_items(&self) -> Vec<ItemView> {
        self.views().into_iter().filter(|v| v.visible).collect()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        self.items.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }

    fn for_each_item(&mut self, mut f: impl FnMut(&mut ItemController<'_>)) {
        for pos in 0..self.items.len() {
            if !self.items.children()[pos].connected {
                continue;
            }
            if let Some(mut item) = ItemController::at(&mut self.items, pos) {
                f(&mut item);
            }
        }
    }

    fn reduce_items<T>(&self, initial: T, mut f: impl FnMut(T, &ItemView) -> T) -> T {
        self.items
            .children()
            .iter()
            .filter(|c| c.connected)
            .fold(initial, |acc, child| f(acc, &ItemView::of(child)))
    }
}
