use serde::{Deserialize, Serialize};

use super::class_list::ClassList;
use super::input::TextInput;
use crate::events::{Notification, Observers, SubscriptionId};

/// Class marking a completed item
pub const COMPLETED: &str = "completed";
/// Class marking an item whose editor is open
pub const EDITING: &str = "editing";
/// Class marking an item filtered out of view
pub const HIDDEN: &str = "hidden";

/// Stable identity of an item node within its list root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One list entry: the root element with its classes, the label, the editor
/// input, and the completed checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemNode {
    pub classes: ClassList,
    /// Text content of the label element
    pub label: String,
    /// The inline editor input
    pub editor: TextInput,
    /// Checked state of the completed checkbox
    pub checked: bool,
}

/// A child of the list root. `connected` is set once an item controller has
/// attached to the node.
#[derive(Debug, Clone)]
pub struct Child {
    pub id: ItemId,
    pub node: ItemNode,
    pub connected: bool,
}

/// The container element holding item nodes in display order, plus the
/// observers listening for item notifications.
#[derive(Debug, Default)]
pub struct ListRoot {
    children: Vec<Child>,
    next_id: u64,
    observers: Observers,
}

impl ListRoot {
    pub fn new() -> Self {
        ListRoot::default()
    }

    /// Append a node without attaching a controller to it
    pub fn append_child(&mut self, node: ItemNode) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.children.push(Child {
            id,
            node,
            connected: false,
        });
        id
    }

    /// Detach a node from the root, returning it
    pub fn remove_child(&mut self, id: ItemId) -> Option<ItemNode> {
        let pos = self.position(id)?;
        Some(self.children.remove(pos).node)
    }

    pub(crate) fn remove_at(&mut self, pos: usize) -> ItemNode {
        self.children.remove(pos).node
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Child] {
        &mut self.children
    }

    pub fn child(&self, id: ItemId) -> Option<&Child> {
        self.children.iter().find(|c| c.id == id)
    }

    pub fn child_mut(&mut self, id: ItemId) -> Option<&mut Child> {
        self.children.iter_mut().find(|c| c.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.children.iter().position(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn dispatch(&mut self, notification: Notification) {
        self.observers.dispatch(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut root = ListRoot::new();
        let a = root.append_child(ItemNode::default());
        let b = root.append_child(ItemNode::default());
        assert!(root.remove_child(a).is_some());
        let c = root.append_child(ItemNode::default());

        assert_ne!(a, c);
        assert_eq!(
            root.children().iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![b, c]
        );
        assert!(root.remove_child(a).is_none());
    }

    #[test]
    fn appended_nodes_start_unconnected() {
        let mut root = ListRoot::new();
        let id = root.append_child(ItemNode::default());
        assert!(!root.child(id).unwrap().connected);
        assert_eq!(root.position(id), Some(0));
    }
}
