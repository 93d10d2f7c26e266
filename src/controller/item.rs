use serde::Serialize;

use crate::dom::{COMPLETED, Child, EDITING, HIDDEN, ItemId, ItemNode, ListRoot, TextInput};
use crate::events::Notification;

/// Read-only snapshot of one item, for rendering and output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub value: String,
    pub completed: bool,
    pub editing: bool,
    pub visible: bool,
}

impl ItemView {
    pub fn of(child: &Child) -> Self {
        let node = &child.node;
        let editing = node.classes.contains(EDITING);
        ItemView {
            id: child.id,
            value: read_value(node, editing).to_string(),
            completed: node.classes.contains(COMPLETED),
            editing,
            visible: !node.classes.contains(HIDDEN),
        }
    }
}

fn read_value(node: &ItemNode, editing: bool) -> &str {
    if editing {
        node.editor.value().trim()
    } else {
        node.label.trim()
    }
}

/// Controller bound to one item node. Borrows the list root for its
/// lifetime so it can dispatch notifications and remove itself.
#[derive(Debug)]
pub struct ItemController<'a> {
    root: &'a mut ListRoot,
    pos: usize,
}

impl<'a> ItemController<'a> {
    /// Bind to the child with the given id
    pub fn find(root: &'a mut ListRoot, id: ItemId) -> Option<Self> {
        let pos = root.position(id)?;
        Some(ItemController { root, pos })
    }

    /// Bind to the child at a position in the root
    pub fn at(root: &'a mut ListRoot, pos: usize) -> Option<Self> {
        (pos < root.len()).then_some(ItemController { root, pos })
    }

    fn child(&self) -> &Child {
        &self.root.children()[self.pos]
    }

    fn node(&self) -> &ItemNode {
        &self.child().node
    }

    fn node_mut(&mut self) -> &mut ItemNode {
        &mut self.root.children_mut()[self.pos].node
    }

    pub fn id(&self) -> ItemId {
        self.child().id
    }

    /// Attach to the node, reconciling the checkbox with the `completed`
    /// class: a checked box wins, otherwise a completed class checks the box.
    pub fn connect(&mut self) {
        if self.node().checked {
            self.set_completed(true);
        } else if self.completed() {
            self.node_mut().checked = true;
        }
        self.root.children_mut()[self.pos].connected = true;
    }

    pub fn visible(&self) -> bool {
        !self.node().classes.contains(HIDDEN)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.node_mut().classes.toggle(HIDDEN, !visible);
    }

    /// Editor text while editing, label text otherwise. Always trimmed.
    pub fn value(&self) -> String {
        read_value(self.node(), self.editing()).to_string()
    }

    /// Write the trimmed value to both label and editor
    pub fn set_value(&mut self, value: &str) {
        let value = value.trim();
        let node = self.node_mut();
        node.label = value.to_string();
        node.editor.set_value(value);
    }

    pub fn editing(&self) -> bool {
        self.node().classes.contains(EDITING)
    }

    /// Entering edit mode focuses the editor; leaving it blurs the editor.
    pub fn set_editing(&mut self, editing: bool) {
        let node = self.node_mut();
        node.classes.toggle(EDITING, editing);
        if editing {
            node.editor.focus();
            node.editor.move_end();
        } else {
            node.editor.blur();
        }
    }

    pub fn edit(&mut self) {
        self.set_editing(true);
    }

    pub fn unedit(&mut self) {
        self.set_editing(false);
    }

    pub fn editor_mut(&mut self) -> &mut TextInput {
        &mut self.node_mut().editor
    }

    pub fn completed(&self) -> bool {
        self.node().classes.contains(COMPLETED)
    }

    /// Set the `completed` class and checkbox. Fires `itemchanged` on
    /// every write, including writes of the current value.
    pub fn set_completed(&mut self, completed: bool) {
        let node = self.node_mut();
        node.classes.toggle(COMPLETED, completed);
        node.checked = completed;
        let item = self.id();
        self.root.dispatch(Notification::ItemChanged { item });
    }

    pub fn toggle_completed(&mut self) {
        let completed = self.completed();
        self.set_completed(!completed);
    }

    /// Remove the node from the list and fire `itemdestroyed` on the list.
    pub fn destroy(self) -> ItemNode {
        let item = self.id();
        let node = self.root.remove_at(self.pos);
        tracing::debug!(%item, "destroyed item");
        self.root.dispatch(Notification::ItemDestroyed { item });
        node
    }

    pub fn view(&self) -> ItemView {
        ItemView::of(self.child())
    }
}
