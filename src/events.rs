use serde::Serialize;

use crate::dom::ItemId;

/// Where a notification was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "node", content = "id", rename_all = "lowercase")]
pub enum Target {
    /// An item node
    Item(ItemId),
    /// The list root that contains the items
    List,
}

/// A fire-and-forget notification about an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Notification {
    /// `itemchanged`: the item's completed flag was written
    ItemChanged { item: ItemId },
    /// `itemdestroyed`: the item was removed from the list
    ItemDestroyed { item: ItemId },
}

impl Notification {
    /// The DOM-style event name
    pub fn name(&self) -> &'static str {
        match self {
            Notification::ItemChanged { .. } => "itemchanged",
            Notification::ItemDestroyed { .. } => "itemdestroyed",
        }
    }

    /// The node the notification is dispatched on. `itemchanged` fires on the
    /// item itself, `itemdestroyed` on the (former) parent.
    pub fn target(&self) -> Target {
        match self {
            Notification::ItemChanged { item } => Target::Item(*item),
            Notification::ItemDestroyed { .. } => Target::List,
        }
    }
}

/// Handle returned by `Observers::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Notification)>;

/// Registered notification observers, called in subscription order
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn dispatch(&mut self, notification: Notification) {
        tracing::trace!(event = notification.name(), "dispatch");
        for (_, observer) in &mut self.observers {
            observer(&notification);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.observers.len())
            .finish()
    }
}
