use std::cell::Cell;
use std::rc::Rc;

use crate::controller::ListController;
use crate::events::SubscriptionId;
use crate::model::AppConfig;

/// A connected list plus an observer that marks derived state stale
/// whenever an item changes or is destroyed. Front ends call `settle` after
/// each batch of input to bring the counter and route visibility back in
/// line with the items.
#[derive(Debug)]
pub struct Session {
    pub list: ListController,
    stale: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl Session {
    pub fn new(mut list: ListController) -> Self {
        let stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale);
        let subscription = list.subscribe(move |_| flag.set(true));
        list.connect();
        Session {
            list,
            stale,
            subscription,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Session::new(ListController::from_config(config))
    }

    /// Force the next `settle` to refresh
    pub fn mark_stale(&self) {
        self.stale.set(true);
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Refresh counts and visibility if anything changed. Returns whether a
    /// refresh happened.
    pub fn settle(&mut self) -> bool {
        if !self.stale.replace(false) {
            return false;
        }
        self.list.refresh();
        true
    }

    /// Stop observing the list and hand it back
    pub fn into_list(mut self) -> ListController {
        self.list.unsubscribe(self.subscription);
        self.list
    }
}
