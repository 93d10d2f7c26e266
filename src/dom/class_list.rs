use serde::{Deserialize, Serialize};

/// An ordered set of class names on a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        ClassList(Vec::new())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    /// Force a class on or off. Returns whether the class is now present.
    pub fn toggle(&mut self, class: &str, force: bool) -> bool {
        if force {
            self.add(class);
        } else {
            self.remove(class);
        }
        force
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            list.add(class.as_ref());
        }
        list
    }
}
