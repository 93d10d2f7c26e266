/// The window location's hash fragment and session history.
///
/// `set_hash` behaves like assigning `location.hash`: it records a history
/// entry and reports a hash change. `push_state` behaves like
/// `history.pushState`: it rewrites the hash silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    hash: String,
    history: Vec<String>,
}

impl Default for Location {
    fn default() -> Self {
        Location::new("")
    }
}

impl Location {
    pub fn new(hash: &str) -> Self {
        Location {
            hash: hash.to_string(),
            history: vec![hash.to_string()],
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Navigate to a new hash. Returns true when a hash change fired.
    pub fn set_hash(&mut self, hash: &str) -> bool {
        let hash = normalize(hash);
        if hash == self.hash {
            return false;
        }
        self.hash = hash.clone();
        self.history.push(hash);
        true
    }

    /// Rewrite the hash without firing a hash change
    pub fn push_state(&mut self, hash: &str) {
        let hash = normalize(hash);
        self.hash = hash.clone();
        self.history.push(hash);
    }

    /// Every hash this location has held, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Browsers report a lone `#` as the empty hash, and hashes without a
/// leading `#` get one.
fn normalize(hash: &str) -> String {
    match hash {
        "" | "#" => String::new(),
        h if h.starts_with('#') => h.to_string(),
        h => format!("#{}", h),
    }
}
