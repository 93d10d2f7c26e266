use serde::{Deserialize, Serialize};

/// Visibility mode selected by the location hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a location hash. The empty hash routes to `All`; anything
    /// unrecognized is `None`.
    pub fn from_hash(hash: &str) -> Option<Filter> {
        match hash {
            "" | "#/" => Some(Filter::All),
            "#/active" => Some(Filter::Active),
            "#/completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// The canonical hash for this filter
    pub fn hash(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether an item with the given completed flag is shown
    pub fn shows(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !completed,
            Filter::Completed => completed,
        }
    }

    /// Next filter in link order, wrapping
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Previous filter in link order, wrapping
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}
