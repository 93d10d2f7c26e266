use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hash to start on (`#/`, `#/active`, `#/completed`)
    #[serde(default)]
    pub initial_route: Option<String>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line under the footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides by theme slot name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Shape of newly stamped items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Extra classes on every new item
    #[serde(default)]
    pub classes: Vec<String>,
    /// Pre-check the completed checkbox
    #[serde(default)]
    pub checked: bool,
    /// Pre-set the `completed` class
    #[serde(default)]
    pub completed: bool,
}
