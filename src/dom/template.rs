use super::node::{COMPLETED, ItemNode};
use crate::model::TemplateConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("item template has no item root")]
    NoItemRoot,
    #[error("item template has {0} item roots, expected exactly one")]
    MultipleItemRoots(usize),
}

/// One top-level element of a template. Only elements marked as an item
/// root are stamped into the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElement {
    pub item_root: bool,
    pub node: ItemNode,
}

/// The stamp used for new list items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub elements: Vec<TemplateElement>,
}

impl Template {
    /// A template holding a single item root
    pub fn with_root(node: ItemNode) -> Self {
        Template {
            elements: vec![TemplateElement {
                item_root: true,
                node,
            }],
        }
    }

    /// Build the item template from config: extra classes plus an initial
    /// checkbox state. Either may pre-set completion; the item controller
    /// reconciles the two when it attaches.
    pub fn from_config(config: &TemplateConfig) -> Self {
        let mut node = ItemNode {
            classes: config.classes.iter().collect(),
            checked: config.checked,
            ..Default::default()
        };
        if config.completed {
            node.classes.add(COMPLETED);
        }
        Template::with_root(node)
    }

    /// Clone the item root out of the template
    pub fn stamp(&self) -> Result<ItemNode, TemplateError> {
        let mut roots = self.elements.iter().filter(|e| e.item_root);
        let first = roots.next().ok_or(TemplateError::NoItemRoot)?;
        let extra = roots.count();
        if extra > 0 {
            return Err(TemplateError::MultipleItemRoots(extra + 1));
        }
        Ok(first.node.clone())
    }
}
