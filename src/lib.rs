pub mod config;
pub mod error;

pub mod core {
    pub mod normalizer;
    pub mod parser;
    pub mod classifier;
    pub mod layout;
    pub mod writer;
}

pub mod utils {
    pub mod menu_processor;
    pub mod source_reader;
}

pub use crate::core::classifier::{build_document, classify};
pub use crate::core::layout::{Category, LeafAction, MenuDocument, MenuEntry};
pub use crate::error::MenuError;

use serde::{Deserialize, Serialize};

/// One element of the parsed menu tree, detached from the XML document it came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuNode {
    pub kind: NodeKind,
    pub header: String,
    pub tag: String,
    pub click_handler: String,
    pub tooltip: String,
    pub icon: String,
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeKind {
    MenuItem,
    Separator,
    #[default]
    Other,
}

impl NodeKind {
    /// Derive the kind from an element's local name.
    pub fn from_element_name(name: &str) -> Self {
        if name.ends_with("Separator") {
            NodeKind::Separator
        } else if name.ends_with("MenuItem") {
            NodeKind::MenuItem
        } else {
            NodeKind::Other
        }
    }
}

impl MenuNode {
    pub fn menu_item(header: &str) -> Self {
        Self {
            kind: NodeKind::MenuItem,
            header: header.to_string(),
            ..Default::default()
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: NodeKind::Separator,
            ..Default::default()
        }
    }

    pub fn with_action(mut self, tag: &str, click_handler: &str) -> Self {
        self.tag = tag.to_string();
        self.click_handler = click_handler.to_string();
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = tooltip.to_string();
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Children that are menu items, in document order.
    pub fn menu_item_children(&self) -> impl Iterator<Item = &MenuNode> {
        self.children.iter().filter(|c| c.kind == NodeKind::MenuItem)
    }
}
