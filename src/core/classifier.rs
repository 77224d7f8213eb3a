use crate::config::ClassifierOptions;
use crate::core::layout::{Category, LeafAction, MenuDocument, MenuEntry};
use crate::core::normalizer::{clean_header, clean_tag};
use crate::{MenuNode, NodeKind};
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Leaf test shared by the node itself and by its parent's bucket placement.
pub fn is_leaf_action(node: &MenuNode, options: &ClassifierOptions) -> bool {
    node.click_handler == options.action_marker && !clean_tag(&node.tag).is_empty()
}

/// Classify one node and, recursively, its subtree.
///
/// Returns `None` when the node carries nothing worth emitting: separators,
/// non-leaf nodes without menu-item children, and containers whose children
/// were all pruned.
pub fn classify(node: &MenuNode, options: &ClassifierOptions) -> Option<MenuEntry> {
    if node.kind == NodeKind::Separator {
        return None;
    }

    let header = clean_header(&node.header);
    let tag = clean_tag(&node.tag);
    let tooltip = if node.tooltip.is_empty() {
        String::new()
    } else {
        clean_header(&node.tooltip)
    };

    if node.click_handler == options.action_marker && !tag.is_empty() {
        let label = (!node.icon.is_empty()).then(|| node.icon.clone());
        let tooltip = (options.include_tooltips && !tooltip.is_empty()).then_some(tooltip);
        return Some(MenuEntry::Action(LeafAction {
            tag,
            description: header,
            label,
            tooltip,
        }));
    }

    let mut children = node.menu_item_children().peekable();
    if children.peek().is_none() {
        debug!("Pruning '{}': no menu items below it", header);
        return None;
    }

    let mut leaf_items: Vec<LeafAction> = Vec::new();
    let mut subcategories: IndexMap<String, Category> = IndexMap::new();

    for child in children {
        let Some(entry) = classify(child, options) else {
            continue;
        };

        match entry {
            MenuEntry::Action(action) => {
                debug_assert!(is_leaf_action(child, options));
                leaf_items.push(action);
            }
            MenuEntry::Category(category) => {
                let key = clean_header(&child.header);
                if key.is_empty() {
                    debug!("Dropping unnamed category under '{}'", header);
                    continue;
                }
                match subcategories.entry(key) {
                    Entry::Occupied(slot) => {
                        warn!("Duplicate category '{}' under '{}', keeping the first", slot.key(), header);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(category);
                    }
                }
            }
        }
    }

    let category = match (leaf_items.is_empty(), subcategories.is_empty()) {
        (false, false) => Category::Mixed {
            direct: leaf_items,
            subcategories,
        },
        (false, true) => Category::Actions(leaf_items),
        (true, false) => Category::Nested(subcategories),
        (true, true) => {
            debug!("Pruning '{}': every child was pruned", header);
            return None;
        }
    };

    Some(MenuEntry::Category(category))
}

/// Root-level pass over the direct children of the synthetic root.
///
/// Sections are classified in parallel and merged back in document order.
pub fn build_document(root: &MenuNode, options: &ClassifierOptions) -> MenuDocument {
    let sections: Vec<(String, Option<MenuEntry>)> = root
        .menu_item_children()
        .filter_map(|child| {
            let key = clean_header(&child.header);
            if key.is_empty() {
                None
            } else {
                Some((key, child))
            }
        })
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(key, child)| {
            let entry = classify(child, options);
            (key, entry)
        })
        .collect();

    let mut document = MenuDocument::new();
    for (key, entry) in sections {
        let Some(entry) = entry else {
            debug!("Section '{}' produced no entries", key);
            continue;
        };
        info!("Found main section: {}", key);
        if !document.insert_first(key.clone(), entry) {
            warn!("Duplicate section '{}', keeping the first", key);
        }
    }

    document
}
