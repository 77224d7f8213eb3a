use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Reserved key holding the leaf actions of a mixed category.
pub const DIRECT_KEY: &str = "direct";

/// Normalized output unit for a clickable menu item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeafAction {
    pub tag: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl LeafAction {
    pub fn new(tag: &str, description: &str) -> Self {
        Self {
            tag: tag.to_string(),
            description: description.to_string(),
            label: None,
            tooltip: None,
        }
    }
}

/// A named grouping of leaf actions and/or nested categories.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
    /// Only leaf actions; emitted as a JSON array.
    Actions(Vec<LeafAction>),
    /// Only subcategories; emitted as a JSON object.
    Nested(IndexMap<String, Category>),
    /// Both; emitted as an object whose `direct` key holds the actions.
    Mixed {
        direct: Vec<LeafAction>,
        subcategories: IndexMap<String, Category>,
    },
}

impl Category {
    /// Number of leaf actions anywhere below this category.
    pub fn total_actions(&self) -> usize {
        match self {
            Category::Actions(items) => items.len(),
            Category::Nested(subs) => subs.values().map(Category::total_actions).sum(),
            Category::Mixed { direct, subcategories } => {
                let direct = if subcategories.contains_key(DIRECT_KEY) { 0 } else { direct.len() };
                direct + subcategories.values().map(Category::total_actions).sum::<usize>()
            }
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Category::Actions(items) => items.serialize(serializer),
            Category::Nested(subs) => subs.serialize(serializer),
            Category::Mixed { direct, subcategories } => {
                // A subcategory literally named "direct" replaces the actions but keeps the first slot.
                let shadow = subcategories.get(DIRECT_KEY);
                let len = subcategories.len() + usize::from(shadow.is_none());
                let mut map = serializer.serialize_map(Some(len))?;
                match shadow {
                    Some(category) => map.serialize_entry(DIRECT_KEY, category)?,
                    None => map.serialize_entry(DIRECT_KEY, direct)?,
                }
                for (key, value) in subcategories.iter().filter(|(key, _)| key.as_str() != DIRECT_KEY) {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Value stored under a document section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MenuEntry {
    Action(LeafAction),
    Category(Category),
}

/// Root result: top-level section name to its classified content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MenuDocument {
    pub sections: IndexMap<String, MenuEntry>,
}

impl MenuDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn get(&self, section: &str) -> Option<&MenuEntry> {
        self.sections.get(section)
    }

    /// Insert a section unless the key is already taken. Returns whether it was inserted.
    pub fn insert_first(&mut self, key: String, entry: MenuEntry) -> bool {
        match self.sections.entry(key) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Per-section statistics, in document order.
    pub fn summary(&self) -> Vec<SectionSummary> {
        self.sections
            .iter()
            .map(|(name, entry)| {
                let shape = match entry {
                    MenuEntry::Action(_) => SectionShape::Action,
                    MenuEntry::Category(Category::Actions(items)) => SectionShape::Items(items.len()),
                    MenuEntry::Category(category) => {
                        let categories = match category {
                            Category::Nested(subs) => subs.len(),
                            Category::Mixed { subcategories, .. } => {
                                subcategories.len() + usize::from(!subcategories.contains_key(DIRECT_KEY))
                            }
                            Category::Actions(_) => 0,
                        };
                        SectionShape::Categories {
                            categories,
                            total_items: category.total_actions(),
                        }
                    }
                };
                SectionSummary {
                    name: name.clone(),
                    shape,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionShape {
    Action,
    Items(usize),
    Categories { categories: usize, total_items: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub name: String,
    pub shape: SectionShape,
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            SectionShape::Action => write!(f, "{}: action", self.name),
            SectionShape::Items(n) => write!(f, "{}: {} items", self.name, n),
            SectionShape::Categories { categories, total_items } => write!(
                f,
                "{}: {} categories, {} total items",
                self.name, categories, total_items
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn actions(tags: &[&str]) -> Vec<LeafAction> {
        tags.iter().map(|t| LeafAction::new(t, &t.to_uppercase())).collect()
    }

    #[test]
    fn test_leaf_action_optional_fields_omitted() {
        let value = serde_json::to_value(LeafAction::new("t1", "Foo")).unwrap();
        assert_eq!(value, json!({"tag": "t1", "description": "Foo"}));
    }

    #[test]
    fn test_mixed_category_puts_direct_first() {
        let mut subs = IndexMap::new();
        subs.insert("Y".to_string(), Category::Actions(actions(&["y"])));
        subs.insert("X".to_string(), Category::Actions(actions(&["x"])));
        let mixed = Category::Mixed {
            direct: actions(&["a", "b"]),
            subcategories: subs,
        };
        let text = serde_json::to_string(&mixed).unwrap();
        assert_eq!(
            text,
            r#"{"direct":[{"tag":"a","description":"A"},{"tag":"b","description":"B"}],"Y":[{"tag":"y","description":"Y"}],"X":[{"tag":"x","description":"X"}]}"#
        );
    }

    #[test]
    fn test_mixed_category_subcategory_named_direct_shadows_actions() {
        let mut subs = IndexMap::new();
        subs.insert("A".to_string(), Category::Actions(actions(&["a"])));
        subs.insert("direct".to_string(), Category::Actions(actions(&["d"])));
        let mixed = Category::Mixed {
            direct: actions(&["l"]),
            subcategories: subs,
        };
        let text = serde_json::to_string(&mixed).unwrap();
        assert_eq!(
            text,
            r#"{"direct":[{"tag":"d","description":"D"}],"A":[{"tag":"a","description":"A"}]}"#
        );
    }

    #[test]
    fn test_summary_counts_nested_items() {
        let mut inner = IndexMap::new();
        inner.insert("Deep".to_string(), Category::Actions(actions(&["d1", "d2"])));
        let mut subs = IndexMap::new();
        subs.insert("Sub".to_string(), Category::Nested(inner));
        subs.insert("Other".to_string(), Category::Actions(actions(&["o"])));

        let mut doc = MenuDocument::new();
        doc.insert_first("Flat".into(), MenuEntry::Category(Category::Actions(actions(&["f1", "f2", "f3"]))));
        doc.insert_first(
            "Mixed".into(),
            MenuEntry::Category(Category::Mixed { direct: actions(&["m"]), subcategories: subs }),
        );
        doc.insert_first("Solo".into(), MenuEntry::Action(LeafAction::new("s", "Solo")));

        let lines: Vec<String> = doc.summary().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Flat: 3 items".to_string(),
                "Mixed: 3 categories, 4 total items".to_string(),
                "Solo: action".to_string(),
            ]
        );
    }

    #[test]
    fn test_insert_first_keeps_existing_section() {
        let mut doc = MenuDocument::new();
        assert!(doc.insert_first("A".into(), MenuEntry::Action(LeafAction::new("1", "one"))));
        assert!(!doc.insert_first("A".into(), MenuEntry::Action(LeafAction::new("2", "two"))));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("A"), Some(&MenuEntry::Action(LeafAction::new("1", "one"))));
    }
}
