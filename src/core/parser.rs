use crate::config::DEFAULT_NAMESPACES;
use crate::error::Result;
use crate::{MenuNode, NodeKind};
use roxmltree::{Document, Node};

/// Name of the synthetic element wrapped around a menu fragment.
pub const SYNTHETIC_ROOT: &str = "root";

pub trait Parser {
    /// Parse a markup fragment of sibling menu items and return the synthetic root node.
    fn parse_fragment(&self, fragment: &str) -> Result<MenuNode>;
}

/// XamlParser: wraps the fragment in a root element declaring the referenced
/// namespace prefixes and materializes it as a `MenuNode` tree using roxmltree.
pub struct XamlParser {
    namespaces: Vec<(String, String)>,
}

impl Default for XamlParser {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAMESPACES
                .iter()
                .map(|(p, u)| (p.to_string(), u.to_string()))
                .collect(),
        )
    }
}

impl XamlParser {
    pub fn new(namespaces: Vec<(String, String)>) -> Self {
        Self { namespaces }
    }

    /// Wrap raw markup so it parses as a single document.
    pub fn wrap_fragment(&self, fragment: &str) -> String {
        let mut declarations = String::new();
        for (prefix, uri) in &self.namespaces {
            let uri = uri.replace('&', "&amp;").replace('<', "&lt;").replace('\'', "&apos;");
            declarations.push_str(&format!(" xmlns:{}='{}'", prefix, uri));
        }
        format!("<{root}{declarations}>{fragment}</{root}>", root = SYNTHETIC_ROOT)
    }

    fn build_node(&self, node: Node) -> MenuNode {
        let attr = |name: &str| node.attribute(name).unwrap_or_default().to_string();

        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(|child| self.build_node(child))
            .collect();

        MenuNode {
            kind: NodeKind::from_element_name(node.tag_name().name()),
            header: attr("Header"),
            tag: attr("Tag"),
            click_handler: attr("Click"),
            tooltip: attr("ToolTip"),
            icon: attr("Icon"),
            children,
        }
    }
}

impl Parser for XamlParser {
    fn parse_fragment(&self, fragment: &str) -> Result<MenuNode> {
        let wrapped = self.wrap_fragment(fragment);
        let doc = Document::parse(&wrapped)?;
        let mut root = self.build_node(doc.root_element());
        root.kind = NodeKind::Other;
        Ok(root)
    }
}
