use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `Click` handler value that marks a menu item as a leaf action.
pub const DEFAULT_ACTION_MARKER: &str = "Button_Click";

/// Namespace prefixes the XAML attribute syntax references; declared on the synthetic root.
pub const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("x", "http://schemas.microsoft.com/winfx/2006/xaml"),
    ("wpf", "clr-namespace:Calcpad.Wpf"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierOptions {
    pub action_marker: String,
    /// Attach the cleaned tooltip to leaf actions. Off by default.
    pub include_tooltips: bool,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            action_marker: DEFAULT_ACTION_MARKER.to_string(),
            include_tooltips: false,
        }
    }
}

/// Inclusive, 1-based line range of the menu fragment inside the source file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub line_range: Option<LineRange>,
    pub output: Option<PathBuf>,
    pub namespaces: Vec<(String, String)>,
    pub classifier: ClassifierOptions,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            line_range: None,
            output: None,
            namespaces: DEFAULT_NAMESPACES
                .iter()
                .map(|(p, u)| (p.to_string(), u.to_string()))
                .collect(),
            classifier: ClassifierOptions::default(),
        }
    }
}

impl ConvertConfig {
    /// Add or replace a namespace declaration given as `prefix=uri`.
    pub fn add_namespace(&mut self, declaration: &str) -> anyhow::Result<()> {
        let (prefix, uri) = declaration
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("namespace must be given as prefix=uri, got: {}", declaration))?;
        let prefix = prefix.trim();
        if prefix.is_empty() {
            anyhow::bail!("namespace prefix is empty in: {}", declaration);
        }
        match self.namespaces.iter_mut().find(|(p, _)| p == prefix) {
            Some(existing) => existing.1 = uri.trim().to_string(),
            None => self.namespaces.push((prefix.to_string(), uri.trim().to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_namespaces_declared() {
        let config = ConvertConfig::default();
        assert_eq!(config.namespaces.len(), 2);
        assert_eq!(config.namespaces[0].0, "x");
        assert_eq!(config.classifier.action_marker, "Button_Click");
    }

    #[test]
    fn test_add_namespace_replaces_existing_prefix() {
        let mut config = ConvertConfig::default();
        config.add_namespace("wpf=clr-namespace:Other").unwrap();
        config.add_namespace("local = clr-namespace:Local").unwrap();
        assert_eq!(config.namespaces.len(), 3);
        assert_eq!(config.namespaces[1].1, "clr-namespace:Other");
        assert_eq!(config.namespaces[2], ("local".to_string(), "clr-namespace:Local".to_string()));
    }

    #[test]
    fn test_add_namespace_rejects_malformed() {
        let mut config = ConvertConfig::default();
        assert!(config.add_namespace("no-equals-sign").is_err());
        assert!(config.add_namespace("=uri").is_err());
    }
}
