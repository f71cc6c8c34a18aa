//! Application registry.
//!
//! Maps application identifiers to descriptors so transfer helpers can
//! show human-readable titles in messages. Supplying a registry is
//! optional; lookups without one resolve to nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor for a registered application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppDescriptor {
    /// Human-readable application title.
    pub title: String,

    /// Unknown descriptor fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl AppDescriptor {
    /// Create a descriptor with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: HashMap::new(),
        }
    }
}

/// Registry of known applications, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: HashMap<String, AppDescriptor>,
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an application descriptor under `id`.
    pub fn insert(&mut self, id: impl Into<String>, descriptor: AppDescriptor) {
        self.apps.insert(id.into(), descriptor);
    }

    /// Look up the title of a registered application.
    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.apps.get(id).map(|descriptor| descriptor.title.as_str())
    }
}

impl FromIterator<(String, AppDescriptor)> for AppRegistry {
    fn from_iter<I: IntoIterator<Item = (String, AppDescriptor)>>(iter: I) -> Self {
        Self {
            apps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_of_known_app() {
        let mut registry = AppRegistry::new();
        registry.insert("dashboards", AppDescriptor::new("Dashboards"));

        assert_eq!(registry.title_of("dashboards"), Some("Dashboards"));
    }

    #[test]
    fn test_title_of_unknown_app() {
        let registry = AppRegistry::new();

        assert_eq!(registry.title_of("missing"), None);
    }

    #[test]
    fn test_from_iterator() {
        let registry: AppRegistry = [
            ("maps".to_string(), AppDescriptor::new("Maps")),
            ("lens".to_string(), AppDescriptor::new("Lens")),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.title_of("maps"), Some("Maps"));
        assert_eq!(registry.title_of("lens"), Some("Lens"));
    }

    #[test]
    fn test_descriptor_preserves_unknown_fields() {
        let descriptor: AppDescriptor = serde_json::from_value(serde_json::json!({
            "title": "Dashboards",
            "icon": "dashboardApp",
        }))
        .unwrap();

        assert_eq!(descriptor.title, "Dashboards");
        assert_eq!(descriptor.extra["icon"], "dashboardApp");
    }
}
