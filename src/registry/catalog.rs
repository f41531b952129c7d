//! Validated, indexed view of a registry snapshot
//!
//! Installed files are flattened to their base name, so the catalog keeps a
//! base name → owner index. Two files sharing a base name would make that
//! lookup ambiguous and make installs overwrite each other, so such a registry
//! is rejected when it is loaded.

use std::collections::HashMap;

use crate::error::{GraftError, Result};
use crate::path_utils;

use super::{RegistryIndex, RegistryItem};

/// Location of a file within the catalog
#[derive(Debug, Clone, Copy)]
struct FileSlot {
    item: usize,
    file: usize,
}

/// Registry catalog with name and base name lookups
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    version: String,
    items: Vec<RegistryItem>,
    by_name: HashMap<String, usize>,
    by_file_name: HashMap<String, FileSlot>,
}

impl Catalog {
    /// Index and validate a registry document
    ///
    /// # Errors
    ///
    /// [`GraftError::RegistryInvalid`] on duplicate component names, unsafe
    /// file paths, or base name collisions.
    pub fn new(index: RegistryIndex) -> Result<Self> {
        let mut by_name = HashMap::new();
        let mut by_file_name: HashMap<String, FileSlot> = HashMap::new();

        for (item_idx, item) in index.components.iter().enumerate() {
            if by_name.insert(item.name.clone(), item_idx).is_some() {
                return Err(invalid(format!("component '{}' is listed twice", item.name)));
            }

            for (file_idx, path) in item.files.iter().enumerate() {
                if !path_utils::is_safe_relative(path) {
                    return Err(invalid(format!(
                        "component '{}' publishes unsafe file path '{}'",
                        item.name, path
                    )));
                }

                let file_name = path_utils::base_name(path).to_string();
                let slot = FileSlot {
                    item: item_idx,
                    file: file_idx,
                };
                if let Some(existing) = by_file_name.insert(file_name.clone(), slot) {
                    let other = &index.components[existing.item];
                    return Err(invalid(format!(
                        "file name '{}' is published by both '{}' ({}) and '{}' ({})",
                        file_name, other.name, other.files[existing.file], item.name, path
                    )));
                }
            }
        }

        Ok(Self {
            name: index.name,
            version: index.version,
            items: index.components,
            by_name,
            by_file_name,
        })
    }

    /// Parse `registry.json` content and index it
    pub fn from_json(content: &str, location: &str) -> Result<Self> {
        let index: RegistryIndex =
            serde_json::from_str(content).map_err(|e| GraftError::RegistryParseFailed {
                location: location.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(index)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All components in registry order
    pub fn items(&self) -> &[RegistryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&RegistryItem> {
        self.by_name.get(name).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Component and registry path that install to `file_name`
    pub fn owner_of(&self, file_name: &str) -> Option<(&RegistryItem, &str)> {
        self.by_file_name.get(file_name).map(|slot| {
            let item = &self.items[slot.item];
            (item, item.files[slot.file].as_str())
        })
    }
}

fn invalid(message: String) -> GraftError {
    GraftError::RegistryInvalid { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::item;

    fn index(components: Vec<RegistryItem>) -> RegistryIndex {
        RegistryIndex {
            name: "test".to_string(),
            version: "1.0.0".to_string(),
            components,
        }
    }

    #[test]
    fn test_lookup_by_name_and_file_name() {
        let catalog = Catalog::new(index(vec![
            item("button", &["ui/button.tsx"], &[]),
            item("toast", &["ui/toast.tsx", "hooks/use-toast.ts"], &["button"]),
        ]))
        .unwrap();

        assert!(catalog.contains("toast"));
        assert!(!catalog.contains("carousel"));
        assert_eq!(catalog.get("button").map(|i| i.files.len()), Some(1));

        let (owner, path) = catalog.owner_of("use-toast.ts").unwrap();
        assert_eq!(owner.name, "toast");
        assert_eq!(path, "hooks/use-toast.ts");
        assert!(catalog.owner_of("index.ts").is_none());
    }

    #[test]
    fn test_duplicate_component_name_rejected() {
        let result = Catalog::new(index(vec![
            item("button", &["ui/button.tsx"], &[]),
            item("button", &["ui/button-2.tsx"], &[]),
        ]));
        assert!(matches!(result, Err(GraftError::RegistryInvalid { .. })));
    }

    #[test]
    fn test_base_name_collision_across_items_rejected() {
        let result = Catalog::new(index(vec![
            item("form", &["ui/form/label.tsx"], &[]),
            item("label", &["ui/label.tsx"], &[]),
        ]));
        let err = result.unwrap_err();
        assert!(matches!(err, GraftError::RegistryInvalid { .. }));
        assert!(err.to_string().contains("label.tsx"));
    }

    #[test]
    fn test_base_name_collision_within_item_rejected() {
        let result = Catalog::new(index(vec![item(
            "chart",
            &["ui/chart.tsx", "legacy/chart.tsx"],
            &[],
        )]));
        assert!(matches!(result, Err(GraftError::RegistryInvalid { .. })));
    }

    #[test]
    fn test_unsafe_path_rejected() {
        let result = Catalog::new(index(vec![item("evil", &["../../etc/passwd"], &[])]));
        assert!(matches!(result, Err(GraftError::RegistryInvalid { .. })));
    }

    #[test]
    fn test_from_json_parse_error() {
        let result = Catalog::from_json("{ not json", "memory");
        assert!(matches!(result, Err(GraftError::RegistryParseFailed { .. })));
    }

    #[test]
    fn test_from_json_descriptor() {
        let json = r#"{
            "name": "acme-ui",
            "version": "2.1.0",
            "components": [
                { "name": "button", "type": "registry:ui", "description": "A button",
                  "category": "actions", "status": "stable", "files": ["ui/button.tsx"],
                  "dependencies": ["@radix-ui/react-slot"] },
                { "name": "dialog", "type": "registry:ui", "category": "overlay",
                  "status": "experimental", "files": ["ui/dialog.tsx"],
                  "registryDependencies": ["button"] }
            ]
        }"#;
        let catalog = Catalog::from_json(json, "memory").unwrap();
        assert_eq!(catalog.name(), "acme-ui");
        assert_eq!(catalog.version(), "2.1.0");
        assert_eq!(catalog.items().len(), 2);
        assert_eq!(
            catalog.get("dialog").unwrap().registry_dependencies,
            vec!["button".to_string()]
        );
    }
}
