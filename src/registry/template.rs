//! Template descriptors and resolved templates.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::CollectionSnapshot;

/// Metadata identifying one template in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Unique template name.
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Location inside the collection root. Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TemplateDescriptor {
    /// Create a descriptor whose path defaults to its name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            path: None,
        }
    }

    /// Set an explicit path inside the collection.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Effective path relative to the collection root.
    ///
    /// Falls back to the name when no path (or an empty one) is declared,
    /// and strips a leading `./`.
    pub fn relative_path(&self) -> &str {
        let path = self
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.name);
        path.strip_prefix("./").unwrap_or(path)
    }
}

/// A template name bound to an existing directory inside a snapshot.
///
/// Holds a reference to the snapshot it came from, so the extracted tree
/// stays on disk for as long as this value is alive.
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    descriptor: TemplateDescriptor,
    absolute_path: PathBuf,
    snapshot: Arc<CollectionSnapshot>,
}

impl ResolvedTemplate {
    pub(crate) fn new(
        descriptor: TemplateDescriptor,
        absolute_path: PathBuf,
        snapshot: Arc<CollectionSnapshot>,
    ) -> Self {
        Self {
            descriptor,
            absolute_path,
            snapshot,
        }
    }

    /// The catalog entry this template was resolved from.
    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Directory backing the template.
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Snapshot the template was resolved against.
    pub fn snapshot(&self) -> &Arc<CollectionSnapshot> {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_defaults_to_name() {
        let descriptor = TemplateDescriptor::new("alpha", "Alpha template");
        assert_eq!(descriptor.relative_path(), "alpha");
    }

    #[test]
    fn relative_path_strips_dot_slash() {
        let descriptor = TemplateDescriptor::new("alpha", "").with_path("./templates/alpha");
        assert_eq!(descriptor.relative_path(), "templates/alpha");
    }

    #[test]
    fn empty_path_falls_back_to_name() {
        let descriptor = TemplateDescriptor::new("alpha", "").with_path("");
        assert_eq!(descriptor.relative_path(), "alpha");
    }

    #[test]
    fn deserializes_with_optional_fields() {
        let descriptor: TemplateDescriptor = serde_json::from_str(r#"{"name":"beta"}"#).unwrap();
        assert_eq!(descriptor.name, "beta");
        assert_eq!(descriptor.description, "");
        assert_eq!(descriptor.path, None);
    }

    #[test]
    fn missing_name_is_rejected() {
        let result: Result<TemplateDescriptor, _> =
            serde_json::from_str(r#"{"description":"nameless"}"#);
        assert!(result.is_err());
    }
}
