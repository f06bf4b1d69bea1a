//! Catalog construction.
//!
//! The effective catalog of a collection root is built in three steps:
//! 1. Parse the manifest if one exists (a broken manifest is fatal)
//! 2. Otherwise synthesize one descriptor per visible subdirectory
//! 3. Drop descriptors whose path is not an existing directory inside the root

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::fetch::resolve_entry_path;
use super::manifest::CatalogManifest;
use super::template::TemplateDescriptor;
use crate::config::CatalogSettings;
use crate::error::Result;

/// Directory names never treated as templates.
pub const ALWAYS_IGNORED: &[&str] = &["__pycache__"];

/// The existence-filtered list of templates in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    templates: Vec<TemplateDescriptor>,
    #[serde(skip)]
    dropped: usize,
}

impl Catalog {
    /// Create a catalog from already-filtered descriptors.
    pub fn new(templates: Vec<TemplateDescriptor>, dropped: usize) -> Self {
        Self { templates, dropped }
    }

    /// Templates in source order.
    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Iterate templates in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateDescriptor> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// First template with exactly this name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Template names in source order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// How many declared templates were dropped for lack of a directory.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TemplateDescriptor;
    type IntoIter = std::slice::Iter<'a, TemplateDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// Builds catalogs from collection roots.
#[derive(Debug, Clone)]
pub struct CatalogBuilder<'a> {
    settings: &'a CatalogSettings,
}

impl<'a> CatalogBuilder<'a> {
    /// Create a builder using the given catalog settings.
    pub fn new(settings: &'a CatalogSettings) -> Self {
        Self { settings }
    }

    /// Build the effective catalog for `root`.
    pub fn build(&self, root: &Path) -> Result<Catalog> {
        let declared = self.declared(root)?;
        let total = declared.len();

        let templates: Vec<TemplateDescriptor> = declared
            .into_iter()
            .filter(|descriptor| {
                let present = template_dir(root, descriptor).is_some();
                if !present {
                    tracing::warn!(
                        "Dropping template '{}': no directory at '{}'",
                        descriptor.name,
                        descriptor.relative_path()
                    );
                }
                present
            })
            .collect();

        let dropped = total - templates.len();
        tracing::debug!(
            "Catalog for {}: {} templates, {} dropped",
            root.display(),
            templates.len(),
            dropped
        );

        Ok(Catalog::new(templates, dropped))
    }

    /// Descriptors as declared, before the existence filter.
    fn declared(&self, root: &Path) -> Result<Vec<TemplateDescriptor>> {
        let manifest_path = root.join(&self.settings.manifest);
        if manifest_path.is_file() {
            tracing::debug!("Reading catalog manifest {}", manifest_path.display());
            return Ok(CatalogManifest::load(&manifest_path)?.templates);
        }

        Ok(self
            .template_dir_names(root)?
            .into_iter()
            .map(|name| {
                let description = format!("A {} project template", name);
                TemplateDescriptor::new(name, description)
            })
            .collect())
    }

    /// Visible, non-ignored subdirectory names of `root`, sorted.
    fn template_dir_names(&self, root: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || self.is_ignored(&name) {
                continue;
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn is_ignored(&self, name: &str) -> bool {
        ALWAYS_IGNORED.contains(&name) || self.settings.ignore.iter().any(|i| i == name)
    }
}

/// Directory backing `descriptor` under `root`, if it exists and stays inside `root`.
pub fn template_dir(root: &Path, descriptor: &TemplateDescriptor) -> Option<PathBuf> {
    resolve_entry_path(root, descriptor.relative_path())
        .ok()
        .filter(|path| path.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build(root: &Path) -> Result<Catalog> {
        CatalogBuilder::new(&CatalogSettings::default()).build(root)
    }

    #[test]
    fn manifest_entries_without_directories_are_dropped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        fs::write(
            temp.path().join("template.json"),
            r#"{"templates":[{"name":"alpha","path":"./alpha"},{"name":"ghost","path":"missing"}]}"#,
        )
        .unwrap();

        let catalog = build(temp.path()).unwrap();

        assert_eq!(catalog.names(), vec!["alpha"]);
        assert_eq!(catalog.dropped(), 1);
        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn manifest_order_is_preserved() {
        let temp = TempDir::new().unwrap();
        for dir in ["a", "b", "c"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        fs::write(
            temp.path().join("template.json"),
            r#"{"templates":[{"name":"c"},{"name":"gone"},{"name":"a"},{"name":"b"}]}"#,
        )
        .unwrap();

        let catalog = build(temp.path()).unwrap();

        assert_eq!(catalog.names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn manifest_paths_escaping_root_are_dropped() {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("collection");
        fs::create_dir_all(root.join("alpha")).unwrap();
        fs::create_dir(outer.path().join("outside")).unwrap();
        fs::write(
            root.join("template.json"),
            r#"{"templates":[{"name":"alpha"},{"name":"sneaky","path":"../outside"},{"name":"self","path":"."}]}"#,
        )
        .unwrap();

        let catalog = build(&root).unwrap();

        assert_eq!(catalog.names(), vec!["alpha"]);
        assert_eq!(catalog.dropped(), 2);
    }

    #[test]
    fn malformed_manifest_does_not_fall_back() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        fs::write(temp.path().join("template.json"), "{ not json").unwrap();

        let err = build(temp.path()).unwrap_err();

        assert!(matches!(
            err,
            crate::error::SproutError::CatalogParseError { .. }
        ));
    }

    #[test]
    fn enumerates_visible_subdirectories_without_manifest() {
        let temp = TempDir::new().unwrap();
        for dir in ["streamlit", "nextjs", ".github", "__pycache__"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        fs::write(temp.path().join("README.md"), "# templates").unwrap();

        let catalog = build(temp.path()).unwrap();

        assert_eq!(catalog.names(), vec!["nextjs", "streamlit"]);
        for descriptor in &catalog {
            assert_eq!(descriptor.relative_path(), descriptor.name);
        }
        assert_eq!(
            catalog.get("nextjs").unwrap().description,
            "A nextjs project template"
        );
        assert_eq!(catalog.dropped(), 0);
    }

    #[test]
    fn configured_ignore_names_are_skipped() {
        let temp = TempDir::new().unwrap();
        for dir in ["alpha", "node_modules"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        let settings = CatalogSettings {
            ignore: vec!["node_modules".to_string()],
            ..Default::default()
        };

        let catalog = CatalogBuilder::new(&settings).build(temp.path()).unwrap();

        assert_eq!(catalog.names(), vec!["alpha"]);
    }

    #[test]
    fn custom_manifest_name_is_honoured() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        fs::create_dir(temp.path().join("beta")).unwrap();
        fs::write(
            temp.path().join("catalog.json"),
            r#"{"templates":[{"name":"beta"}]}"#,
        )
        .unwrap();
        let settings = CatalogSettings {
            manifest: "catalog.json".to_string(),
            ..Default::default()
        };

        let catalog = CatalogBuilder::new(&settings).build(temp.path()).unwrap();

        assert_eq!(catalog.names(), vec!["beta"]);
    }

    #[test]
    fn get_returns_first_exact_match() {
        let catalog = Catalog::new(
            vec![
                TemplateDescriptor::new("alpha", "first"),
                TemplateDescriptor::new("Alpha", "other case"),
                TemplateDescriptor::new("alpha", "second"),
            ],
            0,
        );

        assert_eq!(catalog.get("alpha").unwrap().description, "first");
        assert_eq!(catalog.get("Alpha").unwrap().description, "other case");
        assert!(catalog.get("ALPHA").is_none());
    }
}
