//! Copying a resolved template into a destination directory.
//!
//! Both operations walk the template in the same order: per directory,
//! entries sorted by file name, a directory before its contents. Symbolic
//! links are skipped.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::template::ResolvedTemplate;
use crate::error::{Result, SproutError};

/// Files created by a copy, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationResult {
    /// Destination paths of the copied files.
    pub files: Vec<PathBuf>,
}

impl MaterializationResult {
    /// Number of files copied.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was copied.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Relative paths of every file in the template, in walk order.
pub fn list_files(resolved: &ResolvedTemplate) -> Result<Vec<PathBuf>> {
    let root = resolved.absolute_path();
    let mut files = Vec::new();

    for entry in walk(root) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(relative_to(root, &entry)?);
        }
    }

    Ok(files)
}

/// Copy the template's tree into `destination`.
///
/// Directories are created as needed and existing ones are reused. Each
/// file is copied byte for byte and synced before moving on. The first
/// failure aborts the walk; files already written are left in place.
pub fn copy(resolved: &ResolvedTemplate, destination: &Path) -> Result<MaterializationResult> {
    let root = resolved.absolute_path();
    let mut result = MaterializationResult::default();

    fs::create_dir_all(destination).map_err(|source| SproutError::CopyError {
        path: PathBuf::new(),
        source,
    })?;

    for entry in walk(root) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .and_then(|p| p.strip_prefix(root).ok())
                .map(Path::to_path_buf)
                .unwrap_or_default();
            SproutError::CopyError {
                path,
                source: io::Error::from(e),
            }
        })?;

        let relative = relative_to(root, &entry)?;
        let target = destination.join(&relative);
        let file_type = entry.file_type();

        let copied = if file_type.is_dir() {
            fs::create_dir_all(&target)
        } else if file_type.is_file() {
            copy_file(entry.path(), &target)
        } else {
            tracing::warn!("Skipping non-regular file {}", relative.display());
            continue;
        };

        copied.map_err(|source| SproutError::CopyError {
            path: relative.clone(),
            source,
        })?;

        if file_type.is_file() {
            result.files.push(target);
        }
    }

    tracing::debug!(
        "Copied {} files from template '{}' into {}",
        result.len(),
        resolved.name(),
        destination.display()
    );
    Ok(result)
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

fn relative_to(root: &Path, entry: &DirEntry) -> Result<PathBuf> {
    entry
        .path()
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|e| SproutError::Other(e.into()))
}

fn copy_file(source: &Path, target: &Path) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    // An existing file or symlink at the target is replaced, never written through.
    match fs::symlink_metadata(target) {
        Ok(meta) if !meta.is_dir() => fs::remove_file(target)?,
        _ => {}
    }

    let mut input = File::open(source)?;
    let mut output = File::create(target)?;
    io::copy(&mut input, &mut output)?;
    output.sync_all()?;

    fs::set_permissions(target, input.metadata()?.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CollectionSnapshot;
    use crate::config::CatalogSettings;
    use crate::registry::resolver::resolve_in;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn alpha_collection() -> (TempDir, ResolvedTemplate) {
        let temp = TempDir::new().unwrap();
        let alpha = temp.path().join("alpha");
        fs::create_dir_all(alpha.join("sub")).unwrap();
        fs::create_dir_all(alpha.join("empty")).unwrap();
        fs::write(alpha.join("a.txt"), "alpha file").unwrap();
        fs::write(alpha.join("sub").join("b.txt"), [0u8, 159, 146, 150]).unwrap();

        let snapshot =
            CollectionSnapshot::from_directory(temp.path(), &CatalogSettings::default()).unwrap();
        let resolved = resolve_in(&Arc::new(snapshot), "alpha").unwrap();
        (temp, resolved)
    }

    #[test]
    fn list_files_returns_relative_files_in_order() {
        let (_temp, resolved) = alpha_collection();

        let files = list_files(&resolved).unwrap();

        assert_eq!(
            files,
            vec![PathBuf::from("a.txt"), PathBuf::from("sub").join("b.txt")]
        );
    }

    #[test]
    fn copy_reproduces_tree_byte_for_byte() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();

        let result = copy(&resolved, out.path()).unwrap();

        assert_eq!(result.len(), 2);
        for relative in list_files(&resolved).unwrap() {
            let source = fs::read(resolved.absolute_path().join(&relative)).unwrap();
            let copied = fs::read(out.path().join(&relative)).unwrap();
            assert_eq!(source, copied, "content differs for {}", relative.display());
        }
        assert!(out.path().join("empty").is_dir());
    }

    #[test]
    fn copy_and_list_agree_on_order() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();

        let result = copy(&resolved, out.path()).unwrap();
        let expected: Vec<PathBuf> = list_files(&resolved)
            .unwrap()
            .into_iter()
            .map(|p| out.path().join(p))
            .collect();

        assert_eq!(result.files, expected);
    }

    #[test]
    fn copy_into_existing_directory_reuses_it() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(out.path().join("sub")).unwrap();
        fs::write(out.path().join("keep.txt"), "mine").unwrap();

        copy(&resolved, out.path()).unwrap();

        assert_eq!(
            fs::read_to_string(out.path().join("keep.txt")).unwrap(),
            "mine"
        );
        assert!(out.path().join("sub").join("b.txt").exists());
    }

    #[test]
    fn copy_creates_missing_destination() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("new").join("project");

        copy(&resolved, &dest).unwrap();

        assert!(dest.join("a.txt").is_file());
    }

    #[test]
    fn failure_reports_relative_path_and_keeps_partial_copy() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();
        // A file where the `sub` directory must go.
        fs::write(out.path().join("sub"), "blocker").unwrap();

        let err = copy(&resolved, out.path()).unwrap_err();

        match err {
            SproutError::CopyError { path, .. } => assert_eq!(path, PathBuf::from("sub")),
            other => panic!("expected CopyError, got {:?}", other),
        }
        assert!(out.path().join("a.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn copy_replaces_read_only_leftover() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();
        let stale = out.path().join("a.txt");
        fs::write(&stale, "stale").unwrap();
        fs::set_permissions(&stale, fs::Permissions::from_mode(0o444)).unwrap();

        copy(&resolved, out.path()).unwrap();

        assert_eq!(fs::read_to_string(&stale).unwrap(), "alpha file");
        let mode = fs::metadata(&stale).unwrap().permissions().mode();
        assert_ne!(mode & 0o200, 0);
    }

    #[cfg(unix)]
    #[test]
    fn copy_replaces_symlink_without_following_it() {
        let (_temp, resolved) = alpha_collection();
        let out = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim.txt");
        fs::write(&victim, "untouched").unwrap();
        std::os::unix::fs::symlink(&victim, out.path().join("a.txt")).unwrap();

        copy(&resolved, out.path()).unwrap();

        assert_eq!(fs::read_to_string(&victim).unwrap(), "untouched");
        assert!(!fs::symlink_metadata(out.path().join("a.txt"))
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn copy_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, resolved) = alpha_collection();
        let script = resolved.absolute_path().join("a.txt");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        let out = TempDir::new().unwrap();

        copy(&resolved, out.path()).unwrap();

        let mode = fs::metadata(out.path().join("a.txt"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
