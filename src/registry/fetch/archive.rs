//! Archive download and extraction.
//!
//! A collection arrives as a ZIP archive. It is streamed to an anonymous
//! temporary file and unpacked into a fresh scratch directory. Every entry
//! name is checked with [`resolve_entry_path`] before anything is written.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tempfile::TempDir;
use zip::ZipArchive;

use super::http::HttpFetcher;
use super::safety::resolve_entry_path;
use crate::error::{Result, SproutError};

/// Prefix for scratch directories holding extracted collections.
pub const SCRATCH_PREFIX: &str = "sprout-collection-";

/// Download the archive at `url` and extract it into a new scratch directory.
///
/// The returned [`TempDir`] owns the scratch directory; dropping it removes
/// the extracted tree. On any failure the scratch directory and the
/// downloaded archive are removed before returning.
pub fn fetch_and_extract(fetcher: &HttpFetcher, url: &str) -> Result<TempDir> {
    let scratch = tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?;

    let mut archive_file = tempfile::tempfile()?;
    fetcher.download(url, &mut archive_file)?;
    archive_file.seek(SeekFrom::Start(0))?;

    let count = extract_archive(archive_file, scratch.path())?;
    tracing::debug!(
        "Extracted {} entries from {} into {}",
        count,
        url,
        scratch.path().display()
    );

    Ok(scratch)
}

/// Extract a ZIP archive into `dest`, returning the number of entries.
///
/// All entry names are validated first, so an archive containing a single
/// escaping entry writes nothing. Directory entries are created
/// recursively; file entries keep their archive-declared permission bits
/// on Unix.
pub fn extract_archive<R: Read + Seek>(reader: R, dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(reader).map_err(extraction_failed)?;

    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index).map_err(extraction_failed)?;
        resolve_entry_path(dest, entry.name())?;
    }

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(extraction_failed)?;
        let out_path = resolve_entry_path(dest, entry.name())?;

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| write_failed(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
        }

        let mut out = File::create(&out_path).map_err(|e| write_failed(&out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| write_failed(&out_path, e))?;

        if let Some(mode) = entry.unix_mode() {
            apply_mode(&out_path, mode).map_err(|e| write_failed(&out_path, e))?;
        }
    }

    Ok(archive.len())
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

fn extraction_failed(err: zip::result::ZipError) -> SproutError {
    SproutError::ExtractionFailed {
        message: err.to_string(),
    }
}

fn write_failed(path: &Path, err: io::Error) -> SproutError {
    SproutError::ExtractionFailed {
        message: format!("writing {}: {}", path.display(), err),
    }
}

/// Helpers for building archives in tests.
#[cfg(test)]
pub(crate) mod fixture {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Build a ZIP archive in memory. Names ending in `/` become directories.
    pub(crate) fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
        }

        writer.finish().unwrap().into_inner()
    }
}
