use crate::errors::ListError;
use crate::types::{DirectoryEntry, Options, is_hidden};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Name reported for the root of a recursive walk.
const WALK_ROOT_NAME: &str = ".";

pub fn current_dir() -> Result<std::path::PathBuf, ListError> {
    std::env::current_dir().map_err(ListError::CurrentDir)
}

/// Collect the entries of `dir`, one level deep or recursively.
///
/// Hidden entries are only filtered when recursing; a flat listing always
/// includes them, whatever `show_hidden` says.
pub fn collect_entries(dir: &Path, options: &Options) -> Result<Vec<DirectoryEntry>, ListError> {
    let entries = if options.recursive {
        walk_entries(dir, options.show_hidden)?
    } else {
        read_entries(dir)?
    };

    log::debug!(
        "collected {} entries from {} (recursive: {})",
        entries.len(),
        dir.display(),
        options.recursive
    );
    Ok(entries)
}

fn read_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
    let read_dir = fs::read_dir(dir).map_err(|source| ListError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ListError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        // DirEntry::metadata does not follow symlinks
        if let Some(metadata) = child_metadata(&entry.path(), entry.metadata())? {
            children.push((entry.file_name(), metadata));
        }
    }

    children.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(children
        .into_iter()
        .map(|(name, metadata)| {
            DirectoryEntry::from_metadata(name.to_string_lossy().to_string(), &metadata)
        })
        .collect())
}

/// A child removed between the directory read and its stat is skipped.
fn child_metadata(
    path: &Path,
    metadata: io::Result<Metadata>,
) -> Result<Option<Metadata>, ListError> {
    match metadata {
        Ok(m) => Ok(Some(m)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} vanished during listing", path.display());
            Ok(None)
        }
        Err(source) => Err(ListError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn walk_entries(dir: &Path, show_hidden: bool) -> Result<Vec<DirectoryEntry>, ListError> {
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never prune the root, whatever its own name looks like
            if show_hidden || e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let prune = is_hidden(&e.file_name().to_string_lossy());
            if prune {
                log::debug!("skipping hidden directory {}", e.path().display());
            }
            !prune
        });

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let name = if entry.depth() == 0 {
            WALK_ROOT_NAME.to_string()
        } else {
            entry.file_name().to_string_lossy().to_string()
        };

        if is_hidden(&name) && !show_hidden {
            continue;
        }

        let metadata = entry.metadata()?;
        entries.push(DirectoryEntry::from_metadata(name, &metadata));
    }

    Ok(entries)
}
