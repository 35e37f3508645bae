use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::time::SystemTime;

use crate::permissions;

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub mode: String,
}

impl DirectoryEntry {
    #[must_use]
    pub fn from_metadata(name: String, metadata: &Metadata) -> Self {
        // Unreadable mtimes fall back to the epoch rather than "now"
        let modified: DateTime<Local> = metadata
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH)
            .into();

        DirectoryEntry {
            name,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified,
            mode: permissions::mode_string(metadata),
        }
    }
}

/// Listing switches, resolved once from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub long_format: bool,
    pub sort_by_size: bool,
    pub reverse: bool,
    pub recursive: bool,
    pub show_hidden: bool,
}

/// A name is hidden when it starts with '.' and is longer than one character.
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    if name.is_empty() {
        log::warn!("empty file name");
        return false;
    }
    name.starts_with('.') && name.len() > 1
}
