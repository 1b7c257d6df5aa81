//! Recommended backup locations in the user's home directory.

use crate::error::{RehomeError, Result};
use directories::UserDirs;
use std::path::{Path, PathBuf};

// Names that are "known" across distributions; kept in line with what the
// export flow offers by default.
const COMMON_ITEMS: [&str; 8] = [
    "Documents",
    "Pictures",
    "Music",
    "Downloads",
    ".bashrc",
    ".vimrc",
    ".config",
    ".ssh",
];

/// The user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| RehomeError::Other("Failed to locate home directory".into()))
}

/// Commonly backed-up files and directories that exist under `home`.
pub fn common_files(home: &Path) -> Vec<PathBuf> {
    COMMON_ITEMS
        .iter()
        .map(|item| home.join(item))
        .filter(|path| path.exists())
        .collect()
}
