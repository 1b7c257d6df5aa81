//! The metadata record embedded in every backup archive.

use crate::error::{RehomeError, Result};
use crate::system::host;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MANIFEST_NAME: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Creation timestamp, RFC 3339
    pub created: String,
    /// Paths that went into the archive
    pub files: Vec<String>,
    /// Application names recorded for reinstallation
    pub apps: Vec<String>,
    /// Free-text identifier of the source machine
    pub system: String,
}

impl Manifest {
    /// Build a manifest for a new backup. Application names are sorted and
    /// deduplicated before storage.
    pub fn new(files: Vec<String>, mut apps: Vec<String>) -> Self {
        apps.sort();
        apps.dedup();
        Self {
            created: Local::now().to_rfc3339(),
            files,
            apps,
            system: host::identity(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RehomeError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => RehomeError::IoError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Read the manifest extracted into `dir`, then delete it.
    ///
    /// A manifest is single-use: the extracted copy is transient
    /// housekeeping state, not part of the restored files.
    pub fn take(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_NAME);
        let manifest = Self::load(&path)?;
        fs::remove_file(&path).map_err(|e| RehomeError::IoError {
            path: path.clone(),
            source: e,
        })?;
        Ok(manifest)
    }
}
