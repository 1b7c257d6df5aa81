//! Backup archive creation and extraction.
//!
//! A backup is a single `.tar.gz` on the destination volume holding the
//! selected files (stored relative to the home directory) plus the manifest
//! as an embedded `manifest.json` entry, written straight from memory.

use crate::backup::manifest::{Manifest, MANIFEST_NAME};
use crate::error::{RehomeError, Result};
use chrono::Local;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::{Archive, Builder, Header};

pub const BACKUP_PREFIX: &str = "migration_backup";
pub const BACKUP_SUFFIX: &str = ".tar.gz";

/// Name a new backup archive after its creation time.
pub fn backup_file_name() -> String {
    format!(
        "{}_{}{}",
        BACKUP_PREFIX,
        Local::now().format("%Y%m%d_%H%M%S"),
        BACKUP_SUFFIX
    )
}

/// Create a compressed backup on `destination` containing `paths` and the
/// manifest. Entries are stored relative to `home`; paths that vanished
/// since selection are skipped.
pub fn create(
    paths: &[PathBuf],
    manifest: &Manifest,
    home: &Path,
    destination: &Path,
) -> Result<PathBuf> {
    let backup_path = destination.join(backup_file_name());
    let file = File::create(&backup_path).map_err(|e| RehomeError::IoError {
        path: backup_path.clone(),
        source: e,
    })?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);
    builder.follow_symlinks(false);

    for path in paths {
        if !path.exists() {
            continue;
        }

        let arcname = match path.strip_prefix(home) {
            Ok(relative) => relative.to_path_buf(),
            // Selections outside the home directory keep their base name.
            Err(_) => match path.file_name() {
                Some(name) => PathBuf::from(name),
                None => continue,
            },
        };

        if path.is_dir() {
            builder.append_dir_all(&arcname, path)?;
        } else {
            builder.append_path_with_name(path, &arcname)?;
        }
    }

    let data = manifest.to_json()?;
    let mut header = Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(Local::now().timestamp() as u64);
    header.set_cksum();
    builder.append_data(&mut header, MANIFEST_NAME, data.as_slice())?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(backup_path)
}

/// Extract a backup archive into `target` (the home directory on restore).
pub fn extract(archive_path: &Path, target: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| RehomeError::IoError {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.unpack(target)?;
    Ok(())
}

/// Backup archives present on a volume, sorted by name (and therefore by
/// creation time, given the timestamped naming scheme).
pub fn list_backups(mount: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(mount).map_err(|e| RehomeError::IoError {
        path: mount.to_path_buf(),
        source: e,
    })?;

    let mut backups: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(BACKUP_PREFIX) && name.ends_with(BACKUP_SUFFIX))
        .collect();
    backups.sort();
    Ok(backups)
}
