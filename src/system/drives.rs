//! Removable-volume detection via `lsblk -J`.

use crate::error::{RehomeError, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

/// A mounted removable volume.
#[derive(Debug, Clone)]
pub struct RemovableDrive {
    pub name: String,
    pub mount: PathBuf,
    pub size: String,
}

impl RemovableDrive {
    /// Free space at the mount point, formatted in GiB.
    pub fn free_space(&self) -> String {
        match fs2::available_space(&self.mount) {
            Ok(bytes) => format!("{:.2}G", bytes as f64 / (1024u64.pow(3)) as f64),
            Err(_) => "Unknown".to_string(),
        }
    }
}

/// Detect removable, mounted volumes. Both whole devices and child
/// partitions qualify.
pub fn detect() -> Result<Vec<RemovableDrive>> {
    let output = Command::new("lsblk")
        .args(["-J", "-o", "NAME,LABEL,RM,MOUNTPOINT,SIZE"])
        .output()
        .map_err(|e| RehomeError::SystemCommandFailed {
            command: "lsblk".into(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(RehomeError::SystemCommandFailed {
            command: "lsblk".into(),
            reason: format!("exit status {}", output.status),
        });
    }

    let doc: Value = serde_json::from_slice(&output.stdout)?;
    Ok(parse_devices(&doc))
}

/// Walk the lsblk device tree collecting removable mounted entries.
pub fn parse_devices(doc: &Value) -> Vec<RemovableDrive> {
    let mut drives = Vec::new();
    if let Some(devices) = doc.get("blockdevices").and_then(|v| v.as_array()) {
        for device in devices {
            collect(device, &mut drives);
        }
    }
    drives
}

fn collect(device: &Value, drives: &mut Vec<RemovableDrive>) {
    if is_removable(device) {
        if let Some(mount) = device
            .get("mountpoint")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
        {
            let name = device
                .get("label")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .or_else(|| device.get("name").and_then(|v| v.as_str()))
                .unwrap_or("unknown")
                .to_string();
            let size = device
                .get("size")
                .and_then(|v| v.as_str())
                .unwrap_or("?")
                .to_string();

            drives.push(RemovableDrive {
                name,
                mount: PathBuf::from(mount),
                size,
            });
        }
    }

    if let Some(children) = device.get("children").and_then(|v| v.as_array()) {
        for child in children {
            collect(child, drives);
        }
    }
}

// Older lsblk prints `rm` as the strings "1"/"0", newer as a JSON bool.
fn is_removable(device: &Value) -> bool {
    match device.get("rm") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "1",
        Some(Value::Number(n)) => n.as_u64() == Some(1),
        _ => false,
    }
}
