//! List detected removable drives.

use crate::error::Result;
use crate::system::drives;
use crate::ui as output;

pub fn run() -> Result<()> {
    let detected = drives::detect()?;
    if detected.is_empty() {
        output::warning("No removable drives detected.");
        return Ok(());
    }

    output::header("Removable drives");
    for drive in &detected {
        output::keyval(
            &drive.name,
            &format!(
                "mount: {}, free: {}, size: {}",
                drive.mount.display(),
                drive.free_space(),
                drive.size
            ),
        );
    }

    Ok(())
}
