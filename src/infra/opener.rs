use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Opens a file with whatever the host considers its default application.
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Delegates to the platform launcher (`xdg-open`, `open`, `start`, ...).
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        open::that(path).with_context(|| format!("failed to open '{}'", path.display()))
    }
}

/// Best-effort open. Failure is logged and otherwise ignored.
pub fn open_with_default_handler(opener: &dyn FileOpener, path: &Path) {
    match opener.open(path) {
        Ok(()) => info!(path = %path.display(), "Opened report with default viewer"),
        Err(e) => warn!(path = %path.display(), error = %e, "Could not open report"),
    }
}
