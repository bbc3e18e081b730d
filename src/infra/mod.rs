//! Host-environment integrations kept out of the core pipeline.
//!
//! [`FileOpener`] is the seam for asking the OS to open a finished report.
//! [`SystemOpener`] implements it with the `open` crate.

mod opener;

pub use opener::{FileOpener, SystemOpener, open_with_default_handler};
