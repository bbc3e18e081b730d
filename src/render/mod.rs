//! PDF rendering backend.
//!
//! [`layout`] turns a [`crate::report::Document`] into positioned text runs on
//! numbered pages; [`pdf`] serializes those pages with `printpdf`'s built-in
//! Helvetica fonts.

pub mod layout;
pub mod metrics;
pub mod pdf;

pub use pdf::{render_pdf, write_pdf};
