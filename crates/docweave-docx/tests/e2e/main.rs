//! End-to-end tests for docweave-docx.
//!
//! Each test builds a document in memory, writes the package to a buffer or
//! a temp file, then opens the ZIP archive and inspects the parts.

mod common;
mod content;
mod package;
mod references;

pub use common::*;
