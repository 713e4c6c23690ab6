//! End-to-end tests for docweave-xlsx.
//!
//! Workbooks are written to an in-memory buffer or a temp file and the
//! resulting ZIP archive is read back part by part.

mod cells;
mod common;
mod package;

pub use common::*;
