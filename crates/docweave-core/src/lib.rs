//! # docweave-core
//!
//! Packaging primitives shared by the docweave document and workbook writers.
//!
//! This crate provides the Open Packaging Conventions layer both formats sit on:
//! - [`Relationships`] - `.rels` parts and `rId` allocation
//! - [`ContentTypes`] - the `[Content_Types].xml` manifest
//! - [`CoreProperties`] and [`AppProperties`] - the `docProps/` metadata parts
//! - [`Theme`] - the Office theme part
//! - [`PackageWriter`] - writes parts into a ZIP container
//! - [`units`] - twip/EMU/point conversions
//!
//! ## Example
//!
//! ```rust
//! use docweave_core::{rel_type, Relationships};
//!
//! let mut rels = Relationships::new();
//! let id = rels.add(rel_type::STYLES, "styles.xml");
//! assert_eq!(id, "rId1");
//! assert!(rels.to_xml().contains(r#"Target="styles.xml""#));
//! ```

pub mod content_types;
pub mod error;
pub mod package;
pub mod properties;
pub mod relationships;
pub mod theme;
pub mod units;
pub mod xml;

pub use content_types::{mime, ContentTypes};
pub use error::{Error, Result};
pub use package::PackageWriter;
pub use properties::{AppProperties, CoreProperties};
pub use relationships::{rel_type, Relationship, Relationships, TargetMode};
pub use theme::Theme;
