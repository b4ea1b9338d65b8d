//! # lamina-stl
//!
//! ASCII STL mesh import for Lamina.
//!
//! This crate provides:
//! - Whitespace-tolerant ASCII STL parsing
//! - Facet extraction into [`lamina_core::Facet`] values
//!
//! ## Example
//!
//! ```ignore
//! use lamina_stl::StlImporter;
//!
//! let importer = StlImporter::from_file("model.stl")?;
//! let facets = importer.into_facets();
//! ```

pub mod error;
pub mod parser;

pub use error::{StlError, StlResult};
pub use parser::StlImporter;
