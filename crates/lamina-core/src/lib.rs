//! # Lamina Core
//!
//! Core types for the Lamina slicing toolchain.
//! This crate is pipeline-agnostic and contains no I/O.
//!
//! ## Modules
//!
//! - [`geometry`] - Basic geometric types (Point, Line, Facet, Contour)
//! - [`config`] - Process parameters and fixed printer constants

pub mod config;
pub mod geometry;

pub use config::*;
pub use geometry::*;
