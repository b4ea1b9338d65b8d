//! # lamina-slice
//!
//! The geometric slicing pipeline: turns a bag of mesh facets into
//! per-layer machine plans.
//!
//! - [`mesh`] - Bed centering and mesh extents
//! - [`layers`] - Plane/facet intersection and layer enumeration
//! - [`contour`] - Chaining cross-section segments into closed polygons
//! - [`infill`] - Raster patterns clipped to the layer contours
//! - [`support`] - Scaffolding lines under the model footprint
//!
//! Layers are sliced independently (and in parallel); emission order and
//! extruder accounting downstream stay strictly bottom-up.

pub mod contour;
pub mod infill;
pub mod layers;
pub mod mesh;
pub mod support;

pub use contour::chain_contours;
pub use infill::{infill_for_layer, layer_type, pattern_for_layer, LayerType};
pub use layers::{layer_heights, slice_at, slice_mesh, LayerPlan};
pub use mesh::{center_on_bed, mesh_bounds};
pub use support::support_for_layer;

/// Error types for the slicing pipeline
#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    #[error("Open contour: {0}")]
    OpenContour(String),
}

pub type SliceResult<T> = std::result::Result<T, SliceError>;
