//! Plane/facet intersection and layer enumeration

use crate::contour::chain_contours;
use crate::mesh::mesh_bounds;
use lamina_core::{round_coord, Contour, Facet, Line, Point};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One layer of the print plan
///
/// Constructed by [`slice_mesh`], read by the G-code emitter, discarded
/// after the layer is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPlan {
    /// Plane height of this layer (mm)
    pub z: f64,

    /// Closed cross-section polygons at this height
    pub contours: Vec<Contour>,

    /// 1-based layer index counted from the bottom of the print
    pub from_bottom: usize,

    /// 1-based layer index counted from the top of the print
    pub from_top: usize,
}

/// Distinct intersection points of a facet with the plane at `z`.
///
/// Points are rounded to 5 decimals before de-duplication so endpoints
/// produced by different facets sharing a mesh edge compare exactly.
/// The result holds 0, 2 or 3 points; a single vertex touch de-duplicates
/// to one point and is discarded by [`facet_cross_section`].
pub fn facet_plane_points(facet: &Facet, z: f64) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(3);
    for edge in facet.edges() {
        if let Some(p) = edge.point_at_z(z) {
            let p = p.round5();
            if !points.contains(&p) {
                points.push(p);
            }
        }
    }
    points
}

/// The cross-section segment of one facet at plane `z`, if it has one.
///
/// A plane meets a triangle's boundary in at most two geometric points,
/// so in exact arithmetic the de-duplicated set has 0 or 2 entries: a
/// vertex on the plane is produced identically by both incident edges
/// and collapses, and an in-plane edge is axis-parallel and yields no
/// point itself while its endpoints are recovered through the other two
/// edges. A third point can therefore only survive when rounding splits
/// a shared-vertex coincidence into two nearby values. The survivors
/// then straddle the true cross-section, so the widest pair spans it
/// and the interior point is the one to drop.
pub fn facet_cross_section(facet: &Facet, z: f64) -> Option<Line> {
    let points = facet_plane_points(facet, z);
    if points.len() < 2 {
        return None;
    }
    Some(widest_span(&points))
}

/// Segment between the two most distant points of a small set.
///
/// Callers guarantee at least two points.
fn widest_span(points: &[Point]) -> Line {
    let mut best = (points[0], points[1]);
    let mut best_dist = points[0].distance_to(&points[1]);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance_to(b);
            if d > best_dist {
                best = (*a, *b);
                best_dist = d;
            }
        }
    }
    Line::between(best.0, best.1)
}

/// Unordered cross-section segments of the whole mesh at plane `z`.
pub fn slice_at(facets: &[Facet], z: f64) -> Vec<Line> {
    facets
        .iter()
        .filter_map(|f| facet_cross_section(f, z))
        .collect()
}

/// Plane heights from the top of the mesh down, strictly above the bed.
///
/// Heights are rounded to 5 decimals so accumulated floating-point error
/// cannot produce a spurious layer at z = 0.
pub fn layer_heights(zmax: f64, thickness: f64) -> Vec<f64> {
    if thickness <= 0.0 {
        return Vec::new();
    }
    let mut heights = Vec::new();
    let mut step = 0u32;
    loop {
        let z = round_coord(zmax - f64::from(step) * thickness);
        if z <= 0.0 {
            break;
        }
        heights.push(z);
        step += 1;
    }
    heights
}

/// Slice a normalized mesh into bottom-up layer plans.
///
/// Planes are sliced independently in parallel; ordering and the 1-based
/// bottom/top indices are assigned afterwards over the kept layers. Empty
/// planes are discarded silently; a plane whose segments do not chain into
/// closed contours is skipped with a warning instead of aborting the print.
pub fn slice_mesh(facets: &[Facet], thickness: f64) -> Vec<LayerPlan> {
    let Some(bounds) = mesh_bounds(facets) else {
        return Vec::new();
    };

    let mut planes = layer_heights(bounds.max.z, thickness);
    planes.reverse();

    let sliced: Vec<(f64, Vec<Line>)> = planes
        .par_iter()
        .map(|&z| (z, slice_at(facets, z)))
        .collect();

    let mut kept: Vec<(f64, Vec<Contour>)> = Vec::new();
    for (z, segments) in sliced {
        if segments.is_empty() {
            debug!("Discarding empty layer at z={}", z);
            continue;
        }
        match chain_contours(segments) {
            Ok(contours) => kept.push((z, contours)),
            Err(e) => warn!("Skipping degenerate layer at z={}: {}", z, e),
        }
    }

    info!("Sliced mesh into {} layers", kept.len());

    let total = kept.len();
    kept.into_iter()
        .enumerate()
        .map(|(i, (z, contours))| LayerPlan {
            z,
            contours,
            from_bottom: i + 1,
            from_top: total - i,
        })
        .collect()
}
