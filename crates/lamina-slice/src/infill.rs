//! Raster infill patterns and contour clipping
//!
//! Three raster families are defined over the full bed: an up-diagonal
//! family, a down-diagonal family, and a percentage-sparse cover drawn
//! from both. Solid top/bottom layers alternate the two full families;
//! interior layers get the sparse cover.

use lamina_core::{
    Contour, Line, Point, BED_SIZE_X, BED_SIZE_Y, DEFAULT_BOTTOM_TOP_THICKNESS, LINE_THICKNESS,
};
use serde::{Deserialize, Serialize};

/// Which infill pattern a layer receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    /// Solid boundary layer, odd bottom index: down-diagonal raster
    BaseOdd,
    /// Solid boundary layer, even bottom index: up-diagonal raster
    BaseEven,
    /// Interior layer: sparse cover at the configured density
    Middle,
}

/// Classify a layer by its 1-based bottom and top indices.
///
/// Layers within the solid shell band at either extreme of the print pick
/// an alternating full raster; everything in between is sparse.
pub fn layer_type(from_bottom: usize, from_top: usize, thickness: f64) -> LayerType {
    let shell_layers = (DEFAULT_BOTTOM_TOP_THICKNESS / thickness).round() as usize;
    if from_bottom <= shell_layers || from_top <= shell_layers {
        if from_bottom % 2 == 0 {
            LayerType::BaseEven
        } else {
            LayerType::BaseOdd
        }
    } else {
        LayerType::Middle
    }
}

/// Diagonal span long enough to cross the whole bed.
const DIAGONAL: f64 = BED_SIZE_X + BED_SIZE_Y;

fn raster_count() -> usize {
    (DIAGONAL / LINE_THICKNESS) as usize
}

/// Up-diagonal raster family over the full bed at height `z`.
pub fn up_diagonal_lines(z: f64) -> Vec<Line> {
    (0..=raster_count())
        .map(|k| {
            let v = -BED_SIZE_X + k as f64 * LINE_THICKNESS;
            Line::new(Point::new(0.0, v, z), Point::new(DIAGONAL, DIAGONAL, 0.0))
        })
        .collect()
}

/// Down-diagonal raster family over the full bed at height `z`.
pub fn down_diagonal_lines(z: f64) -> Vec<Line> {
    (0..=raster_count())
        .map(|k| {
            let v = k as f64 * LINE_THICKNESS;
            Line::new(Point::new(0.0, v, z), Point::new(DIAGONAL, -DIAGONAL, 0.0))
        })
        .collect()
}

/// Sparse cover drawn from both diagonal families.
///
/// Keeps every n-th line with n = max(1, 100 / percent); zero percent
/// yields no lines at all rather than dividing by zero.
pub fn sparse_lines(percent: u32, z: f64) -> Vec<Line> {
    if percent == 0 {
        return Vec::new();
    }
    let n = (100 / percent).max(1) as usize;
    up_diagonal_lines(z)
        .into_iter()
        .step_by(n)
        .chain(down_diagonal_lines(z).into_iter().step_by(n))
        .collect()
}

/// The raster family a layer of the given type receives.
pub fn pattern_for_layer(layer_type: LayerType, infill_percent: u32, z: f64) -> Vec<Line> {
    match layer_type {
        LayerType::BaseEven => up_diagonal_lines(z),
        LayerType::BaseOdd => down_diagonal_lines(z),
        LayerType::Middle => sparse_lines(infill_percent, z),
    }
}

/// Clip one raster line to the interior of a set of contours.
///
/// Every transversal crossing of a contour edge enters or leaves the
/// interior, so after sorting the crossings along the line, the
/// even-indexed point pairs span the covered interior. Raster lines
/// coincident with a contour edge are parallel to it and contribute no
/// crossing.
pub fn clip_to_contours(raster: &Line, contours: &[Contour]) -> Vec<Line> {
    let mut crossings: Vec<Point> = contours
        .iter()
        .flat_map(|c| c.edges())
        .filter_map(|edge| raster.intersect_2d(&edge))
        .map(|p| p.round5())
        .collect();

    crossings.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    crossings.dedup();

    crossings
        .chunks_exact(2)
        .map(|pair| Line::between(pair[0], pair[1]))
        .collect()
}

/// Infill segments covering the contour interiors of one layer.
pub fn infill_for_layer(
    contours: &[Contour],
    layer_type: LayerType,
    infill_percent: u32,
    z: f64,
) -> Vec<Line> {
    pattern_for_layer(layer_type, infill_percent, z)
        .iter()
        .flat_map(|line| clip_to_contours(line, contours))
        .collect()
}
