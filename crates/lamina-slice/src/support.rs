//! Support scaffolding
//!
//! Support material is rastered over the inset bounding box of the
//! layer's contours at a fixed sparse density, then pulled back from the
//! model walls so the scaffold snaps off cleanly. Overhang detection is
//! deliberately absent; every layer gets the same treatment.

use crate::infill::{clip_to_contours, sparse_lines};
use lamina_core::{BoundingBox, Contour, Line, Point, DEFAULT_THICKNESS};

/// Fixed density of the support raster (percent)
const SUPPORT_INFILL: u32 = 20;

/// Margin between the contour bounding box and the support area (mm)
const SUPPORT_INSET: f64 = 1.0;

/// Millimetres trimmed from each end of every support span
const SUPPORT_TRIM: f64 = 2.0 * DEFAULT_THICKNESS;

/// Support segments for one layer.
///
/// Clips the sparse raster against the inset bounding-box rectangle
/// together with the layer's own contours, so the enter/leave pairing
/// also reacts to the model outline, then trims every span at both ends.
pub fn support_for_layer(contours: &[Contour], z: f64) -> Vec<Line> {
    let Some(bounds) =
        BoundingBox::from_points(contours.iter().flat_map(|c| c.points.iter().copied()))
    else {
        return Vec::new();
    };

    let min_x = bounds.min.x + SUPPORT_INSET;
    let min_y = bounds.min.y + SUPPORT_INSET;
    let max_x = bounds.max.x - SUPPORT_INSET;
    let max_y = bounds.max.y - SUPPORT_INSET;
    if min_x >= max_x || min_y >= max_y {
        return Vec::new();
    }

    let rectangle = Contour::new(vec![
        Point::new(min_x, min_y, z),
        Point::new(max_x, min_y, z),
        Point::new(max_x, max_y, z),
        Point::new(min_x, max_y, z),
    ]);

    let mut clip_targets = Vec::with_capacity(contours.len() + 1);
    clip_targets.push(rectangle);
    clip_targets.extend_from_slice(contours);

    sparse_lines(SUPPORT_INFILL, z)
        .iter()
        .flat_map(|line| clip_to_contours(line, &clip_targets))
        .filter(|span| span.length() > 2.0 * SUPPORT_TRIM)
        .map(|span| span.shorten_by(SUPPORT_TRIM))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64, z: f64) -> Contour {
        Contour::new(vec![
            Point::new(0.0, 0.0, z),
            Point::new(side, 0.0, z),
            Point::new(side, side, z),
            Point::new(0.0, side, z),
        ])
    }

    #[test]
    fn support_stays_clear_of_the_box_walls() {
        let contour = square(20.0, 0.2);
        let spans = support_for_layer(&[contour], 0.2);
        assert!(!spans.is_empty());

        // Inset box is [1, 19]^2 and every 45-degree span is pulled back
        // 0.4 mm from its walls, leaving ~0.28 mm per coordinate.
        for span in &spans {
            for p in [span.origin, span.end()] {
                assert!(p.x > 1.2 && p.x < 18.8, "x = {}", p.x);
                assert!(p.y > 1.2 && p.y < 18.8, "y = {}", p.y);
            }
        }
    }

    #[test]
    fn degenerate_footprint_yields_no_support() {
        // Bounding box smaller than twice the inset collapses.
        let contour = square(1.5, 0.2);
        assert!(support_for_layer(&[contour], 0.2).is_empty());
    }

    #[test]
    fn no_contours_yields_no_support() {
        assert!(support_for_layer(&[], 0.2).is_empty());
    }
}
