//! Bed placement and mesh extents

use lamina_core::{BoundingBox, Facet, Point, BED_SIZE_X, BED_SIZE_Y};
use tracing::debug;

/// Bounding box over every vertex of the mesh. `None` for an empty mesh.
pub fn mesh_bounds(facets: &[Facet]) -> Option<BoundingBox> {
    BoundingBox::from_points(facets.iter().flat_map(|f| f.vertices.iter().copied()))
}

/// Translate the mesh so its footprint is centered on the bed and its
/// lowest vertex sits at z = 0.
pub fn center_on_bed(facets: Vec<Facet>) -> Vec<Facet> {
    let Some(bounds) = mesh_bounds(&facets) else {
        return facets;
    };
    let center = bounds.center();
    let offset = Point::new(
        BED_SIZE_X / 2.0 - center.x,
        BED_SIZE_Y / 2.0 - center.y,
        -bounds.min.z,
    );
    debug!(
        "Centering mesh: offset ({}, {}, {})",
        offset.x, offset.y, offset.z
    );
    facets.into_iter().map(|f| f.translate(offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_on_bed_places_footprint_center_and_floor() {
        let facets = vec![Facet::new(
            Point::new(10.0, 10.0, 5.0),
            Point::new(12.0, 10.0, 5.0),
            Point::new(10.0, 14.0, 9.0),
        )];
        let centered = center_on_bed(facets);
        let bounds = mesh_bounds(&centered).unwrap();

        assert!((bounds.center().x - 75.0).abs() < 1e-10);
        assert!((bounds.center().y - 75.0).abs() < 1e-10);
        assert!(bounds.min.z.abs() < 1e-10);
    }

    #[test]
    fn center_on_bed_empty_mesh_is_noop() {
        assert!(center_on_bed(Vec::new()).is_empty());
    }
}
