//! Contour reconstruction
//!
//! Chains an unordered bag of cross-section segments into closed polygons
//! by exact endpoint equality. Endpoints are rounded to 5 decimals by the
//! layer extractor, so equality needs no tolerance.

use crate::{SliceError, SliceResult};
use lamina_core::{Contour, Line, Point};

/// Chain a bag of 2-point segments into closed contours.
///
/// Each iteration removes one segment from the pool, so the loop always
/// terminates. A chain that runs out of continuations before returning to
/// its starting point signals a malformed mesh.
pub fn chain_contours(mut pool: Vec<Line>) -> SliceResult<Vec<Contour>> {
    let mut contours = Vec::new();

    while !pool.is_empty() {
        let seed = pool.remove(0);
        let mut points = vec![seed.origin];
        let mut tail = seed.end();

        while let Some(idx) = find_continuation(&pool, tail) {
            let segment = pool.swap_remove(idx);
            points.push(tail);
            tail = if segment.origin == tail {
                segment.end()
            } else {
                segment.origin
            };
        }

        if points.len() > 1 && points[0] == tail {
            contours.push(Contour::new(points));
        } else {
            return Err(SliceError::OpenContour(format!(
                "chain of {} points ends at ({}, {}, {}) without closing",
                points.len() + 1,
                tail.x,
                tail.y,
                tail.z,
            )));
        }
    }

    Ok(contours)
}

/// First segment in the pool touching `point` with either endpoint.
fn find_continuation(pool: &[Line], point: Point) -> Option<usize> {
    pool.iter()
        .position(|seg| seg.origin == point || seg.end() == point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Line {
        Line::between(Point::new(a.0, a.1, 0.0), Point::new(b.0, b.1, 0.0))
    }

    #[test]
    fn chains_a_square_from_shuffled_segments() {
        let pool = vec![
            seg((1.0, 1.0), (0.0, 1.0)),
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((0.0, 1.0), (0.0, 0.0)),
            seg((1.0, 0.0), (1.0, 1.0)),
        ];
        let contours = chain_contours(pool).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points.len(), 4);
    }

    #[test]
    fn chains_segments_regardless_of_direction() {
        // Second segment is flipped relative to traversal order.
        let pool = vec![
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((1.0, 1.0), (1.0, 0.0)),
            seg((1.0, 1.0), (0.0, 0.0)),
        ];
        let contours = chain_contours(pool).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points.len(), 3);
    }

    #[test]
    fn separates_disjoint_loops() {
        let pool = vec![
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((1.0, 0.0), (0.0, 1.0)),
            seg((0.0, 1.0), (0.0, 0.0)),
            seg((10.0, 10.0), (11.0, 10.0)),
            seg((11.0, 10.0), (10.0, 11.0)),
            seg((10.0, 11.0), (10.0, 10.0)),
        ];
        let contours = chain_contours(pool).unwrap();
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn open_chain_is_an_error() {
        let pool = vec![seg((0.0, 0.0), (1.0, 0.0)), seg((1.0, 0.0), (2.0, 0.0))];
        assert!(chain_contours(pool).is_err());
    }

    #[test]
    fn every_endpoint_appears_twice_across_contours() {
        let pool = vec![
            seg((0.0, 0.0), (2.0, 0.0)),
            seg((2.0, 0.0), (2.0, 2.0)),
            seg((2.0, 2.0), (0.0, 2.0)),
            seg((0.0, 2.0), (0.0, 0.0)),
        ];
        let endpoints: Vec<Point> = pool.iter().flat_map(|s| [s.origin, s.end()]).collect();
        let contours = chain_contours(pool).unwrap();

        // Closure: each input endpoint occurs exactly twice when the
        // closing edge is counted.
        for p in endpoints {
            let count: usize = contours
                .iter()
                .flat_map(|c| c.edges())
                .filter(|e| e.origin == p || e.end() == p)
                .count();
            assert_eq!(count, 2);
        }
    }
}
