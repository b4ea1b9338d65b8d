//! Filament extrusion accounting

use lamina_core::{Point, FILAMENT_DIAMETER, NOZZLE_DIAMETER};
use std::f64::consts::PI;

/// Filament length fed for one move, in millimetres.
///
/// Deposited volume is approximated by a `nozzle x thickness` ribbon along
/// the move; dividing by the filament cross-section gives the feed:
/// `e = nozzle * t * (2 / filament) * |p2 - p1| / pi`. Distance is 3D
/// Euclidean even though moves within a layer are planar.
pub fn extrusion_amount(thickness: f64, from: &Point, to: &Point) -> f64 {
    NOZZLE_DIAMETER * thickness * (2.0 / FILAMENT_DIAMETER) * from.distance_to(to) / PI
}

/// Cumulative extruder position for a whole print
///
/// The value only ever grows; every extruding move adds exactly its own
/// computed amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtruderState {
    cumulative: f64,
}

impl ExtruderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one move's extrusion and return the new cumulative value.
    pub fn advance(&mut self, amount: f64) -> f64 {
        self.cumulative += amount;
        self.cumulative
    }

    pub fn current(&self) -> f64 {
        self.cumulative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrusion_scales_with_distance_and_thickness() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(2.0, 0.0, 0.0);

        let one = extrusion_amount(0.2, &a, &b);
        let two = extrusion_amount(0.2, &a, &c);
        let thick = extrusion_amount(0.4, &a, &b);

        assert!((two - 2.0 * one).abs() < 1e-12);
        assert!((thick - 2.0 * one).abs() < 1e-12);
    }

    #[test]
    fn extrusion_formula_constants() {
        // 0.4 * 0.2 * (2 / 1.75) / pi for a 1 mm move
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(0.0, 1.0, 0.0);
        let e = extrusion_amount(0.2, &a, &b);
        assert!((e - 0.029104).abs() < 1e-5);
    }

    #[test]
    fn extrusion_distance_is_3d() {
        let a = Point::new(0.0, 0.0, 0.0);
        let planar = extrusion_amount(0.2, &a, &Point::new(3.0, 4.0, 0.0));
        let spatial = extrusion_amount(0.2, &a, &Point::new(3.0, 0.0, 4.0));
        assert!((planar - spatial).abs() < 1e-12);
    }

    #[test]
    fn extruder_state_accumulates() {
        let mut state = ExtruderState::new();
        assert_eq!(state.current(), 0.0);
        assert_eq!(state.advance(0.5), 0.5);
        assert_eq!(state.advance(0.25), 0.75);
        assert_eq!(state.current(), 0.75);
    }
}
