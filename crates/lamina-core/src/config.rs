//! Process parameters and fixed printer constants

use serde::{Deserialize, Serialize};

/// Nozzle bore diameter (mm)
pub const NOZZLE_DIAMETER: f64 = 0.4;

/// Filament stock diameter (mm)
pub const FILAMENT_DIAMETER: f64 = 1.75;

/// Default layer thickness (mm)
pub const DEFAULT_THICKNESS: f64 = 0.2;

/// Print bed extent along x (mm)
pub const BED_SIZE_X: f64 = 150.0;

/// Print bed extent along y (mm)
pub const BED_SIZE_Y: f64 = 150.0;

/// Total thickness of the solid top and bottom shells (mm)
pub const DEFAULT_BOTTOM_TOP_THICKNESS: f64 = 0.8;

/// Spacing between adjacent raster infill lines (mm)
pub const LINE_THICKNESS: f64 = 0.6;

/// Default number of perimeter wall loops
pub const DEFAULT_PERIMETERS: u32 = 2;

/// Default infill density (percent)
pub const DEFAULT_INFILL: u32 = 20;

/// User-facing process parameters for one print
///
/// Range validation happens at the CLI boundary; a constructed value is
/// assumed to hold `perimeter_layers > 0`, `infill_percent <= 100` and
/// `layer_thickness > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceOptions {
    /// Number of wall loops traced per contour
    pub perimeter_layers: u32,

    /// Interior fill density in percent, 0..=100
    pub infill_percent: u32,

    /// Vertical spacing between successive slicing planes (mm)
    pub layer_thickness: f64,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            perimeter_layers: DEFAULT_PERIMETERS,
            infill_percent: DEFAULT_INFILL,
            layer_thickness: DEFAULT_THICKNESS,
        }
    }
}
