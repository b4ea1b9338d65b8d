//! # lamina-gcode
//!
//! Turns layer plans into machine-control text:
//! - [`extrusion`] - per-move filament accounting
//! - [`emit`] - ordered G-code lines for a whole print
//!
//! Emission is strictly sequential bottom-to-top because the extruder
//! value accumulates across the entire print.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub mod emit;
pub mod extrusion;

pub use emit::{emit_gcode, Move};
pub use extrusion::{extrusion_amount, ExtruderState};

/// Errors that can occur while writing G-code
#[derive(Debug, Error)]
pub enum GcodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GcodeResult<T> = std::result::Result<T, GcodeError>;

/// Write emitted lines to a file, one G-code line per text line.
pub fn write_gcode<P: AsRef<Path>>(lines: &[String], path: P) -> GcodeResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
