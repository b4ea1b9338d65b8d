//! Lamina command-line entry point
//!
//! Reads an ASCII STL mesh, slices it and writes the machine plan to
//! `sampleGcode.g` in the working directory.
//!
//! Option values outside their valid range are not rejected; the default
//! is kept and a warning logged.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lamina_core::SliceOptions;
use lamina_gcode::{emit_gcode, write_gcode};
use lamina_slice::{center_on_bed, slice_mesh};
use lamina_stl::StlImporter;

const OUTPUT_FILE: &str = "sampleGcode.g";

/// Slice an ASCII STL mesh into G-code.
#[derive(Parser, Debug)]
#[command(name = "lamina")]
#[command(about = "Slices an ASCII STL mesh into 3D printer G-code")]
struct Args {
    /// Number of perimeter wall loops (must be positive).
    #[arg(short, long, allow_negative_numbers = true)]
    perimeter: Option<i64>,

    /// Infill density in percent, 0-100.
    #[arg(short, long, allow_negative_numbers = true)]
    infill: Option<i64>,

    /// Layer thickness in millimetres (must be positive).
    #[arg(short, long, allow_negative_numbers = true)]
    thickness: Option<f64>,

    /// Path to the ASCII STL input file.
    input: PathBuf,
}

/// Fold the raw arguments into validated options, keeping the default for
/// anything out of range.
fn resolve_options(args: &Args) -> SliceOptions {
    let mut opts = SliceOptions::default();

    if let Some(p) = args.perimeter {
        if p > 0 {
            opts.perimeter_layers = p as u32;
        } else {
            warn!("Ignoring perimeter {} (must be positive), keeping {}", p, opts.perimeter_layers);
        }
    }

    if let Some(i) = args.infill {
        if (0..=100).contains(&i) {
            opts.infill_percent = i as u32;
        } else {
            warn!("Ignoring infill {} (must be 0-100), keeping {}", i, opts.infill_percent);
        }
    }

    if let Some(t) = args.thickness {
        if t > 0.0 {
            opts.layer_thickness = t;
        } else {
            warn!("Ignoring thickness {} (must be positive), keeping {}", t, opts.layer_thickness);
        }
    }

    opts
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let opts = resolve_options(&args);

    let importer = StlImporter::from_file(&args.input)
        .with_context(|| format!("reading mesh '{}'", args.input.display()))?;
    let facets = center_on_bed(importer.into_facets());

    let layers = slice_mesh(&facets, opts.layer_thickness);
    let lines = emit_gcode(&layers, &opts);

    write_gcode(&lines, OUTPUT_FILE)
        .with_context(|| format!("writing '{}'", OUTPUT_FILE))?;
    info!("Wrote {} lines for {} layers to {}", lines.len(), layers.len(), OUTPUT_FILE);

    Ok(())
}
