//! Serpentine CLI: lays out a vertical serpentine coil and draws it into a DXF drawing.
//!
//! Usage:
//! ```text
//! serpentine                                   # 1 m × 5 m coil, 0.2 m pitch and tube
//! serpentine --height 3 --pitch 0.25 -o coil.dxf
//! serpentine --attach -o existing.dxf          # add to an existing drawing
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serpentine::operations::creation::{GenerateBoundary, GenerateCoil};
use serpentine::operations::query::Length;
use serpentine::surface::{emit_layout, DxfSurface};
use serpentine::CoilParams;
use tracing::{error, info};

const RULE: &str = "============================================================";

/// Vertical serpentine coil generator
#[derive(Parser, Debug)]
#[command(name = "serpentine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Width of each straight run, in meters
    #[arg(long, default_value_t = CoilParams::default().width)]
    width: f64,

    /// Height of the bounding rectangle, in meters
    #[arg(long, default_value_t = CoilParams::default().height)]
    height: f64,

    /// Vertical spacing between runs, in meters
    #[arg(long, default_value_t = CoilParams::default().pitch)]
    pitch: f64,

    /// Tube diameter, in meters; turns use half of it as radius
    #[arg(long, default_value_t = CoilParams::default().tube_width)]
    tube_width: f64,

    /// Drawing file to write
    #[arg(short, long, value_name = "OUTPUT", default_value = "serpentine.dxf")]
    output: PathBuf,

    /// Add to the drawing at OUTPUT if it exists instead of starting a new one
    #[arg(long)]
    attach: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    // Default: WARN for everything, INFO (or DEBUG) for serpentine.
    // Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive(
            format!("serpentine={level}")
                .parse()
                .unwrap_or_default(),
        );
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let params = CoilParams::new(cli.width, cli.height, cli.pitch, cli.tube_width);

    println!("{RULE}");
    println!("  SERPENTINE COIL GENERATOR");
    println!("{RULE}");
    println!("Parameters:");
    println!("  Width: {}m", params.width);
    println!("  Height: {}m", params.height);
    println!("  Pitch: {}m", params.pitch);
    println!("  Tube Width: {}m", params.tube_width);
    println!();

    params.validate().context("invalid coil parameters")?;

    let path = GenerateCoil::from_params(&params).execute()?;
    let boundary = GenerateBoundary::new(params.width, params.height).execute();
    info!(
        loops = path.loop_count(),
        arc_radius = path.arc_radius(),
        "layout ready"
    );

    let mut surface = if cli.attach {
        DxfSurface::open(&cli.output)
    } else {
        DxfSurface::create(&cli.output)
    }
    .with_context(|| format!("failed to open drawing {}", cli.output.display()))?;

    let report = emit_layout(&mut surface, &path, &boundary).context("failed to draw coil")?;
    surface
        .save()
        .with_context(|| format!("failed to save drawing {}", cli.output.display()))?;

    let tube_length = Length::new(path.primitives()).execute();

    println!("{RULE}");
    println!("  SUCCESS! Drawing completed!");
    println!("{RULE}");
    println!("  Loops drawn: {}", report.loops);
    println!("  Entities: {} lines, {} arcs", report.lines, report.arcs);
    println!("  Tube length: {tube_length:.3}m");
    println!("  Size: {}m x {}m", params.width, params.height);
    println!("  Output: {}", surface.path().display());
    println!("{RULE}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("{RULE}");
            eprintln!("  ERROR");
            eprintln!("{RULE}");
            eprintln!("  {err:#}");
            ExitCode::FAILURE
        }
    }
}
