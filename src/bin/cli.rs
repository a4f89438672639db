// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyloop CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyloop::cli::{parse_points, Reporter};
use polyloop::geometry::{analyze_with, compute_centroid_with, signed_area, Polygon, Ring};
use polyloop::Tolerances;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyloop")]
#[command(about = "Polyloop - planar face area, centroid and normal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure a face with optional holes
    Analyze {
        /// Outer ring as "x,y[,z];x,y[,z];..."
        #[arg(short, long, allow_hyphen_values = true)]
        outer: String,

        /// Hole ring, same format (repeatable)
        #[arg(long = "hole", allow_hyphen_values = true)]
        holes: Vec<String>,

        /// Layer name attached to the face
        #[arg(short, long, default_value = "")]
        layer: String,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Shoelace centroid of a single ring on x/y
    Centroid {
        /// Ring as "x,y[,z];x,y[,z];..."
        #[arg(allow_hyphen_values = true)]
        points: String,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "polyloop=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let tolerances = Tolerances::load()?;

    match cli.command {
        Commands::Analyze {
            outer,
            holes,
            layer,
            json,
        } => analyze_command(&outer, &holes, &layer, json, &tolerances),
        Commands::Centroid { points } => centroid_command(&points, &tolerances),
        Commands::Version => {
            println!("Polyloop v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_ring(text: &str, what: &str) -> Result<Ring> {
    let points = parse_points(text).with_context(|| format!("Failed to read {}", what))?;
    Ring::new(points).with_context(|| format!("Rejected {}", what))
}

fn analyze_command(
    outer: &str,
    holes: &[String],
    layer: &str,
    json: bool,
    tolerances: &Tolerances,
) -> Result<()> {
    let outer = parse_ring(outer, "outer ring")?;
    let inner = holes
        .iter()
        .enumerate()
        .map(|(i, hole)| parse_ring(hole, &format!("hole {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    let polygon = Polygon::with_tolerances(outer, inner, tolerances)?.with_layer(layer);
    let stats = analyze_with(&polygon, tolerances)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        Reporter::report_face(&stats, &polygon.check_winding());
    }
    Ok(())
}

fn centroid_command(points: &str, tolerances: &Tolerances) -> Result<()> {
    let ring = parse_ring(points, "ring")?;
    let centroid = compute_centroid_with(&ring, tolerances)?;
    Reporter::report_centroid(&centroid, signed_area(&ring));
    Ok(())
}
