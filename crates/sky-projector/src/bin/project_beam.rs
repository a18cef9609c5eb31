//! CLI tool to project a synthetic Gaussian beam onto a HEALPix map.
//!
//! Useful for eyeballing footprint coverage at different resolutions
//! without wiring the library into a larger pipeline. Prints summary
//! statistics of the resulting map as JSON.
//!
//! Usage:
//!   cargo run --release --bin project-beam -- --nside 64 --extent 20

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sky_projector::{image_to_healpix, ImageGrid};

#[derive(Parser, Debug)]
#[command(name = "project-beam")]
#[command(about = "Project a synthetic Gaussian beam onto a HEALPix map")]
struct Args {
    /// HEALPix nside (power of two)
    #[arg(long, default_value_t = 64)]
    nside: usize,

    /// Beam image size in pixels (square)
    #[arg(long, default_value_t = 128)]
    size: usize,

    /// Center colatitude in degrees
    #[arg(long, default_value_t = 90.0)]
    colat: f64,

    /// Center azimuth in degrees
    #[arg(long, default_value_t = 0.0)]
    az: f64,

    /// Full angular extent in degrees (both axes)
    #[arg(long, default_value_t = 20.0)]
    extent: f64,

    /// Beam full width at half maximum, as a fraction of the extent
    #[arg(long, default_value_t = 0.25)]
    fwhm_frac: f64,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let img = ImageGrid::new(
        gaussian_beam(args.size, args.fwhm_frac),
        args.size,
        args.size,
    )?;
    info!(size = args.size, nside = args.nside, "projecting beam");

    let map = image_to_healpix(
        &img,
        args.nside,
        args.colat,
        args.az,
        args.extent,
        args.extent,
        None,
    )?;

    let cells_in_footprint = map.iter().filter(|v| **v != 0.0).count();
    let peak = map.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let total: f64 = map.iter().sum();

    let stats = serde_json::json!({
        "nside": args.nside,
        "npix": map.len(),
        "cells_in_footprint": cells_in_footprint,
        "coverage": cells_in_footprint as f64 / map.len() as f64,
        "peak": peak,
        "total": total,
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Circular Gaussian beam on a size x size grid, peak 1.0 at the center.
fn gaussian_beam(size: usize, fwhm_frac: f64) -> Vec<f64> {
    let center = (size as f64 - 1.0) / 2.0;
    let fwhm = fwhm_frac * size as f64;
    let sigma = fwhm / (8.0 * 2f64.ln()).sqrt();
    let mut data = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let dr = row as f64 - center;
            let dc = col as f64 - center;
            data.push((-(dr * dr + dc * dc) / (2.0 * sigma * sigma)).exp());
        }
    }
    data
}
