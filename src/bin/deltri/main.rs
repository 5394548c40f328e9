// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The deltri developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! deltri CLI - triangulates generated point sets and reports timings.
//!
//! Run `deltri --help` for the available options.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use deltri::generate::{Distribution, generate};
use deltri::{World, triangulate, triangulate_par};

#[derive(Parser)]
#[command(name = "deltri")]
#[command(version, about = "Delaunay triangulation of generated point sets")]
struct Args {
    /// How many points to generate
    number_of_points: usize,

    /// Spatial distribution of the generated points
    #[arg(long, value_enum, default_value = "random")]
    points_distribution: DistributionArg,

    /// Upper x bound of the world; the lower bound is 0
    #[arg(short = 'x', long = "max-x-val", default_value_t = World::DEFAULT_MAX)]
    max_x: f64,

    /// Upper y bound of the world; the lower bound is 0
    #[arg(short = 'y', long = "max-y-val", default_value_t = World::DEFAULT_MAX)]
    max_y: f64,

    /// Seed for the random distribution
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Triangulate on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DistributionArg {
    /// Uniformly random points
    Random,
    /// Evenly spaced grid
    Lattice,
}

impl From<DistributionArg> for Distribution {
    fn from(value: DistributionArg) -> Self {
        match value {
            DistributionArg::Random => Distribution::Random,
            DistributionArg::Lattice => Distribution::Lattice,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let world = World::new(0.0, args.max_x, 0.0, args.max_y)
        .context("world bounds must be finite and greater than zero")?;

    let points = generate(
        args.number_of_points,
        args.points_distribution.into(),
        &world,
        args.seed,
    );
    tracing::info!(
        n = points.len(),
        distribution = ?args.points_distribution,
        seed = args.seed,
        "generated points"
    );

    let mode = if args.parallel { "parallel" } else { "sequential" };
    let start = Instant::now();
    let result = if args.parallel {
        triangulate_par(&points)
    } else {
        triangulate(&points)
    }?;
    let elapsed = start.elapsed();

    tracing::info!(
        triangles = result.len(),
        hull = result.hull.len(),
        mode,
        "triangulated"
    );
    println!(
        "{} points in {:.3} ms",
        points.len(),
        elapsed.as_secs_f64() * 1e3
    );
    println!(
        "{} triangles, hull of {} vertices",
        result.len(),
        result.hull.len()
    );

    Ok(())
}
