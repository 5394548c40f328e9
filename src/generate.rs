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

//! Seedable point-set generation inside a [`World`].
//!
//! Exists for the command-line tool and the benchmarks; the
//! triangulation itself takes whatever points the caller supplies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Point2, World};

/// How generated points are spread over the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Independent uniform samples.
    Random,
    /// A near-square grid, filled column by column.
    Lattice,
}

/// `n` uniform points in `world`, reproducible from `seed`.
pub fn random_points(n: usize, world: &World, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point2::new(
                rng.random_range(world.min_x..=world.max_x),
                rng.random_range(world.min_y..=world.max_y),
            )
        })
        .collect()
}

/// The first `n` nodes of a grid spanning `world`.
///
/// The grid side is the smallest that fits `n` nodes, so the final
/// column may be cut short. Output is deterministic and free of
/// duplicates; no seed is involved.
pub fn lattice_points(n: usize, world: &World) -> Vec<Point2> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point2::new(world.min_x, world.min_y)];
    }

    let side = (n as f64).sqrt().ceil() as usize;
    let step_x = world.width() / (side - 1) as f64;
    let step_y = world.height() / (side - 1) as f64;

    let mut points = Vec::with_capacity(n);
    'grid: for i in 0..side {
        for j in 0..side {
            if points.len() == n {
                break 'grid;
            }
            points.push(Point2::new(
                world.min_x + i as f64 * step_x,
                world.min_y + j as f64 * step_y,
            ));
        }
    }
    points
}

/// Dispatches on `distribution`; the lattice ignores `seed`.
pub fn generate(n: usize, distribution: Distribution, world: &World, seed: u64) -> Vec<Point2> {
    match distribution {
        Distribution::Random => random_points(n, world, seed),
        Distribution::Lattice => lattice_points(n, world),
    }
}
