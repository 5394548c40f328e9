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

//! Delaunay triangulation of a set of points in the plane.
//!
//! The pipeline is: validate and sort the input, build the subdivision
//! by divide and conquer, then read the mesh back out as index triples
//! with a consistency sweep. Results are deterministic for a given
//! input, including across the sequential and parallel paths.

mod builder;
mod order;
mod result;

pub use result::Triangulation;

use crate::error::{Result, TriangulateError};
use crate::geometry::Point2;

/// Triangulates `points` sequentially.
///
/// Points are identified by their index in the slice; the returned
/// triangles and hull use those indices. Fewer than three points yield
/// no triangles and a hull listing the points in lexicographic order.
///
/// # Errors
///
/// * [`TriangulateError::InsufficientPoints`] for an empty slice.
/// * [`TriangulateError::NonFiniteCoordinate`] if any coordinate is NaN
///   or infinite.
/// * [`TriangulateError::DuplicatePoint`] if two points coincide.
/// * [`TriangulateError::CollinearDegenerate`] if the input admits no
///   triangle at all.
pub fn triangulate(points: &[Point2]) -> Result<Triangulation> {
    run(points, false)
}

/// Triangulates `points` on the rayon thread pool.
///
/// Produces exactly the value [`triangulate`] produces; only the
/// execution of independent halves differs.
pub fn triangulate_par(points: &[Point2]) -> Result<Triangulation> {
    run(points, true)
}

fn run(points: &[Point2], parallel: bool) -> Result<Triangulation> {
    if points.is_empty() {
        return Err(TriangulateError::InsufficientPoints);
    }
    let sites = order::sort_sites(points)?;
    if sites.len() < 3 {
        let hull = sites.iter().map(|s| s.id).collect();
        return Ok(Triangulation {
            triangles: Vec::new(),
            hull,
        });
    }
    let (mesh, le, _re) = builder::build(&sites, parallel)?;
    result::extract(&mesh, &sites, le)
}

#[cfg(test)]
mod tests {
    use super::triangulate;
    use crate::error::TriangulateError;
    use crate::geometry::Point2;

    #[test]
    fn empty_input_is_refused() {
        assert!(matches!(
            triangulate(&[]),
            Err(TriangulateError::InsufficientPoints)
        ));
    }

    #[test]
    fn one_and_two_points_are_trivially_hulled() {
        let one = triangulate(&[Point2::new(4.0, 2.0)]).unwrap();
        assert!(one.is_empty());
        assert_eq!(one.hull, vec![0]);

        let two = triangulate(&[Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)]).unwrap();
        assert!(two.triangles.is_empty());
        // hull follows lexicographic order, not input order
        assert_eq!(two.hull, vec![1, 0]);
    }
}
