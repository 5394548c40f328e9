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

//! Input validation and the lexicographic ordering every divide step
//! relies on.

use crate::error::{Result, TriangulateError};
use crate::geometry::Point2;

/// An input point paired with its position in the caller's slice.
///
/// The mesh works in sorted order throughout; `id` carries the original
/// index back out when results are reported.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Site {
    pub(crate) point: Point2,
    pub(crate) id: usize,
}

/// Validates the input and returns it sorted by x, then y.
///
/// Rejects non-finite coordinates before any predicate can see them and
/// coincident points before the mesh can be asked to triangulate a
/// degenerate pair. The order collapses `-0.0` and `0.0`, so coincident
/// points always land adjacent and the windowed scan cannot miss them.
pub(crate) fn sort_sites(points: &[Point2]) -> Result<Vec<Site>> {
    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            return Err(TriangulateError::NonFiniteCoordinate { index });
        }
    }

    let mut sites: Vec<Site> = points
        .iter()
        .enumerate()
        .map(|(id, &point)| Site { point, id })
        .collect();
    sites.sort_by(|a, b| a.point.lexicographic_cmp(&b.point));

    for pair in sites.windows(2) {
        if pair[0].point == pair[1].point {
            return Err(TriangulateError::DuplicatePoint {
                first: pair[0].id.min(pair[1].id),
                second: pair[0].id.max(pair[1].id),
            });
        }
    }
    Ok(sites)
}
