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

//! Sign predicates with a floating-point filter and exact fallback.
//!
//! Both predicates evaluate their determinant in f64 first and compare
//! the result against a forward rounding-error bound. Only when the
//! magnitude falls under the bound does the exact rational path run, so
//! the signs are always exact while the common case stays cheap.

use crate::geometry::Point2;
use crate::kernel::exact;

// Unit roundoff, 2^-53.
const EPS: f64 = f64::EPSILON / 2.0;

// Shewchuk's a-stage error bounds for the two determinants.
const ORIENT_ERR_BOUND: f64 = (3.0 + 16.0 * EPS) * EPS;
const IN_CIRCLE_ERR_BOUND: f64 = (10.0 + 96.0 * EPS) * EPS;

/// Side of a query point relative to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Returns the side of `c` relative to the directed line `a → b`:
/// - `Left` if the triple turns counter-clockwise
/// - `Right` if it turns clockwise
/// - `Collinear` if the three points lie on one line, exactly
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let lhs = (b.x - a.x) * (c.y - a.y);
    let rhs = (b.y - a.y) * (c.x - a.x);
    let det = lhs - rhs;
    let detsum = lhs.abs() + rhs.abs();

    let sign = if det.abs() > ORIENT_ERR_BOUND * detsum {
        if det > 0.0 { 1 } else { -1 }
    } else {
        exact::orient2d_sign(a, b, c)
    };
    match sign {
        1 => Orientation::Left,
        -1 => Orientation::Right,
        _ => Orientation::Collinear,
    }
}

/// True iff `d` lies strictly inside the circle through `a`, `b`, `c`,
/// which must be in counter-clockwise order.
///
/// A point exactly on the circle is *outside*; that exact-zero rule is
/// the deterministic tie-break for cocircular inputs such as grids and
/// regular polygons.
pub fn in_circle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let bxcy = bdx * cdy;
    let cxby = cdx * bdy;
    let cxay = cdx * ady;
    let axcy = adx * cdy;
    let axby = adx * bdy;
    let bxay = bdx * ady;

    let det = alift * (bxcy - cxby) + blift * (cxay - axcy) + clift * (axby - bxay);
    let permanent = (bxcy.abs() + cxby.abs()) * alift
        + (cxay.abs() + axcy.abs()) * blift
        + (axby.abs() + bxay.abs()) * clift;

    if det.abs() > IN_CIRCLE_ERR_BOUND * permanent {
        det > 0.0
    } else {
        exact::in_circle_sign(a, b, c, d) > 0
    }
}
