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

//! Exact rational evaluation of the predicate determinants.
//!
//! Every finite f64 converts to a `rug::Rational` without loss, so the
//! signs computed here are exact. These routines only run when the f64
//! filter in [`crate::kernel::predicates`] cannot certify a sign.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;

// Coordinates are validated finite before any predicate runs.
fn big(v: f64) -> Rational {
    Rational::from_f64(v).unwrap_or_default()
}

fn sign_of(ord: Ordering) -> i8 {
    match ord {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

/// Exact sign of the 2×2 orientation determinant `(b - a) × (c - a)`.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> i8 {
    let det = (big(b.x) - big(a.x)) * (big(c.y) - big(a.y))
        - (big(b.y) - big(a.y)) * (big(c.x) - big(a.x));
    sign_of(det.cmp0())
}

/// Exact sign of the lifted in-circle determinant for `d` against the
/// circle through `a`, `b`, `c`.
pub fn in_circle_sign(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> i8 {
    let adx = big(a.x) - big(d.x);
    let ady = big(a.y) - big(d.y);
    let bdx = big(b.x) - big(d.x);
    let bdy = big(b.y) - big(d.y);
    let cdx = big(c.x) - big(d.x);
    let cdy = big(c.y) - big(d.y);

    let alift = Rational::from(&adx * &adx) + Rational::from(&ady * &ady);
    let blift = Rational::from(&bdx * &bdx) + Rational::from(&bdy * &bdy);
    let clift = Rational::from(&cdx * &cdx) + Rational::from(&cdy * &cdy);

    let bc = Rational::from(&bdx * &cdy) - Rational::from(&bdy * &cdx);
    let ca = Rational::from(&cdx * &ady) - Rational::from(&cdy * &adx);
    let ab = Rational::from(&adx * &bdy) - Rational::from(&ady * &bdx);

    let det = alift * bc + blift * ca + clift * ab;
    sign_of(det.cmp0())
}
