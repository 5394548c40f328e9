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

//! Two-dimensional Delaunay triangulation by divide and conquer.
//!
//! Points go in as plain `f64` pairs and come out as index triples over
//! the input slice, together with the convex hull. Geometric decisions
//! run through floating-point predicates with a certified error bound
//! and fall back to exact rational arithmetic when the bound cannot
//! decide, so the result never depends on rounding luck. An optional
//! parallel mode forks the recursion onto the rayon thread pool and
//! returns bit-identical results.
//!
//! ```
//! use deltri::{Point2, triangulate};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(1.0, 1.0),
//! ];
//! let tri = triangulate(&points)?;
//! assert_eq!(tri.triangles, vec![[0, 1, 2]]);
//! assert_eq!(tri.hull, vec![0, 1, 2]);
//! # Ok::<(), deltri::TriangulateError>(())
//! ```

pub mod error;
pub mod generate;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod triangulation;

pub use error::{Result, TriangulateError};
pub use geometry::{Point2, World};
pub use triangulation::{Triangulation, triangulate, triangulate_par};
