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

//! Error types for triangulation builds.

use thiserror::Error;

/// Conditions that abort a triangulation build.
///
/// A build is all-or-nothing: none of these variants comes with a partial
/// triangulation attached, and the engine never perturbs coordinates to
/// work around a degenerate input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulateError {
    /// The input holds no points, so not even a trivial hull exists.
    /// One- and two-point inputs do not raise this; they produce a
    /// triangle-free result instead.
    #[error("insufficient input: no points supplied")]
    InsufficientPoints,

    /// The point at `index` has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Two input points share exact coordinates. Duplicates are rejected,
    /// never merged; the caller decides whether to pre-filter.
    #[error("points {first} and {second} have identical coordinates")]
    DuplicatePoint { first: usize, second: usize },

    /// Three points that must form a triangle are collinear, or the whole
    /// input lies on a single line.
    #[error("degenerate input: points {a}, {b} and {c} are collinear")]
    CollinearDegenerate { a: usize, b: usize, c: usize },

    /// An internal mesh invariant failed during result extraction. This
    /// indicates a defect in the builder or the mesh, never a property of
    /// the input.
    #[error("mesh consistency violation: {0}")]
    MeshConsistencyViolation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangulateError>;
