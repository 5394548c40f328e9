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

use crate::geometry::Point2;

/// Axis-aligned rectangle that scopes point generation.
///
/// The default is the `[0, 1000] × [0, 1000]` square the CLI assumes when
/// no bounds are given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl World {
    /// Default upper bound in both axes.
    pub const DEFAULT_MAX: f64 = 1000.0;

    /// Builds a world from finite bounds. Returns `None` when a bound is
    /// non-finite or an extent is empty or inverted.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Option<Self> {
        let world = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());
        (finite && max_x > min_x && max_y > min_y).then_some(world)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: Self::DEFAULT_MAX,
            min_y: 0.0,
            max_y: Self::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::geometry::Point2;

    #[test]
    fn rejects_inverted_and_non_finite_bounds() {
        assert!(World::new(0.0, 10.0, 0.0, 10.0).is_some());
        assert!(World::new(10.0, 0.0, 0.0, 10.0).is_none());
        assert!(World::new(0.0, 0.0, 0.0, 10.0).is_none());
        assert!(World::new(0.0, f64::NAN, 0.0, 10.0).is_none());
    }

    #[test]
    fn contains_is_inclusive_on_the_boundary() {
        let world = World::default();
        assert!(world.contains(&Point2::new(0.0, 1000.0)));
        assert!(world.contains(&Point2::new(500.0, 500.0)));
        assert!(!world.contains(&Point2::new(-0.5, 10.0)));
    }
}
