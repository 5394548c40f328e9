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

//! Reads the finished mesh back out as triangles and a hull, checking
//! its global consistency on the way.

use crate::error::{Result, TriangulateError};
use crate::kernel::{Orientation, orientation};
use crate::mesh::Mesh;

use super::order::Site;

/// A completed triangulation, expressed in the caller's input indices.
///
/// Triangles are counter-clockwise, rotated so the smallest index comes
/// first, and listed in lexicographic order. The hull is
/// counter-clockwise starting from the lexicographically smallest input
/// point. Equal inputs produce equal values, whichever execution mode
/// built them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangulation {
    pub triangles: Vec<[usize; 3]>,
    pub hull: Vec<usize>,
}

impl Triangulation {
    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

fn violation(msg: impl Into<String>) -> TriangulateError {
    TriangulateError::MeshConsistencyViolation(msg.into())
}

/// Rotates a counter-clockwise triple so its smallest member leads.
fn canonical(t: [usize; 3]) -> [usize; 3] {
    let m = if t[0] <= t[1] && t[0] <= t[2] {
        0
    } else if t[1] <= t[2] {
        1
    } else {
        2
    };
    [t[m], t[(m + 1) % 3], t[(m + 2) % 3]]
}

/// Walks every face of the mesh, validates the subdivision, and maps it
/// back to input indices. `le` is the counter-clockwise hull edge out of
/// the leftmost site; callers pass at least three sites.
pub(crate) fn extract(mesh: &Mesh, sites: &[Site], le: usize) -> Result<Triangulation> {
    let n = sites.len();
    let slots = mesh.slot_count();

    // Face sweep: each live directed edge belongs to exactly one left
    // face. Length-3 counter-clockwise cycles are triangles; whatever
    // else shows up must be the single outer face.
    let mut face_seen = vec![false; slots];
    let mut in_triangle = vec![false; slots];
    let mut triangles_idx: Vec<[usize; 3]> = Vec::new();
    let mut outer_faces = 0usize;

    for start in 0..slots {
        if mesh.is_removed(start) || face_seen[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut e = start;
        loop {
            cycle.push(e);
            face_seen[e] = true;
            e = mesh.lnext(e);
            if e == start {
                break;
            }
            if cycle.len() > slots {
                return Err(violation("face walk does not close"));
            }
        }
        let tri = cycle.len() == 3 && {
            let (a, b, c) = (mesh.org(cycle[0]), mesh.org(cycle[1]), mesh.org(cycle[2]));
            orientation(&sites[a].point, &sites[b].point, &sites[c].point) == Orientation::Left
        };
        if tri {
            for &edge in &cycle {
                in_triangle[edge] = true;
            }
            triangles_idx.push([
                mesh.org(cycle[0]),
                mesh.org(cycle[1]),
                mesh.org(cycle[2]),
            ]);
        } else {
            outer_faces += 1;
        }
    }

    // A mesh with sites but no triangles means every site was collinear;
    // the bad triple check must run before the hull walk, whose closure
    // guard a degenerate chain would trip first.
    if triangles_idx.is_empty() {
        return Err(TriangulateError::CollinearDegenerate {
            a: sites[0].id,
            b: sites[1].id,
            c: sites[2].id,
        });
    }
    if outer_faces != 1 {
        return Err(violation(format!(
            "expected one outer face, found {outer_faces}"
        )));
    }

    // Hull walk, counter-clockwise from the leftmost site.
    if mesh.org(le) != 0 {
        return Err(violation("hull does not start at the leftmost site"));
    }
    let mut hull_idx = Vec::new();
    let mut hull_mark = vec![false; slots];
    let mut e = le;
    loop {
        if hull_idx.len() == n {
            return Err(violation("hull walk does not close"));
        }
        hull_idx.push(mesh.org(e));
        hull_mark[e] = true;
        e = mesh.rprev(e);
        if e == le {
            break;
        }
    }

    // Every surviving edge is either shared by two triangles or sits
    // between one triangle and the outer face, and the one-sided edges
    // are exactly the hull.
    let mut one_sided = 0usize;
    for e in (0..slots).step_by(2) {
        if mesh.is_removed(e) {
            continue;
        }
        match (in_triangle[e], in_triangle[e + 1]) {
            (true, true) => {}
            (false, false) => return Err(violation("an edge borders no triangle")),
            _ => {
                if !hull_mark[e] && !hull_mark[e + 1] {
                    return Err(violation("a one-sided edge is off the hull"));
                }
                one_sided += 1;
            }
        }
    }
    if one_sided != hull_idx.len() {
        return Err(violation(format!(
            "hull of {} vertices against {one_sided} boundary edges",
            hull_idx.len()
        )));
    }

    if 2 * n != triangles_idx.len() + hull_idx.len() + 2 {
        return Err(violation(format!(
            "Euler check failed for {n} sites: {} triangles, {} hull vertices",
            triangles_idx.len(),
            hull_idx.len()
        )));
    }

    let mut triangles: Vec<[usize; 3]> = triangles_idx
        .into_iter()
        .map(|t| canonical([sites[t[0]].id, sites[t[1]].id, sites[t[2]].id]))
        .collect();
    triangles.sort_unstable();
    let hull = hull_idx.into_iter().map(|i| sites[i].id).collect();

    Ok(Triangulation { triangles, hull })
}

#[cfg(test)]
mod tests {
    use super::{canonical, extract};
    use crate::error::TriangulateError;
    use crate::geometry::Point2;
    use crate::triangulation::builder::build;
    use crate::triangulation::order::sort_sites;

    fn extracted(raw: &[(f64, f64)]) -> crate::error::Result<super::Triangulation> {
        let points: Vec<Point2> = raw.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let sites = sort_sites(&points)?;
        let (mesh, le, _re) = build(&sites, false)?;
        extract(&mesh, &sites, le)
    }

    #[test]
    fn canonical_rotation_keeps_winding() {
        assert_eq!(canonical([2, 0, 1]), [0, 1, 2]);
        assert_eq!(canonical([1, 2, 0]), [0, 1, 2]);
        assert_eq!(canonical([0, 2, 1]), [0, 2, 1]);
    }

    #[test]
    fn single_triangle_round_trip() {
        let t = extracted(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2]]);
        assert_eq!(t.hull, vec![0, 1, 2]);
    }

    #[test]
    fn square_splits_along_the_tie_break_diagonal() {
        let t = extracted(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 3], [1, 2, 3]]);
        assert_eq!(t.hull, vec![0, 1, 2, 3]);
    }

    #[test]
    fn collinear_chain_reports_the_first_sorted_triple() {
        let err = extracted(&[(3.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)]).unwrap_err();
        match err {
            TriangulateError::CollinearDegenerate { a, b, c } => {
                assert_eq!((a, b, c), (3, 1, 2));
            }
            other => panic!("expected CollinearDegenerate, got {other:?}"),
        }
    }

    #[test]
    fn interior_point_keeps_the_euler_count() {
        // square plus its center: 4 triangles, hull of 4
        let t = extracted(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(t.triangles.len(), 4);
        assert_eq!(t.hull, vec![0, 1, 2, 3]);
        for tri in &t.triangles {
            assert!(tri.contains(&4), "center belongs to every triangle: {tri:?}");
        }
    }
}
