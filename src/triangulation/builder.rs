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

//! Divide-and-conquer construction of the Delaunay subdivision.
//!
//! The site slice is already sorted lexicographically, so halving it
//! splits the plane by a vertical (or degenerate-vertical) line. Each
//! half is triangulated into its own arena and the parent stitches the
//! two along their common tangents. Sequential and parallel execution
//! share one recursion shape and compose sub-meshes the same way, so
//! both produce bit-identical arenas for the same input.

use crate::error::{Result, TriangulateError};
use crate::geometry::Point2;
use crate::kernel::{Orientation, in_circle, orientation};
use crate::mesh::Mesh;

use super::order::Site;

/// Below this many sites a subtree is not worth forking.
const PAR_CUTOFF: usize = 512;

/// Triangulates the full sorted slice.
///
/// Returns the mesh together with `le`, the counter-clockwise hull edge
/// out of the leftmost site, and `re`, the clockwise hull edge out of
/// the rightmost site. Callers must pass at least two sites.
pub(crate) fn build(sites: &[Site], parallel: bool) -> Result<(Mesh, usize, usize)> {
    if parallel {
        build_par(sites, 0, sites.len())
    } else {
        build_seq(sites, 0, sites.len())
    }
}

fn build_seq(sites: &[Site], lo: usize, hi: usize) -> Result<(Mesh, usize, usize)> {
    let n = hi - lo;
    if n <= 3 {
        return build_base(sites, lo, hi);
    }
    let mid = lo + n / 2;
    let (mut mesh, ldo, ldi) = build_seq(sites, lo, mid)?;
    let (right, rdi, rdo) = build_seq(sites, mid, hi)?;
    let off = mesh.absorb(right);
    let (ldo, rdo) = merge(&mut mesh, sites, ldo, ldi, rdi + off, rdo + off);
    Ok((mesh, ldo, rdo))
}

fn build_par(sites: &[Site], lo: usize, hi: usize) -> Result<(Mesh, usize, usize)> {
    let n = hi - lo;
    if n <= PAR_CUTOFF {
        return build_seq(sites, lo, hi);
    }
    let mid = lo + n / 2;
    let (left, right) = rayon::join(
        || build_par(sites, lo, mid),
        || build_par(sites, mid, hi),
    );
    let (mut mesh, ldo, ldi) = left?;
    let (right, rdi, rdo) = right?;
    let off = mesh.absorb(right);
    let (ldo, rdo) = merge(&mut mesh, sites, ldo, ldi, rdi + off, rdo + off);
    Ok((mesh, ldo, rdo))
}

/// Two sites become a single edge, three a triangle. A collinear triple
/// has no triangulation and is reported with the offending input ids.
fn build_base(sites: &[Site], lo: usize, hi: usize) -> Result<(Mesh, usize, usize)> {
    let mut mesh = Mesh::new();
    if hi - lo == 2 {
        let e = mesh.make_edge(lo, lo + 1);
        let s = mesh.sym(e);
        return Ok((mesh, e, s));
    }

    let a = mesh.make_edge(lo, lo + 1);
    let b = mesh.make_edge(lo + 1, lo + 2);
    let sym_a = mesh.sym(a);
    mesh.splice(sym_a, b);

    match orientation(
        &sites[lo].point,
        &sites[lo + 1].point,
        &sites[lo + 2].point,
    ) {
        Orientation::Left => {
            mesh.connect(b, a);
            let s = mesh.sym(b);
            Ok((mesh, a, s))
        }
        Orientation::Right => {
            let c = mesh.connect(b, a);
            let s = mesh.sym(c);
            Ok((mesh, s, c))
        }
        Orientation::Collinear => Err(TriangulateError::CollinearDegenerate {
            a: sites[lo].id,
            b: sites[lo + 1].id,
            c: sites[lo + 2].id,
        }),
    }
}

/// Stitches two half-triangulations along their lower common tangent and
/// sweeps upward, flipping out edges that fail the circle test.
///
/// `ldo`/`ldi` are the left half's outer and inner hull edges, `rdi`/`rdo`
/// the right half's. Returns the merged hull's outer pair.
fn merge(
    mesh: &mut Mesh,
    sites: &[Site],
    mut ldo: usize,
    mut ldi: usize,
    mut rdi: usize,
    mut rdo: usize,
) -> (usize, usize) {
    // Lower common tangent: slide each inner edge down its hull until
    // neither endpoint sees the other edge on its left.
    loop {
        if left_of(mesh, sites, mesh.org(rdi), ldi) {
            ldi = mesh.lnext(ldi);
        } else if right_of(mesh, sites, mesh.org(ldi), rdi) {
            rdi = mesh.rprev(rdi);
        } else {
            break;
        }
    }

    let sym_rdi = mesh.sym(rdi);
    let mut basel = mesh.connect(sym_rdi, ldi);
    if mesh.org(ldi) == mesh.org(ldo) {
        ldo = mesh.sym(basel);
    }
    if mesh.org(rdi) == mesh.org(rdo) {
        rdo = basel;
    }

    loop {
        // Candidate from the left half: first edge counter-clockwise
        // above basel. An interior candidate whose successor breaks the
        // circle test cannot survive in the merged triangulation.
        let mut lcand = mesh.onext(mesh.sym(basel));
        if candidate_valid(mesh, sites, lcand, basel) {
            while in_circle(
                point(sites, mesh.dest(basel)),
                point(sites, mesh.org(basel)),
                point(sites, mesh.dest(lcand)),
                point(sites, mesh.dest(mesh.onext(lcand))),
            ) {
                let next = mesh.onext(lcand);
                mesh.delete_edge(lcand);
                lcand = next;
            }
        }

        // Mirror image on the right half, walking clockwise.
        let mut rcand = mesh.oprev(basel);
        if candidate_valid(mesh, sites, rcand, basel) {
            while in_circle(
                point(sites, mesh.dest(basel)),
                point(sites, mesh.org(basel)),
                point(sites, mesh.dest(rcand)),
                point(sites, mesh.dest(mesh.oprev(rcand))),
            ) {
                let prev = mesh.oprev(rcand);
                mesh.delete_edge(rcand);
                rcand = prev;
            }
        }

        let lvalid = candidate_valid(mesh, sites, lcand, basel);
        let rvalid = candidate_valid(mesh, sites, rcand, basel);
        if !lvalid && !rvalid {
            // Upper common tangent reached.
            break;
        }

        // Cross-check the surviving candidates; ties go to the left so
        // cocircular merges stay deterministic.
        if !lvalid
            || (rvalid
                && in_circle(
                    point(sites, mesh.dest(lcand)),
                    point(sites, mesh.org(lcand)),
                    point(sites, mesh.org(rcand)),
                    point(sites, mesh.dest(rcand)),
                ))
        {
            let sym_basel = mesh.sym(basel);
            basel = mesh.connect(rcand, sym_basel);
        } else {
            let sym_basel = mesh.sym(basel);
            let sym_lcand = mesh.sym(lcand);
            basel = mesh.connect(sym_basel, sym_lcand);
        }
    }

    (ldo, rdo)
}

fn point(sites: &[Site], i: usize) -> &Point2 {
    &sites[i].point
}

fn left_of(mesh: &Mesh, sites: &[Site], x: usize, e: usize) -> bool {
    orientation(
        point(sites, x),
        point(sites, mesh.org(e)),
        point(sites, mesh.dest(e)),
    ) == Orientation::Left
}

fn right_of(mesh: &Mesh, sites: &[Site], x: usize, e: usize) -> bool {
    orientation(
        point(sites, x),
        point(sites, mesh.dest(e)),
        point(sites, mesh.org(e)),
    ) == Orientation::Left
}

/// A candidate edge still participates in the merge while its far end
/// lies to the right of basel, i.e. above the current cross edge.
fn candidate_valid(mesh: &Mesh, sites: &[Site], e: usize, basel: usize) -> bool {
    right_of(mesh, sites, mesh.dest(e), basel)
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::error::TriangulateError;
    use crate::geometry::Point2;
    use crate::triangulation::order::sort_sites;

    fn sites_of(raw: &[(f64, f64)]) -> Vec<crate::triangulation::order::Site> {
        let points: Vec<Point2> = raw.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        sort_sites(&points).unwrap()
    }

    #[test]
    fn two_sites_yield_one_edge_pair() {
        let sites = sites_of(&[(0.0, 0.0), (1.0, 0.0)]);
        let (mesh, le, re) = build(&sites, false).unwrap();

        assert_eq!(mesh.slot_count(), 2);
        assert_eq!(mesh.org(le), 0);
        assert_eq!(mesh.org(re), 1);
        assert_eq!(re, mesh.sym(le));
    }

    #[test]
    fn triangle_hull_edges_leave_the_extreme_sites() {
        // counter-clockwise input
        let ccw = sites_of(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
        let (mesh, le, re) = build(&ccw, false).unwrap();
        assert_eq!(mesh.org(le), 0);
        assert_eq!(mesh.org(re), 2);

        // clockwise once sorted
        let cw = sites_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let (mesh, le, re) = build(&cw, false).unwrap();
        assert_eq!(mesh.org(le), 0);
        assert_eq!(mesh.org(re), 2);
    }

    #[test]
    fn collinear_triple_is_rejected_with_its_ids() {
        let sites = sites_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        match build(&sites, false) {
            Err(TriangulateError::CollinearDegenerate { a, b, c }) => {
                assert_eq!((a, b, c), (0, 1, 2));
            }
            other => panic!("expected CollinearDegenerate, got {other:?}"),
        }
    }

    #[test]
    fn square_merge_keeps_every_edge_and_adds_a_diagonal() {
        let sites = sites_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let (mesh, le, re) = build(&sites, false).unwrap();

        let live = (0..mesh.slot_count()).filter(|&e| !mesh.is_removed(e)).count();
        // four hull edges plus one diagonal
        assert_eq!(live, 10);
        assert_eq!(mesh.org(le), 0);
        assert_eq!(mesh.org(re), 3);
    }

    #[test]
    fn collinear_halves_merge_into_a_path() {
        // four collinear sites split into two segments; the merge closes
        // them into a chain without inventing a triangle
        let sites = sites_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let (mesh, le, re) = build(&sites, false).unwrap();

        let live = (0..mesh.slot_count()).filter(|&e| !mesh.is_removed(e)).count();
        assert_eq!(live, 6);
        assert_eq!(mesh.org(le), 0);
        assert_eq!(mesh.org(re), 3);
    }
}
