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

//! Quad-edge style planar subdivision over an edge arena.
//!
//! Every edge is directed and stored next to its reverse: the partner of
//! handle `e` is always `e ^ 1`, so the arena length stays even and no
//! separate twin link is needed. Deletion tombstones both slots; handles
//! are never reused, so a handle taken once stays valid for the life of
//! the mesh.

/// One directed edge of the subdivision.
///
/// `org` is a site index, not a coordinate; the mesh is pure topology.
#[derive(Clone, Debug)]
pub struct EdgeRec {
    pub org: usize,
    pub onext: usize,
    pub oprev: usize,
    pub removed: bool,
}

/// Planar subdivision being built by the triangulation.
///
/// Only the edit primitives mutate the arena, and each leaves every
/// origin ring a consistent angular cycle, so no partially linked state
/// is observable between calls.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    edges: Vec<EdgeRec>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reverse edge of `e`.
    pub fn sym(&self, e: usize) -> usize {
        e ^ 1
    }

    /// Site index at the origin of `e`.
    pub fn org(&self, e: usize) -> usize {
        self.edges[e].org
    }

    /// Site index at the destination of `e`.
    pub fn dest(&self, e: usize) -> usize {
        self.edges[e ^ 1].org
    }

    /// Next edge counter-clockwise around the origin of `e`.
    pub fn onext(&self, e: usize) -> usize {
        self.edges[e].onext
    }

    /// Next edge clockwise around the origin of `e`.
    pub fn oprev(&self, e: usize) -> usize {
        self.edges[e].oprev
    }

    /// Next edge counter-clockwise around the left face of `e`.
    pub fn lnext(&self, e: usize) -> usize {
        self.oprev(e ^ 1)
    }

    /// Next edge when walking the face to the right of `e` backwards;
    /// on a hull edge this advances the outer boundary counter-clockwise.
    pub fn rprev(&self, e: usize) -> usize {
        self.onext(e ^ 1)
    }

    /// Number of arena slots, live and tombstoned. Always even.
    pub fn slot_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_removed(&self, e: usize) -> bool {
        self.edges[e].removed
    }

    /// Creates an isolated edge pair from `org` to `dest` and returns the
    /// handle of the forward edge. Both directions start as their own
    /// one-element origin rings.
    pub fn make_edge(&mut self, org: usize, dest: usize) -> usize {
        let e = self.edges.len();
        self.edges.push(EdgeRec {
            org,
            onext: e,
            oprev: e,
            removed: false,
        });
        self.edges.push(EdgeRec {
            org: dest,
            onext: e + 1,
            oprev: e + 1,
            removed: false,
        });
        e
    }

    /// Exchanges the rings at the origins of `a` and `b`: two separate
    /// rings become one, one shared ring splits in two. Self-inverse for
    /// a fixed pair of edges.
    pub fn splice(&mut self, a: usize, b: usize) {
        let an = self.edges[a].onext;
        let bn = self.edges[b].onext;
        self.edges[a].onext = bn;
        self.edges[b].onext = an;
        self.edges[an].oprev = b;
        self.edges[bn].oprev = a;
    }

    /// Adds an edge from the destination of `a` to the origin of `b`,
    /// spliced into both rings in correct angular position, and returns
    /// its handle.
    pub fn connect(&mut self, a: usize, b: usize) -> usize {
        let org = self.dest(a);
        let dest = self.org(b);
        let after = self.lnext(a);
        let e = self.make_edge(org, dest);
        self.splice(e, after);
        self.splice(e ^ 1, b);
        e
    }

    /// Unlinks `e` from both origin rings and tombstones the pair.
    ///
    /// Removing the sole remaining edge at either endpoint would
    /// disconnect a site, which no caller may ever ask for.
    pub fn delete_edge(&mut self, e: usize) {
        assert!(!self.edges[e].removed, "delete_edge on a removed edge");
        assert!(
            self.onext(e) != e && self.onext(e ^ 1) != e ^ 1,
            "delete_edge would disconnect a site"
        );
        let ep = self.oprev(e);
        let sp = self.oprev(e ^ 1);
        self.splice(e, ep);
        self.splice(e ^ 1, sp);
        self.edges[e].removed = true;
        self.edges[e ^ 1].removed = true;
    }

    /// Appends every slot of `other`, shifting its internal links, and
    /// returns the offset added to its handles. The arena stays even, so
    /// the `e ^ 1` pairing survives absorption.
    pub fn absorb(&mut self, other: Mesh) -> usize {
        let offset = self.edges.len();
        self.edges.extend(other.edges.into_iter().map(|mut rec| {
            rec.onext += offset;
            rec.oprev += offset;
            rec
        }));
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::Mesh;

    // Topology of the 3-site triangle the builder's base case makes.
    fn triangle() -> (Mesh, usize, usize, usize) {
        let mut mesh = Mesh::new();
        let a = mesh.make_edge(0, 1);
        let b = mesh.make_edge(1, 2);
        mesh.splice(mesh.sym(a), b);
        let c = mesh.connect(b, a);
        (mesh, a, b, c)
    }

    #[test]
    fn make_edge_is_an_isolated_pair() {
        let mut mesh = Mesh::new();
        let e = mesh.make_edge(3, 7);

        assert_eq!(mesh.org(e), 3);
        assert_eq!(mesh.dest(e), 7);
        assert_eq!(mesh.sym(e), e + 1);
        assert_eq!(mesh.org(mesh.sym(e)), 7);
        assert_eq!(mesh.onext(e), e);
        assert_eq!(mesh.oprev(e), e);
        assert_eq!(mesh.onext(mesh.sym(e)), mesh.sym(e));
    }

    #[test]
    fn splice_merges_then_separates_rings() {
        let mut mesh = Mesh::new();
        let e1 = mesh.make_edge(0, 1);
        let e2 = mesh.make_edge(0, 2);

        mesh.splice(e1, e2);
        assert_eq!(mesh.onext(e1), e2);
        assert_eq!(mesh.onext(e2), e1);
        assert_eq!(mesh.oprev(e1), e2);

        mesh.splice(e1, e2);
        assert_eq!(mesh.onext(e1), e1);
        assert_eq!(mesh.onext(e2), e2);
    }

    #[test]
    fn connect_closes_a_face_loop() {
        let (mesh, a, b, c) = triangle();

        assert_eq!(mesh.org(c), 2);
        assert_eq!(mesh.dest(c), 0);
        assert_eq!(mesh.lnext(a), b);
        assert_eq!(mesh.lnext(b), c);
        assert_eq!(mesh.lnext(c), a);
        // and the opposite face through the reverse edges
        assert_eq!(mesh.lnext(mesh.sym(c)), mesh.sym(b));
        assert_eq!(mesh.lnext(mesh.sym(b)), mesh.sym(a));
        assert_eq!(mesh.lnext(mesh.sym(a)), mesh.sym(c));
    }

    #[test]
    fn delete_edge_restores_the_rings() {
        let (mut mesh, a, b, c) = triangle();

        mesh.delete_edge(c);
        assert!(mesh.is_removed(c));
        assert!(mesh.is_removed(mesh.sym(c)));
        // each endpoint ring collapses back to one edge
        assert_eq!(mesh.onext(a), a);
        assert_eq!(mesh.onext(mesh.sym(b)), mesh.sym(b));
    }

    #[test]
    #[should_panic(expected = "disconnect a site")]
    fn deleting_the_sole_connection_is_a_defect() {
        let mut mesh = Mesh::new();
        let e = mesh.make_edge(0, 1);
        mesh.delete_edge(e);
    }

    #[test]
    fn absorb_shifts_handles_by_an_even_offset() {
        let (mut mesh, _, _, _) = triangle();
        let mut other = Mesh::new();
        let f = other.make_edge(4, 5);
        other.make_edge(5, 6);
        other.splice(other.sym(f), f + 2);

        let off = mesh.absorb(other);
        assert_eq!(off % 2, 0);
        assert_eq!(mesh.org(f + off), 4);
        assert_eq!(mesh.dest(f + off), 5);
        assert_eq!(mesh.onext(mesh.sym(f) + off), f + 2 + off);
    }
}
