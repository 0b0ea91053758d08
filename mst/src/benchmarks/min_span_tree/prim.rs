// ============================================================================
// This code is part of Rusty-MST.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{DefInt, DefWgh, DefTotal, verbose_println};
use crate::graph::{WghEdge, WghGraph};
use super::{MstError, Strategy};

/// Tree grown by Prim's algorithm from `root`. Vertices outside the root's
/// component have neither a parent nor a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimTree {
    pub root: DefInt,
    /// tree predecessor; `None` for the root and for unreached vertices.
    pub parents: Vec<Option<DefInt>>,
    /// weight of the edge to the parent (`Some(0)` for the root).
    pub keys: Vec<Option<DefWgh>>,
    pub total_weight: DefTotal,
}

impl PrimTree {
    fn new(root: DefInt, parents: Vec<Option<DefInt>>, keys: Vec<Option<DefWgh>>) -> Self {
        let total_weight = parents
            .iter()
            .zip(&keys)
            .filter_map(|(p, k)| p.and(*k))
            .map(|w| w as DefTotal)
            .sum();
        Self { root, parents, keys, total_weight }
    }

    pub fn num_vertices(&self) -> usize
    { self.parents.len() }

    /// Tree edges `(parent, v, key)` in vertex order.
    pub fn edges(&self) -> Vec<WghEdge> {
        self.parents
            .iter()
            .zip(&self.keys)
            .enumerate()
            .filter_map(|(v, (p, k))| match (p, k) {
                (Some(p), Some(w)) => Some(WghEdge::new(*p, v as DefInt, *w)),
                _ => None,
            })
            .collect()
    }

    pub fn num_edges(&self) -> usize {
        self.parents.iter().filter(|p| p.is_some()).count()
    }

    pub fn reached(&self, v: DefInt) -> bool {
        self.keys[v as usize].is_some()
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.num_edges() + 1 == self.num_vertices()
    }
}

/// Fails unless `root` is a vertex of `g`.
pub fn check_root(g: &WghGraph, root: DefInt) -> Result<(), MstError> {
    let n = g.num_vertices();
    if root as usize >= n { Err(MstError::RootOutOfRange { root, n }) }
    else { Ok(()) }
}

/// Lowers the key of every neighbor of `u` outside the tree that `u`
/// reaches more cheaply, calling `updated` for each.
#[inline(always)]
fn relax<F: FnMut(DefInt, DefWgh)>(
    g: &WghGraph,
    u: usize,
    in_tree: &[bool],
    keys: &mut [Option<DefWgh>],
    parents: &mut [Option<DefInt>],
    mut updated: F,
) {
    for (v, w) in g.index(u).iter() {
        let vi = v as usize;
        if in_tree[vi] { continue; }
        if keys[vi].map_or(true, |k| w < k) {
            keys[vi] = Some(w);
            parents[vi] = Some(u as DefInt);
            updated(v, w);
        }
    }
}

pub fn minimum_spanning_tree_linear(g: &WghGraph, root: DefInt) -> Result<PrimTree, MstError> {
    check_root(g, root)?;
    let n = g.num_vertices();
    let mut keys = vec![None; n];
    let mut parents = vec![None; n];
    let mut in_tree = vec![false; n];
    keys[root as usize] = Some(0);

    for _ in 0..n {
        // first minimum in index order
        let mut best: Option<(DefWgh, usize)> = None;
        for v in 0..n {
            if in_tree[v] { continue; }
            if let Some(k) = keys[v] {
                if best.map_or(true, |(b, _)| k < b) { best = Some((k, v)); }
            }
        }

        // the rest of the vertices are unreachable from root
        let Some((_, u)) = best else { break };
        in_tree[u] = true;
        relax(g, u, &in_tree, &mut keys, &mut parents, |_, _| {});
    }

    Ok(PrimTree::new(root, parents, keys))
}

pub fn minimum_spanning_tree_heap(g: &WghGraph, root: DefInt) -> Result<PrimTree, MstError> {
    check_root(g, root)?;
    let n = g.num_vertices();
    let mut keys = vec![None; n];
    let mut parents = vec![None; n];
    let mut in_tree = vec![false; n];
    keys[root as usize] = Some(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, root)));

    while let Some(Reverse((w, u))) = heap.pop() {
        let u = u as usize;
        // stale: superseded by a cheaper entry popped earlier
        if in_tree[u] { continue; }
        debug_assert_eq!(keys[u], Some(w));

        in_tree[u] = true;
        relax(g, u, &in_tree, &mut keys, &mut parents, |v, w| heap.push(Reverse((w, v))));
    }
    verbose_println!("prim: heap variant reached {} vertices", in_tree.iter().filter(|&&t| t).count());

    Ok(PrimTree::new(root, parents, keys))
}

/// Prim's algorithm from `root`. On a disconnected graph only the root's
/// component is spanned.
pub fn minimum_spanning_tree(
    g: &WghGraph,
    root: DefInt,
    strategy: Strategy
) -> Result<PrimTree, MstError> {
    match strategy {
        Strategy::LinearScan => minimum_spanning_tree_linear(g, root),
        Strategy::PriorityQueue => minimum_spanning_tree_heap(g, root),
    }
}
