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

use std::cmp::Ordering;

use crate::{DefInt, DefWgh, DefTotal, verbose_println};
use crate::graph::{WghEdge, WghEdgeArray};
use crate::union_find::UnionFind;
use super::SpanningForest;

#[derive(Clone, Copy)]
pub struct IndexedEdge { pub u: DefInt, pub v: DefInt, pub id: DefInt, pub w: DefWgh }

impl IndexedEdge {
    pub fn new(e: WghEdge, id: DefInt) -> Self {
        Self { u: e.u, v: e.v, id, w: e.w }
    }
}

/// Weight first, then position in the input, so equal weights keep their
/// input order.
#[inline(always)]
fn cmp_idx_edge(a: &IndexedEdge, b: &IndexedEdge) -> Ordering {
    a.w.cmp(&b.w).then(a.id.cmp(&b.id))
}

fn union_find_loop(
    es: &[IndexedEdge],
    wea: &WghEdgeArray,
    uf: &mut UnionFind,
    msf: &mut SpanningForest
) {
    let target = msf.n.saturating_sub(1);
    for e in es {
        if msf.edges.len() == target { break; }
        let u = uf.find(e.u);
        let v = uf.find(e.v);
        if u != v {
            uf.union_roots(u, v);
            msf.edges.push(wea[e.id as usize]);
            msf.ids.push(e.id);
            msf.total_weight += e.w as DefTotal;
        }
    }
}

/// Kruskal's algorithm. Returns a spanning tree when the graph is
/// connected and a spanning forest with fewer than `n - 1` edges otherwise.
pub fn minimum_spanning_forest(wea: &WghEdgeArray) -> SpanningForest {
    let n = wea.num_vertices();
    let m = wea.num_edges();

    let mut iwea: Vec<IndexedEdge> = (0..m)
        .map(|i| IndexedEdge::new(wea[i], i as DefInt))
        .collect();
    iwea.sort_unstable_by(cmp_idx_edge);
    verbose_println!("kruskal: sorted {m} edges");

    let mut uf = UnionFind::new(n);
    let mut msf = SpanningForest {
        edges: Vec::with_capacity(n.saturating_sub(1)),
        ids: Vec::with_capacity(n.saturating_sub(1)),
        total_weight: 0,
        n,
    };
    union_find_loop(&iwea, wea, &mut uf, &mut msf);
    verbose_println!("kruskal: {} edges, {} components", msf.num_edges(), uf.num_sets());

    msf
}
