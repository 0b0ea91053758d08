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

#![allow(dead_code)]

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use mst::{DefInt, DefWgh};
use mst::graph::{WghEdge, WghEdgeArray};

/// Connected graph on `n` vertices: a random tree plus up to `extra` more
/// edges, with weights in `1..=max_w`.
pub fn random_connected(seed: u64, n: usize, extra: usize, max_w: DefWgh) -> WghEdgeArray {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut es = vec![];

    for v in 1..n {
        let u = rng.gen_range(0..v);
        seen.insert((u, v));
        es.push(WghEdge::new(u as DefInt, v as DefInt, rng.gen_range(1..=max_w)));
    }
    for _ in 0..extra {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        let (u, v) = (a.min(b), a.max(b));
        if u == v || !seen.insert((u, v)) { continue; }
        es.push(WghEdge::new(u as DefInt, v as DefInt, rng.gen_range(1..=max_w)));
    }
    es.shuffle(&mut rng);
    WghEdgeArray::new(es, n).unwrap()
}

/// Same shape as `random_connected` but every weight is distinct, so the
/// minimum spanning tree is unique.
pub fn random_distinct(seed: u64, n: usize, extra: usize) -> WghEdgeArray {
    let ea = random_connected(seed, n, extra, 1);
    let mut ws: Vec<DefWgh> = (1..=ea.num_edges() as DefWgh).collect();
    ws.shuffle(&mut StdRng::seed_from_u64(seed ^ 0x5eed));
    let es = ea
        .edges()
        .iter()
        .zip(ws)
        .map(|(e, w)| WghEdge::new(e.u, e.v, w))
        .collect();
    WghEdgeArray::new(es, n).unwrap()
}

pub fn random_permutation(seed: u64, n: usize) -> Vec<DefInt> {
    let mut p: Vec<DefInt> = (0..n as DefInt).collect();
    p.shuffle(&mut StdRng::seed_from_u64(seed));
    p
}

/// Edges as sorted `(min, max, w)` triples.
pub fn normalized(es: &[WghEdge]) -> Vec<(DefInt, DefInt, DefWgh)> {
    let mut r: Vec<_> = es
        .iter()
        .map(|e| { let (u, v) = e.endpoints(); (u, v, e.w) })
        .collect();
    r.sort_unstable();
    r
}

pub fn edge_array(n: usize, es: &[(DefInt, DefInt, DefWgh)]) -> WghEdgeArray {
    WghEdgeArray::new(es.iter().map(|&(u, v, w)| WghEdge::new(u, v, w)).collect(), n).unwrap()
}
