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

use std::collections::HashMap;
use std::fmt;

use crate::{DefInt, DefWgh, DefTotal};
use crate::graph::{WghEdge, WghEdgeArray};
use crate::union_find::UnionFind;
use super::kruskal::minimum_spanning_forest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// the edge is not in the input graph, or has another weight there.
    UnknownEdge(WghEdge),
    /// the edge closes a cycle with earlier result edges.
    Cycle(WghEdge),
    WrongEdgeCount { expected: usize, found: usize },
    NotMinimum { expected: DefTotal, found: DefTotal },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownEdge(e) =>
                write!(f, "edge ({}, {}, {}) is not in the graph", e.u, e.v, e.w),
            Self::Cycle(e) =>
                write!(f, "edge ({}, {}) closes a cycle", e.u, e.v),
            Self::WrongEdgeCount { expected, found } =>
                write!(f, "wrong edge count: forest has {expected} edges but result has {found}"),
            Self::NotMinimum { expected, found } =>
                write!(f, "result weighs {found}, the minimum is {expected}"),
        }
    }
}

impl std::error::Error for CheckError {}

/// Verifies that `out` is a minimum spanning forest of `wea`. The serial
/// Kruskal forest supplies the expected size and weight.
pub fn check_spanning_forest(wea: &WghEdgeArray, out: &[WghEdge]) -> Result<(), CheckError> {
    let weights: HashMap<(DefInt, DefInt), DefWgh> = wea
        .edges()
        .iter()
        .map(|e| (e.endpoints(), e.w))
        .collect();

    let mut uf = UnionFind::new(wea.num_vertices());
    for e in out {
        if weights.get(&e.endpoints()) != Some(&e.w) {
            return Err(CheckError::UnknownEdge(*e));
        }
        if !uf.union(e.u, e.v) { return Err(CheckError::Cycle(*e)); }
    }

    let msf = minimum_spanning_forest(wea);
    if msf.num_edges() != out.len() {
        return Err(CheckError::WrongEdgeCount { expected: msf.num_edges(), found: out.len() });
    }

    let found = out.iter().map(|e| e.w as DefTotal).sum();
    if msf.total_weight != found {
        return Err(CheckError::NotMinimum { expected: msf.total_weight, found });
    }
    Ok(())
}
