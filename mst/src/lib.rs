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

//! Minimum spanning trees of weighted undirected graphs.
//!
//! Two engines share one set of graph types:
//! * Kruskal (`mst::kruskal`) sorts the edge list and filters it through a
//!   union-find, producing a minimum spanning *forest*.
//! * Prim (`mst::prim`) grows a tree from a root over the adjacency array,
//!   either by scanning every vertex for the next minimum key
//!   (`Strategy::LinearScan`, O(V^2)) or with a lazily-deleted binary heap
//!   (`Strategy::PriorityQueue`, O(E log E)).
//!
//! On a disconnected graph Kruskal returns one tree per component while
//! Prim only covers the component of its root.

pub mod common;
pub mod algorithm;
pub mod benchmarks;

pub use common::graph;
pub use algorithm::union_find;
pub use benchmarks::min_span_tree as mst;

/// Vertex index.
pub type DefInt = u32;
/// Edge weight.
pub type DefWgh = u32;
/// Sum of edge weights.
pub type DefTotal = u64;

#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*)
        => {
            #[cfg(feature = "verbose")]
            println!($($arg)*);
        };
}
