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

pub mod kruskal;
pub mod prim;
pub mod check;

use std::fmt;

use crate::{DefInt, DefTotal};
use crate::graph::WghEdge;

/// Vertex-selection strategy of Prim's algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// scan every vertex for the minimum key, O(V^2).
    LinearScan,
    /// binary heap with lazy deletion of stale entries, O(E log E).
    PriorityQueue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MstError {
    RootOutOfRange { root: DefInt, n: usize },
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RootOutOfRange { root, n } =>
                write!(f, "root {root} is not a vertex of a graph with {n} vertices"),
        }
    }
}

impl std::error::Error for MstError {}

/// Minimum spanning forest: one tree per connected component.
#[derive(Clone, Debug, Default)]
pub struct SpanningForest {
    /// selected edges in the order they were accepted.
    pub edges: Vec<WghEdge>,
    /// positions of `edges` in the input edge array.
    pub ids: Vec<DefInt>,
    pub total_weight: DefTotal,
    pub n: usize,
}

impl SpanningForest {
    pub fn num_edges(&self) -> usize
    { self.edges.len() }

    pub fn num_components(&self) -> usize
    { self.n - self.edges.len() }

    pub fn is_spanning_tree(&self) -> bool
    { self.n > 0 && self.edges.len() == self.n - 1 }
}
