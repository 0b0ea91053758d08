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

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use num_traits::NumCast;

use crate::{DefInt, DefWgh, DefTotal};

// **************************************************************
//    ERRORS
// **************************************************************

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// an endpoint is not in `[0, n)`.
    VertexOutOfRange { vertex: usize, n: usize },
    SelfLoop { vertex: DefInt },
    /// a second edge between the same unordered pair.
    DuplicateEdge { u: DefInt, v: DefInt },
    TooManyVertices { n: usize },
    /// row `row` of a weight matrix has `len` entries instead of `n`.
    NotSquare { row: usize, len: usize, n: usize },
    Asymmetric { i: usize, j: usize },
    InvalidPermutation,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VertexOutOfRange { vertex, n } =>
                write!(f, "vertex {vertex} is out of range (n={n})"),
            Self::SelfLoop { vertex } =>
                write!(f, "self loop on vertex {vertex}"),
            Self::DuplicateEdge { u, v } =>
                write!(f, "more than one edge between {u} and {v}"),
            Self::TooManyVertices { n } =>
                write!(f, "{n} vertices do not fit the vertex index type"),
            Self::NotSquare { row, len, n } =>
                write!(f, "row {row} has {len} entries, expected {n}"),
            Self::Asymmetric { i, j } =>
                write!(f, "weights of ({i}, {j}) and ({j}, {i}) differ"),
            Self::InvalidPermutation =>
                write!(f, "relabeling is not a permutation of the vertices"),
        }
    }
}

impl std::error::Error for GraphError {}

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

/// An undirected edge; `(u, v, w)` and `(v, u, w)` are the same edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WghEdge {
    pub u: DefInt,
    pub v: DefInt,
    pub w: DefWgh,
}

impl WghEdge {
    pub fn new(u: DefInt, v: DefInt, w: DefWgh) -> Self
    { Self { u, v, w } }

    /// Endpoints with the smaller index first.
    pub fn endpoints(&self) -> (DefInt, DefInt) {
        if self.u <= self.v { (self.u, self.v) } else { (self.v, self.u) }
    }
}

/// Converts a fractional cost to an integer weight by truncating it toward
/// zero. Negative, NaN and unrepresentable costs give `None`.
pub fn truncate_weight(cost: f64) -> Option<DefWgh> {
    if cost < 0.0 { return None; }
    <DefWgh as NumCast>::from(cost.trunc())
}

pub struct ParseEdgeError;

impl fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Can not parse as edge.")
    }
}

impl fmt::Debug for ParseEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ file: {}, line: {} }}: can not parse as edge.", file!(), line!())
    }
}

impl std::error::Error for ParseEdgeError {}

impl FromStr for WghEdge {
    type Err = ParseEdgeError;

    /// Parses `"u v w"`. `w` may be fractional and is truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: Vec<&str> = s.split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError); }
        let u = s[0].parse().map_err(|_| ParseEdgeError)?;
        let v = s[1].parse().map_err(|_| ParseEdgeError)?;
        let cost: f64 = s[2].parse().map_err(|_| ParseEdgeError)?;
        let w = truncate_weight(cost).ok_or(ParseEdgeError)?;
        Ok(Self::new(u, v, w))
    }
}

impl fmt::Display for WghEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.w)
    }
}

// **************************************************************
//    WEIGHTED EDGE ARRAY
// **************************************************************

/// Edge list of a simple undirected graph on `n` vertices. The position of
/// an edge in the list is its id.
#[derive(Clone, Debug)]
pub struct WghEdgeArray {
    es: Vec<WghEdge>,
    n: usize,
}

impl WghEdgeArray {
    pub fn new(es: Vec<WghEdge>, n: usize) -> Result<Self, GraphError> {
        if n > DefInt::MAX as usize { return Err(GraphError::TooManyVertices { n }); }

        let mut seen = HashSet::with_capacity(es.len());
        for e in &es {
            for x in [e.u, e.v] {
                if x as usize >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: x as usize, n });
                }
            }
            if e.u == e.v { return Err(GraphError::SelfLoop { vertex: e.u }); }
            let (u, v) = e.endpoints();
            if !seen.insert((u, v)) { return Err(GraphError::DuplicateEdge { u, v }); }
        }
        Ok(Self { es, n })
    }

    /// The `i < j` half of a weight matrix, in row-major order.
    pub fn from_matrix(mat: &WghMatrix) -> Self {
        let n = mat.num_vertices();
        let mut es = vec![];
        for i in 0..n {
            for j in i+1..n {
                if let Some(w) = mat.weight(i, j) {
                    es.push(WghEdge::new(i as DefInt, j as DefInt, w));
                }
            }
        }
        Self { es, n }
    }

    pub const fn num_vertices(&self) -> usize
    { self.n }

    pub fn num_edges(&self) -> usize
    { self.es.len() }

    pub fn edges(&self) -> &[WghEdge]
    { &self.es }

    pub fn total_weight(&self) -> DefTotal {
        self.es.iter().map(|e| e.w as DefTotal).sum()
    }

    /// Isomorphic copy in which vertex `x` is renamed `perm[x]`.
    pub fn relabel(&self, perm: &[DefInt]) -> Result<Self, GraphError> {
        if perm.len() != self.n { return Err(GraphError::InvalidPermutation); }
        let mut hit = vec![false; self.n];
        for &p in perm {
            let p = p as usize;
            if p >= self.n || hit[p] { return Err(GraphError::InvalidPermutation); }
            hit[p] = true;
        }

        let es = self.es
            .iter()
            .map(|e| WghEdge::new(perm[e.u as usize], perm[e.v as usize], e.w))
            .collect();
        Ok(Self { es, n: self.n })
    }
}

impl Index<usize> for WghEdgeArray {
    type Output = WghEdge;

    fn index(&self, index: usize) -> &Self::Output {
        &self.es[index]
    }
}

// **************************************************************
//    WEIGHT MATRIX
// **************************************************************

/// Symmetric `n x n` weights where `0` encodes "no edge"; a zero-weight edge
/// therefore needs the edge array representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WghMatrix {
    ws: Vec<DefWgh>,
    n: usize,
}

impl WghMatrix {
    pub fn new(n: usize) -> Self {
        Self { ws: vec![0; n * n], n }
    }

    /// Builds a matrix from rows. The diagonal is ignored.
    pub fn from_rows<R: AsRef<[DefWgh]>>(rows: &[R]) -> Result<Self, GraphError> {
        let n = rows.len();
        if n > DefInt::MAX as usize { return Err(GraphError::TooManyVertices { n }); }
        let mut mat = Self::new(n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::NotSquare { row: i, len: row.len(), n });
            }
            for (j, &w) in row.iter().enumerate() {
                if i == j { continue; }
                if j < i && mat.get(j, i) != w {
                    return Err(GraphError::Asymmetric { i: j, j: i });
                }
                mat.ws[i * n + j] = w;
            }
        }
        Ok(mat)
    }

    pub const fn num_vertices(&self) -> usize
    { self.n }

    /// Sets both `(i, j)` and `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, w: DefWgh) {
        debug_assert!(i < self.n && j < self.n && i != j);
        self.ws[i * self.n + j] = w;
        self.ws[j * self.n + i] = w;
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> DefWgh {
        self.ws[i * self.n + j]
    }

    pub fn weight(&self, i: usize, j: usize) -> Option<DefWgh> {
        match self.get(i, j) {
            0 => None,
            w => Some(w),
        }
    }
}

// **************************************************************
//    WEIGHTED ADJACENCY ARRAY REPRESENTATION
// **************************************************************

pub struct WghVertex<'a> {
    pub neighbors: &'a [DefInt],
    pub weights: &'a [DefWgh],
    pub degree: usize,
}

impl<'a> WghVertex<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (DefInt, DefWgh)> + 'a {
        let (ns, ws) = (self.neighbors, self.weights);
        ns.iter().copied().zip(ws.iter().copied())
    }
}

/// Adjacency array of an undirected graph: every edge is stored once in
/// the list of each endpoint.
#[derive(Clone, Debug)]
pub struct WghGraph {
    offsets: Vec<usize>,
    targets: Vec<DefInt>,
    weights: Vec<DefWgh>,
    n: usize,
    m: usize,
}

impl WghGraph {
    /// Neighbors of each vertex keep the order of the edge array.
    pub fn from_edge_array(ea: &WghEdgeArray) -> Self {
        let n = ea.num_vertices();
        let mut offsets = vec![0; n + 1];
        for e in ea.edges() {
            offsets[e.u as usize + 1] += 1;
            offsets[e.v as usize + 1] += 1;
        }
        for i in 0..n { offsets[i + 1] += offsets[i]; }

        let mut cursor = offsets.clone();
        let mut targets = vec![0; offsets[n]];
        let mut weights = vec![0; offsets[n]];
        for e in ea.edges() {
            for (a, b) in [(e.u, e.v), (e.v, e.u)] {
                let slot = &mut cursor[a as usize];
                targets[*slot] = b;
                weights[*slot] = e.w;
                *slot += 1;
            }
        }

        Self { offsets, targets, weights, n, m: ea.num_edges() }
    }

    pub fn from_matrix(mat: &WghMatrix) -> Self {
        Self::from_edge_array(&WghEdgeArray::from_matrix(mat))
    }

    pub const fn num_vertices(&self) -> usize
    { self.n }

    /// Number of undirected edges.
    pub const fn num_edges(&self) -> usize
    { self.m }

    #[inline(always)]
    pub fn index(&self, i: usize) -> WghVertex<'_> {
        debug_assert!(i < self.n);

        let (of, of_next) = (self.offsets[i], self.offsets[i+1]);
        WghVertex {
            neighbors: &self.targets[of..of_next],
            weights: &self.weights[of..of_next],
            degree: of_next - of,
        }
    }
}
