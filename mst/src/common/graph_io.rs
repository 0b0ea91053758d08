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
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::verbose_println;
use super::graph::*;
use super::io::parse_lines;
use super::xml_io::read_wgh_matrix_from_xml;

pub const WGH_EDGE_ARRAY_HEADER: &str = "WeightedEdgeArray";

/// Largest allowed ratio of vertex ids to edge endpoints in a weighted
/// edge array text.
pub const SPARSE_ID_FACTOR: usize = 16;

#[derive(Debug)]
pub enum GraphIoError {
    Io(std::io::Error),
    Xml(roxmltree::Error),
    Header { expected: &'static str, found: String },
    Graph(GraphError),
    /// `n` vertex ids for only `m` edges.
    SparseIds { n: usize, m: usize },
}

impl fmt::Display for GraphIoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read input: {e}"),
            Self::Xml(e) => write!(f, "malformed xml: {e}"),
            Self::Header { expected, found } =>
                write!(f, "expected header {expected:?}, found {found:?}"),
            Self::Graph(e) => write!(f, "invalid graph: {e}"),
            Self::SparseIds { n, m } =>
                write!(f, "vertex ids up to {} are too sparse for {m} edges", n - 1),
        }
    }
}

impl std::error::Error for GraphIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::Graph(e) => Some(e),
            Self::Header { .. } | Self::SparseIds { .. } => None,
        }
    }
}

impl From<std::io::Error> for GraphIoError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

impl From<roxmltree::Error> for GraphIoError {
    fn from(e: roxmltree::Error) -> Self { Self::Xml(e) }
}

impl From<GraphError> for GraphIoError {
    fn from(e: GraphError) -> Self { Self::Graph(e) }
}

/// Input entries that were dropped while reading a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub skipped: Vec<String>,
}

impl Diagnostics {
    /// Records a skipped entry and reports it on stderr.
    pub fn skip(&mut self, msg: String) {
        eprintln!("skipping {msg}");
        self.skipped.push(msg);
    }

    pub fn len(&self) -> usize
    { self.skipped.len() }

    pub fn is_empty(&self) -> bool
    { self.skipped.is_empty() }
}

/// Parses the `u v w` lines that follow a `WeightedEdgeArray` header.
/// Malformed lines are skipped.
pub fn parse_wgh_edges(s: &str) -> Result<(Vec<WghEdge>, Diagnostics), GraphIoError> {
    let (head, body) = s.split_once('\n').unwrap_or((s, ""));
    if head.trim() != WGH_EDGE_ARRAY_HEADER {
        return Err(GraphIoError::Header {
            expected: WGH_EDGE_ARRAY_HEADER,
            found: head.trim().to_string(),
        });
    }

    let mut diag = Diagnostics::default();
    let es = parse_lines::<WghEdge>(body)
        .into_iter()
        .filter_map(|r| match r {
            Ok(e) => Some(e),
            Err(line) => {
                // line numbers of `body` start after the header
                diag.skip(format!("line {}: malformed edge", line + 1));
                None
            }
        })
        .collect();
    Ok((es, diag))
}

/// Builds a simple graph from a weighted edge array text. `n` is one past
/// the largest endpoint and may be at most `SPARSE_ID_FACTOR` times the
/// number of endpoints. Self loops and repeated vertex pairs are skipped;
/// the first edge of a pair wins.
pub fn parse_wgh_edge_array(s: &str) -> Result<(WghEdgeArray, Diagnostics), GraphIoError> {
    let (es, mut diag) = parse_wgh_edges(s)?;

    let n = es
        .par_iter()
        .map(|e| e.u.max(e.v) as usize + 1)
        .reduce(|| 0, usize::max);

    let mut seen = HashSet::with_capacity(es.len());
    let es: Vec<WghEdge> = es
        .into_iter()
        .filter(|e| {
            if e.u == e.v {
                diag.skip(format!("self loop on vertex {}", e.u));
                false
            } else if !seen.insert(e.endpoints()) {
                diag.skip(format!("repeated edge ({}, {})", e.u, e.v));
                false
            } else { true }
        })
        .collect();

    if n > SPARSE_ID_FACTOR * (2 * es.len()).max(1) {
        return Err(GraphIoError::SparseIds { n, m: es.len() });
    }

    verbose_println!("extracted graph n={} m={}", n, es.len());
    Ok((WghEdgeArray::new(es, n)?, diag))
}

pub fn read_wgh_edges_from_file<P: AsRef<Path>>(
    fname: P
) -> Result<(Vec<WghEdge>, Diagnostics), GraphIoError>
{
    parse_wgh_edges(&fs::read_to_string(fname)?)
}

pub fn read_wgh_edge_array_from_file<P: AsRef<Path>>(
    fname: P
) -> Result<(WghEdgeArray, Diagnostics), GraphIoError>
{
    parse_wgh_edge_array(&fs::read_to_string(fname)?)
}

/// Reads an XML adjacency document (`.xml`) or a weighted edge array.
pub fn read_graph<P: AsRef<Path>>(fname: P) -> Result<(WghEdgeArray, Diagnostics), GraphIoError> {
    let fname = fname.as_ref();
    let is_xml = fname
        .extension()
        .map_or(false, |x| x.eq_ignore_ascii_case("xml"));

    if is_xml {
        let (mat, diag) = read_wgh_matrix_from_xml(fname)?;
        Ok((WghEdgeArray::from_matrix(&mat), diag))
    } else {
        read_wgh_edge_array_from_file(fname)
    }
}

/// Five vertices and seven edges; the minimum spanning tree is
/// `{(0,1,2), (1,2,3), (1,4,5), (0,3,6)}` with weight 16.
pub fn demo_matrix() -> WghMatrix {
    let mut mat = WghMatrix::new(5);
    for (u, v, w) in [(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 8), (1, 4, 5), (2, 4, 7), (3, 4, 9)] {
        mat.set(u, v, w);
    }
    mat
}

pub fn demo_edge_array() -> WghEdgeArray {
    WghEdgeArray::from_matrix(&demo_matrix())
}
