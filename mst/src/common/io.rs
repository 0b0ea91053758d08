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

use std::{fs, io, io::prelude::*};
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;

use crate::graph::WghEdge;
use super::graph_io::WGH_EDGE_ARRAY_HEADER;

/// Splits `s` into lines and parses them in parallel, keeping line order.
/// Blank lines are dropped; a line that does not parse is returned as
/// `Err` with its 1-based line number.
pub fn parse_lines<T>(s: &str) -> Vec<Result<T, usize>>
where
    T: FromStr + Send,
{
    let w: Vec<_> = s.par_split('\n').collect();
    w
        .into_par_iter()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| l.trim().parse().map_err(|_| i + 1))
        .collect()
}

/// Writes `edges` in the weighted edge array format.
pub fn write_edges_to<W: Write>(out: &mut W, edges: &[WghEdge]) -> io::Result<()> {
    writeln!(out, "{WGH_EDGE_ARRAY_HEADER}")?;
    for e in edges { writeln!(out, "{e}")?; }
    Ok(())
}

pub fn write_edges_to_file<P: AsRef<Path>>(edges: &[WghEdge], of: P) -> io::Result<()> {
    let mut f = io::BufWriter::new(fs::File::create(of)?);
    write_edges_to(&mut f, edges)?;
    f.flush()
}
