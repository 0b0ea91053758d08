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

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::DefTotal;
use crate::graph::WghEdge;

const RULE: &str = "=================================";

pub fn print_edges_to<W: Write>(out: &mut W, title: &str, edges: &[WghEdge]) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:^33}", title)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Edges          Weight")?;
    writeln!(out, "-----          ------")?;
    for e in edges {
        writeln!(out, " {} - {}         {:2}", e.u, e.v, e.w)?;
    }
    Ok(())
}

/// One `(u) --w--> (v)` line per edge, parent first for trees.
pub fn print_tree_arrows_to<W: Write>(out: &mut W, edges: &[WghEdge]) -> io::Result<()> {
    for e in edges {
        writeln!(out, "({}) --{}--> ({})", e.u, e.w, e.v)?;
    }
    Ok(())
}

pub fn print_edges(title: &str, edges: &[WghEdge]) -> io::Result<()> {
    print_edges_to(&mut io::stdout().lock(), title, edges)
}

pub fn print_tree_arrows(edges: &[WghEdge]) -> io::Result<()> {
    print_tree_arrows_to(&mut io::stdout().lock(), edges)
}

/// What one run did to one input.
#[derive(Clone, Debug)]
pub struct Summary<'a> {
    pub algorithm: &'a str,
    pub input: &'a str,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub total_weight: DefTotal,
    pub tree_edges: usize,
    pub tree_weight: DefTotal,
}

impl Summary<'_> {
    pub fn is_spanning_tree(&self) -> bool {
        self.num_vertices > 0 && self.tree_edges + 1 == self.num_vertices
    }
}

pub fn write_summary_to<W: Write>(out: &mut W, s: &Summary) -> io::Result<()> {
    writeln!(out, "== {} on {}", s.algorithm, s.input)?;
    writeln!(out, "vertices:               {}", s.num_vertices)?;
    writeln!(out, "edges before:           {}", s.num_edges)?;
    writeln!(out, "total weight before:    {}", s.total_weight)?;
    writeln!(out, "edges after:            {}", s.tree_edges)?;
    writeln!(out, "total weight after:     {}", s.tree_weight)?;
    writeln!(out, "spanning tree:          {}", if s.is_spanning_tree() { "yes" } else { "no" })?;
    writeln!(out)
}

/// Appends `s` to the log at `path`, creating it if needed.
pub fn append_summary<P: AsRef<Path>>(path: P, s: &Summary) -> io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    write_summary_to(&mut f, s)
}
