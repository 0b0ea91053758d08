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

//! Reader for XML adjacency documents.
//!
//! Every `<vertex>` element, in document order, is one vertex. Its
//! `<edge cost="c">t</edge>` children connect it to the 1-based vertex `t`
//! at cost `c`, which may be fractional and is truncated to an integer:
//!
//! ```xml
//! <graph>
//!   <vertex>
//!     <edge cost="2.000000000000000e+00">2</edge>
//!   </vertex>
//!   <vertex>
//!     <edge cost="2.000000000000000e+00">1</edge>
//!   </vertex>
//! </graph>
//! ```

use std::fs;
use std::path::Path;

use crate::verbose_println;
use super::graph::{WghMatrix, truncate_weight};
use super::graph_io::{Diagnostics, GraphIoError};

const VERTEX_TAG: &str = "vertex";
const EDGE_TAG: &str = "edge";
const COST_ATTR: &str = "cost";

pub fn parse_wgh_matrix_from_xml(text: &str) -> Result<(WghMatrix, Diagnostics), GraphIoError> {
    let doc = roxmltree::Document::parse(text)?;
    let vertices: Vec<_> = doc
        .descendants()
        .filter(|x| x.has_tag_name(VERTEX_TAG))
        .collect();
    let n = vertices.len();
    verbose_println!("xml: {n} vertices");

    let mut mat = WghMatrix::new(n);
    let mut diag = Diagnostics::default();

    for (i, vx) in vertices.iter().enumerate() {
        for e in vx.children().filter(|x| x.has_tag_name(EDGE_TAG)) {
            let target = e.text().unwrap_or("").trim();
            let j = match target.parse::<usize>() {
                Ok(t) if (1..=n).contains(&t) => t - 1,
                Ok(t) => {
                    diag.skip(format!("vertex {i}: target {t} is not in 1..={n}"));
                    continue;
                }
                Err(_) => {
                    diag.skip(format!("vertex {i}: malformed target {target:?}"));
                    continue;
                }
            };
            if j == i {
                diag.skip(format!("vertex {i}: edge to itself"));
                continue;
            }

            let cost = e.attribute(COST_ATTR).unwrap_or("").trim();
            let w = match cost.parse::<f64>().ok().and_then(truncate_weight) {
                Some(0) => {
                    diag.skip(format!("vertex {i}: cost {cost} to {target} truncates to 0"));
                    continue;
                }
                Some(w) => w,
                None => {
                    diag.skip(format!("vertex {i}: malformed cost {cost:?} to {target}"));
                    continue;
                }
            };

            match mat.get(i, j) {
                0 => mat.set(i, j, w),
                old if old == w => {}
                old => diag.skip(format!(
                    "vertex {i}: cost {w} to {target} contradicts earlier weight {old}"
                )),
            }
        }
    }

    Ok((mat, diag))
}

pub fn read_wgh_matrix_from_xml<P: AsRef<Path>>(
    fname: P
) -> Result<(WghMatrix, Diagnostics), GraphIoError>
{
    parse_wgh_matrix_from_xml(&fs::read_to_string(fname)?)
}
