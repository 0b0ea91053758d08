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

#[path ="../macros.rs"] mod macros;

use std::time::Duration;

use mst::{DefInt, DefTotal};
use mst::common::graph::{WghEdge, WghEdgeArray, WghGraph};
use mst::common::graph_io::{demo_edge_array, read_graph};
use mst::common::io::write_edges_to_file;
use mst::common::report::{self, Summary};
use mst::common::time_loop::time_loop;
use mst::common::timer::Timer;
use mst::mst::{kruskal, prim, MstError, Strategy};

define_args!(
    Algs::KRUSKAL,
    (root, DefInt, 0),
    (log, String, ("").to_string())
);

define_algs!(
    (KRUSKAL, "kruskal"),
    (PRIMSCAN, "primscan"),
    (PRIMHEAP, "primheap")
);

pub fn run(
    alg: Algs,
    rounds: usize,
    ea: &WghEdgeArray,
    root: DefInt
) -> Result<(Vec<WghEdge>, DefTotal, Duration), MstError>
{
    let g = match alg {
        Algs::KRUSKAL => None,
        _ => Some(WghGraph::from_edge_array(ea)),
    };
    if let Some(g) = &g { prim::check_root(g, root)?; }
    let mut r = Ok((vec![], 0));

    let mean = time_loop(
        "mst",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match (alg, &g) {
                (Algs::PRIMSCAN, Some(g)) => prim::minimum_spanning_tree(g, root, Strategy::LinearScan)
                    .map(|t| (t.edges(), t.total_weight)),
                (Algs::PRIMHEAP, Some(g)) => prim::minimum_spanning_tree(g, root, Strategy::PriorityQueue)
                    .map(|t| (t.edges(), t.total_weight)),
                _ => {
                    let f = kruskal::minimum_spanning_forest(ea);
                    Ok((f.edges, f.total_weight))
                }
            };
        },
        || {}
    );

    let (edges, w) = r?;
    Ok((edges, w, mean))
}

fn main() {
    let args = Args::parse();

    let mut t = Timer::new("mst_time"); t.start();
    let (ea, input) = match &args.ifname {
        Some(f) => match read_graph(f) {
            Ok((ea, _)) => (ea, f.as_str()),
            Err(e) => { eprintln!("{f}: {e}"); std::process::exit(1); }
        },
        None => (demo_edge_array(), "example graph"),
    };
    t.next("reading input");

    let (r, w, d) = run(args.algorithm, args.rounds, &ea, args.root)
        .unwrap_or_else(|e| { eprintln!("{e}"); std::process::exit(1); });

    if ea.num_edges() <= 20 {
        report::print_edges("ORIGINAL GRAPH", ea.edges()).ok();
        println!();
    }

    finalize!(
        args,
        r,
        d,
        write_edges_to_file(&r, &args.ofname),
        {
            report::print_edges("MINIMUM SPANNING TREE", &r).ok();
            println!("\nTree:");
            report::print_tree_arrows(&r).ok();
        }
    );
    println!("edges: {}  weight: {}", r.len(), w);

    if !args.log.is_empty() {
        let alg = args.algorithm.to_string();
        let summary = Summary {
            algorithm: &alg,
            input,
            num_vertices: ea.num_vertices(),
            num_edges: ea.num_edges(),
            total_weight: ea.total_weight(),
            tree_edges: r.len(),
            tree_weight: w,
        };
        if let Err(e) = report::append_summary(&args.log, &summary) {
            eprintln!("cannot append to {}: {e}", args.log);
            std::process::exit(1);
        }
    }
}
