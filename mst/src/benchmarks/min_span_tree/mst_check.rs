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

use clap::Parser;

use mst::common::graph_io::{read_graph, read_wgh_edges_from_file};
use mst::mst::check::check_spanning_forest;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// mst results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

fn main() {
    let args = Args::parse();
    let (ea, _) = read_graph(&args.ifname)
        .unwrap_or_else(|e| { eprintln!("{}: {e}", args.ifname); std::process::exit(1); });
    let (r, _) = read_wgh_edges_from_file(&args.rfname)
        .unwrap_or_else(|e| { eprintln!("{}: {e}", args.rfname); std::process::exit(1); });

    match check_spanning_forest(&ea, &r) {
        Ok(()) => println!("OK"),
        Err(e) => { eprintln!("mst_check: {e}"); println!("ERR"); std::process::exit(1); }
    }
}
