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

mod common;

use mst::graph::WghGraph;
use mst::mst::Strategy;
use mst::mst::check::check_spanning_forest;
use mst::mst::kruskal::minimum_spanning_forest;
use mst::mst::prim::minimum_spanning_tree;

use common::{normalized, random_connected, random_distinct, random_permutation};

const STRATEGIES: [Strategy; 2] = [Strategy::LinearScan, Strategy::PriorityQueue];


#[test]
fn all_engines_agree_on_weight() {
    for seed in 0..20 {
        let n = 10 + 7 * seed as usize;
        // few distinct weights, so many minimum trees exist
        let ea = random_connected(seed, n, 3 * n, 5);
        let g = WghGraph::from_edge_array(&ea);

        let msf = minimum_spanning_forest(&ea);
        assert_eq!(msf.num_edges(), n - 1);
        check_spanning_forest(&ea, &msf.edges).unwrap();

        for s in STRATEGIES {
            for root in [0, n / 2, n - 1] {
                let t = minimum_spanning_tree(&g, root as u32, s).unwrap();
                assert_eq!(t.num_edges(), n - 1);
                assert_eq!(t.total_weight, msf.total_weight, "seed {seed} root {root} {s:?}");
                check_spanning_forest(&ea, &t.edges()).unwrap();
            }
        }
    }
}


#[test]
fn distinct_weights_give_one_tree() {
    for seed in 0..10 {
        let n = 40;
        let ea = random_distinct(seed, n, 100);
        let g = WghGraph::from_edge_array(&ea);

        let expected = normalized(&minimum_spanning_forest(&ea).edges);
        for s in STRATEGIES {
            let t = minimum_spanning_tree(&g, seed as u32, s).unwrap();
            assert_eq!(normalized(&t.edges()), expected);
        }
    }
}


#[test]
fn repeated_runs_are_identical() {
    let ea = random_distinct(99, 60, 200);
    let g = WghGraph::from_edge_array(&ea);

    let a = minimum_spanning_forest(&ea);
    let b = minimum_spanning_forest(&ea);
    assert_eq!(a.edges, b.edges);
    assert_eq!(a.total_weight, b.total_weight);

    for s in STRATEGIES {
        assert_eq!(
            minimum_spanning_tree(&g, 3, s).unwrap(),
            minimum_spanning_tree(&g, 3, s).unwrap()
        );
    }
}


#[test]
fn weight_survives_relabeling() {
    for seed in 0..10 {
        let n = 30;
        let ea = random_connected(seed, n, 60, 8);
        let relabeled = ea.relabel(&random_permutation(seed + 100, n)).unwrap();
        let w = minimum_spanning_forest(&ea).total_weight;

        assert_eq!(minimum_spanning_forest(&relabeled).total_weight, w);
        let g = WghGraph::from_edge_array(&relabeled);
        for s in STRATEGIES {
            assert_eq!(minimum_spanning_tree(&g, 0, s).unwrap().total_weight, w);
        }
    }
}
