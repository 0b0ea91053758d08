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

use mst::graph::{WghEdgeArray, WghGraph};
use mst::common::graph_io::{demo_edge_array, demo_matrix};
use mst::mst::{MstError, Strategy};
use mst::mst::prim::{check_root, minimum_spanning_tree, minimum_spanning_tree_heap, minimum_spanning_tree_linear};

use common::{edge_array, normalized};

const STRATEGIES: [Strategy; 2] = [Strategy::LinearScan, Strategy::PriorityQueue];


#[test]
fn example_graph_from_root_zero() {
    let g = WghGraph::from_matrix(&demo_matrix());
    for s in STRATEGIES {
        let t = minimum_spanning_tree(&g, 0, s).unwrap();
        assert_eq!(t.total_weight, 16);
        assert_eq!(t.parents, vec![None, Some(0), Some(1), Some(0), Some(1)]);
        assert_eq!(t.keys, vec![Some(0), Some(2), Some(3), Some(6), Some(5)]);
        assert!(t.is_spanning_tree());
    }
}


#[test]
fn example_graph_from_any_root() {
    let g = WghGraph::from_edge_array(&demo_edge_array());
    for s in STRATEGIES {
        for root in 0..5 {
            let t = minimum_spanning_tree(&g, root, s).unwrap();
            assert_eq!(t.root, root);
            assert_eq!(t.total_weight, 16);
            assert_eq!(
                normalized(&t.edges()),
                vec![(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 4, 5)]
            );
        }
    }
}


#[test]
fn linear_scan_breaks_ties_by_index() {
    let g = WghGraph::from_edge_array(&edge_array(3, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]));
    let t = minimum_spanning_tree_linear(&g, 0).unwrap();
    assert_eq!(t.parents, vec![None, Some(0), Some(0)]);
}


#[test]
fn heap_discards_stale_entries() {
    // the key of 1 drops from 10 to 2 after 2 joins the tree
    let g = WghGraph::from_edge_array(&edge_array(3, &[(0, 1, 10), (0, 2, 1), (2, 1, 2)]));
    let t = minimum_spanning_tree_heap(&g, 0).unwrap();
    assert_eq!(t.parents, vec![None, Some(2), Some(0)]);
    assert_eq!(t.total_weight, 3);
    assert_eq!(minimum_spanning_tree_linear(&g, 0).unwrap(), t);
}


#[test]
fn zero_weight_edges() {
    let g = WghGraph::from_edge_array(&edge_array(3, &[(0, 1, 0), (1, 2, 5), (0, 2, 7)]));
    for s in STRATEGIES {
        let t = minimum_spanning_tree(&g, 2, s).unwrap();
        assert_eq!(t.total_weight, 5);
        assert_eq!(normalized(&t.edges()), vec![(0, 1, 0), (1, 2, 5)]);
    }
}


#[test]
fn single_vertex() {
    let g = WghGraph::from_edge_array(&WghEdgeArray::new(vec![], 1).unwrap());
    for s in STRATEGIES {
        let t = minimum_spanning_tree(&g, 0, s).unwrap();
        assert_eq!(t.num_edges(), 0);
        assert_eq!(t.total_weight, 0);
        assert!(t.is_spanning_tree());
    }
}


#[test]
fn root_out_of_range() {
    let g = WghGraph::from_edge_array(&demo_edge_array());
    let empty = WghGraph::from_edge_array(&WghEdgeArray::new(vec![], 0).unwrap());
    for s in STRATEGIES {
        assert_eq!(
            minimum_spanning_tree(&g, 5, s),
            Err(MstError::RootOutOfRange { root: 5, n: 5 })
        );
        assert_eq!(
            minimum_spanning_tree(&empty, 0, s),
            Err(MstError::RootOutOfRange { root: 0, n: 0 })
        );
    }
}


#[test]
fn root_checked_up_front() {
    let g = WghGraph::from_edge_array(&demo_edge_array());
    assert_eq!(check_root(&g, 4), Ok(()));
    assert_eq!(check_root(&g, 9), Err(MstError::RootOutOfRange { root: 9, n: 5 }));
}


#[test]
fn only_the_root_component_is_spanned() {
    // {0, 1, 2} and {3, 4, 5, 6}
    let g = WghGraph::from_edge_array(&edge_array(7, &[
        (0, 1, 4), (1, 2, 1), (0, 2, 2),
        (3, 4, 1), (4, 5, 1), (5, 6, 1), (3, 6, 9),
    ]));
    for s in STRATEGIES {
        let a = minimum_spanning_tree(&g, 1, s).unwrap();
        assert_eq!(a.num_edges(), 3 - 1);
        assert_eq!(a.total_weight, 3);
        assert!(!a.is_spanning_tree());
        for v in 3..7 {
            assert!(!a.reached(v));
            assert_eq!(a.parents[v as usize], None);
        }
        assert!(a.edges().iter().all(|e| e.u < 3 && e.v < 3));

        let b = minimum_spanning_tree(&g, 6, s).unwrap();
        assert_eq!(b.num_edges(), 4 - 1);
        assert_eq!(b.total_weight, 3);
        assert!((0..3).all(|v| !b.reached(v)));
    }
}
