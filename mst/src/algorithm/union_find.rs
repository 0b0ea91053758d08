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

use std::cmp::Ordering;

use crate::DefInt;

/// Disjoint sets over `[0, n)` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<DefInt>,
    ranks: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        let mut uf = Self {
            parents: vec![0; n],
            ranks: vec![0; n],
            sets: n,
        };
        for u in 0..n { uf.make_set(u as DefInt); }
        uf
    }

    /// Makes `u` a singleton root. Only valid before `u` takes part in a
    /// union.
    pub fn make_set(&mut self, u: DefInt) {
        self.parents[u as usize] = u;
        self.ranks[u as usize] = 0;
    }

    pub fn len(&self) -> usize
    { self.parents.len() }

    pub fn is_empty(&self) -> bool
    { self.parents.is_empty() }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize
    { self.sets }

    fn is_root(&self, u: DefInt) -> bool {
        self.parents[u as usize] == u
    }

    pub fn find(&mut self, u: DefInt) -> DefInt {
        debug_assert!((u as usize) < self.len());

        let mut root = u;
        while !self.is_root(root) { root = self.parents[root as usize]; }

        // point the whole path straight at the root
        let mut u = u;
        while u != root {
            let p = self.parents[u as usize];
            self.parents[u as usize] = root;
            u = p;
        }
        root
    }

    pub fn same_set(&mut self, u: DefInt, v: DefInt) -> bool {
        self.find(u) == self.find(v)
    }

    /// Links two distinct roots and returns the root of the merged set.
    pub fn union_roots(&mut self, u: DefInt, v: DefInt) -> DefInt {
        debug_assert!(self.is_root(u) && self.is_root(v) && u != v);

        let (ru, rv) = (self.ranks[u as usize], self.ranks[v as usize]);
        let (root, child) = match ru.cmp(&rv) {
            Ordering::Less => (v, u),
            Ordering::Greater => (u, v),
            Ordering::Equal => {
                self.ranks[u as usize] += 1;
                (u, v)
            }
        };
        self.parents[child as usize] = root;
        self.sets -= 1;
        root
    }

    /// Merges the sets of `u` and `v`. Returns `false` if they were already
    /// the same set.
    pub fn union(&mut self, u: DefInt, v: DefInt) -> bool {
        let (u, v) = (self.find(u), self.find(v));
        if u == v { return false; }
        self.union_roots(u, v);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_compresses_the_whole_path() {
        // union by rank never builds a long chain, so link by hand
        let n = 6;
        let mut uf = UnionFind::new(n);
        for u in 1..n { uf.parents[u] = (u - 1) as DefInt; }

        assert_eq!(uf.find((n - 1) as DefInt), 0);
        assert!(uf.parents.iter().all(|&p| p == 0));
    }

    #[test]
    fn find_compresses_after_unions() {
        let mut uf = UnionFind::new(4);
        let r01 = uf.union_roots(0, 1);
        let r23 = uf.union_roots(2, 3);
        let root = uf.union_roots(r01, r23);
        let deep = if root == 0 { 3 } else { 1 };
        assert_ne!(uf.parents[deep], root);

        assert_eq!(uf.find(deep as DefInt), root);
        for u in 0..4 {
            assert_eq!(uf.parents[u], root, "vertex {u}");
        }
    }

    #[test]
    fn equal_ranks_raise_the_surviving_root() {
        let mut uf = UnionFind::new(3);
        let root = uf.union_roots(0, 1);
        let child = if root == 0 { 1 } else { 0 };

        assert_eq!(uf.ranks[root as usize], 1);
        assert_eq!(uf.ranks[child], 0);
        assert_eq!(uf.parents[child], root);

        // a lower rank goes under without raising the root
        assert_eq!(uf.union_roots(root, 2), root);
        assert_eq!(uf.ranks[root as usize], 1);
        assert_eq!(uf.ranks[2], 0);
    }
}
