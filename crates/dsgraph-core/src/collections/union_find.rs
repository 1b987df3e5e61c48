//! Disjoint-set forest
//!
//! Union by rank with path compression. Elements are mapped to dense indices
//! on [`UnionFind::make_set`].

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint sets over hashable elements
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    index: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl<T: Hash + Eq + Copy> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Copy> UnionFind<T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Number of disjoint sets currently tracked
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Add `element` as a singleton set; a no-op if it is already tracked
    pub fn make_set(&mut self, element: T) {
        if self.index.contains_key(&element) {
            return;
        }
        let id = self.parent.len();
        self.index.insert(element, id);
        self.parent.push(id);
        self.rank.push(0);
        self.sets += 1;
    }

    /// Representative index of the set containing `element`
    pub fn find(&mut self, element: T) -> Option<usize> {
        let id = *self.index.get(&element)?;
        Some(self.root(id))
    }

    /// Merge the sets of `a` and `b`
    ///
    /// Returns `false` when they were already in the same set or either
    /// element is unknown.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    fn root(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_distinct() {
        let mut uf = UnionFind::new();
        for x in 0..4 {
            uf.make_set(x);
        }
        assert_eq!(uf.set_count(), 4);
        assert_ne!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(9), None);
    }

    #[test]
    fn test_union_merges_and_detects_cycles() {
        let mut uf = UnionFind::new();
        for x in ["a", "b", "c", "d"] {
            uf.make_set(x);
        }
        assert!(uf.union("a", "b"));
        assert!(uf.union("c", "d"));
        assert!(uf.union("b", "d"));
        assert!(!uf.union("a", "c"));

        assert_eq!(uf.find("a"), uf.find("d"));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_make_set_is_idempotent() {
        let mut uf = UnionFind::new();
        uf.make_set(1);
        uf.make_set(2);
        uf.union(1, 2);
        uf.make_set(1);
        assert_eq!(uf.set_count(), 1);
        assert!(!uf.union(1, 3));
    }
}
