//! Minimal union-find over a fixed-size integer domain.
//!
//! The component grouper and the hour-local compositor both merge events by
//! index, so the domain size is known up front and never grows. Path
//! halving plus union by size keeps finds effectively constant-time.

/// Disjoint sets over the indices `0..len`.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl UnionFind {
    /// Every index starts in its own singleton set.
    pub fn new(len: usize) -> UnionFind {
        return UnionFind {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
        };
    }

    /// Number of elements in the domain.
    pub fn len(&self) -> usize {
        return self.parent.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.parent.is_empty();
    }

    /// Representative of the set containing `x`, with path halving.
    pub fn find(&mut self, x: usize) -> usize {
        let mut x = x as u32;
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        return x as usize;
    }

    /// Merge the sets containing `a` and `b`. Returns the surviving root.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return ra;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra as u32;
        self.size[ra] += self.size[rb];
        return ra;
    }

    /// True if `a` and `b` are in the same set.
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        return self.find(a) == self.find(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_disjoint() {
        let mut uf = UnionFind::new(4);
        assert!(!uf.same(0, 1));
        assert!(uf.same(2, 2));
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(1, 2);
        assert!(uf.same(0, 2));
        assert!(!uf.same(0, 3));
    }

    #[test]
    fn union_by_size_keeps_one_root() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        let root = uf.find(0);
        for i in 0..4 {
            assert_eq!(uf.find(i), root);
        }
        assert_ne!(uf.find(4), root);
    }

    #[test]
    fn empty_domain() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.len(), 0);
    }
}
