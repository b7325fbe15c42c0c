//! Disjoint-set forest with path compression and union by rank.

/// A partition of `0..n` into disjoint sets.
///
/// # Examples
///
/// ```
/// use city_route::graph::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0)); // already joined
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of `x`'s set, re-pointing every node on the
    /// path directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of bounds.
    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set. The root with
    /// lower rank goes under the other; on a tie `x`'s root becomes the parent.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(3);
        for i in 0..3 {
            assert_eq!(uf.find(i), i);
        }
        assert_eq!(uf.len(), 3);
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn test_union_by_rank_tie() {
        let mut uf = UnionFind::new(2);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);
        assert_eq!(uf.rank[1], 0);
    }

    #[test]
    fn test_lower_rank_goes_under() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1); // root 0, rank 1
        assert!(uf.union(2, 0)); // rank(2)=0 < rank(0)=1
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank[0], 1);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(4);
        // Build a chain 3 -> 2 -> 1 -> 0 by hand
        uf.parent = vec![0, 0, 1, 2];
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_cycle_detection() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
        assert!(uf.connected(2, 0));
    }
}
