/// Disjoint sets over `0..size`, with path compression.
///
/// Unions attach the first root under the second; without ranks the trees can get
/// deep between compressions, so `find` walks iteratively instead of recursing.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the walked path straight at the root
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already the same set.
    pub(crate) fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }
        self.parent[root_x] = root_y;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert_ne!(uf.find(0), uf.find(1));
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(uf.unite(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
        // Already connected
        assert!(!uf.unite(3, 0));
        assert_ne!(uf.find(4), uf.find(0));
        assert_eq!(uf.find(5), 5);
    }

    #[test]
    fn test_long_chain_is_compressed() {
        let size = 10_000;
        let mut uf = UnionFind::new(size);
        for i in 0..size - 1 {
            uf.unite(i, i + 1);
        }
        let root = uf.find(0);
        assert_eq!(root, size - 1);
        assert_eq!(uf.parent[0], root);
    }
}
