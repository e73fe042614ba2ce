/// A disjoint-set (union-find) over `usize` element identifiers.
///
/// Sets merge with union by rank and are queried with a path compressing
/// `find`. Both optimisations together give near constant amortised cost
/// per operation (the inverse-Ackermann bound); either one alone does not.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    /// Create `count` singleton sets, each element its own root with rank 0.
    pub fn new(count: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..count).collect(),
            rank: vec![0; count],
        }
    }

    /// The number of elements in the universe, not the number of sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The representative element of the set containing `p`.
    ///
    /// Every element walked on the way to the root is left pointing directly
    /// at the root, so later finds along the same chain are a single hop.
    ///
    /// Panics if `p` is not a valid element index.
    pub fn find(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: repoint the walked chain at the discovered root.
        let mut current = p;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// The shallower ranked tree is attached under the deeper one. On a rank
    /// tie `q`'s root goes under `p`'s root and the surviving root's rank
    /// grows by one. Merging two elements already in one set changes nothing
    /// beyond the path compression performed by the two finds.
    ///
    /// Panics if `p` or `q` is not a valid element index.
    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }

        if self.rank[root_q] > self.rank[root_p] {
            self.parent[root_p] = root_q;
        } else {
            if self.rank[root_p] == self.rank[root_q] {
                self.rank[root_p] += 1;
            }
            self.parent[root_q] = root_p;
        }
    }

    /// Are `p` and `q` members of the same set?
    ///
    /// Panics if `p` or `q` is not a valid element index.
    pub fn is_connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}
