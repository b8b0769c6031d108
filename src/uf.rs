use crate::error::PercolationError;
use crate::error::Result;

/// Weighted quick-union over the elements `0..len`.
///
/// The smaller tree always goes under the larger one, which keeps tree
/// height within O(log n). `find` does no path compression, so queries
/// only need a shared reference.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    tree_size: Vec<usize>,
    set_count: usize,
}

impl DisjointSetForest {
    pub fn new(n: usize) -> DisjointSetForest {
        DisjointSetForest {
            parent: (0..n).collect(),
            tree_size: vec![1; n],
            set_count: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    fn check(&self, p: usize) -> Result<()> {
        if p < self.len() {
            Ok(())
        } else {
            Err(PercolationError::IndexOutOfRange { index: p, lo: 0, hi: self.len() })
        }
    }

    pub fn find(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.root(p))
    }

    /// Unchecked `find` for indices the caller already knows are in range.
    pub(crate) fn root(&self, mut p: usize) -> usize {
        debug_assert!(p < self.len());
        while p != self.parent[p] {
            p = self.parent[p];
        }
        p
    }

    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the sets holding `p` and `q`. Returns `false` if they were
    /// already the same set. On a size tie `q`'s root goes under `p`'s.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let proot = self.find(p)?;
        let qroot = self.find(q)?;
        if proot == qroot {
            return Ok(false);
        }
        let (small, large) = if self.tree_size[proot] < self.tree_size[qroot] {
            (proot, qroot)
        } else {
            (qroot, proot)
        };
        self.parent[small] = large;
        self.tree_size[large] += self.tree_size[small];
        self.set_count -= 1;
        trace!("union {} {}: root {} under {}", p, q, small, large);
        Ok(true)
    }

    /// Number of elements in the set containing `p`.
    pub fn tree_size(&self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.tree_size[root])
    }

    pub fn parent(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.parent[p])
    }

    pub fn parents(&self) -> &[usize] {
        &self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSetForest;
    use crate::error::PercolationError;
    use quickcheck::quickcheck;

    #[test]
    fn test_one_class() {
        let mut ds = DisjointSetForest::new(10);
        ds.union(0, 1).unwrap();
        ds.union(2, 3).unwrap();
        ds.union(1, 2).unwrap();
        assert!(ds.connected(0, 3).unwrap());
        assert_eq!(ds.set_count(), 7);
        assert_eq!(ds.tree_size(3).unwrap(), 4);
        assert!(!ds.connected(0, 4).unwrap());
    }

    #[test]
    fn test_tie_goes_under_first() {
        let mut ds = DisjointSetForest::new(4);
        ds.union(0, 1).unwrap();
        assert_eq!(ds.parent(1).unwrap(), 0);
        ds.union(3, 2).unwrap();
        assert_eq!(ds.parent(2).unwrap(), 3);
        // Equal sizes again: the root of the second argument moves.
        ds.union(2, 1).unwrap();
        assert_eq!(ds.parent(0).unwrap(), 3);
        assert_eq!(ds.find(1).unwrap(), 3);
    }

    #[test]
    fn test_smaller_under_larger() {
        let mut ds = DisjointSetForest::new(5);
        ds.union(1, 2).unwrap();
        ds.union(1, 3).unwrap();
        ds.union(4, 1).unwrap();
        assert_eq!(ds.parent(4).unwrap(), 1);
        assert_eq!(ds.tree_size(4).unwrap(), 4);
    }

    #[test]
    fn test_redundant_union() {
        let mut ds = DisjointSetForest::new(3);
        assert!(ds.union(0, 2).unwrap());
        assert!(!ds.union(2, 0).unwrap());
        assert!(!ds.union(1, 1).unwrap());
        assert_eq!(ds.set_count(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut ds = DisjointSetForest::new(3);
        match ds.find(3) {
            Err(PercolationError::IndexOutOfRange { index: 3, lo: 0, hi: 3 }) => (),
            r => panic!("unexpected {:?}", r),
        }
        assert!(ds.union(0, 7).is_err());
        assert!(ds.connected(9, 0).is_err());
        assert_eq!(ds.set_count(), 3);
    }

    fn apply(n: usize, pairs: &[(u8, u8)]) -> (DisjointSetForest, bool) {
        let mut ds = DisjointSetForest::new(n);
        let mut counted = true;
        for &(p, q) in pairs {
            let (p, q) = (p as usize % n, q as usize % n);
            let before = ds.set_count();
            let merged = ds.union(p, q).unwrap();
            let expected = if merged { before - 1 } else { before };
            counted = counted && ds.set_count() == expected;
        }
        (ds, counted)
    }

    #[test]
    fn prop_set_count_drops_once_per_merge() {
        fn prop(pairs: Vec<(u8, u8)>) -> bool {
            apply(16, &pairs).1
        }
        quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
    }

    #[test]
    fn prop_connected_is_equivalence() {
        fn prop(pairs: Vec<(u8, u8)>) -> bool {
            let n = 12;
            let (ds, _) = apply(n, &pairs);
            let c = |p, q| ds.connected(p, q).unwrap();
            for a in 0..n {
                if !c(a, a) {
                    return false;
                }
                for b in 0..n {
                    if c(a, b) != c(b, a) {
                        return false;
                    }
                    for d in 0..n {
                        if c(a, b) && c(b, d) && !c(a, d) {
                            return false;
                        }
                    }
                }
            }
            true
        }
        quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
    }

    #[test]
    fn prop_sizes_match_partition() {
        fn prop(pairs: Vec<(u8, u8)>) -> bool {
            let n = 20;
            let (ds, _) = apply(n, &pairs);
            let roots: Vec<usize> = (0..n).map(|p| ds.find(p).unwrap()).collect();
            let nroots = (0..n).filter(|&p| roots[p] == p).count();
            nroots == ds.set_count()
                && (0..n).all(|p| {
                    let members = roots.iter().filter(|&&r| r == roots[p]).count();
                    ds.tree_size(p).unwrap() == members
                })
        }
        quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
    }
}
