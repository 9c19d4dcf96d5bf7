//! Weighted quick-union by height, without path compression.
//!
//! Sites `0..n` live in a forest stored as two flat arrays: `parent[i]` links
//! each site to its parent and `height[r]` records the height of the tree
//! rooted at `r`. Union always hangs the shorter tree under the taller one,
//! so no tree ever grows beyond `floor(log2(n))` and `find` is O(log n)
//! without rewriting any links.
//!
//! ```
//! use heightuf::union_find::HeightUnionFind;
//!
//! let mut uf = HeightUnionFind::new(10);
//! uf.union(4, 3).unwrap();
//! uf.union(3, 8).unwrap();
//! assert!(uf.connected(4, 8).unwrap());
//! assert_eq!(uf.count(), 8);
//! ```
use std::cmp::Ordering;

use crate::error::{Result, UnionFindError};

/// Union-Find (Disjoint Sets) weighted by tree height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightUnionFind {
    parent: Vec<usize>,
    // Only read for roots; entries for linked sites are stale.
    height: Vec<usize>,
    count: usize,
}

impl HeightUnionFind {
    /// Create a new HeightUnionFind with n isolated sites
    pub fn new(n: usize) -> Self {
        HeightUnionFind {
            parent: (0..n).collect(),
            height: vec![0; n],
            count: n,
        }
    }

    /// Create from a signed size, rejecting negative sizes.
    ///
    /// Unlike `new`, a size whose arrays cannot be allocated is reported as
    /// `TooLarge` instead of aborting.
    pub fn create(n: i64) -> Result<Self> {
        let len = usize::try_from(n).map_err(|_| UnionFindError::InvalidArgument { size: n })?;
        let too_large = |_| UnionFindError::TooLarge { size: n };

        let mut parent = Vec::new();
        parent.try_reserve_exact(len).map_err(too_large)?;
        let mut height = Vec::new();
        height.try_reserve_exact(len).map_err(too_large)?;

        parent.extend(0..len);
        height.resize(len, 0);
        Ok(HeightUnionFind {
            parent,
            height,
            count: len,
        })
    }

    /// Number of sites in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of components
    pub fn count(&self) -> usize {
        self.count
    }

    /// Convert a signed index into a checked site.
    ///
    /// Callers reading indices from text use this to reject negatives and
    /// values past the end before touching the forest.
    pub fn site(&self, raw: i64) -> Result<usize> {
        match usize::try_from(raw) {
            Ok(p) if p < self.len() => Ok(p),
            _ => Err(UnionFindError::IndexOutOfRange {
                index: raw.into(),
                len: self.len(),
            }),
        }
    }

    fn check(&self, p: usize) -> Result<()> {
        if p < self.len() {
            Ok(())
        } else {
            Err(UnionFindError::IndexOutOfRange {
                index: p as i128,
                len: self.len(),
            })
        }
    }

    /// Find the root of site p.
    ///
    /// Walks parent links to the root without compressing the path, so the
    /// forest shape (and every root's height) is left exactly as union built
    /// it.
    pub fn find(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        let mut p = p;
        while self.parent[p] != p {
            p = self.parent[p];
        }
        Ok(p)
    }

    /// Check if two sites are in the same component
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components containing p and q.
    ///
    /// Both roots are resolved before anything is written, so an
    /// out-of-range site leaves the forest untouched. Returns `true` when two
    /// components were merged and `false` when p and q were already
    /// connected.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(false);
        }

        // Shorter tree goes under the taller one; ties hang q's root under p's.
        match self.height[root_p].cmp(&self.height[root_q]) {
            Ordering::Less => {
                self.parent[root_p] = root_q;
                self.height[root_p] = self.height[root_q];
            }
            Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.height[root_q] += 1;
                self.height[root_p] = self.height[root_q];
            }
            Ordering::Greater => {
                self.parent[root_q] = root_p;
                self.height[root_q] = self.height[root_p];
            }
        }

        self.count -= 1;
        Ok(true)
    }

    /// Height of the tree containing p
    pub fn height(&self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.height[root])
    }

    pub fn is_root(&self, p: usize) -> Result<bool> {
        self.check(p)?;
        Ok(self.parent[p] == p)
    }

    /// Get all components as sorted groups of sites, ordered by smallest member
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count);

        for p in 0..self.len() {
            let mut root = p;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(p);
        }

        groups
    }
}
