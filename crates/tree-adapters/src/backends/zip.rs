//! Zip tree backends.
//!
//! Insertion places a node where its rank dominates and unzips the displaced
//! subtree along the key. Ranks are geometric; where they come from is the
//! only difference between the two variants: a seeded RNG, or a hash of the
//! value itself (same value, same rank, every process).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ContainerAdapter, ValueNode, NIL};

/// Source of geometric node ranks.
pub trait RankSource: Default {
    fn rank_for(&mut self, value: i32) -> u8;
}

/// Ranks drawn from a dedicated RNG, fixed-seeded so container structure
/// does not interfere with the workload's own determinism.
pub struct RandomRank {
    rng: StdRng,
}

impl Default for RandomRank {
    fn default() -> Self {
        RandomRank {
            rng: StdRng::seed_from_u64(0x7a69_70_74_72_65_65),
        }
    }
}

impl RankSource for RandomRank {
    fn rank_for(&mut self, _value: i32) -> u8 {
        self.rng.gen::<u64>().trailing_ones() as u8
    }
}

/// Ranks derived from the value by a mixed multiplicative hash.
#[derive(Default)]
pub struct HashedRank;

impl RankSource for HashedRank {
    fn rank_for(&mut self, value: i32) -> u8 {
        // splitmix64 finalizer; raw multiplication leaves the low bits
        // too structured for a trailing-ones geometric.
        let mut h = (value as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        h ^= h >> 30;
        h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^= h >> 31;
        h.trailing_ones() as u8
    }
}

#[derive(Debug)]
struct ZNode {
    value: i32,
    left: usize,
    right: usize,
    rank: u8,
}

/// Arena-backed zip-tree multiset, parameterized by rank source.
pub struct ZipTree<R: RankSource> {
    nodes: Vec<ZNode>,
    root: usize,
    ranks: R,
}

impl<R: RankSource> Default for ZipTree<R> {
    fn default() -> Self {
        ZipTree {
            nodes: Vec::new(),
            root: NIL,
            ranks: R::default(),
        }
    }
}

impl<R: RankSource> ZipTree<R> {
    /// Whether the (not yet linked) node `idx` displaces `cur`.
    fn wins_over(&self, idx: usize, cur: usize) -> bool {
        let (a, b) = (&self.nodes[idx], &self.nodes[cur]);
        a.rank > b.rank || (a.rank == b.rank && a.value < b.value)
    }

    pub fn insert(&mut self, value: i32) {
        let rank = self.ranks.rank_for(value);
        let idx = self.nodes.len();
        self.nodes.push(ZNode {
            value,
            left: NIL,
            right: NIL,
            rank,
        });

        // Descend while the resident node still outranks the new one.
        let mut parent = NIL;
        let mut went_left = false;
        let mut cur = self.root;
        while cur != NIL && !self.wins_over(idx, cur) {
            parent = cur;
            went_left = value < self.nodes[cur].value;
            cur = if went_left {
                self.nodes[cur].left
            } else {
                self.nodes[cur].right
            };
        }

        let (le, gt) = self.unzip(cur, value);
        self.nodes[idx].left = le;
        self.nodes[idx].right = gt;

        if parent == NIL {
            self.root = idx;
        } else if went_left {
            self.nodes[parent].left = idx;
        } else {
            self.nodes[parent].right = idx;
        }
    }

    /// Split the subtree at `t` into (`<= key`, `> key`) spines.
    fn unzip(&mut self, t: usize, key: i32) -> (usize, usize) {
        let mut le = NIL;
        let mut gt = NIL;
        let mut le_tail = NIL;
        let mut gt_tail = NIL;
        let mut cur = t;
        while cur != NIL {
            if self.nodes[cur].value <= key {
                if le == NIL {
                    le = cur;
                } else {
                    self.nodes[le_tail].right = cur;
                }
                le_tail = cur;
                cur = self.nodes[cur].right;
            } else {
                if gt == NIL {
                    gt = cur;
                } else {
                    self.nodes[gt_tail].left = cur;
                }
                gt_tail = cur;
                cur = self.nodes[cur].left;
            }
        }
        if le_tail != NIL {
            self.nodes[le_tail].right = NIL;
        }
        if gt_tail != NIL {
            self.nodes[gt_tail].left = NIL;
        }
        (le, gt)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NIL;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn values(&self) -> Vec<i32> {
        super::in_order_values(
            self.root,
            self.nodes.len(),
            |i| (self.nodes[i].left, self.nodes[i].right),
            |i| self.nodes[i].value,
        )
    }
}

macro_rules! zip_adapter {
    ($adapter:ident, $rank:ty, $name:literal) => {
        pub struct $adapter;

        impl ContainerAdapter for $adapter {
            type Node = ValueNode;
            type Container = ZipTree<$rank>;

            fn name() -> String {
                $name.to_string()
            }

            fn create_node(value: i32) -> ValueNode {
                ValueNode::new(value)
            }

            fn insert(container: &mut Self::Container, node: &ValueNode) {
                container.insert(node.value());
            }

            fn get_value(node: &ValueNode) -> i32 {
                node.value()
            }

            fn set_value(node: &mut ValueNode, value: i32) {
                *node = ValueNode::new(value);
            }

            fn clear(container: &mut Self::Container) {
                container.clear();
            }

            fn len(container: &Self::Container) -> usize {
                container.len()
            }

            fn values(container: &Self::Container) -> Vec<i32> {
                container.values()
            }
        }
    };
}

zip_adapter!(ZipTreeRandomAdapter, RandomRank, "ZipTree[R]");
zip_adapter!(ZipTreeHashedAdapter, HashedRank, "ZipTree[H]");

#[cfg(test)]
mod tests {
    use super::*;

    fn check_heap_and_order<R: RankSource>(tree: &ZipTree<R>, idx: usize) {
        if idx == NIL {
            return;
        }
        let node = &tree.nodes[idx];
        if node.left != NIL {
            let l = &tree.nodes[node.left];
            assert!(l.value <= node.value, "order violated on the left");
            assert!(l.rank <= node.rank, "rank heap violated on the left");
        }
        if node.right != NIL {
            let r = &tree.nodes[node.right];
            assert!(r.value >= node.value, "order violated on the right");
            assert!(r.rank <= node.rank, "rank heap violated on the right");
        }
        check_heap_and_order(tree, node.left);
        check_heap_and_order(tree, node.right);
    }

    #[test]
    fn test_random_rank_tree_structure() {
        let mut tree = ZipTree::<RandomRank>::default();
        let mut inserted = Vec::new();
        let mut x: u32 = 31;
        for _ in 0..800 {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            let v = (x % 500) as i32;
            tree.insert(v);
            inserted.push(v);
        }
        check_heap_and_order(&tree, tree.root);
        inserted.sort_unstable();
        assert_eq!(tree.values(), inserted);
    }

    #[test]
    fn test_hashed_rank_tree_structure() {
        let mut tree = ZipTree::<HashedRank>::default();
        for v in 0..800 {
            tree.insert(v);
        }
        check_heap_and_order(&tree, tree.root);
        assert_eq!(tree.values(), (0..800).collect::<Vec<_>>());
    }

    #[test]
    fn test_hashed_ranks_are_value_stable() {
        let mut a = HashedRank;
        let mut b = HashedRank;
        for v in [-5, 0, 1, 42, i32::MAX] {
            assert_eq!(a.rank_for(v), b.rank_for(v));
        }
    }
}
