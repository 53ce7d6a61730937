//! Energy-balanced tree backend.
//!
//! Partial-rebuilding balance: every node banks one unit of energy per
//! insertion routed through it, and a subtree is rebuilt to perfect balance
//! (its energy zeroed) once its energy reaches half its size. No rotations;
//! all restructuring is bulk rebuilds, amortized logarithmic.

use crate::{ContainerAdapter, ValueNode, NIL};

#[derive(Debug)]
struct ENode {
    value: i32,
    left: usize,
    right: usize,
    size: usize,
    energy: usize,
}

/// Arena-backed energy-balanced multiset.
#[derive(Debug)]
pub struct EnergyTree {
    nodes: Vec<ENode>,
    root: usize,
}

impl Default for EnergyTree {
    fn default() -> Self {
        EnergyTree {
            nodes: Vec::new(),
            root: NIL,
        }
    }
}

impl EnergyTree {
    pub fn insert(&mut self, value: i32) {
        let idx = self.nodes.len();
        self.nodes.push(ENode {
            value,
            left: NIL,
            right: NIL,
            size: 1,
            energy: 0,
        });

        if self.root == NIL {
            self.root = idx;
            return;
        }

        let mut path = Vec::new();
        let mut cur = self.root;
        loop {
            path.push(cur);
            if value < self.nodes[cur].value {
                if self.nodes[cur].left == NIL {
                    self.nodes[cur].left = idx;
                    break;
                }
                cur = self.nodes[cur].left;
            } else {
                if self.nodes[cur].right == NIL {
                    self.nodes[cur].right = idx;
                    break;
                }
                cur = self.nodes[cur].right;
            }
        }

        for &n in &path {
            self.nodes[n].size += 1;
            self.nodes[n].energy += 1;
        }

        // Rebuild the topmost exhausted subtree, if any; resetting its
        // energy also discharges everything below it.
        if let Some(pos) = path
            .iter()
            .position(|&n| 2 * self.nodes[n].energy >= self.nodes[n].size)
        {
            let sub = path[pos];
            let rebuilt = self.rebuild(sub);
            if pos == 0 {
                self.root = rebuilt;
            } else {
                let parent = path[pos - 1];
                if self.nodes[parent].left == sub {
                    self.nodes[parent].left = rebuilt;
                } else {
                    self.nodes[parent].right = rebuilt;
                }
            }
        }
    }

    /// Rebuild the subtree rooted at `sub` to perfect balance.
    fn rebuild(&mut self, sub: usize) -> usize {
        let mut in_order = Vec::with_capacity(self.nodes[sub].size);
        let mut stack = Vec::new();
        let mut cur = sub;
        while cur != NIL || !stack.is_empty() {
            while cur != NIL {
                stack.push(cur);
                cur = self.nodes[cur].left;
            }
            let n = stack.pop().expect("stack non-empty by loop condition");
            in_order.push(n);
            cur = self.nodes[n].right;
        }
        self.build_balanced(&in_order)
    }

    fn build_balanced(&mut self, in_order: &[usize]) -> usize {
        if in_order.is_empty() {
            return NIL;
        }
        let mid = in_order.len() / 2;
        let root = in_order[mid];
        let left = self.build_balanced(&in_order[..mid]);
        let right = self.build_balanced(&in_order[mid + 1..]);
        let node = &mut self.nodes[root];
        node.left = left;
        node.right = right;
        node.size = in_order.len();
        node.energy = 0;
        root
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

/// Adapter over [`EnergyTree`].
pub struct EnergyTreeAdapter;

impl ContainerAdapter for EnergyTreeAdapter {
    type Node = ValueNode;
    type Container = EnergyTree;

    fn name() -> String {
        "EnergyTree".to_string()
    }

    fn create_node(value: i32) -> ValueNode {
        ValueNode::new(value)
    }

    fn insert(container: &mut EnergyTree, node: &ValueNode) {
        container.insert(node.value());
    }

    fn get_value(node: &ValueNode) -> i32 {
        node.value()
    }

    fn set_value(node: &mut ValueNode, value: i32) {
        *node = ValueNode::new(value);
    }

    fn clear(container: &mut EnergyTree) {
        container.clear();
    }

    fn len(container: &EnergyTree) -> usize {
        container.len()
    }

    fn values(container: &EnergyTree) -> Vec<i32> {
        container.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height(tree: &EnergyTree, idx: usize) -> usize {
        if idx == NIL {
            return 0;
        }
        1 + height(tree, tree.nodes[idx].left).max(height(tree, tree.nodes[idx].right))
    }

    #[test]
    fn test_sorted_insert_stays_shallow() {
        let mut tree = EnergyTree::default();
        for v in 0..2048 {
            tree.insert(v);
        }
        // Perfectly balanced would be 11; partial rebuilding keeps the
        // height within a small factor of that.
        assert!(height(&tree, tree.root) <= 26, "degenerate tree");
        assert_eq!(tree.values(), (0..2048).collect::<Vec<_>>());
    }

    #[test]
    fn test_sizes_are_consistent() {
        fn check(tree: &EnergyTree, idx: usize) -> usize {
            if idx == NIL {
                return 0;
            }
            let total = 1
                + check(tree, tree.nodes[idx].left)
                + check(tree, tree.nodes[idx].right);
            assert_eq!(tree.nodes[idx].size, total);
            total
        }

        let mut tree = EnergyTree::default();
        let mut x: u32 = 7;
        for _ in 0..700 {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            tree.insert((x % 50) as i32);
        }
        check(&tree, tree.root);
        assert_eq!(tree.len(), 700);
    }
}
