//! Weight-balanced tree backend (delta = 3, gamma = 2).

use crate::{ContainerAdapter, ValueNode, NIL};

const DELTA: usize = 3;
const GAMMA: usize = 2;

#[derive(Debug)]
struct WbNode {
    value: i32,
    left: usize,
    right: usize,
    size: usize,
}

/// Arena-backed weight-balanced multiset.
///
/// Weights include the empty subtrees (`weight = size + 1`), the usual
/// trick to keep the balance condition meaningful near the leaves.
#[derive(Debug)]
pub struct WbTree {
    nodes: Vec<WbNode>,
    root: usize,
}

impl Default for WbTree {
    fn default() -> Self {
        WbTree {
            nodes: Vec::new(),
            root: NIL,
        }
    }
}

impl WbTree {
    fn weight(&self, idx: usize) -> usize {
        if idx == NIL {
            1
        } else {
            self.nodes[idx].size + 1
        }
    }

    fn update_size(&mut self, idx: usize) {
        let left = self.nodes[idx].left;
        let right = self.nodes[idx].right;
        let lsize = if left == NIL { 0 } else { self.nodes[left].size };
        let rsize = if right == NIL { 0 } else { self.nodes[right].size };
        self.nodes[idx].size = lsize + rsize + 1;
    }

    pub fn insert(&mut self, value: i32) {
        let idx = self.nodes.len();
        self.nodes.push(WbNode {
            value,
            left: NIL,
            right: NIL,
            size: 1,
        });
        self.root = self.insert_at(self.root, idx);
    }

    fn insert_at(&mut self, t: usize, idx: usize) -> usize {
        if t == NIL {
            return idx;
        }
        if self.nodes[idx].value < self.nodes[t].value {
            let new_left = self.insert_at(self.nodes[t].left, idx);
            self.nodes[t].left = new_left;
        } else {
            let new_right = self.insert_at(self.nodes[t].right, idx);
            self.nodes[t].right = new_right;
        }
        self.update_size(t);
        self.rebalance(t)
    }

    fn rebalance(&mut self, t: usize) -> usize {
        let left = self.nodes[t].left;
        let right = self.nodes[t].right;
        if self.weight(right) > DELTA * self.weight(left) {
            // Right-heavy: single rotation unless the inner grandchild
            // dominates, then double.
            let rl = self.nodes[right].left;
            let rr = self.nodes[right].right;
            if self.weight(rl) < GAMMA * self.weight(rr) {
                self.rotate_left(t)
            } else {
                let new_right = self.rotate_right(right);
                self.nodes[t].right = new_right;
                self.rotate_left(t)
            }
        } else if self.weight(left) > DELTA * self.weight(right) {
            let ll = self.nodes[left].left;
            let lr = self.nodes[left].right;
            if self.weight(lr) < GAMMA * self.weight(ll) {
                self.rotate_right(t)
            } else {
                let new_left = self.rotate_left(left);
                self.nodes[t].left = new_left;
                self.rotate_right(t)
            }
        } else {
            t
        }
    }

    fn rotate_left(&mut self, t: usize) -> usize {
        let y = self.nodes[t].right;
        self.nodes[t].right = self.nodes[y].left;
        self.nodes[y].left = t;
        self.update_size(t);
        self.update_size(y);
        y
    }

    fn rotate_right(&mut self, t: usize) -> usize {
        let y = self.nodes[t].left;
        self.nodes[t].left = self.nodes[y].right;
        self.nodes[y].right = t;
        self.update_size(t);
        self.update_size(y);
        y
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

/// Adapter over [`WbTree`].
pub struct WbTreeAdapter;

impl ContainerAdapter for WbTreeAdapter {
    type Node = ValueNode;
    type Container = WbTree;

    fn name() -> String {
        format!("WBTree[{DELTA},{GAMMA}]")
    }

    fn create_node(value: i32) -> ValueNode {
        ValueNode::new(value)
    }

    fn insert(container: &mut WbTree, node: &ValueNode) {
        container.insert(node.value());
    }

    fn get_value(node: &ValueNode) -> i32 {
        node.value()
    }

    fn set_value(node: &mut ValueNode, value: i32) {
        *node = ValueNode::new(value);
    }

    fn clear(container: &mut WbTree) {
        container.clear();
    }

    fn len(container: &WbTree) -> usize {
        container.len()
    }

    fn values(container: &WbTree) -> Vec<i32> {
        container.values()
    }
}
