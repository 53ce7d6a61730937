//! Red-black tree backend.

use crate::{ContainerAdapter, ValueNode, NIL};

#[derive(Debug)]
struct RbNode {
    value: i32,
    left: usize,
    right: usize,
    parent: usize,
    red: bool,
}

/// Arena-backed red-black multiset.
#[derive(Debug, Default)]
pub struct RbTree {
    nodes: Vec<RbNode>,
    root: Option<usize>,
}

impl RbTree {
    fn root(&self) -> usize {
        self.root.unwrap_or(NIL)
    }

    pub fn insert(&mut self, value: i32) {
        let idx = self.nodes.len();
        self.nodes.push(RbNode {
            value,
            left: NIL,
            right: NIL,
            parent: NIL,
            red: true,
        });

        // Plain BST descent; duplicates go right.
        let mut parent = NIL;
        let mut cur = self.root();
        while cur != NIL {
            parent = cur;
            cur = if value < self.nodes[cur].value {
                self.nodes[cur].left
            } else {
                self.nodes[cur].right
            };
        }
        self.nodes[idx].parent = parent;
        if parent == NIL {
            self.root = Some(idx);
        } else if value < self.nodes[parent].value {
            self.nodes[parent].left = idx;
        } else {
            self.nodes[parent].right = idx;
        }

        self.fix_insert(idx);
    }

    fn is_red(&self, idx: usize) -> bool {
        idx != NIL && self.nodes[idx].red
    }

    fn fix_insert(&mut self, mut z: usize) {
        while self.is_red(self.nodes[z].parent) {
            let p = self.nodes[z].parent;
            let g = self.nodes[p].parent;
            if p == self.nodes[g].left {
                let u = self.nodes[g].right;
                if self.is_red(u) {
                    self.nodes[p].red = false;
                    self.nodes[u].red = false;
                    self.nodes[g].red = true;
                    z = g;
                } else {
                    if z == self.nodes[p].right {
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].red = false;
                    self.nodes[g].red = true;
                    self.rotate_right(g);
                }
            } else {
                let u = self.nodes[g].left;
                if self.is_red(u) {
                    self.nodes[p].red = false;
                    self.nodes[u].red = false;
                    self.nodes[g].red = true;
                    z = g;
                } else {
                    if z == self.nodes[p].left {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].red = false;
                    self.nodes[g].red = true;
                    self.rotate_left(g);
                }
            }
        }
        let root = self.root();
        self.nodes[root].red = false;
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let y_left = self.nodes[y].left;
        self.nodes[x].right = y_left;
        if y_left != NIL {
            self.nodes[y_left].parent = x;
        }
        self.replace_in_parent(x, y);
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;
        let y_right = self.nodes[y].right;
        self.nodes[x].left = y_right;
        if y_right != NIL {
            self.nodes[y_right].parent = x;
        }
        self.replace_in_parent(x, y);
        self.nodes[y].right = x;
        self.nodes[x].parent = y;
    }

    /// Attach `y` where `x` hangs off its parent (or at the root).
    fn replace_in_parent(&mut self, x: usize, y: usize) {
        let p = self.nodes[x].parent;
        self.nodes[y].parent = p;
        if p == NIL {
            self.root = Some(y);
        } else if self.nodes[p].left == x {
            self.nodes[p].left = y;
        } else {
            self.nodes[p].right = y;
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn values(&self) -> Vec<i32> {
        super::in_order_values(
            self.root(),
            self.nodes.len(),
            |i| (self.nodes[i].left, self.nodes[i].right),
            |i| self.nodes[i].value,
        )
    }
}

/// Adapter over [`RbTree`].
pub struct RbTreeAdapter;

impl ContainerAdapter for RbTreeAdapter {
    type Node = ValueNode;
    type Container = RbTree;

    fn name() -> String {
        "RBTree".to_string()
    }

    fn create_node(value: i32) -> ValueNode {
        ValueNode::new(value)
    }

    fn insert(container: &mut RbTree, node: &ValueNode) {
        container.insert(node.value());
    }

    fn get_value(node: &ValueNode) -> i32 {
        node.value()
    }

    fn set_value(node: &mut ValueNode, value: i32) {
        *node = ValueNode::new(value);
    }

    fn clear(container: &mut RbTree) {
        container.clear();
    }

    fn len(container: &RbTree) -> usize {
        container.len()
    }

    fn values(container: &RbTree) -> Vec<i32> {
        container.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the tree checking the red-black invariants: no red node has a
    /// red child, and every root-to-nil path carries the same black count.
    fn check_invariants(tree: &RbTree) {
        fn black_height(tree: &RbTree, idx: usize) -> usize {
            if idx == NIL {
                return 1;
            }
            let node = &tree.nodes[idx];
            if node.red {
                assert!(!tree.is_red(node.left), "red node with red left child");
                assert!(!tree.is_red(node.right), "red node with red right child");
            }
            let lh = black_height(tree, node.left);
            let rh = black_height(tree, node.right);
            assert_eq!(lh, rh, "uneven black height");
            lh + usize::from(!node.red)
        }

        if let Some(root) = tree.root {
            assert!(!tree.nodes[root].red, "red root");
            black_height(tree, root);
        }
    }

    #[test]
    fn test_invariants_hold_under_sequential_insert() {
        let mut tree = RbTree::default();
        for v in 0..512 {
            tree.insert(v);
        }
        check_invariants(&tree);
        assert_eq!(tree.values(), (0..512).collect::<Vec<_>>());
    }

    #[test]
    fn test_invariants_hold_under_scrambled_insert() {
        let mut tree = RbTree::default();
        // LCG scramble; hits duplicates on purpose.
        let mut x: u32 = 12345;
        let mut inserted = Vec::new();
        for _ in 0..512 {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            let v = (x % 100) as i32;
            tree.insert(v);
            inserted.push(v);
        }
        check_invariants(&tree);
        inserted.sort_unstable();
        assert_eq!(tree.values(), inserted);
    }
}
