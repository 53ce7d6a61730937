//! Baseline backend over a sorted `Vec`.

use crate::{ContainerAdapter, ValueNode};

/// Flat sorted multiset; binary-search insert position, shift on insert.
#[derive(Debug, Default)]
pub struct SortedVec {
    items: Vec<i32>,
}

impl SortedVec {
    pub fn insert(&mut self, value: i32) {
        let pos = self.items.partition_point(|&v| v <= value);
        self.items.insert(pos, value);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn values(&self) -> Vec<i32> {
        self.items.clone()
    }
}

/// Adapter over [`SortedVec`].
pub struct SortedVecAdapter;

impl ContainerAdapter for SortedVecAdapter {
    type Node = ValueNode;
    type Container = SortedVec;

    fn name() -> String {
        "SortedVec".to_string()
    }

    fn create_node(value: i32) -> ValueNode {
        ValueNode::new(value)
    }

    fn insert(container: &mut SortedVec, node: &ValueNode) {
        container.insert(node.value());
    }

    fn get_value(node: &ValueNode) -> i32 {
        node.value()
    }

    fn set_value(node: &mut ValueNode, value: i32) {
        *node = ValueNode::new(value);
    }

    fn clear(container: &mut SortedVec) {
        container.clear();
    }

    fn len(container: &SortedVec) -> usize {
        container.len()
    }

    fn values(container: &SortedVec) -> Vec<i32> {
        container.values()
    }
}
