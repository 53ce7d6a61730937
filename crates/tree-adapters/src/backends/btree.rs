//! Baseline backend over `std::collections::BTreeMap`.

use std::collections::BTreeMap;

use crate::{ContainerAdapter, ValueNode};

/// Multiset on top of a value-to-count B-tree map.
#[derive(Debug, Default)]
pub struct BTreeMultiset {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl BTreeMultiset {
    pub fn insert(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        for (&value, &count) in &self.counts {
            out.extend(std::iter::repeat(value).take(count));
        }
        out
    }
}

/// Adapter over [`BTreeMultiset`].
pub struct BTreeMultisetAdapter;

impl ContainerAdapter for BTreeMultisetAdapter {
    type Node = ValueNode;
    type Container = BTreeMultiset;

    fn name() -> String {
        "BTreeMultiset".to_string()
    }

    fn create_node(value: i32) -> ValueNode {
        ValueNode::new(value)
    }

    fn insert(container: &mut BTreeMultiset, node: &ValueNode) {
        container.insert(node.value());
    }

    fn get_value(node: &ValueNode) -> i32 {
        node.value()
    }

    fn set_value(node: &mut ValueNode, value: i32) {
        *node = ValueNode::new(value);
    }

    fn clear(container: &mut BTreeMultiset) {
        container.clear();
    }

    fn len(container: &BTreeMultiset) -> usize {
        container.len()
    }

    fn values(container: &BTreeMultiset) -> Vec<i32> {
        container.values()
    }
}
