//! Uniform adapter contract over ordered-container backends.
//!
//! This crate defines [`ContainerAdapter`], the capability every measured
//! backend exposes, plus the backends themselves. The generation and
//! measurement pipeline is written once against the trait and monomorphizes
//! per backend, so adding a container implementation never touches the
//! pipeline, and no virtual dispatch sits inside a timed loop.
//!
//! # Backends
//!
//! | Adapter | Container | Rebalancing |
//! |---------|-----------|-------------|
//! | [`RbTreeAdapter`] | red-black tree | recolor + rotate |
//! | [`WbTreeAdapter`] | weight-balanced tree | size-ratio rotations (delta 3, gamma 2) |
//! | [`EnergyTreeAdapter`] | energy-balanced tree | subtree rebuild on exhausted energy |
//! | [`ZipTreeRandomAdapter`] | zip tree | geometric ranks from a seeded RNG |
//! | [`ZipTreeHashedAdapter`] | zip tree | geometric ranks hashed from the value |
//! | [`BTreeMultisetAdapter`] | `std::collections::BTreeMap` multiset | B-tree (baseline) |
//! | [`SortedVecAdapter`] | sorted `Vec` | shift-on-insert (baseline) |
//!
//! All tree backends are arena-backed: links are indices into a node vector,
//! never raw pointers. External behavior under the contract is identical
//! across backends (multiset semantics, duplicates permitted); only the
//! internal rebalancing strategy differs.

pub mod backends;

pub use backends::btree::BTreeMultisetAdapter;
pub use backends::energy::EnergyTreeAdapter;
pub use backends::rbtree::RbTreeAdapter;
pub use backends::sorted_vec::SortedVecAdapter;
pub use backends::wbtree::WbTreeAdapter;
pub use backends::zip::{ZipTreeHashedAdapter, ZipTreeRandomAdapter};

/// Sentinel index for absent arena links.
pub(crate) const NIL: usize = usize::MAX;

/// A value carrier handed to [`ContainerAdapter::insert`].
///
/// Nodes live in the workload's arena (`fixed_nodes` / `experiment_nodes`);
/// containers copy the value out on insert, so a node never dangles no
/// matter how the container reorganizes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNode {
    value: i32,
}

impl ValueNode {
    /// Wrap a value.
    pub fn new(value: i32) -> Self {
        ValueNode { value }
    }

    /// The carried value.
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Capability every measured backend exposes.
///
/// Multiset semantics throughout: inserting a duplicate value is permitted
/// and grows the container. [`ContainerAdapter::values`] and
/// [`ContainerAdapter::len`] are the verification surface the driver and
/// the tests use to check post-setup container state.
pub trait ContainerAdapter {
    /// Node handed to [`ContainerAdapter::insert`].
    type Node;
    /// The backing container. `Default` is the empty container.
    type Container: Default;

    /// Stable backend identity for reporting and filtering.
    fn name() -> String;

    /// Materialize a node carrying `value`.
    fn create_node(value: i32) -> Self::Node;

    /// Insert a node's value. Duplicates permitted.
    fn insert(container: &mut Self::Container, node: &Self::Node);

    /// Read a node's value.
    fn get_value(node: &Self::Node) -> i32;

    /// Replace a node's value.
    fn set_value(node: &mut Self::Node, value: i32);

    /// Empty the container.
    fn clear(container: &mut Self::Container);

    /// Number of elements currently held.
    fn len(container: &Self::Container) -> usize;

    /// Whether the container is empty.
    fn is_empty(container: &Self::Container) -> bool {
        Self::len(container) == 0
    }

    /// All held values in ascending order.
    fn values(container: &Self::Container) -> Vec<i32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_contract<A: ContainerAdapter>() {
        let mut container = A::Container::default();
        assert!(A::is_empty(&container));

        let input = [5, 3, 9, 3, -7, 0, 3, i32::MAX, i32::MIN];
        for &v in &input {
            let node = A::create_node(v);
            assert_eq!(A::get_value(&node), v);
            A::insert(&mut container, &node);
        }

        assert_eq!(A::len(&container), input.len());

        let mut expected = input.to_vec();
        expected.sort_unstable();
        assert_eq!(A::values(&container), expected);

        A::clear(&mut container);
        assert!(A::is_empty(&container));
        assert!(A::values(&container).is_empty());
    }

    #[test]
    fn test_rbtree_contract() {
        exercise_contract::<RbTreeAdapter>();
    }

    #[test]
    fn test_wbtree_contract() {
        exercise_contract::<WbTreeAdapter>();
    }

    #[test]
    fn test_energy_tree_contract() {
        exercise_contract::<EnergyTreeAdapter>();
    }

    #[test]
    fn test_zip_tree_random_contract() {
        exercise_contract::<ZipTreeRandomAdapter>();
    }

    #[test]
    fn test_zip_tree_hashed_contract() {
        exercise_contract::<ZipTreeHashedAdapter>();
    }

    #[test]
    fn test_btree_multiset_contract() {
        exercise_contract::<BTreeMultisetAdapter>();
    }

    #[test]
    fn test_sorted_vec_contract() {
        exercise_contract::<SortedVecAdapter>();
    }

    #[test]
    fn test_set_value_replaces() {
        let mut node = RbTreeAdapter::create_node(1);
        RbTreeAdapter::set_value(&mut node, 42);
        assert_eq!(RbTreeAdapter::get_value(&node), 42);
    }

    #[test]
    fn test_backend_names_are_distinct() {
        let names = [
            RbTreeAdapter::name(),
            WbTreeAdapter::name(),
            EnergyTreeAdapter::name(),
            ZipTreeRandomAdapter::name(),
            ZipTreeHashedAdapter::name(),
            BTreeMultisetAdapter::name(),
            SortedVecAdapter::name(),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
