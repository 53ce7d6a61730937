//! Backend container implementations driven through the adapter contract.

pub mod btree;
pub mod energy;
pub mod rbtree;
pub mod sorted_vec;
pub mod wbtree;
pub mod zip;

use super::NIL;

/// In-order value traversal shared by the arena trees.
///
/// Iterative with an explicit stack; the trees are not guaranteed to be
/// shallow enough for recursion at benchmark sizes.
pub(crate) fn in_order_values(
    root: usize,
    len_hint: usize,
    children: impl Fn(usize) -> (usize, usize),
    value: impl Fn(usize) -> i32,
) -> Vec<i32> {
    let mut out = Vec::with_capacity(len_hint);
    let mut stack = Vec::new();
    let mut cur = root;
    while cur != NIL || !stack.is_empty() {
        while cur != NIL {
            stack.push(cur);
            cur = children(cur).0;
        }
        let idx = stack.pop().expect("stack non-empty by loop condition");
        out.push(value(idx));
        cur = children(idx).1;
    }
    out
}
