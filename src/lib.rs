//! This crate exposes classic pointer-linked data structures - a
//! Binary Search Tree and a family of linked lists - mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and traverse stored keys. BSTs are typically
//! defined recursively using the notion of a `Node`. A `Node` holds a
//! key and sometimes has child `Node`s. The most important invariants
//! of the tree in [`tree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    key strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key (ties go right, so
//!    duplicates are retained).
//!
//! These invariants make searching take `O(height)` and make inorder
//! traversal yield the keys in sorted order. The tree performs no
//! rebalancing, so `height` is `O(n)` for adversarial insertion
//! orders - which is exactly why every traversal here is iterative,
//! driven by an explicit stack or queue instead of the call stack.
//!
//! ## Linked lists
//!
//! The list family covers the three classic link shapes:
//!
//! - [`singly`]: one-directional links, each node uniquely owned by
//!   its predecessor through a `Box`.
//! - [`doubly`]: links in both directions. Back-pointers rule out
//!   unique ownership, so the nodes live in an index arena.
//! - [`circular`]: a doubly-linked ring with no tail field - the last
//!   node is always `head.prev`, and that relation is debug-asserted
//!   after every mutation rather than assumed.
//!
//! [`directory`] builds a small name/ID registry on top of the
//! circular ring, the way such rings are actually put to work.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod circular;
pub mod directory;
pub mod doubly;
pub mod singly;
pub mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
