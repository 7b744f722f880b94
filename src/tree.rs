//! An unbalanced Binary Search Tree that stores keys.
//!
//! Keys compare with `Ord`: strictly smaller keys live in the left
//! subtree, equal-or-greater keys in the right. Duplicate keys are
//! retained, not overwritten, so the tree behaves like a sorted
//! multiset. No rebalancing is performed, so an adversarial insertion
//! order (e.g. already-sorted keys) degenerates into a chain with
//! `O(n)` height. Every operation here is iterative - traversals use
//! an explicit stack or queue - so even a degenerate chain can't
//! overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use treelist::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [21, 13, 33, 10, 18, 25, 40] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&40));
//! assert!(!tree.contains(&9));
//!
//! // Inorder traversal yields the keys in sorted order.
//! let sorted: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(sorted, [10, 13, 18, 21, 25, 33, 40]);
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.max(), Some(&40));
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree storing keys. Duplicate keys are kept (in the
/// right subtree of the original), so this is a multiset rather than a
/// set.
#[derive(Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Clone> Clone for Tree<K> {
    // The derived clone would recurse once per level. Walk the source
    // with an explicit stack of (source node, destination slot) pairs
    // instead, so degenerate chains clone fine.
    fn clone(&self) -> Self {
        let mut new = Tree {
            root: None,
            len: self.len,
        };

        let mut stack: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, &mut new.root));
        }
        while let Some((src, dst)) = stack.pop() {
            let node = dst.get_or_insert_with(|| Node::new(src.key.clone()));
            if let Some(left) = src.left.as_deref() {
                stack.push((left, &mut node.left));
            }
            if let Some(right) = src.right.as_deref() {
                stack.push((right, &mut node.right));
            }
        }
        new
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given key into the tree as a new leaf node.
    ///
    /// Strictly smaller keys descend left, equal-or-greater keys
    /// descend right, so inserting an already-present key adds a
    /// second node in the right subtree of the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelist::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new(key));
        self.len += 1;
    }

    /// Reports whether the given key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelist::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        false
    }

    /// The number of keys in the tree. Duplicates each count once, so
    /// this always equals the number of `insert` calls.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The largest key in the tree, or `None` if the tree is empty.
    ///
    /// The BST property guarantees the maximum is the rightmost node,
    /// so this just chases right children from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelist::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(3);
    /// tree.insert(7);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.max(), Some(&7));
    /// ```
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty
    /// tree has height 0; a tree built from `n` strictly increasing
    /// keys has height `n`.
    pub fn height(&self) -> usize {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }

        let mut height = 0;
        while !queue.is_empty() {
            height += 1;
            // Drain exactly one level; children pushed here belong to
            // the next one.
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front() {
                    if let Some(left) = node.left.as_deref() {
                        queue.push_back(left);
                    }
                    if let Some(right) = node.right.as_deref() {
                        queue.push_back(right);
                    }
                }
            }
        }
        height
    }

    /// Visits each node before its left subtree, then its right
    /// subtree (root-left-right).
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits each node between its left and right subtrees
    /// (left-root-right). For a valid BST this yields the keys in
    /// non-decreasing order.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder {
            stack: Vec::new(),
            next: self.root.as_deref(),
        }
    }

    /// Visits each node after both of its subtrees (left-right-root).
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder {
            stack: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Visits the nodes breadth-first: all nodes at one depth before
    /// any node at the next, left child before right child.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Sorted iteration over the keys. Alias for [`inorder`][Self::inorder].
    pub fn iter(&self) -> Inorder<'_, K> {
        self.inorder()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> std::iter::FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Drop for Tree<K> {
    // The derived drop would recurse once per level, which overflows
    // the stack on degenerate chains. Detach subtrees onto an explicit
    // stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

/// Iterator over a tree's keys in root-left-right order. See
/// [`Tree::preorder`].
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        // Right goes on first so left pops (and is visited) first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

/// Iterator over a tree's keys in left-root-right (sorted) order. See
/// [`Tree::inorder`].
pub struct Inorder<'a, K> {
    stack: Vec<&'a Node<K>>,
    next: Option<&'a Node<K>>,
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.next = node.right.as_deref();
        Some(&node.key)
    }
}

/// Iterator over a tree's keys in left-right-root order. See
/// [`Tree::postorder`].
pub struct Postorder<'a, K> {
    // The bool marks nodes whose subtrees are already on the stack;
    // popping a marked node means both subtrees have been visited.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Iterator over a tree's keys in breadth-first order. See
/// [`Tree::level_order`].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(&node.key)
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn inorder_is_sorted(keys: Vec<i16>) -> bool {
            let tree: Tree<i16> = keys.into_iter().collect();

            let inorder: Vec<_> = tree.inorder().copied().collect();
            inorder.windows(2).all(|pair| pair[0] <= pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn len_counts_every_insert(keys: Vec<i16>) -> bool {
            let expected = keys.len();
            let tree: Tree<i16> = keys.into_iter().collect();

            tree.len() == expected
        }
    }

    quickcheck::quickcheck! {
        fn contains_exactly_the_inserted_keys(keys: Vec<i8>, probes: Vec<i8>) -> bool {
            let tree: Tree<i8> = keys.iter().copied().collect();

            keys.iter().all(|key| tree.contains(key))
                && probes
                    .iter()
                    .all(|probe| tree.contains(probe) == keys.contains(probe))
        }
    }

    quickcheck::quickcheck! {
        fn max_matches_the_model(keys: Vec<i16>) -> bool {
            let tree: Tree<i16> = keys.iter().copied().collect();

            tree.max() == keys.iter().max()
        }
    }

    quickcheck::quickcheck! {
        fn every_traversal_is_a_permutation(keys: Vec<i16>) -> bool {
            let tree: Tree<i16> = keys.iter().copied().collect();

            let mut sorted = keys;
            sorted.sort_unstable();

            for traversal in [
                tree.preorder().copied().collect::<Vec<_>>(),
                tree.inorder().copied().collect(),
                tree.postorder().copied().collect(),
                tree.level_order().copied().collect(),
            ] {
                let mut traversal = traversal;
                traversal.sort_unstable();
                if traversal != sorted {
                    return false;
                }
            }
            true
        }
    }

    quickcheck::quickcheck! {
        fn height_is_bounded_by_len(keys: Vec<i16>) -> bool {
            let tree: Tree<i16> = keys.into_iter().collect();

            let height = tree.height();
            height <= tree.len() && (height == 0) == tree.is_empty()
        }
    }
}
