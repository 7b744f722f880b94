//! A circular doubly-linked ring backed by an index arena.
//!
//! Every node's `next` and `prev` always point at a live node; a ring
//! of one links to itself. The ring tracks only its head - there is no
//! tail field, because the last node is always `head.prev`. That
//! relation is load-bearing (appending splices in front of the head),
//! so it is asserted after every mutation rather than assumed.
//!
//! # Examples
//!
//! ```
//! use treelist::circular::CircularList;
//!
//! let mut ring = CircularList::new();
//! ring.push_front(3);
//! ring.push_front(2);
//! ring.push_front(1);
//! ring.push_back(4);
//!
//! // One full cycle from the head, each node exactly once.
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
//! assert_eq!(ring.back(), Some(&4));
//!
//! assert_eq!(ring.remove(&2), Some(2));
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 3, 4]);
//! ```

use std::mem;

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// A circular doubly-linked list. Nodes live in an arena and link by
/// index; the links are total, so traversal from any node eventually
/// revisits that node after exactly one full cycle.
#[derive(Debug)]
pub struct CircularList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularList<T> {
    /// Generates a new, empty ring.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            len: 0,
        }
    }

    /// Appends a value at the end of the ring, i.e. splices it in
    /// between `head.prev` and the head. The head does not move.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value);
        if let Some(head) = self.head {
            let last = self.node(head).prev;
            self.node_mut(last).next = idx;
            self.node_mut(head).prev = idx;
            let node = self.node_mut(idx);
            node.prev = last;
            node.next = head;
        } else {
            self.head = Some(idx);
        }
        self.len += 1;
        self.check_ring();
    }

    /// Inserts a value at the beginning of the ring. This is an append
    /// followed by moving the head back one step, which is exactly how
    /// the head-mutating insert interacts with the `head.prev` = last
    /// relation.
    pub fn push_front(&mut self, value: T) {
        self.push_back(value);
        if let Some(head) = self.head {
            self.head = Some(self.node(head).prev);
        }
        self.check_ring();
    }

    /// The value at the head of the ring, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// The value at the end of the ring (`head.prev`), if any.
    pub fn back(&self) -> Option<&T> {
        self.head.map(|head| &self.node(self.node(head).prev).value)
    }

    /// Unlinks and returns the first value (walking forward from the
    /// head) equal to `target`, or `None` if no node matches. Removing
    /// the head advances it; removing the only node empties the ring.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_by(|value| value == target)
    }

    /// Unlinks and returns the first value (walking forward from the
    /// head) matching the predicate, or `None` if none matches.
    pub fn remove_by(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.find(|value| pred(value))?;
        let node = self.release(idx);

        if self.len == 1 {
            self.head = None;
        } else {
            self.node_mut(node.prev).next = node.next;
            self.node_mut(node.next).prev = node.prev;
            if self.head == Some(idx) {
                self.head = Some(node.next);
            }
        }
        self.len -= 1;
        self.check_ring();
        Some(node.value)
    }

    /// The number of values in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates one full cycle starting at the head, yielding each
    /// value exactly once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
            remaining: self.len,
        }
    }

    fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut cur = self.head?;
        for _ in 0..self.len {
            let node = self.node(cur);
            if pred(&node.value) {
                return Some(cur);
            }
            cur = node.next;
        }
        None
    }

    /// Allocates a slot for `value` with both links pointing at the
    /// new node itself, ready to be spliced into the ring.
    fn alloc(&mut self, value: T) -> usize {
        match self.free {
            Some(idx) => {
                self.free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(Node {
                    value,
                    prev: idx,
                    next: idx,
                });
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Slot::Occupied(Node {
                    value,
                    prev: idx,
                    next: idx,
                }));
                idx
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("ring links never point at vacant slots"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("ring links never point at vacant slots"),
        }
    }

    // In debug builds, walk one full cycle from the head and assert
    // the ring invariants: `len` forward steps return to the head,
    // every `next.prev` points back, and the last node is `head.prev`.
    fn check_ring(&self) {
        if cfg!(debug_assertions) {
            let head = match self.head {
                Some(head) => head,
                None => {
                    assert_eq!(self.len, 0);
                    return;
                }
            };
            assert_ne!(self.len, 0);

            let mut cur = head;
            for _ in 0..self.len {
                let node = self.node(cur);
                assert_eq!(self.node(node.next).prev, cur);
                cur = node.next;
            }
            // One full cycle lands back on the head, never earlier.
            assert_eq!(cur, head);
            assert_eq!(self.node(head).prev, {
                let mut last = head;
                for _ in 1..self.len {
                    last = self.node(last).next;
                }
                last
            });
        }
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> std::iter::FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Iterator over one full cycle of a ring, starting at the head. See
/// [`CircularList::iter`].
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cur?);
        self.cur = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
