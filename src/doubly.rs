//! A doubly linked list backed by an index arena.
//!
//! Back-pointers make `Box`-style unique ownership impossible, so the
//! nodes live in a flat slab and link to each other by index. Freed
//! slots are threaded onto a free list and reused by later pushes, and
//! there is no destructor recursion to worry about - dropping the slab
//! drops every node.
//!
//! # Examples
//!
//! ```
//! use treelist::doubly::DoublyList;
//!
//! let mut list = DoublyList::new();
//! list.push_front(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Iteration also runs tail to head.
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! assert_eq!(list.remove(&2), Some(2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
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
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked list. Nodes are stored in an arena and addressed by
/// stable index; `prev` and `next` relations are indices into that
/// arena.
#[derive(Debug)]
pub struct DoublyList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Inserts a value at the beginning of the list.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        self.check_links();
    }

    /// Appends a value at the end of the list.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        self.check_links();
    }

    /// The first value in the list, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// The last value in the list, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Unlinks and returns the first value (scanning from the head)
    /// equal to `target`, or `None` if no node matches. Both the
    /// forward and the backward links around the removed node are
    /// repaired, and its slot is returned to the free list.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let idx = self.find(|value| value == target)?;
        Some(self.remove_at(idx))
    }

    /// Unlinks and returns the first value (scanning from the head)
    /// matching the predicate, or `None` if none matches.
    pub fn remove_by(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.find(|value| pred(value))?;
        Some(self.remove_at(idx))
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the values from head to tail. The iterator is
    /// double-ended, so `rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = self.node(idx);
            if pred(&node.value) {
                return Some(idx);
            }
            cur = node.next;
        }
        None
    }

    fn remove_at(&mut self, idx: usize) -> T {
        let node = self.release(idx);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        self.check_links();
        node.value
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(idx) => {
                self.free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
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
            Slot::Vacant { .. } => unreachable!("list links never point at vacant slots"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("list links never point at vacant slots"),
        }
    }

    // In debug builds, walk the whole list and assert that every
    // backward link mirrors the forward one and that head/tail/len
    // agree with the chain.
    fn check_links(&self) {
        if cfg!(debug_assertions) {
            let mut count = 0;
            let mut prev = None;
            let mut cur = self.head;
            while let Some(idx) = cur {
                let node = self.node(idx);
                assert_eq!(node.prev, prev);
                prev = cur;
                cur = node.next;
                count += 1;
            }
            assert_eq!(prev, self.tail);
            assert_eq!(count, self.len);
        }
    }
}

impl<T> Extend<T> for DoublyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> std::iter::FromIterator<T> for DoublyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Double-ended iterator over a list's values. See [`DoublyList::iter`].
pub struct Iter<'a, T> {
    list: &'a DoublyList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
