//! A singly linked list with uniquely owned nodes.
//!
//! Each node owns the next one through a `Box`, so the whole chain has
//! exactly one owner and no cycles. The list tracks only its head;
//! appending walks the chain, which keeps the structure honest about
//! what a head-only list can do cheaply.
//!
//! # Examples
//!
//! ```
//! use treelist::singly::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! list.push_back(4);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
//!
//! assert_eq!(list.remove(&3), Some(3));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);
//! ```

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list. Nodes are owned by their predecessor (or by
/// the list itself for the head).
#[derive(Debug)]
pub struct SinglyList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts a value at the beginning of the list.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Appends a value at the end of the list by walking to the last
    /// node. `O(n)` - the list keeps no tail pointer.
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// The first value in the list, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Unlinks and returns the first node whose value equals `target`,
    /// or `None` if no node matches. Head, interior, and tail nodes
    /// are all removable.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelist::singly::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.remove(&1), Some(1));
    /// assert_eq!(list.remove(&1), None);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.value != *target) {
            link = &mut link.as_mut().unwrap().next;
        }
        let node = link.take()?;
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for SinglyList<T> {
    // The derived drop would recurse once per node. Unlink nodes one
    // at a time instead.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> Extend<T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> std::iter::FromIterator<T> for SinglyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Iterator over a list's values from head to tail. See
/// [`SinglyList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_reverses_push_back_preserves() {
        let mut list = SinglyList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        list.push_back(4);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn remove_head_interior_and_tail() {
        let mut list: SinglyList<i32> = (1..=4).collect();

        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);

        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4]);

        assert_eq!(list.remove(&4), Some(4));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2]);

        assert_eq!(list.remove(&2), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn remove_missing_value_is_a_no_op() {
        let mut list: SinglyList<i32> = (1..=3).collect();

        assert_eq!(list.remove(&42), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_takes_the_first_match_only() {
        let mut list: SinglyList<i32> = [1, 2, 1, 2].iter().copied().collect();

        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 1, 2]);
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow() {
        let mut list = SinglyList::new();
        for value in 0..100_000 {
            list.push_front(value);
        }
        drop(list);
    }
}
