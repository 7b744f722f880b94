//! A name/ID directory of people, stored in a circular doubly-linked
//! ring.
//!
//! New entries are appended at the end of the ring, which is cheap
//! because the last node is always `head.prev` - no tail field needed.
//! Lookups walk forward from the front and return the first entry with
//! a matching ID; absence is an `Option`, not an error.
//!
//! # Examples
//!
//! ```
//! use treelist::directory::Directory;
//!
//! let mut directory = Directory::new();
//! directory.add("Juan", 123);
//! directory.add("Felipe", 1234);
//! directory.add("Mónica", 66777);
//!
//! assert_eq!(directory.find(66777), Some("Mónica"));
//! assert_eq!(directory.find(999), None);
//! ```

use crate::circular::{self, CircularList};

/// A person registered in the directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    /// The person's display name.
    pub name: String,
    /// The person's numeric ID. IDs are not required to be unique;
    /// lookups return the first match in ring order.
    pub id: u64,
}

/// A registry of people keyed by numeric ID, backed by a
/// [`CircularList`].
#[derive(Debug, Default)]
pub struct Directory {
    people: CircularList<Person>,
}

impl Directory {
    /// Generates a new, empty directory.
    pub fn new() -> Self {
        Self {
            people: CircularList::new(),
        }
    }

    /// Registers a person at the end of the directory. Iteration from
    /// the front preserves registration order.
    pub fn add(&mut self, name: impl Into<String>, id: u64) {
        self.people.push_back(Person {
            name: name.into(),
            id,
        });
    }

    /// Registers a person at the beginning of the directory, making
    /// them the new front. This moves the ring's head, so the previous
    /// front becomes the second entry and the last entry stays last.
    pub fn add_front(&mut self, name: impl Into<String>, id: u64) {
        self.people.push_front(Person {
            name: name.into(),
            id,
        });
    }

    /// Looks up the name of the first person (in ring order from the
    /// front) with the given ID.
    pub fn find(&self, id: u64) -> Option<&str> {
        self.people
            .iter()
            .find(|person| person.id == id)
            .map(|person| person.name.as_str())
    }

    /// Removes and returns the first person with the given ID, or
    /// `None` if nobody matches.
    pub fn remove(&mut self, id: u64) -> Option<Person> {
        self.people.remove_by(|person| person.id == id)
    }

    /// The number of registered people.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterates over the people in ring order from the front.
    pub fn iter(&self) -> circular::Iter<'_, Person> {
        self.people.iter()
    }
}
