/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use tracing::{debug, trace};

mod error;

pub use error::InsertError;

/// Creates a [`List`](crate::List) containing the given arguments, in the order written:
///
/// ```
/// # use poslist::*;
/// #
/// let mut l = List::new();
///
/// l.push_front(3).unwrap();
/// l.push_front(2).unwrap();
/// l.push_front(1).unwrap();
///
/// assert_eq!(list![1, 2, 3], l);
/// ```
#[macro_export]
macro_rules! list {
    ($($e:expr),* $(,)?) => {
        <$crate::List<_> as ::core::iter::FromIterator<_>>::from_iter([$($e),*])
    };
}

/// A singly linked list with insertion at any position.
///
/// # Complexity
///
/// Let *n* be the number of elements in the list and *k* the insertion (or lookup) position.
///
/// ## Temporal complexity
///
/// | Operation                 | Average | Worst case  |
/// |:------------------------- | -------:| -----------:|
/// | `new()`                   |    Θ(1) |        Θ(1) |
/// | `insert(0, _)`            |    Θ(1) |        Θ(n) |
/// | `insert(k, _)`            |    Θ(k) |        Θ(n) |
/// | `insert(len(), _)`        |    Θ(1) |        Θ(n) |
/// | `push_front()`            |    Θ(1) |        Θ(n) |
/// | `push_back()`             |    Θ(1) |        Θ(n) |
/// | `first()`                 |    Θ(1) |        Θ(1) |
/// | `last()`                  |    Θ(1) |        Θ(1) |
/// | `get(k)`                  |    Θ(k) |        Θ(k) |
/// | `len()`                   |    Θ(1) |        Θ(1) |
/// | `clone()`                 |    Θ(n) |        Θ(n) |
/// | iterator creation         |    Θ(1) |        Θ(1) |
/// | iterator step             |    Θ(1) |        Θ(1) |
/// | iterator full             |    Θ(n) |        Θ(n) |
///
/// The worst case of the insertions is the arena growing.
///
/// # Implementation details
///
/// Nodes live in an arena and link to their successor by arena index.  Nodes are never removed
/// one at a time, so an index stays valid for as long as the list holds nodes, and the arena
/// length is the list length.  The position of a node in the arena records when it was created,
/// not where it sits in the list.
pub struct List<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> List<T> {
    #[must_use]
    pub fn new() -> List<T> {
        List { nodes: Vec::new(), head: None, tail: None }
    }

    /// Creates an empty list with room for `capacity` nodes before the arena has to grow.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> List<T> {
        List { nodes: Vec::with_capacity(capacity), head: None, tail: None }
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|id| &self.node(id).value)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|id| &self.node(id).value)
    }

    /// Returns the element at `index`, walking the chain from the head.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }

        self.node_id_at(index).map(|id| &self.node(id).value)
    }

    /// Inserts `value` so that it ends up at `position`, shifting the element previously at that
    /// position, and every element after it, one position later.
    ///
    /// Valid positions range from `0` (the new element becomes the head) to `len()` (the new
    /// element becomes the last one).  On error the list is not modified and the value is
    /// returned inside the error.
    ///
    /// ```
    /// # use poslist::*;
    /// #
    /// let mut l = list![3, 5];
    ///
    /// l.insert(1, 4).unwrap();
    ///
    /// assert_eq!(l, list![3, 4, 5]);
    /// assert!(l.insert(4, 0).unwrap_err().is_out_of_range());
    /// ```
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), InsertError<T>> {
        let length = self.len();

        if position > length {
            debug!(position, length, "rejecting list insert: position out of range");

            return Err(InsertError::OutOfRange { position, length, value });
        }

        if let Err(source) = self.nodes.try_reserve(1) {
            debug!(position, length, "rejecting list insert: node allocation failed");

            return Err(InsertError::AllocationFailure { value, source });
        }

        trace!(position, length, "list insert");

        // Nothing below can fail, so the list is never left half spliced.
        let id = NodeId(length);
        let next = match self.predecessor(position) {
            None => self.head.replace(id),
            Some(prev) => self.node_mut(prev).next.replace(id),
        };

        if next.is_none() {
            self.tail = Some(id);
        }

        self.nodes.push(Node { value, next });

        Ok(())
    }

    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.insert(0, value)
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.insert(self.len(), value)
    }

    /// Drops every element.  The arena keeps its allocation.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.nodes.clear();
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// The node that precedes `position` once the new node is spliced in, or `None` if the new
    /// node becomes the head.
    fn predecessor(&self, position: usize) -> Option<NodeId> {
        match position {
            0 => None,
            p if p == self.len() => self.tail,
            p => self.node_id_at(p - 1),
        }
    }

    fn node_id_at(&self, index: usize) -> Option<NodeId> {
        let mut cursor = self.head;

        for _ in 0..index {
            cursor = self.node(cursor?).next;
        }

        cursor
    }

    /// Appends without going through `try_reserve()`.  Used by the infallible constructors, which
    /// abort on allocation failure like the standard collections do.
    fn push_back_node(&mut self, value: T) {
        let id = NodeId(self.len());

        self.nodes.push(Node { value, next: None });

        match self.tail.replace(id) {
            Some(prev) => self.node_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> List<T> {
        List::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> List<T> {
        List { nodes: self.nodes.clone(), head: self.head, tail: self.tail }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &List<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &List<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &List<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one after the other it doesn't
        // hash to the same thing as a single collection with the same elements in the same order.
        self.len().hash(state);

        for e in self {
            e.hash(state);
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        fmt.write_str("[")?;

        for v in self {
            if !first {
                fmt.write_str(", ")?;
            }
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> List<T> {
        let mut list = List::new();

        list.extend(into_iter);

        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, into_iter: I) {
        let iter = into_iter.into_iter();
        let (min_size, _) = iter.size_hint();

        self.nodes.reserve(min_size);

        for e in iter {
            self.push_back_node(e);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, into_iter: I) {
        self.extend(into_iter.into_iter().copied());
    }
}

#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<NodeId>,
    length: usize,
}

impl<T> Iter<'_, T> {
    fn new(list: &List<T>) -> Iter<'_, T> {
        Iter { nodes: &list.nodes, next: list.head, length: list.len() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { nodes: self.nodes, next: self.next, length: self.length }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.nodes[self.next?.0];

        self.next = node.next;
        self.length -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.length, Some(self.length))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a [`List`], in list order.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: Vec<Option<Node<T>>>,
    next: Option<NodeId>,
    length: usize,
}

impl<T> IntoIter<T> {
    fn new(list: List<T>) -> IntoIter<T> {
        let length = list.len();
        let next = list.head;

        IntoIter { slots: list.nodes.into_iter().map(Some).collect(), next, length }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.slots[self.next?.0].take()?;

        self.next = node.next;
        self.length -= 1;

        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.length, Some(self.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
    use ::serde::ser::{Serialize, Serializer};
    use core::marker::PhantomData;

    impl<T> Serialize for List<T>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for List<T>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<List<T>, D::Error> {
            deserializer.deserialize_seq(ListVisitor { _phantom_t: PhantomData })
        }
    }

    struct ListVisitor<T> {
        _phantom_t: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for ListVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = List<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a sequence")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<List<T>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut list: List<T> = match seq.size_hint() {
                Some(capacity) => List::with_capacity(capacity),
                None => List::new(),
            };

            while let Some(value) = seq.next_element()? {
                list.push_back_node(value);
            }

            Ok(list)
        }
    }
}
