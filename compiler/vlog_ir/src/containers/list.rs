//! Ordered list of owned items.

use std::collections::vec_deque;
use std::collections::VecDeque;

/// Ordered, growable sequence.
///
/// Appending and prepending are O(1); indexed lookup is O(1) and indexed
/// removal is O(n). [`concat`](AstList::concat) consumes the second list, so
/// it cannot be used again after the merge.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AstList<T> {
    items: VecDeque<T>,
}

impl<T> AstList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item to the end of the list.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Prepend an item to the front of the list.
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable item at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Remove and return the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    /// First item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Last item, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Move every item of `other` onto the end of this list.
    ///
    /// The result holds this list's items followed by `other`'s, in order.
    /// O(len(other)): the items are moved, not spliced.
    pub fn concat(&mut self, mut other: AstList<T>) {
        self.items.append(&mut other.items);
    }

    /// Returns `true` if `item` refers to an element stored in this list.
    ///
    /// This is an identity test: an equal value stored elsewhere does not match.
    pub fn contains_ref(&self, item: &T) -> bool {
        self.position_ref(item).is_some()
    }

    /// Index of the element `item` refers to, by identity.
    pub fn position_ref(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| std::ptr::eq(candidate, item))
    }

    /// Iterate front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate front to back with mutable access.
    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> AstList<T> {
    /// Returns `true` if an equal item is present.
    ///
    /// For arena handles equality is identity, since every handle names
    /// exactly one node.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for AstList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for AstList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: VecDeque::from(items),
        }
    }
}

impl<T> FromIterator<T> for AstList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for AstList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for AstList<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a AstList<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
