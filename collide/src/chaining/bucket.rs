//! Declares [`ChainBucket`] - a singly linked chain of values of a single slot.
use std::fmt::{Debug, Formatter};

pub(super) struct Node<K> {
    pub(super) value: K,
    pub(super) next: Option<Box<Node<K>>>,
}

/// An append-only singly linked list of the values hashed into the same slot.
///
/// New values are prepended, so iteration goes from the most recently inserted value.
pub struct ChainBucket<K> {
    pub(super) head: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> ChainBucket<K> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Prepends `value` to the chain.
    pub fn push_front(&mut self, value: K) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Scans the whole chain for `value`.
    pub fn contains(&self, value: &K) -> bool
    where
        K: PartialEq,
    {
        self.iter().any(|v| v == value)
    }
}

impl<K> Default for ChainBucket<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for ChainBucket<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`ChainBucket`].
pub struct Iter<'a, K> {
    next: Option<&'a Node<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, K> IntoIterator for &'a ChainBucket<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
