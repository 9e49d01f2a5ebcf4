//! Implements [`Drop`] for [`ChainBucket`].
use crate::chaining::ChainBucket;

impl<K> Drop for ChainBucket<K> {
    /// Unlinks the nodes one by one, so that long chains don't overflow the stack with recursive
    /// drops.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
