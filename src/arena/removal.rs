//! Removal of element instances from a [SearchArenaTree].
//!
//! When the last instance of an element goes, its node is restructured in place:
//! * a leaf becomes the empty sentinel,
//! * a node with a single occupied child takes over that child's content and grandchildren,
//! * a node with two occupied children takes the smallest element of its right subtree
//!   (with its multiplicity), and that element's node is purged from the right subtree.
//!
//! Tags belong to the slot, not to the element: a node that takes over content keeps its own
//! tags and the tags of the vacated node are dropped.

use super::search_tree::{ArenaIndex, ArenaNode, SearchArenaTree};
use crate::BstError;
use std::mem;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Content taken out of a node when it is unlinked
pub(super) struct Extracted<T> {
    pub(super) content: T,
    pub(super) count: usize,
}

impl<T: Ord> SearchArenaTree<T> {
    /// Remove a single instance of `element`. If the multiplicity is larger than one, only
    /// the counter is decremented.
    #[instrument(level = "debug", skip_all)]
    pub fn remove(&mut self, element: &T) -> Result<(), BstError> {
        self.remove_n(element, 1)
    }

    /// Decrement the multiplicity of `element` by `num`. If it drops to zero (or below),
    /// the element is removed entirely.
    #[instrument(level = "debug", skip_all)]
    pub fn remove_n(&mut self, element: &T, num: usize) -> Result<(), BstError> {
        let index = self.locate(element).ok_or(BstError::NotFound)?;
        if let Some(node) = self.occupied_mut(index) {
            if num < node.count {
                node.count -= num;
                trace!(count = node.count, "Decremented multiplicity");
                return Ok(());
            }
        }
        self.unlink(index).map(|_| ()).ok_or(BstError::NotFound)
    }

    /// Remove all instances of `element`. Returns the number of removed instances.
    #[instrument(level = "debug", skip_all)]
    pub fn remove_all(&mut self, element: &T) -> Result<usize, BstError> {
        let index = self.locate(element).ok_or(BstError::NotFound)?;
        self.unlink(index)
            .map(|removed| removed.count)
            .ok_or(BstError::NotFound)
    }

    /// Remove one instance of every present element of a sequence. Absent items (`None`) and
    /// elements not in the tree are skipped.
    ///
    /// Returns the number of removed instances.
    pub fn remove_each<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let mut removed = 0;
        for element in elements.into_iter().filter_map(Into::into) {
            if self.remove(&element).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

impl<T> SearchArenaTree<T> {
    /// Removes the content held at `index` regardless of its multiplicity and repairs
    /// the structure. Returns what was removed or `None` if the slot is empty.
    pub(super) fn unlink(&mut self, index: ArenaIndex) -> Option<Extracted<T>> {
        let (left, right) = self.children(index)?;
        match (self.is_occupied(left), self.is_occupied(right)) {
            (false, false) => {
                let ArenaNode::Occupied(node) = mem::replace(&mut self.nodes[index.0], ArenaNode::Empty) else {
                    return None;
                };
                self.release(left);
                self.release(right);
                debug!(slot = index.0, "Removed leaf");
                Some(Extracted {
                    content: node.content,
                    count: node.count,
                })
            }
            (true, false) => self.splice(index, left, right),
            (false, true) => self.splice(index, right, left),
            (true, true) => {
                let successor = self.min_from(right);
                let promoted = self.unlink(successor)?;
                debug!(slot = index.0, "Replaced content by in-order successor");
                self.replace_content(index, promoted)
            }
        }
    }

    /// Moves the only occupied `child` of `index` up into `index`. The (empty) `sibling`
    /// and the child's old slot are released.
    fn splice(&mut self, index: ArenaIndex, child: ArenaIndex, sibling: ArenaIndex) -> Option<Extracted<T>> {
        let ArenaNode::Occupied(promoted) = mem::replace(&mut self.nodes[child.0], ArenaNode::Empty) else {
            return None;
        };
        for grandchild in [promoted.left, promoted.right] {
            if let Some(node) = self.occupied_mut(grandchild) {
                node.parent_ref = Some(index);
            }
        }
        let node = self.occupied_mut(index)?;
        node.left = promoted.left;
        node.right = promoted.right;
        self.release(child);
        self.release(sibling);
        debug!(slot = index.0, "Spliced child into parent");

        self.replace_content(
            index,
            Extracted {
                content: promoted.content,
                count: promoted.count,
            },
        )
    }

    fn replace_content(&mut self, index: ArenaIndex, new: Extracted<T>) -> Option<Extracted<T>> {
        let node = self.occupied_mut(index)?;
        Some(Extracted {
            content: mem::replace(&mut node.content, new.content),
            count: mem::replace(&mut node.count, new.count),
        })
    }

    /// Slot of the smallest element in the subtree rooted at the occupied slot `index`
    fn min_from(&self, mut index: ArenaIndex) -> ArenaIndex {
        while let Some(left) = self.occupied(index).map(|node| node.left) {
            if !self.is_occupied(left) {
                break;
            }
            index = left;
        }
        index
    }
}
