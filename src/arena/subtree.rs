//! Read-only view of a single slot of a [SearchArenaTree] and everything below it

use super::search_tree::{ArenaIndex, SearchArenaTree};
use crate::{BstError, Nodelike, Tags};
use core::fmt;

/// A borrowed subtree. It may be the empty sentinel.
pub struct Subtree<'a, T> {
    tree: &'a SearchArenaTree<T>,
    index: ArenaIndex,
}

impl<'a, T> Clone for Subtree<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Subtree<'a, T> {}

impl<'a, T> Subtree<'a, T> {
    pub(super) fn new(tree: &'a SearchArenaTree<T>, index: ArenaIndex) -> Self {
        Subtree { tree, index }
    }

    /// Arena index of the slot, stable as long as the tree is not mutated
    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn content(&self) -> Option<&'a T> {
        self.tree.occupied(self.index).map(|node| &node.content)
    }

    /// Multiplicity of the content; 0 for the empty sentinel
    pub fn count(&self) -> usize {
        self.tree.occupied(self.index).map_or(0, |node| node.count)
    }

    pub fn tags(&self) -> Option<&'a Tags> {
        self.tree.occupied(self.index).map(|node| &node.tags)
    }

    pub fn tag(&self, name: &str) -> Option<usize> {
        self.tags().and_then(|tags| tags.get(name))
    }

    pub fn parent(&self) -> Option<Self> {
        let parent = self.tree.occupied(self.index)?.parent_ref?;
        Some(Subtree::new(self.tree, parent))
    }

    /// Left child slot (possibly empty); `None` for the empty sentinel
    pub fn left(&self) -> Option<Self> {
        self.subtree(0).ok()
    }

    /// Right child slot (possibly empty); `None` for the empty sentinel
    pub fn right(&self) -> Option<Self> {
        self.subtree(1).ok()
    }
}

impl<'a, T> Nodelike for Subtree<'a, T> {
    fn is_empty(&self) -> bool {
        !self.tree.is_occupied(self.index)
    }

    fn is_leaf(&self) -> bool {
        self.tree.is_leaf_at(self.index)
    }

    fn max_degree(&self) -> usize {
        2
    }

    fn subtree(&self, n: usize) -> Result<Self, BstError> {
        let (left, right) = self.tree.children(self.index).ok_or(BstError::NotFound)?;
        match n {
            0 => Ok(Subtree::new(self.tree, left)),
            1 => Ok(Subtree::new(self.tree, right)),
            _ => Err(BstError::SubtreeIndexOutOfBound(n)),
        }
    }
}

impl<'a, T: fmt::Display> fmt::Display for Subtree<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.fmt_from(self.index, f)
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Subtree<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("index", &self.index)
            .field("node", self.tree.node(self.index))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BstError, Nodelike, SearchArenaTree};

    #[test_log::test]
    fn test_navigation() {
        let mut tree = SearchArenaTree::<i32>::new();
        tree.insert_all([10, 20, 5, 2, 20]);

        let root = tree.root();
        assert_eq!(root.content(), Some(&10));
        assert!(root.parent().is_none());
        assert_eq!(root.max_degree(), 2);
        assert!(!root.is_leaf());

        let right = root.right().unwrap();
        assert_eq!(right.content(), Some(&20));
        assert_eq!(right.count(), 2);
        assert!(right.is_leaf());
        assert_eq!(right.parent().unwrap().index(), root.index());

        let empty = right.left().unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_leaf());
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.content(), None);
        assert!(empty.left().is_none());
        assert_eq!(empty.to_string(), "∅");
    }

    #[test_log::test]
    fn test_subtree_index() {
        let mut tree = SearchArenaTree::<i32>::new();
        tree.insert_all([10, 5]);
        let root = tree.root();
        assert_eq!(root.subtree(0).unwrap().content(), Some(&5));
        assert!(root.subtree(1).unwrap().is_empty());
        assert_eq!(root.subtree(2).err(), Some(BstError::SubtreeIndexOutOfBound(2)));
    }
}
