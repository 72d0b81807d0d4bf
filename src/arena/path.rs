//! Addressing subtrees by `L`/`R` step strings from the root.
//! The empty path addresses the root itself.

use super::search_tree::{ArenaIndex, SearchArenaTree, ROOT};
use super::subtree::Subtree;
use crate::{iterable_tree::Step, BstError};
use std::cmp::Ordering;

impl<T: Ord> SearchArenaTree<T> {
    /// The path from the root to the node holding `element`.
    ///
    /// For `{50, {30(2), {10, ∅, ∅}, {40(4), ∅, ∅}}, {80(2), {60, ∅, ∅}, ∅}}`, the path
    /// of 10 is `"LL"`, the one of 60 is `"RL"` and the one of 50 is `""`.
    pub fn path(&self, element: &T) -> Result<String, BstError> {
        let mut path = String::new();
        let mut index = ROOT;
        loop {
            let node = self.occupied(index).ok_or(BstError::NotFound)?;
            let step = match element.cmp(&node.content) {
                Ordering::Less => Step::Left,
                Ordering::Greater => Step::Right,
                Ordering::Equal => return Ok(path),
            };
            path.push(step.symbol());
            index = node.child(step);
        }
    }
}

impl<T> SearchArenaTree<T> {
    pub fn root(&self) -> Subtree<'_, T> {
        Subtree::new(self, ROOT)
    }

    /// The subtree reached by following `path` from the root. Fails with
    /// [BstError::NotFound] if the path leaves the tree and with
    /// [BstError::InvalidArgument] if it contains anything but `L` and `R`.
    pub fn subtree_with_path(&self, path: &str) -> Result<Subtree<'_, T>, BstError> {
        self.index_with_path(path).map(|index| Subtree::new(self, index))
    }

    /// Set a tag on the node addressed by `path`
    pub fn set_tag(&mut self, path: &str, name: &str, value: usize) -> Result<(), BstError> {
        let index = self.index_with_path(path)?;
        let node = self.occupied_mut(index).ok_or(BstError::NotFound)?;
        node.tags.set(name, value);
        Ok(())
    }

    fn index_with_path(&self, path: &str) -> Result<ArenaIndex, BstError> {
        path.chars().try_fold(ROOT, |index, symbol| {
            let step = Step::try_from(symbol)?;
            self.occupied(index)
                .map(|node| node.child(step))
                .filter(|child| self.is_occupied(*child))
                .ok_or(BstError::NotFound)
        })
    }
}
