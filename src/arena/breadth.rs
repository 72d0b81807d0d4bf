//! Breadth-first traversal of a [SearchArenaTree]

use super::search_tree::{ArenaIndex, OccupiedNode, SearchArenaTree, ROOT};
use itertools::repeat_n;
use std::collections::VecDeque;

/// Iterator visiting the occupied nodes level by level, left to right
pub struct BreadthFirstIterator<'a, T> {
    tree: &'a SearchArenaTree<T>,
    queue: VecDeque<ArenaIndex>,
}

impl<'a, T> BreadthFirstIterator<'a, T> {
    pub fn new(tree: &'a SearchArenaTree<T>, root: ArenaIndex) -> Self {
        let mut queue = VecDeque::new();
        if tree.is_occupied(root) {
            queue.push_back(root);
        }
        BreadthFirstIterator { tree, queue }
    }
}

impl<'a, T> Iterator for BreadthFirstIterator<'a, T> {
    type Item = &'a OccupiedNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.occupied(self.queue.pop_front()?)?;
        self.queue.extend(
            [node.left, node.right]
                .into_iter()
                .filter(|child| self.tree.is_occupied(*child)),
        );
        Some(node)
    }
}

impl<T> SearchArenaTree<T> {
    /// Breadth-first iteration over the occupied nodes
    pub fn iter_breadth_nodes(&self) -> BreadthFirstIterator<'_, T> {
        BreadthFirstIterator::new(self, ROOT)
    }

    /// Breadth-first iteration over the distinct elements
    ///
    /// For `{50, {30(2), {10, ∅, ∅}, {40, ∅, ∅}}, {80(2), {60, ∅, ∅}, ∅}}` this yields
    /// 50, 30, 80, 10, 40, 60.
    pub fn iter_breadth(&self) -> impl Iterator<Item = &T> {
        self.iter_breadth_nodes().map(OccupiedNode::content)
    }

    /// Breadth-first iteration over all instances. Each element is repeated according to its
    /// multiplicity: 50, 30, 30, 80, 80, 10, 40, 60 for the tree above.
    pub fn iter_breadth_instances(&self) -> impl Iterator<Item = &T> {
        self.iter_breadth_nodes()
            .flat_map(|node| repeat_n(node.content(), node.count()))
    }
}
