//! Single-pass labelling of a [SearchArenaTree].
//!
//! Each labelling visits every node exactly once. The running position is threaded through
//! the recursion as a mutable accumulator, so repeated calls are independent of each other.

use super::search_tree::{ArenaIndex, ArenaNode, OccupiedNode, SearchArenaTree, ROOT};
use crate::BstError;
use tracing::trace;
use tracing_attributes::instrument;

pub const HEIGHT_TAG: &str = "height";
pub const DESCEND_TAG: &str = "descend";
pub const INTERNAL_TAG: &str = "internal";
pub const ONLY_SON_TAG: &str = "onlySon";
pub const ROAD_TAG: &str = "road";

impl<T> SearchArenaTree<T> {
    fn set_tag_at(&mut self, index: ArenaIndex, name: &str, value: usize) {
        if let Some(node) = self.occupied_mut(index) {
            node.tags.set(name, value);
        }
    }

    /// Tag every leaf with `height`: the number of edges from the root plus one.
    ///
    /// `{10, {5, {2, ∅, ∅}, ∅}, {20, {15, {12, ∅, ∅}, ∅}, ∅}}` is tagged as
    /// `{10, {5, {2 [(height, 3)], ∅, ∅}, ∅}, {20, {15, {12 [(height, 4)], ∅, ∅}, ∅}, ∅}}`
    #[instrument(level = "debug", skip_all)]
    pub fn tag_height_leaf(&mut self) {
        self.tag_height_from(ROOT, 1);
    }

    fn tag_height_from(&mut self, index: ArenaIndex, height: usize) {
        let Some((left, right)) = self.children(index) else {
            return;
        };
        if self.is_leaf_at(index) {
            self.set_tag_at(index, HEIGHT_TAG, height);
        } else {
            self.tag_height_from(left, height + 1);
            self.tag_height_from(right, height + 1);
        }
    }

    /// Tag all nodes with `descend`, their position in a descending (right, self, left) traversal
    /// starting at 1. The largest element gets 1.
    #[instrument(level = "debug", skip_all)]
    pub fn tag_pos_descend(&mut self) {
        let mut position = 0;
        self.tag_descend_from(ROOT, &mut position);
        trace!(tagged = position, "Tagged descending positions");
    }

    fn tag_descend_from(&mut self, index: ArenaIndex, position: &mut usize) {
        let Some((left, right)) = self.children(index) else {
            return;
        };
        self.tag_descend_from(right, position);
        *position += 1;
        self.set_tag_at(index, DESCEND_TAG, *position);
        self.tag_descend_from(left, position);
    }

    /// Tag the internal (non-leaf) nodes with `internal`, their position in the in-order traversal
    /// of all nodes. A root with at least one child is internal; a lone root is a leaf.
    ///
    /// Returns the number of internal nodes. For
    /// `{30, {10, {5, {2, ∅, ∅}, ∅}, {20, {15, {12, ∅, ∅}, ∅}, ∅}}, ∅}` this is 5 and the
    /// positions are 30 → 7, 10 → 3, 5 → 2, 20 → 6, 15 → 5.
    #[instrument(level = "debug", skip_all)]
    pub fn tag_internal_inorder(&mut self) -> usize {
        let mut position = 0;
        self.tag_internal_from(ROOT, &mut position)
    }

    fn tag_internal_from(&mut self, index: ArenaIndex, position: &mut usize) -> usize {
        let Some((left, right)) = self.children(index) else {
            return 0;
        };
        let mut tagged = self.tag_internal_from(left, position);
        *position += 1;
        if !self.is_leaf_at(index) {
            self.set_tag_at(index, INTERNAL_TAG, *position);
            tagged += 1;
        }
        tagged + self.tag_internal_from(right, position)
    }

    /// Tag every only son (a child whose sibling slot is empty) with `onlySon`, its position
    /// in the pre-order traversal. The root is never an only son.
    ///
    /// Returns the number of only sons.
    #[instrument(level = "debug", skip_all)]
    pub fn tag_only_son_preorder(&mut self) -> usize {
        let mut position = 0;
        self.tag_only_son_from(ROOT, false, &mut position)
    }

    fn tag_only_son_from(&mut self, index: ArenaIndex, only_son: bool, position: &mut usize) -> usize {
        let Some((left, right)) = self.children(index) else {
            return 0;
        };
        *position += 1;
        let mut tagged = 0;
        if only_son {
            self.set_tag_at(index, ONLY_SON_TAG, *position);
            tagged += 1;
        }
        let (has_left, has_right) = (self.is_occupied(left), self.is_occupied(right));
        tagged += self.tag_only_son_from(left, !has_right, position);
        tagged + self.tag_only_son_from(right, !has_left, position)
    }

    /// Keep only the tag `name` on every node
    pub fn filter_tags(&mut self, name: &str) {
        self.occupied_nodes_mut().for_each(|node| node.tags.retain_only(name));
    }

    pub fn clear_tags(&mut self) {
        self.occupied_nodes_mut().for_each(|node| node.tags.clear());
    }

    fn occupied_nodes_mut(&mut self) -> impl Iterator<Item = &mut OccupiedNode<T>> {
        self.nodes.iter_mut().filter_map(|node| match node {
            ArenaNode::Occupied(node) => Some(node),
            ArenaNode::Empty => None,
        })
    }
}

impl<T: Ord> SearchArenaTree<T> {
    /// Starting at the node holding `element`, walk `up` steps towards the root and then `right`
    /// steps down the right branch. Returns the element of the node reached.
    ///
    /// All nodes on the way are tagged with `road`, numbered consecutively from 1 at the start.
    /// The road is validated before anything is tagged.
    ///
    /// For `{10, {5, {2, ∅, ∅}, {7, ∅, ∅}}, {20, {15, {12, ∅, ∅}, ∅}, {30, ∅, ∅}}}`,
    /// `road_up_right(&7, 2, 2)` returns 30 and tags 7, 5, 10, 20, 30 with 1 to 5.
    #[instrument(level = "debug", skip_all)]
    pub fn road_up_right(&mut self, element: &T, up: usize, right: usize) -> Result<&T, BstError> {
        let mut current = self.locate(element).ok_or(BstError::NotFound)?;
        let mut road = Vec::with_capacity(up + right + 1);
        road.push(current);

        for steps in 0..up {
            current = self
                .occupied(current)
                .and_then(|node| node.parent_ref)
                .ok_or(BstError::StructuralExhaustion {
                    direction: "parent",
                    steps,
                })?;
            road.push(current);
        }
        for steps in 0..right {
            current = self
                .occupied(current)
                .map(|node| node.right)
                .filter(|child| self.is_occupied(*child))
                .ok_or(BstError::StructuralExhaustion {
                    direction: "right",
                    steps,
                })?;
            road.push(current);
        }

        for (position, index) in road.into_iter().enumerate() {
            self.set_tag_at(index, ROAD_TAG, position + 1);
        }
        self.occupied(current)
            .map(|node| &node.content)
            .ok_or(BstError::NotFound)
    }
}
