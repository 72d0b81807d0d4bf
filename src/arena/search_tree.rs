//! Implementation of an [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! multiset binary search tree. Every slot of the arena is a node that is either empty or occupied.
//! Occupied nodes own their two child slots (by index) and keep a non-owning reference to their parent.
//! Removing content rewrites the slots in place; slots that become unreachable go to a free list
//! and are reused by later insertions.

use crate::{iterable_tree::Step, Tags};
use std::cmp::Ordering;
use tracing::{debug, trace};
use tracing_attributes::instrument;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ArenaIndex(pub usize);

/// The root always lives in the first slot. Deletion never moves it.
pub(crate) const ROOT: ArenaIndex = ArenaIndex(0);

/// Content and structure of a node that holds an element
#[derive(Debug, Clone)]
pub struct OccupiedNode<T> {
    /// The stored element
    pub(super) content: T,
    /// Multiplicity of `content`, always at least 1
    pub(super) count: usize,
    /// Owning references to the children. They always point to a slot, which may be empty.
    pub(super) left: ArenaIndex,
    pub(super) right: ArenaIndex,
    /// Only used for upward navigation
    pub(super) parent_ref: Option<ArenaIndex>,
    pub(super) tags: Tags,
}

impl<T> OccupiedNode<T> {
    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn parent_ref(&self) -> Option<ArenaIndex> {
        self.parent_ref
    }

    pub(super) fn child(&self, step: Step) -> ArenaIndex {
        match step {
            Step::Left => self.left,
            Step::Right => self.right,
        }
    }
}

/// A slot in the arena: either the empty sentinel or a node holding content.
#[derive(Debug, Clone)]
pub enum ArenaNode<T> {
    Empty,
    Occupied(OccupiedNode<T>),
}

impl<T> ArenaNode<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ArenaNode::Empty)
    }

    pub fn occupied(&self) -> Option<&OccupiedNode<T>> {
        match self {
            ArenaNode::Occupied(node) => Some(node),
            ArenaNode::Empty => None,
        }
    }
}

/// Multiset binary search tree that uses arena allocation.
///
/// Elements are ordered by their [Ord] implementation. Inserting an element that is already
/// present increments the multiplicity of its node instead of creating a new one. The tree is not
/// balanced and degrades to a list under sorted insertion.
///
/// Besides the usual search tree operations, nodes can carry labels ([Tags]) that are attached by
/// single-pass traversals (see the `tag_*` methods) or set explicitly via [SearchArenaTree::set_tag].
#[derive(Debug, Clone)]
pub struct SearchArenaTree<T> {
    /// Memory allocated area for nodes
    pub(super) nodes: Vec<ArenaNode<T>>,
    /// Unreachable slots available for reuse
    pub(super) free: Vec<ArenaIndex>,
}

impl<T> SearchArenaTree<T> {
    /// Contructor. Creates a tree that only consists of an empty root.
    pub fn new() -> Self {
        SearchArenaTree {
            nodes: vec![ArenaNode::Empty],
            free: vec![],
        }
    }

    /// Contructor. Pre-allocates `capacity` slots. Note that every occupied node
    /// needs three slots while it is a leaf.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(ArenaNode::Empty);
        SearchArenaTree { nodes, free: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.node(ROOT).is_empty()
    }

    /// Number of distinct elements (multiplicities are not taken into account)
    pub fn size(&self) -> usize {
        self.iter_breadth_nodes().count()
    }

    /// Number of element instances, that is, the cardinality of the multiset
    pub fn instances_count(&self) -> usize {
        self.iter_breadth_nodes().map(OccupiedNode::count).sum()
    }

    pub(super) fn node(&self, index: ArenaIndex) -> &ArenaNode<T> {
        &self.nodes[index.0]
    }

    pub(super) fn occupied(&self, index: ArenaIndex) -> Option<&OccupiedNode<T>> {
        self.nodes.get(index.0).and_then(ArenaNode::occupied)
    }

    pub(super) fn occupied_mut(&mut self, index: ArenaIndex) -> Option<&mut OccupiedNode<T>> {
        match self.nodes.get_mut(index.0) {
            Some(ArenaNode::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(super) fn is_occupied(&self, index: ArenaIndex) -> bool {
        self.occupied(index).is_some()
    }

    /// Child slots of an occupied node
    pub(super) fn children(&self, index: ArenaIndex) -> Option<(ArenaIndex, ArenaIndex)> {
        self.occupied(index).map(|node| (node.left, node.right))
    }

    /// True iff the slot is occupied and both children are empty
    pub(super) fn is_leaf_at(&self, index: ArenaIndex) -> bool {
        self.children(index)
            .is_some_and(|(left, right)| !self.is_occupied(left) && !self.is_occupied(right))
    }

    /// Get an empty slot, reusing released ones first
    fn allocate(&mut self) -> ArenaIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index.0] = ArenaNode::Empty;
                index
            }
            None => {
                self.nodes.push(ArenaNode::Empty);
                ArenaIndex(self.nodes.len() - 1)
            }
        }
    }

    /// Clears a slot that is no longer referenced by any node and makes it available again
    pub(super) fn release(&mut self, index: ArenaIndex) {
        self.nodes[index.0] = ArenaNode::Empty;
        self.free.push(index);
    }

    /// Turns the empty slot `index` into a node with two fresh empty children
    fn occupy(&mut self, index: ArenaIndex, element: T, parent_ref: Option<ArenaIndex>) {
        let left = self.allocate();
        let right = self.allocate();
        self.nodes[index.0] = ArenaNode::Occupied(OccupiedNode {
            content: element,
            count: 1,
            left,
            right,
            parent_ref,
            tags: Tags::new(),
        });
    }
}

impl<T> Default for SearchArenaTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> SearchArenaTree<T> {
    /// Insert an element as a new leaf. If an equal element is present, its multiplicity is
    /// incremented instead.
    ///
    /// Returns `true` if a new node was created.
    #[instrument(level = "debug", skip_all)]
    pub fn insert(&mut self, element: T) -> bool {
        let mut index = ROOT;
        let mut parent_ref = None;
        loop {
            let next = match &mut self.nodes[index.0] {
                ArenaNode::Empty => break,
                ArenaNode::Occupied(node) => match element.cmp(&node.content) {
                    Ordering::Less => node.left,
                    Ordering::Greater => node.right,
                    Ordering::Equal => {
                        node.count += 1;
                        trace!(count = node.count, "Incremented multiplicity");
                        return false;
                    }
                },
            };
            parent_ref = Some(index);
            index = next;
        }
        self.occupy(index, element, parent_ref);
        debug!(slot = index.0, "Created node");
        true
    }

    /// Insert all present elements of a sequence. Items can be elements or [Option]s of elements;
    /// `None` is skipped.
    ///
    /// Returns the number of elements that were inserted (duplicates included).
    pub fn insert_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let mut inserted = 0;
        for element in elements.into_iter().filter_map(Into::into) {
            self.insert(element);
            inserted += 1;
        }
        inserted
    }

    pub fn contains(&self, element: &T) -> bool {
        self.locate(element).is_some()
    }

    /// Find the slot holding `element` by comparison descent
    pub(super) fn locate(&self, element: &T) -> Option<ArenaIndex> {
        let mut index = ROOT;
        loop {
            let node = self.occupied(index)?;
            index = match element.cmp(&node.content) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
    }
}

impl<T: Clone> SearchArenaTree<T> {
    /// Creates an independent tree with the same structure, content, multiplicities and tags.
    /// The arena of the copy is compact (released slots are not carried over).
    pub fn copy(&self) -> Self {
        let mut result = SearchArenaTree::with_capacity(self.nodes.len() - self.free.len());
        // (source slot, target slot, parent in the target)
        let mut pending = vec![(ROOT, ROOT, None)];
        while let Some((source, slot, parent_ref)) = pending.pop() {
            let Some(node) = self.occupied(source) else {
                continue;
            };
            let left = result.allocate();
            let right = result.allocate();
            result.nodes[slot.0] = ArenaNode::Occupied(OccupiedNode {
                content: node.content.clone(),
                count: node.count,
                left,
                right,
                parent_ref,
                tags: node.tags.clone(),
            });
            pending.push((node.right, right, Some(slot)));
            pending.push((node.left, left, Some(slot)));
        }
        result
    }
}
