//! ## About
//!
//! This crate contains an ordered multiset implemented as an unbalanced binary search tree
//! with arena allocation. Besides insertion, lookup and removal it offers
//! addressing of subtrees by `L`/`R` paths, breadth-first iteration and a family of
//! single-pass traversals that attach labels ("tags") to the nodes.
//!
//! See the [SearchArenaTree] struct to get started.
//!
//! ```
//! use tagged_bst::SearchArenaTree;
//!
//! let mut tree = SearchArenaTree::<i32>::new();
//! tree.insert_all([10, 20, 5, 2, 15, 30]);
//! assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, ∅, ∅}, {30, ∅, ∅}}}");
//!
//! tree.remove(&10).unwrap();
//! assert_eq!(tree.to_string(), "{15, {5, {2, ∅, ∅}, ∅}, {20, ∅, {30, ∅, ∅}}}");
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!   use substantives (i.e., omit a `get_` prefix) much like the standard library.
//!   Labelling methods have a `tag_` prefix

pub mod arena;
pub mod errors;
pub mod iterable_tree;
pub mod tags;

pub use arena::{ArenaIndex, ArenaNode, BreadthFirstIterator, OccupiedNode, SearchArenaTree, Subtree, EMPTY_TREE_MARK};
pub use errors::BstError;
pub use iterable_tree::{Nodelike, Step};
pub use tags::Tags;
