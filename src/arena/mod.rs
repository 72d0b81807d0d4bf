//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! multiset binary search tree.
//!
//! Children are owned through arena indices and parents are referenced (not owned) by index as
//! well, so there are no reference cycles and no unsafe code. The functionality is split into
//! submodules that each add methods to [SearchArenaTree].

pub mod breadth;
pub mod labeling;
mod path;
mod removal;
pub mod render;
pub mod search_tree;
pub mod subtree;

pub use breadth::BreadthFirstIterator;
pub use labeling::{DESCEND_TAG, HEIGHT_TAG, INTERNAL_TAG, ONLY_SON_TAG, ROAD_TAG};
pub use render::EMPTY_TREE_MARK;
pub use search_tree::{ArenaIndex, ArenaNode, OccupiedNode, SearchArenaTree};
pub use subtree::Subtree;
