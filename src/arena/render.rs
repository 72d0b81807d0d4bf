//! Human-readable renderings of a [SearchArenaTree].
//!
//! [fmt::Display] produces the nested format `{content(count) [tags], left, right}` with `∅` for
//! empty subtrees, e.g. `{M, {E(2), ∅, ∅}, {K(5), ∅, ∅}}`. [SearchArenaTree::render] produces
//! an indented listing with one line per slot.

use super::search_tree::{ArenaIndex, ArenaNode, OccupiedNode, SearchArenaTree, ROOT};
use core::fmt;

/// Rendering of an empty (sub-)tree
pub const EMPTY_TREE_MARK: &str = "∅";

impl<T: fmt::Display> fmt::Display for OccupiedNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)?;
        if self.count > 1 {
            write!(f, "({})", self.count)?;
        }
        if !self.tags.is_empty() {
            write!(f, " {}", self.tags)?;
        }
        Ok(())
    }
}

/// Pending output of the nested rendering
enum Piece {
    Slot(ArenaIndex),
    Text(&'static str),
}

impl<T: fmt::Display> SearchArenaTree<T> {
    pub(super) fn fmt_from(&self, index: ArenaIndex, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Slot(index)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Slot(index) => match self.node(index) {
                    ArenaNode::Empty => f.write_str(EMPTY_TREE_MARK)?,
                    ArenaNode::Occupied(node) => {
                        write!(f, "{{{node}, ")?;
                        pending.extend([
                            Piece::Text("}"),
                            Piece::Slot(node.right),
                            Piece::Text(", "),
                            Piece::Slot(node.left),
                        ]);
                    }
                },
            }
        }
        Ok(())
    }

    /// Indented rendering, e.g., for `{M, {E, ∅, ∅}, {S, ∅, ∅}}`
    ///
    /// ```text
    /// M
    /// | E
    /// | | ∅
    /// | | ∅
    /// | S
    /// | | ∅
    /// | | ∅
    /// ```
    pub fn render(&self) -> String {
        let mut result = String::new();
        let mut pending = vec![(ROOT, 0)];
        while let Some((index, depth)) = pending.pop() {
            result.push_str(&"| ".repeat(depth));
            match self.node(index) {
                ArenaNode::Empty => result.push_str(EMPTY_TREE_MARK),
                ArenaNode::Occupied(node) => {
                    result.push_str(&node.to_string());
                    pending.push((node.right, depth + 1));
                    pending.push((node.left, depth + 1));
                }
            }
            result.push('\n');
        }
        result
    }
}

impl<T: fmt::Display> fmt::Display for SearchArenaTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_from(ROOT, f)
    }
}
