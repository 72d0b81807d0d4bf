//! Definition of the generic tree interface the search tree is built on
use crate::BstError;

/// A single step of a path from the root towards a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
}

impl Step {
    pub fn symbol(self) -> char {
        match self {
            Step::Left => 'L',
            Step::Right => 'R',
        }
    }
}

impl TryFrom<char> for Step {
    type Error = BstError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Step::Left),
            'R' => Ok(Step::Right),
            other => Err(BstError::InvalidArgument(format!("unknown path step '{other}'"))),
        }
    }
}

/// A (possibly empty) tree node of fixed maximal degree.
///
/// Every slot of the tree is a node; the empty sentinel is a node too and
/// answers `is_empty() == true`.
pub trait Nodelike: Sized {
    fn is_empty(&self) -> bool;

    /// True iff the node is occupied and all its subtrees are empty
    fn is_leaf(&self) -> bool;

    fn max_degree(&self) -> usize;

    /// Get the `n`-th subtree. For binary trees, `0` is left and `1` is right.
    fn subtree(&self, n: usize) -> Result<Self, BstError>;
}
