//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BstError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Element or subtree not in tree")]
    NotFound,
    #[error("Ran out of {direction} nodes after {steps} steps")]
    StructuralExhaustion { direction: &'static str, steps: usize },
    #[error("Subtree index {0} is out of bound for a binary tree")]
    SubtreeIndexOutOfBound(usize),
}
