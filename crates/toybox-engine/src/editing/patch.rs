use std::ops::Range;

use crate::editing::Direction;
use crate::models::BlockKind;

/// Why a command left the list untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("block list is full ({max} blocks)")]
    CapacityExceeded { max: usize },

    #[error("no block at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("block {index} cannot move {direction:?}, it is already at the edge")]
    AtBoundary { index: usize, direction: Direction },

    #[error("block {index} is not a {expected} block")]
    VariantMismatch { index: usize, expected: BlockKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Positions whose block or order changed
    Applied { changed: Range<usize> },
    Ignored(Rejection),
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub outcome: Outcome,
    pub version: u64,
}

impl Patch {
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, Outcome::Applied { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.outcome {
            Outcome::Ignored(rejection) => Some(rejection),
            Outcome::Applied { .. } => None,
        }
    }

    pub fn changed(&self) -> Option<Range<usize>> {
        match &self.outcome {
            Outcome::Applied { changed } => Some(changed.clone()),
            Outcome::Ignored(_) => None,
        }
    }
}
