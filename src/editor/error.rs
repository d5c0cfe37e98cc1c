//! Error types for the configuration editor

use thiserror::Error;

use crate::config::InvalidColor;

/// Errors that can occur while applying an edit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// Edit referenced a section id that is not in the configuration
    #[error("section '{id}' not found")]
    SectionNotFound { id: String },

    /// Reorder list is not a permutation of the section positions
    #[error("reorder list {order:?} is not a permutation of {count} sections")]
    InvalidReorder { order: Vec<usize>, count: usize },

    /// Color patch contains a value that is not a color
    #[error(transparent)]
    InvalidColor(#[from] InvalidColor),
}

impl EditorError {
    pub fn section_not_found(id: impl Into<String>) -> Self {
        Self::SectionNotFound { id: id.into() }
    }

    pub fn invalid_reorder(order: &[usize], count: usize) -> Self {
        Self::InvalidReorder {
            order: order.to_vec(),
            count,
        }
    }
}
