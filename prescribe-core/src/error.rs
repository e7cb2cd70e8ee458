//! Error taxonomy for the alignment pipeline
//!
//! Every variant is an invariant violation or a rejected input. Nothing here is
//! transient, so callers should abort the computation rather than retry.

use crate::types::Operation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("Invalid action tag: {tag:?}")]
    InvalidActionTag { tag: char },

    #[error("Corrupt action matrix: {operation} at ({row}, {col}) leaves the grid")]
    CorruptMatrix {
        row: usize,
        col: usize,
        operation: Operation,
    },

    #[error("Corrupt action matrix: no cell at ({row}, {col})")]
    MissingCell { row: usize, col: usize },

    #[error("Invalid cost configuration: {message}")]
    InvalidCosts { message: String },

    #[error("Prescription does not fit the sequences at step {step}: {message}")]
    PrescriptionMismatch { step: usize, message: String },
}

impl AlignError {
    pub fn invalid_costs<S: Into<String>>(message: S) -> Self {
        Self::InvalidCosts { message: message.into() }
    }

    pub fn mismatch<S: Into<String>>(step: usize, message: S) -> Self {
        Self::PrescriptionMismatch {
            step,
            message: message.into(),
        }
    }
}

pub type AlignResult<T> = Result<T, AlignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AlignError::InvalidActionTag { tag: 'X' };
        assert_eq!(err.to_string(), "Invalid action tag: 'X'");

        let err = AlignError::mismatch(2, "nothing left to delete");
        assert_eq!(
            err.to_string(),
            "Prescription does not fit the sequences at step 2: nothing left to delete"
        );
    }

    #[test]
    fn test_corrupt_matrix_names_operation() {
        let err = AlignError::CorruptMatrix {
            row: 0,
            col: 3,
            operation: Operation::Delete,
        };
        assert!(err.to_string().contains("Delete at (0, 3)"));

        let err = AlignError::MissingCell { row: 2, col: 1 };
        assert_eq!(err.to_string(), "Corrupt action matrix: no cell at (2, 1)");
    }
}
