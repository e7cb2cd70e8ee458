//! Traceback extractor
//!
//! Walks the action matrix from the bottom-right cell back to the origin and
//! returns the operations in the order they must be applied.

use crate::error::{AlignError, AlignResult};
use crate::matrix::ActionMatrix;
use crate::prescription::Prescription;
use crate::types::Operation;

pub fn extract(actions: &ActionMatrix) -> AlignResult<Prescription> {
    let mut i = actions.rows().saturating_sub(1);
    let mut j = actions.cols().saturating_sub(1);
    let mut reversed = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let operation = *actions
            .get(i, j)
            .ok_or(AlignError::MissingCell { row: i, col: j })?;
        let corrupt = AlignError::CorruptMatrix { row: i, col: j, operation };
        match operation {
            Operation::Delete => {
                i = i.checked_sub(1).ok_or(corrupt)?;
            }
            Operation::Insert => {
                j = j.checked_sub(1).ok_or(corrupt)?;
            }
            Operation::Replace | Operation::Match => {
                if i == 0 || j == 0 {
                    return Err(corrupt);
                }
                i -= 1;
                j -= 1;
            }
        }
        reversed.push(operation);
    }

    reversed.reverse();
    log::debug!("Extracted prescription of {} steps", reversed.len());
    Ok(Prescription::new(reversed))
}
