//! Redaction applier
//!
//! Replays a prescription against the original sequence one operation at a
//! time. The replay is an iterator so a renderer can consume intermediate
//! states without the whole trace being materialized.

use crate::error::{AlignError, AlignResult};
use crate::prescription::Prescription;
use crate::types::{CostConfig, Operation};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// State of the replay right after one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep<E> {
    pub operation: Operation,
    /// Cursor after the operation. For anything but a Delete the element that
    /// was just written or matched sits at `cursor - 1`.
    pub cursor: usize,
    pub step_cost: u32,
    pub total_cost: u32,
    /// Owned copy of the working sequence.
    pub snapshot: Vec<E>,
}

/// Lazy, single-pass replay of a prescription.
///
/// The working copy always equals `target[..consumed]` followed by the part
/// of `original` not yet visited. `cursor` is where the next edit lands in the
/// working copy and `consumed` is how many `target` elements have been read;
/// for a prescription that fits the sequences the two advance together.
#[derive(Debug, Clone)]
pub struct Redaction<'a, E> {
    operations: std::slice::Iter<'a, Operation>,
    original: &'a [E],
    target: &'a [E],
    costs: CostConfig,
    working: Vec<E>,
    cursor: usize,
    consumed: usize,
    total: u32,
}

/// Start replaying `prescription` on `original`.
///
/// The prescription is checked against both sequences, and its total cost
/// against `u32`, before anything is replayed, so the returned iterator never
/// fails half way through.
pub fn apply<'a, E: Clone>(
    prescription: &'a Prescription,
    original: &'a [E],
    target: &'a [E],
    costs: &CostConfig,
) -> AlignResult<Redaction<'a, E>> {
    check_fits(prescription, original.len(), target.len())?;
    prescription.total_cost(costs)?;

    Ok(Redaction {
        operations: prescription.iter(),
        original,
        target,
        costs: *costs,
        working: original.to_vec(),
        cursor: 0,
        consumed: 0,
        total: 0,
    })
}

fn check_fits(prescription: &Prescription, original_len: usize, target_len: usize) -> AlignResult<()> {
    let mut visited = 0usize;
    let mut consumed = 0usize;

    for (step, &op) in prescription.iter().enumerate() {
        if op.consumes_original() {
            if visited == original_len {
                return Err(AlignError::mismatch(
                    step,
                    format!("{} with no original element left", op),
                ));
            }
            visited += 1;
        }
        if op.consumes_target() {
            if consumed == target_len {
                return Err(AlignError::mismatch(
                    step,
                    format!("{} reads past the end of the final sequence", op),
                ));
            }
            consumed += 1;
        }
    }

    if visited != original_len || consumed != target_len {
        return Err(AlignError::mismatch(
            prescription.len(),
            format!(
                "{} original and {} final elements left unprocessed",
                original_len - visited,
                target_len - consumed
            ),
        ));
    }

    Ok(())
}

impl<'a, E> Redaction<'a, E> {
    pub fn original(&self) -> &'a [E] {
        self.original
    }

    pub fn target(&self) -> &'a [E] {
        self.target
    }

    /// Working sequence as of the last yielded step.
    pub fn current(&self) -> &[E] {
        &self.working
    }
}

impl<'a, E: Clone> Iterator for Redaction<'a, E> {
    type Item = TraceStep<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let &operation = self.operations.next()?;

        match operation {
            Operation::Delete => {
                self.working.remove(self.cursor);
            }
            Operation::Insert => {
                self.working
                    .insert(self.cursor, self.target[self.consumed].clone());
                self.cursor += 1;
                self.consumed += 1;
            }
            Operation::Match => {
                self.cursor += 1;
                self.consumed += 1;
            }
            Operation::Replace => {
                self.working[self.cursor] = self.target[self.consumed].clone();
                self.cursor += 1;
                self.consumed += 1;
            }
        }

        let step_cost = self.costs.cost_of(operation);
        // bounded by the total checked in `apply`
        self.total += step_cost;
        log::trace!(
            "{} -> cursor {}, total {}",
            operation,
            self.cursor,
            self.total
        );

        Some(TraceStep {
            operation,
            cursor: self.cursor,
            step_cost,
            total_cost: self.total,
            snapshot: self.working.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.operations.size_hint()
    }
}

impl<'a, E: Clone> ExactSizeIterator for Redaction<'a, E> {}

impl<'a, E: Clone> FusedIterator for Redaction<'a, E> {}
