//! One-call pipeline: build the matrices, extract the prescription, and keep
//! what a renderer needs to replay it.

use crate::error::AlignResult;
use crate::matrix::build;
use crate::prescription::Prescription;
use crate::redaction::{apply, Redaction};
use crate::traceback::extract;
use crate::types::CostConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment<E> {
    pub original: Vec<E>,
    pub target: Vec<E>,
    pub costs: CostConfig,
    pub prescription: Prescription,
    /// Optimal cost, the bottom-right cell of the cost matrix.
    pub distance: u32,
}

impl<E: Clone> Alignment<E> {
    pub fn redaction(&self) -> AlignResult<Redaction<'_, E>> {
        apply(&self.prescription, &self.original, &self.target, &self.costs)
    }

    /// Final working sequence after replaying every step.
    pub fn replayed(&self) -> AlignResult<Vec<E>> {
        Ok(self
            .redaction()?
            .last()
            .map(|step| step.snapshot)
            .unwrap_or_else(|| self.original.clone()))
    }
}

pub fn align_by<E, F>(
    original: &[E],
    target: &[E],
    costs: &CostConfig,
    equals: F,
) -> AlignResult<Alignment<E>>
where
    E: Clone,
    F: Fn(&E, &E) -> bool,
{
    let matrix = build(original, target, costs, equals)?;
    let distance = matrix.distance();
    let prescription = extract(matrix.action_matrix())?;

    log::debug!(
        "Aligned {} -> {} elements: distance {}, prescription {}",
        original.len(),
        target.len(),
        distance,
        prescription
    );

    Ok(Alignment {
        original: original.to_vec(),
        target: target.to_vec(),
        costs: *costs,
        prescription,
        distance,
    })
}

pub fn align<E: Clone + PartialEq>(
    original: &[E],
    target: &[E],
    costs: &CostConfig,
) -> AlignResult<Alignment<E>> {
    align_by(original, target, costs, |a, b| a == b)
}

/// Character-wise alignment of two strings.
pub fn align_str(original: &str, target: &str, costs: &CostConfig) -> AlignResult<Alignment<char>> {
    let original: Vec<char> = original.chars().collect();
    let target: Vec<char> = target.chars().collect();
    align(&original, &target, costs)
}

/// Optimal cost only.
pub fn distance(original: &str, target: &str, costs: &CostConfig) -> AlignResult<u32> {
    let original: Vec<char> = original.chars().collect();
    let target: Vec<char> = target.chars().collect();
    Ok(crate::matrix::build_matrix(&original, &target, costs)?.distance())
}
