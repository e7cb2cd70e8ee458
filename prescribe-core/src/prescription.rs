use crate::error::{AlignError, AlignResult};
use crate::types::{CostConfig, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chronologically ordered edit operations turning one sequence into another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prescription {
    operations: Vec<Operation>,
}

/// How many times each operation appears in a prescription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCounts {
    pub matches: usize,
    pub replacements: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl OperationCounts {
    /// Number of operations that actually change the sequence.
    pub fn edits(&self) -> usize {
        self.replacements + self.insertions + self.deletions
    }
}

impl Prescription {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Sum of the step costs. Fails with `InvalidCosts` if the sum does not
    /// fit in a `u32`.
    pub fn total_cost(&self, costs: &CostConfig) -> AlignResult<u32> {
        self.operations.iter().try_fold(0u32, |total, &op| {
            total.checked_add(costs.cost_of(op)).ok_or_else(|| {
                AlignError::invalid_costs(format!("total cost of a {}-step prescription overflows", self.len()))
            })
        })
    }

    pub fn counts(&self) -> OperationCounts {
        let mut counts = OperationCounts::default();
        for op in &self.operations {
            match op {
                Operation::Match => counts.matches += 1,
                Operation::Replace => counts.replacements += 1,
                Operation::Insert => counts.insertions += 1,
                Operation::Delete => counts.deletions += 1,
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Prescription {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl From<Vec<Operation>> for Prescription {
    fn from(operations: Vec<Operation>) -> Self {
        Self::new(operations)
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.operations {
            write!(f, "{}", op.tag())?;
        }
        Ok(())
    }
}

impl FromStr for Prescription {
    type Err = AlignError;

    /// Parse a tag string such as `MMRID`. Whitespace is ignored.
    fn from_str(s: &str) -> AlignResult<Self> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Operation::from_tag)
            .collect::<AlignResult<Vec<_>>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let p: Prescription = "MMR ID".parse().unwrap();
        assert_eq!(
            p.operations(),
            &[
                Operation::Match,
                Operation::Match,
                Operation::Replace,
                Operation::Insert,
                Operation::Delete
            ]
        );
        assert_eq!(p.to_string(), "MMRID");
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "MMQ".parse::<Prescription>().unwrap_err();
        assert_eq!(err, AlignError::InvalidActionTag { tag: 'Q' });
    }

    #[test]
    fn test_counts_and_cost() {
        let p: Prescription = "MRRIDD".parse().unwrap();
        let counts = p.counts();
        assert_eq!(counts.matches, 1);
        assert_eq!(counts.replacements, 2);
        assert_eq!(counts.insertions, 1);
        assert_eq!(counts.deletions, 2);
        assert_eq!(counts.edits(), 5);
        assert_eq!(p.total_cost(&CostConfig::default()), Ok(4 + 4 + 3 + 2 + 2));
    }

    #[test]
    fn test_total_cost_overflow() {
        let p: Prescription = "II".parse().unwrap();
        let costs = CostConfig::default().with_insert_cost(u32::MAX);
        assert!(matches!(
            p.total_cost(&costs),
            Err(AlignError::InvalidCosts { .. })
        ));
    }

    #[test]
    fn test_serializes_as_list() {
        let p: Prescription = "MI".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["Match","Insert"]"#);
    }
}
