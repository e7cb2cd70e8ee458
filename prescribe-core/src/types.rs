use crate::error::{AlignError, AlignResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single edit applied to the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Match,
    Replace,
    Insert,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Match,
        Operation::Replace,
        Operation::Insert,
        Operation::Delete,
    ];

    /// One-letter tag used in compact prescriptions (`MRID`).
    pub fn tag(self) -> char {
        match self {
            Operation::Match => 'M',
            Operation::Replace => 'R',
            Operation::Insert => 'I',
            Operation::Delete => 'D',
        }
    }

    pub fn from_tag(tag: char) -> AlignResult<Self> {
        match tag.to_ascii_uppercase() {
            'M' => Ok(Operation::Match),
            'R' => Ok(Operation::Replace),
            'I' => Ok(Operation::Insert),
            'D' => Ok(Operation::Delete),
            _ => Err(AlignError::InvalidActionTag { tag }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Match => "Match",
            Operation::Replace => "Replace",
            Operation::Insert => "Insert",
            Operation::Delete => "Delete",
        }
    }

    /// Whether the operation consumes an element of the original sequence.
    pub fn consumes_original(self) -> bool {
        !matches!(self, Operation::Insert)
    }

    /// Whether the operation consumes an element of the final sequence.
    pub fn consumes_target(self) -> bool {
        !matches!(self, Operation::Delete)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for Operation {
    type Error = AlignError;

    fn try_from(tag: char) -> AlignResult<Self> {
        Operation::from_tag(tag)
    }
}

/// Per-operation costs used by the matrix builder and the replay.
///
/// A non-zero `match_cost` is allowed as long as it does not exceed any other
/// cost; [`CostConfig::validate`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostConfig {
    #[serde(default = "default_replace_cost")]
    pub replace_cost: u32,

    #[serde(default = "default_insert_cost")]
    pub insert_cost: u32,

    #[serde(default = "default_delete_cost")]
    pub delete_cost: u32,

    #[serde(default = "default_match_cost")]
    pub match_cost: u32,
}

fn default_replace_cost() -> u32 { 4 }
fn default_insert_cost() -> u32 { 3 }
fn default_delete_cost() -> u32 { 2 }
fn default_match_cost() -> u32 { 0 }

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            replace_cost: default_replace_cost(),
            insert_cost: default_insert_cost(),
            delete_cost: default_delete_cost(),
            match_cost: default_match_cost(),
        }
    }
}

impl CostConfig {
    /// Plain Levenshtein: every edit costs one.
    pub fn unit() -> Self {
        Self {
            replace_cost: 1,
            insert_cost: 1,
            delete_cost: 1,
            match_cost: 0,
        }
    }

    pub fn with_replace_cost(mut self, cost: u32) -> Self {
        self.replace_cost = cost;
        self
    }

    pub fn with_insert_cost(mut self, cost: u32) -> Self {
        self.insert_cost = cost;
        self
    }

    pub fn with_delete_cost(mut self, cost: u32) -> Self {
        self.delete_cost = cost;
        self
    }

    pub fn with_match_cost(mut self, cost: u32) -> Self {
        self.match_cost = cost;
        self
    }

    pub fn cost_of(&self, operation: Operation) -> u32 {
        match operation {
            Operation::Match => self.match_cost,
            Operation::Replace => self.replace_cost,
            Operation::Insert => self.insert_cost,
            Operation::Delete => self.delete_cost,
        }
    }

    /// Check that a match is never more expensive than an edit.
    pub fn validate(&self) -> AlignResult<()> {
        let cheapest_edit = self
            .replace_cost
            .min(self.insert_cost)
            .min(self.delete_cost);

        if self.match_cost > cheapest_edit {
            return Err(AlignError::invalid_costs(format!(
                "match cost {} exceeds the cheapest edit cost {}",
                self.match_cost, cheapest_edit
            )));
        }

        if self.match_cost > 0 {
            log::warn!(
                "Non-zero match cost {} changes the optimal path; identical inputs no longer align at zero cost",
                self.match_cost
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_costs() {
        let costs = CostConfig::default();
        assert_eq!(costs.cost_of(Operation::Replace), 4);
        assert_eq!(costs.cost_of(Operation::Insert), 3);
        assert_eq!(costs.cost_of(Operation::Delete), 2);
        assert_eq!(costs.cost_of(Operation::Match), 0);
        assert!(costs.validate().is_ok());
    }

    #[test]
    fn test_tags_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tag(op.tag()).unwrap(), op);
        }
        assert_eq!(Operation::from_tag('m').unwrap(), Operation::Match);
        assert_eq!(
            Operation::try_from('x'),
            Err(AlignError::InvalidActionTag { tag: 'x' })
        );
    }

    #[test]
    fn test_expensive_match_rejected() {
        let costs = CostConfig::default().with_match_cost(3);
        assert!(matches!(
            costs.validate(),
            Err(AlignError::InvalidCosts { .. })
        ));

        // Equal to the cheapest edit is still allowed
        let costs = CostConfig::default().with_match_cost(2);
        assert!(costs.validate().is_ok());
    }

    #[test]
    fn test_partial_cost_config_deserializes_with_defaults() {
        let costs: CostConfig = serde_json::from_str(r#"{"insert_cost": 7}"#).unwrap();
        assert_eq!(costs.insert_cost, 7);
        assert_eq!(costs.replace_cost, 4);
        assert_eq!(costs.delete_cost, 2);
        assert_eq!(costs.match_cost, 0);
    }

    #[test]
    fn test_consumption() {
        assert!(!Operation::Insert.consumes_original());
        assert!(!Operation::Delete.consumes_target());
        assert!(Operation::Replace.consumes_original() && Operation::Replace.consumes_target());
    }
}
