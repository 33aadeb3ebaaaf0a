//! Filter that keeps the items matching a user-selected criterion.

use crate::criterion::FilterCriterion;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Audiobook;

/// Keeps items for which `FilterCriterion::matches` holds.
pub struct CriterionFilter {
    criterion: FilterCriterion,
}

impl CriterionFilter {
    pub fn new(criterion: FilterCriterion) -> Self {
        Self { criterion }
    }
}

impl Filter for CriterionFilter {
    fn name(&self) -> &str {
        "CriterionFilter"
    }

    fn apply(&self, items: Vec<Audiobook>) -> Result<Vec<Audiobook>> {
        if self.criterion == FilterCriterion::All {
            return Ok(items);
        }

        let filtered: Vec<Audiobook> = items
            .into_iter()
            .filter(|item| self.criterion.matches(item))
            .collect();
        Ok(filtered)
    }
}
