//! Budget stage: optimises the plan for the requested budget.

use super::Stage;
use crate::core::{PromptNumber, StageKind};
use async_trait::async_trait;

/// Rewrites a plan to fit a dollar budget.
///
/// The budget is rendered through [`PromptNumber`], so whole amounts print
/// without a fractional part (`1500.0` becomes `$1500`).
#[derive(Debug, Clone, Copy)]
pub struct BudgetStage {
    budget: f64,
}

impl BudgetStage {
    /// Creates a budget stage for `budget` dollars.
    #[must_use]
    pub const fn new(budget: f64) -> Self {
        Self { budget }
    }

    /// Returns the budget this stage optimises for.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }
}

#[async_trait]
impl Stage for BudgetStage {
    fn kind(&self) -> StageKind {
        StageKind::Budget
    }

    fn build_prompt(&self, plan: &str) -> String {
        format!(
            "\nOptimize this travel plan for a budget of ${}:\n\n{plan}\n  ",
            PromptNumber(self.budget)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_formats_whole_budget() {
        let prompt = BudgetStage::new(1500.0).build_prompt("plan");
        assert_eq!(prompt, "\nOptimize this travel plan for a budget of $1500:\n\nplan\n  ");
    }

    #[test]
    fn test_prompt_keeps_fractional_budget() {
        let prompt = BudgetStage::new(999.99).build_prompt("plan");
        assert!(prompt.contains("$999.99:"));
    }

    #[test]
    fn test_negative_budget_is_not_validated() {
        let prompt = BudgetStage::new(-20.0).build_prompt("plan");
        assert!(prompt.contains("$-20:"));
    }

    #[test]
    fn test_extreme_budget_uses_exponent() {
        let prompt = BudgetStage::new(1e21).build_prompt("plan");
        assert!(prompt.contains("$1e+21:"));
    }

    #[test]
    fn test_budget_accessor() {
        assert_eq!(BudgetStage::new(42.5).budget(), 42.5);
    }
}
