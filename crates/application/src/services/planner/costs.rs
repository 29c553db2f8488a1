//! Cost breakdown computation
//!
//! Fixed per-day rates in rupees, indexed by budget tier, multiplied by
//! trip duration across the five fixed categories.

use domain::{BudgetTier, CostBreakdown, CostCategory, CostLine};

/// Per-day rates in category order: accommodation, food, transport,
/// activities, miscellaneous
pub(crate) const fn daily_rates(tier: BudgetTier) -> [u64; 5] {
    match tier {
        BudgetTier::Budget => [800, 400, 300, 200, 150],
        BudgetTier::Moderate => [2500, 800, 600, 500, 300],
        BudgetTier::Premium => [5000, 1500, 1200, 1000, 500],
        BudgetTier::Luxury => [12000, 3000, 2500, 2000, 1000],
    }
}

/// Compute the full cost table for a tier and duration
pub(crate) fn breakdown(tier: BudgetTier, duration_days: u32) -> CostBreakdown {
    let rates = daily_rates(tier);
    let lines = CostCategory::all()
        .into_iter()
        .zip(rates)
        .map(|(category, rate)| CostLine::new(category, rate, duration_days))
        .collect();
    CostBreakdown::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_five_lines_in_fixed_order() {
        let result = breakdown(BudgetTier::Moderate, 4);
        assert_eq!(result.lines.len(), 5);
        assert_eq!(result.lines[0].category, CostCategory::Accommodation);
        assert_eq!(result.lines[1].category, CostCategory::FoodAndDining);
        assert_eq!(result.lines[2].category, CostCategory::Transportation);
        assert_eq!(result.lines[3].category, CostCategory::Activities);
        assert_eq!(result.lines[4].category, CostCategory::Miscellaneous);
    }

    #[test]
    fn luxury_three_days_matches_rate_table() {
        let result = breakdown(BudgetTier::Luxury, 3);
        assert_eq!(result.lines[0].total, 36000);
        assert_eq!(result.total, 61500);
    }

    #[test]
    fn budget_single_day() {
        let result = breakdown(BudgetTier::Budget, 1);
        assert_eq!(result.total, 800 + 400 + 300 + 200 + 150);
    }

    #[test]
    fn totals_scale_linearly_with_duration() {
        let one = breakdown(BudgetTier::Premium, 1);
        let seven = breakdown(BudgetTier::Premium, 7);
        assert_eq!(seven.total, one.total * 7);
    }

    #[test]
    fn line_totals_are_rate_times_duration() {
        let result = breakdown(BudgetTier::Moderate, 5);
        for line in &result.lines {
            assert_eq!(line.total, line.daily_rate * 5);
        }
    }
}
