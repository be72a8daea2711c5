//! Shop aggregate achievement (gZER) and manager bonuses.
//!
//! Managers are not paid per order.  Their bonus is linear in the points
//! by which an achievement percentage exceeds 100, capped at
//! [`MANAGER_MAX_ZER`].  The percentage is either the averaged shop gZER
//! or a manually entered year-to-date figure; both go through
//! [`manager_bonus_for_percentage`] so the two stay consistent.

use crate::models::{EmployeeZer, ManagerBonusResult};
use tracing::debug;

/// CHF paid per percentage point above 100.
pub const MANAGER_BONUS_PER_POINT: f64 = 50.0;

/// Achievement beyond which the manager bonus no longer grows.
pub const MANAGER_MAX_ZER: f64 = 200.0;

/// Average ZER across a shop's employees.
///
/// Each employee contributes both category ZERs as separate samples, so
/// the sum is divided by twice the number of employees.  An employee
/// without a target in one category still contributes its 0 for that
/// category.  An empty shop yields 0.
pub fn calculate_shop_gzer(employees: &[EmployeeZer]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    let total: f64 = employees
        .iter()
        .map(|e| e.wireless_zer + e.wireline_zer)
        .sum();
    total / (employees.len() * 2) as f64
}

/// Manager bonus from a shop's gZER.
pub fn calculate_shop_manager_bonus(shop_gzer: f64) -> ManagerBonusResult {
    manager_bonus_for_percentage(shop_gzer)
}

/// Manager bonus from a manually entered year-to-date percentage.
pub fn calculate_manager_bonus_from_ytd(ytd_percentage: f64) -> ManagerBonusResult {
    manager_bonus_for_percentage(ytd_percentage)
}

/// The shared linear manager formula.
///
/// A non-finite percentage earns nothing.
pub fn manager_bonus_for_percentage(percentage: f64) -> ManagerBonusResult {
    let capped = percentage.min(MANAGER_MAX_ZER);
    let (points_above_100, bonus_amount) = if !percentage.is_finite() || capped <= 100.0 {
        (0.0, 0.0)
    } else {
        let points = capped - 100.0;
        (points, points * MANAGER_BONUS_PER_POINT)
    };
    debug!(percentage, points_above_100, bonus_amount, "manager bonus");
    ManagerBonusResult {
        shop_gzer: percentage,
        bonus_amount,
        points_above_100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zer(wireless_zer: f64, wireline_zer: f64) -> EmployeeZer {
        EmployeeZer { wireless_zer, wireline_zer }
    }

    #[test]
    fn empty_shop_has_zero_gzer() {
        assert_eq!(calculate_shop_gzer(&[]), 0.0);
    }

    #[test]
    fn gzer_averages_both_categories() {
        let shop = [zer(150.0, 50.0), zer(100.0, 100.0), zer(80.0, 120.0)];
        assert_eq!(calculate_shop_gzer(&shop), 100.0);
    }

    #[test]
    fn untargeted_category_still_counts() {
        // Not (120 + 80) / 2 per category; the zero pulls the mean down.
        let shop = [zer(120.0, 0.0), zer(80.0, 100.0)];
        assert_eq!(calculate_shop_gzer(&shop), 75.0);
    }

    #[test]
    fn gzer_of_exactly_100_pays_nothing() {
        let result = calculate_shop_manager_bonus(100.0);
        assert_eq!(result.bonus_amount, 0.0);
        assert_eq!(result.points_above_100, 0.0);
    }

    #[test]
    fn under_100_pays_nothing() {
        let result = calculate_shop_manager_bonus(64.5);
        assert_eq!(result.bonus_amount, 0.0);
        assert_eq!(result.shop_gzer, 64.5);
    }

    #[test]
    fn pays_per_point_above_100() {
        let result = calculate_shop_manager_bonus(112.0);
        assert_eq!(result.points_above_100, 12.0);
        assert_eq!(result.bonus_amount, 600.0);
    }

    #[test]
    fn caps_at_200() {
        let result = calculate_shop_manager_bonus(250.0);
        assert_eq!(result.shop_gzer, 250.0);
        assert_eq!(result.points_above_100, 100.0);
        assert_eq!(result.bonus_amount, 5000.0);
    }

    #[test]
    fn non_finite_percentage_pays_nothing() {
        for pct in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = calculate_manager_bonus_from_ytd(pct);
            assert_eq!(result.bonus_amount, 0.0);
            assert_eq!(result.points_above_100, 0.0);
        }
        assert!(calculate_shop_manager_bonus(f64::NAN).shop_gzer.is_nan());
    }

    #[test]
    fn ytd_uses_the_same_formula() {
        for pct in [0.0, 99.9, 100.0, 137.0, 200.0, 400.0] {
            assert_eq!(
                calculate_manager_bonus_from_ytd(pct),
                calculate_shop_manager_bonus(pct)
            );
        }
    }
}
