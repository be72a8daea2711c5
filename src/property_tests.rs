#![cfg(test)]

use crate::engine::calculate_employee_bonus;
use crate::manager::{calculate_shop_gzer, calculate_shop_manager_bonus, MANAGER_MAX_ZER};
use crate::models::{EmployeeBonusInput, EmployeeZer, OrdersByLevel, Role};
use crate::zer::{calculate_orders_by_level, calculate_zer};
use proptest::prelude::*;

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_zero_target_is_zero(actual in 0u32..100_000) {
        prop_assert_eq!(calculate_zer(actual, 0), 0.0);
        prop_assert_eq!(calculate_orders_by_level(actual, 0), OrdersByLevel::default());
    }

    #[test]
    fn prop_at_or_under_target_has_no_levels(target in 0u32..10_000, shortfall in 0u32..10_000) {
        let actual = target.saturating_sub(shortfall);
        prop_assert_eq!(calculate_orders_by_level(actual, target), OrdersByLevel::default());
    }

    #[test]
    fn prop_levels_monotonic_in_actual(actual in 0u32..10_000, target in 0u32..5_000) {
        let here = calculate_orders_by_level(actual, target);
        let next = calculate_orders_by_level(actual + 1, target);
        prop_assert!(next.level1 + next.level2 >= here.level1 + here.level2);
    }

    #[test]
    fn prop_levels_cover_the_excess(actual in 1u32..10_000, target in 1u32..5_000) {
        prop_assume!(actual > target);
        let levels = calculate_orders_by_level(actual, target);
        prop_assert_eq!(levels.level1 + levels.level2, actual - target);
    }

    #[test]
    fn prop_capped_bonus_bounded(
        role in any_role(),
        wireless_count in 0u32..500,
        wireline_count in 0u32..500,
        wireless_target in 0u32..200,
        wireline_target in 0u32..200,
        employment_percentage in 0.0f64..=100.0,
    ) {
        let input = EmployeeBonusInput {
            role,
            wireless_count,
            wireline_count,
            wireless_target,
            wireline_target,
            employment_percentage,
        };
        let result = calculate_employee_bonus(&input).unwrap();
        prop_assert!(result.capped_bonus <= result.total_bonus);
        prop_assert!(result.capped_bonus <= result.pro_rata_cap);
        prop_assert!(result.capped_bonus >= 0.0);
    }

    #[test]
    fn prop_employee_bonus_is_deterministic(
        wireless_count in 0u32..500,
        wireless_target in 0u32..200,
        employment_percentage in 1.0f64..=100.0,
    ) {
        let input = EmployeeBonusInput {
            role: Role::InternalSales,
            wireless_count,
            wireline_count: 0,
            wireless_target,
            wireline_target: 0,
            employment_percentage,
        };
        prop_assert_eq!(
            calculate_employee_bonus(&input).unwrap(),
            calculate_employee_bonus(&input).unwrap()
        );
    }

    #[test]
    fn prop_manager_bonus_capped(x in 200.0001f64..100_000.0) {
        let over = calculate_shop_manager_bonus(x);
        let at_cap = calculate_shop_manager_bonus(x.min(MANAGER_MAX_ZER));
        prop_assert_eq!(over.bonus_amount, at_cap.bonus_amount);
        prop_assert_eq!(over.points_above_100, at_cap.points_above_100);
    }

    #[test]
    fn prop_gzer_within_employee_range(
        zers in prop::collection::vec((0.0f64..500.0, 0.0f64..500.0), 1..40)
    ) {
        let employees: Vec<EmployeeZer> = zers
            .iter()
            .map(|&(wireless_zer, wireline_zer)| EmployeeZer { wireless_zer, wireline_zer })
            .collect();
        let lowest = zers.iter().flat_map(|&(a, b)| [a, b]).fold(f64::INFINITY, f64::min);
        let highest = zers.iter().flat_map(|&(a, b)| [a, b]).fold(0.0, f64::max);
        let gzer = calculate_shop_gzer(&employees);
        prop_assert!(gzer >= lowest - 1e-9 && gzer <= highest + 1e-9);
    }
}
