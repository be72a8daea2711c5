//! Bonus computation engine.
//!
//! The `engine` module turns an [`EmployeeBonusInput`] into an
//! [`EmployeeBonusResult`] using a [`RateSchedule`], and runs a whole
//! shop for one period via [`run_shop_bonus`].  Per-employee work in a
//! shop run is spread across CPU cores with [`rayon`].

use crate::error::BonusResult;
use crate::manager::{calculate_manager_bonus_from_ytd, calculate_shop_gzer, calculate_shop_manager_bonus};
use crate::models::{
    EmployeeBonusInput, EmployeeBonusOutcome, EmployeeBonusResult, EmployeeZer, OrdersByLevel,
    ShopBonusRunInput, ShopBonusRunResult,
};
use crate::rates::{standard_schedule, RateSchedule};
use crate::zer::{calculate_orders_by_level, calculate_zer};
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

/// Calculates an employee's monthly bonus with the given rate schedule.
///
/// Wireless and wireline are evaluated independently.  Manager roles
/// resolve to all-zero rate tables and therefore a zero bonus; they are
/// meant to be paid through [`crate::manager`].  A role without a table
/// in `schedule` is an error.
pub fn calculate_employee_bonus_with(
    schedule: &RateSchedule,
    input: &EmployeeBonusInput,
) -> BonusResult<EmployeeBonusResult> {
    let rates = schedule.rates_for(input.role)?;
    if input.role.is_manager() {
        debug!(role = %input.role, "manager role paid through the manager formula");
    }

    let wireless_zer = calculate_zer(input.wireless_count, input.wireless_target);
    let wireline_zer = calculate_zer(input.wireline_count, input.wireline_target);
    let wireless_orders = calculate_orders_by_level(input.wireless_count, input.wireless_target);
    let wireline_orders = calculate_orders_by_level(input.wireline_count, input.wireline_target);

    let wireless_bonus = tier_payout(wireless_orders, rates.wireless_level1, rates.wireless_level2);
    let wireline_bonus = tier_payout(wireline_orders, rates.wireline_level1, rates.wireline_level2);
    let total_bonus = wireless_bonus + wireline_bonus;
    let pro_rata_cap = rates.monthly_cap * input.employment_percentage / 100.0;
    let capped_bonus = total_bonus.min(pro_rata_cap);

    debug!(
        role = %input.role,
        wireless_zer,
        wireline_zer,
        total_bonus,
        capped_bonus,
        pro_rata_cap,
        "employee bonus"
    );
    Ok(EmployeeBonusResult {
        wireless_zer,
        wireline_zer,
        wireless_orders,
        wireline_orders,
        total_bonus,
        capped_bonus,
        pro_rata_cap,
    })
}

/// Calculates an employee's monthly bonus with the standard rates.
pub fn calculate_employee_bonus(input: &EmployeeBonusInput) -> BonusResult<EmployeeBonusResult> {
    calculate_employee_bonus_with(standard_schedule(), input)
}

fn tier_payout(orders: OrdersByLevel, level1_rate: f64, level2_rate: f64) -> f64 {
    f64::from(orders.level1) * level1_rate + f64::from(orders.level2) * level2_rate
}

/// Runs the monthly bonus calculation for a shop.
///
/// Every employee is calculated independently.  The shop gZER averages
/// the sales employees only, since managers carry no order targets.  The
/// manager bonus uses the year-to-date percentage when one is supplied
/// and the shop gZER otherwise.
pub fn run_shop_bonus(input: ShopBonusRunInput, schedule: &RateSchedule) -> Result<ShopBonusRunResult> {
    let period = input.period;

    let employees: Vec<EmployeeBonusOutcome> = input
        .employees
        .into_par_iter()
        .map(|employee| -> Result<EmployeeBonusOutcome> {
            let result = calculate_employee_bonus_with(schedule, &employee.input)
                .with_context(|| format!("calculating bonus for employee {}", employee.id))?;
            Ok(EmployeeBonusOutcome {
                id: employee.id,
                role: employee.input.role,
                result,
            })
        })
        .collect::<Result<_>>()?;

    let sales_zers: Vec<EmployeeZer> = employees
        .iter()
        .filter(|outcome| !outcome.role.is_manager())
        .map(|outcome| EmployeeZer::from(&outcome.result))
        .collect();
    let shop_gzer = calculate_shop_gzer(&sales_zers);
    let manager_bonus = match input.manager_ytd_percentage {
        Some(ytd) => calculate_manager_bonus_from_ytd(ytd),
        None => calculate_shop_manager_bonus(shop_gzer),
    };
    let total_employee_payout = employees.iter().map(|o| o.result.capped_bonus).sum();

    info!(
        period = %period,
        employees = employees.len(),
        shop_gzer,
        manager_bonus = manager_bonus.bonus_amount,
        total_employee_payout,
        "shop bonus run complete"
    );
    Ok(ShopBonusRunResult {
        period,
        employees,
        shop_gzer,
        manager_bonus,
        total_employee_payout,
    })
}
