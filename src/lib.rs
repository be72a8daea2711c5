//! Incentive Engine library crate.
//!
//! This crate computes target achievement (ZER), tiered excess orders
//! and monthly bonuses for sales employees, and the shop aggregate
//! (gZER) and bonus for shop managers.  Every calculation is a pure
//! function of its inputs; persistence, authorisation and presentation
//! belong to the embedding application, which calls into
//! `engine::calculate_employee_bonus`, `manager::calculate_shop_manager_bonus`
//! or runs a whole shop via `engine::run_shop_bonus`.

pub mod error;
pub mod models;
pub mod rates;
pub mod zer;
pub mod engine;
pub mod manager;
pub mod period;
pub mod format;

mod property_tests;

pub use engine::{calculate_employee_bonus, calculate_employee_bonus_with, run_shop_bonus};
pub use error::{BonusError, BonusResult};
pub use manager::{
    calculate_manager_bonus_from_ytd, calculate_shop_gzer, calculate_shop_manager_bonus,
    MANAGER_BONUS_PER_POINT, MANAGER_MAX_ZER,
};
pub use models::{
    BonusRateTable, EmployeeBonusInput, EmployeeBonusResult, EmployeeZer, ManagerBonusResult,
    OrdersByLevel, Period, Role,
};
pub use period::current_period;
pub use rates::{standard_schedule, RateSchedule};
pub use zer::{calculate_orders_by_level, calculate_zer};
