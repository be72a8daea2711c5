//! Data models for the Incentive Engine.
//!
//! The `models` module defines the plain value types the engine reads
//! and produces: roles, per-role rate tables, employee inputs and the
//! results of employee and manager bonus calculations.  Every type
//! derives `Serialize` and `Deserialize` so the embedding application
//! can persist or transmit results without extra mapping.

use crate::error::BonusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use crate::period::Period;

/// The role an employee holds within the sales organisation.
///
/// Sales roles are paid per excess order using a [`BonusRateTable`];
/// manager roles are paid from the shop's aggregate achievement instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    InternalSales,
    ExternalSales,
    ShopManager,
    RegionalManager,
}

impl Role {
    /// Every role, in rate-table order.
    pub const ALL: [Role; 4] = [
        Role::InternalSales,
        Role::ExternalSales,
        Role::ShopManager,
        Role::RegionalManager,
    ];

    /// The snake_case name used in configuration files and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::InternalSales => "internal_sales",
            Role::ExternalSales => "external_sales",
            Role::ShopManager => "shop_manager",
            Role::RegionalManager => "regional_manager",
        }
    }

    /// Managers are paid through the manager formula, not the rate table.
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::ShopManager | Role::RegionalManager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = BonusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| BonusError::UnknownRole(s.to_string()))
    }
}

/// Per-order payout rates and the monthly cap for one role.
///
/// All amounts are in CHF.  The cap applies to a full-time employee and
/// is scaled by employment percentage at calculation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusRateTable {
    /// Paid per level 1 wireless order.
    pub wireless_level1: f64,
    /// Paid per level 2 wireless order.
    pub wireless_level2: f64,
    /// Paid per level 1 wireline order.
    pub wireline_level1: f64,
    /// Paid per level 2 wireline order.
    pub wireline_level2: f64,
    /// Monthly ceiling for a full-time employee.
    pub monthly_cap: f64,
}

impl BonusRateTable {
    /// A table paying nothing, used for manager roles.
    pub const ZERO: BonusRateTable = BonusRateTable {
        wireless_level1: 0.0,
        wireless_level2: 0.0,
        wireline_level1: 0.0,
        wireline_level2: 0.0,
        monthly_cap: 0.0,
    };
}

/// Excess orders above target, split at the 120 % threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersByLevel {
    /// Orders between 100 % and 120 % of target.
    pub level1: u32,
    /// Orders beyond 120 % of target.
    pub level2: u32,
}

/// Input for a single employee's monthly bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBonusInput {
    /// Selects the rate table.
    pub role: Role,
    /// Wireless orders logged in the period.
    pub wireless_count: u32,
    /// Wireline orders logged in the period.
    pub wireline_count: u32,
    /// Wireless orders expected in the period; 0 means no target.
    pub wireless_target: u32,
    /// Wireline orders expected in the period; 0 means no target.
    pub wireline_target: u32,
    /// Fraction of full time, in percent (100 = full time).
    pub employment_percentage: f64,
}

/// The outcome of an employee bonus calculation.
///
/// All intermediate values are kept because callers persist and display
/// several of them independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBonusResult {
    pub wireless_zer: f64,
    pub wireline_zer: f64,
    pub wireless_orders: OrdersByLevel,
    pub wireline_orders: OrdersByLevel,
    /// Sum of both categories before the cap.
    pub total_bonus: f64,
    /// `min(total_bonus, pro_rata_cap)`.
    pub capped_bonus: f64,
    /// Monthly cap scaled by employment percentage.
    pub pro_rata_cap: f64,
}

/// One employee's contribution to the shop aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmployeeZer {
    pub wireless_zer: f64,
    pub wireline_zer: f64,
}

impl From<&EmployeeBonusResult> for EmployeeZer {
    fn from(result: &EmployeeBonusResult) -> Self {
        EmployeeZer {
            wireless_zer: result.wireless_zer,
            wireline_zer: result.wireline_zer,
        }
    }
}

/// The outcome of a manager bonus calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManagerBonusResult {
    /// The percentage that was passed in, before capping.
    pub shop_gzer: f64,
    /// Payout in CHF.
    pub bonus_amount: f64,
    /// Capped percentage minus 100, or 0 at or below 100.
    pub points_above_100: f64,
}

/// A named employee entry in a shop bonus run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopEmployee {
    /// Identifier assigned by the embedding application.
    pub id: String,
    #[serde(flatten)]
    pub input: EmployeeBonusInput,
}

/// Input to a monthly shop bonus run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopBonusRunInput {
    pub period: Period,
    pub employees: Vec<ShopEmployee>,
    /// Manually entered year-to-date achievement for the shop manager.
    /// When present it replaces the computed shop gZER for the manager
    /// bonus.
    #[serde(default)]
    pub manager_ytd_percentage: Option<f64>,
}

/// Result for one employee of a shop bonus run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBonusOutcome {
    pub id: String,
    pub role: Role,
    pub result: EmployeeBonusResult,
}

/// The aggregate result of a shop bonus run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopBonusRunResult {
    pub period: Period,
    pub employees: Vec<EmployeeBonusOutcome>,
    /// Average ZER over the shop's sales employees.
    pub shop_gzer: f64,
    pub manager_bonus: ManagerBonusResult,
    /// Sum of all capped employee bonuses.
    pub total_employee_payout: f64,
}
