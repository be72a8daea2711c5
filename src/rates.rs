//! Bonus rate tables and rate schedule configuration.
//!
//! The `rates` module owns the per-role [`BonusRateTable`]s.  A
//! [`RateSchedule`] maps every role to its table.  The standard schedule
//! is built once from a total `match` over [`Role`]; deployments that pay
//! different rates can load a schedule from a JSON file of the form
//!
//! ```json
//! {
//!   "internal_sales": {
//!     "wireless_level1": 30.0, "wireless_level2": 60.0,
//!     "wireline_level1": 40.0, "wireline_level2": 80.0,
//!     "monthly_cap": 1600.0
//!   }
//! }
//! ```
//!
//! Roles missing from a loaded file are not filled in from the standard
//! schedule; looking one up yields [`BonusError::MissingRateTable`].

use crate::error::{BonusError, BonusResult};
use crate::models::{BonusRateTable, Role};
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable naming a JSON rate schedule file.
pub const RATES_FILE_ENV: &str = "INCENTIVE_RATES_FILE";

/// Standard rates for a role, in CHF.
pub const fn standard_rates(role: Role) -> BonusRateTable {
    match role {
        Role::InternalSales => BonusRateTable {
            wireless_level1: 30.0,
            wireless_level2: 60.0,
            wireline_level1: 40.0,
            wireline_level2: 80.0,
            monthly_cap: 1600.0,
        },
        Role::ExternalSales => BonusRateTable {
            wireless_level1: 35.0,
            wireless_level2: 70.0,
            wireline_level1: 45.0,
            wireline_level2: 90.0,
            monthly_cap: 2000.0,
        },
        // Managers are paid through the manager formula.
        Role::ShopManager | Role::RegionalManager => BonusRateTable::ZERO,
    }
}

/// The standard schedule, built on first use.
pub fn standard_schedule() -> &'static RateSchedule {
    static STANDARD: OnceLock<RateSchedule> = OnceLock::new();
    STANDARD.get_or_init(|| RateSchedule {
        tables: Role::ALL
            .into_iter()
            .map(|role| (role, standard_rates(role)))
            .collect(),
    })
}

/// A mapping from role to the rate table that applies to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSchedule {
    tables: HashMap<Role, BonusRateTable>,
}

impl RateSchedule {
    /// Build a schedule from explicit tables, validating every value.
    pub fn new(tables: HashMap<Role, BonusRateTable>) -> BonusResult<Self> {
        for (role, table) in &tables {
            validate_table(*role, table)?;
        }
        Ok(RateSchedule { tables })
    }

    /// Look up the table for `role`.
    pub fn rates_for(&self, role: Role) -> BonusResult<&BonusRateTable> {
        self.tables
            .get(&role)
            .ok_or(BonusError::MissingRateTable(role))
    }

    /// Roles this schedule has a table for, in declaration order.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.tables.contains_key(role))
            .collect()
    }

    /// Parse a schedule from JSON text keyed by role name.
    pub fn from_json_str(data: &str) -> BonusResult<Self> {
        let raw: BTreeMap<String, BonusRateTable> = serde_json::from_str(data)?;
        let mut tables = HashMap::with_capacity(raw.len());
        for (name, table) in raw {
            let role: Role = name.parse()?;
            tables.insert(role, table);
        }
        RateSchedule::new(tables)
    }

    /// Serialise the schedule back to JSON keyed by role name.
    pub fn to_json(&self) -> BonusResult<String> {
        let raw: BTreeMap<&str, &BonusRateTable> = self
            .tables
            .iter()
            .map(|(role, table)| (role.as_str(), table))
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    /// Load a schedule from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(BonusError::Io)
            .with_context(|| format!("reading rate schedule {}", path.display()))?;
        match RateSchedule::from_json_str(&data) {
            Ok(schedule) => {
                info!(path = %path.display(), roles = schedule.tables.len(), "loaded rate schedule");
                Ok(schedule)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "rejected rate schedule");
                Err(err).with_context(|| format!("parsing rate schedule {}", path.display()))
            }
        }
    }

    /// Load the schedule named by `INCENTIVE_RATES_FILE`, or the standard
    /// schedule when the variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        RateSchedule::from_optional_path(std::env::var_os(RATES_FILE_ENV).as_deref().map(Path::new))
    }

    /// Load the schedule at `path`, or the standard schedule for `None`.
    pub fn from_optional_path(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => RateSchedule::from_json_file(path),
            None => Ok(standard_schedule().clone()),
        }
    }
}

fn validate_table(role: Role, table: &BonusRateTable) -> BonusResult<()> {
    let fields = [
        ("wireless_level1", table.wireless_level1),
        ("wireless_level2", table.wireless_level2),
        ("wireline_level1", table.wireline_level1),
        ("wireline_level2", table.wireline_level2),
        ("monthly_cap", table.monthly_cap),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(BonusError::InvalidRate { role, field, value });
        }
    }
    Ok(())
}
