//! Error types for the incentive engine.
//!
//! The arithmetic at the heart of the engine is total and never fails.
//! Errors only arise at the edges: parsing role names, looking up rate
//! tables in a configured schedule and loading that schedule from disk.

use crate::models::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BonusError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("no rate table configured for role {0}")]
    MissingRateTable(Role),

    #[error("invalid rate for {role}.{field}: {value}")]
    InvalidRate {
        role: Role,
        field: &'static str,
        value: f64,
    },

    #[error("invalid period {year}-{month}")]
    InvalidPeriod { year: i32, month: u32 },

    #[error("rate schedule is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type BonusResult<T> = Result<T, BonusError>;
