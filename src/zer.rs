//! Target achievement (ZER) and tiered order classification.
//!
//! ZER is the achieved share of a target in percent.  Orders beyond the
//! target are split into two tiers: orders up to 120 % of target are
//! level 1, everything beyond is level 2.  The split truncates, so a
//! fractional 20 % band (target 7 gives 1.4 orders) credits only whole
//! orders to level 1.

use crate::models::OrdersByLevel;

/// Achievement above which excess orders spill into level 2.
pub const LEVEL2_THRESHOLD_ZER: f64 = 120.0;

/// Multiplier of the target marking the level 1 / level 2 boundary.
const LEVEL1_TARGET_FACTOR: f64 = 1.2;

/// Achievement of `actual` against `target` in percent.
///
/// A zero target yields 0.  The result is unbounded above.
pub fn calculate_zer(actual: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(actual) / f64::from(target)) * 100.0
}

/// Split the orders above `target` into level 1 and level 2.
pub fn calculate_orders_by_level(actual: u32, target: u32) -> OrdersByLevel {
    if target == 0 || actual <= target {
        return OrdersByLevel::default();
    }
    let excess = actual - target;
    let zer = calculate_zer(actual, target);
    if zer <= LEVEL2_THRESHOLD_ZER {
        return OrdersByLevel {
            level1: excess,
            level2: 0,
        };
    }

    let target = f64::from(target);
    let level1_target = target * LEVEL1_TARGET_FACTOR;
    // floor(level1_target - target), not floor(level1_target) - target.
    let level1 = (level1_target - target).floor();
    let level2 = f64::from(actual) - level1_target.floor();
    OrdersByLevel {
        level1: level1 as u32,
        level2: level2 as u32,
    }
}
