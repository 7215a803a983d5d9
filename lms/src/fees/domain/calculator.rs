use std::cmp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const FIRST_WEEK_DAILY_FEE: Decimal = dec!(0.50);
pub const AFTER_FIRST_WEEK_DAILY_FEE: Decimal = dec!(1.00);
pub const FIRST_WEEK_DAYS: i64 = 7;
pub const MAX_LATE_FEE: Decimal = dec!(15.00);

// FeePolicy defines the tiered late fee schedule charged per overdue book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeePolicy {
    pub first_week_daily_fee: Decimal,
    pub after_first_week_daily_fee: Decimal,
    pub first_week_days: i64,
    pub max_late_fee: Decimal,
}

impl Default for FeePolicy {
    fn default() -> Self {
        FeePolicy {
            first_week_daily_fee: FIRST_WEEK_DAILY_FEE,
            after_first_week_daily_fee: AFTER_FIRST_WEEK_DAILY_FEE,
            first_week_days: FIRST_WEEK_DAYS,
            max_late_fee: MAX_LATE_FEE,
        }
    }
}

impl FeePolicy {
    /// Maps a number of overdue days to the fee owed, rounded to cents and capped at
    /// `max_late_fee`. Zero or negative days owe nothing.
    pub fn compute_fee(&self, days_overdue: i64) -> Decimal {
        if days_overdue <= 0 {
            return dec!(0.00);
        }
        let first_week = cmp::min(days_overdue, self.first_week_days);
        let after_first_week = cmp::max(days_overdue - self.first_week_days, 0);
        let fee = self.first_week_daily_fee * Decimal::from(first_week)
            + self.after_first_week_daily_fee * Decimal::from(after_first_week);
        cmp::min(fee, self.max_late_fee).round_dp(2)
    }
}

pub fn compute_fee(days_overdue: i64) -> Decimal {
    FeePolicy::default().compute_fee(days_overdue)
}
