//! # Fiscal Periods
//!
//! Ledger entries are tagged with the Indian financial year, which runs
//! April to March. The year is identified by the calendar year it starts
//! in, so 2026-02-10 falls in FY 2025 (rendered `FY2025-26`), quarter 4.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month in which the financial year begins.
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Range of starting years accepted from stored fiscal tags.
pub const PLAUSIBLE_FISCAL_YEARS: std::ops::RangeInclusive<i32> = 1900..=9999;

/// A financial year and quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// Calendar year in which the financial year starts.
    pub year: i32,
    /// Quarter within the financial year, 1 through 4.
    pub quarter: u8,
}

impl FiscalPeriod {
    /// Derive the financial period containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let month = date.month();
        let year = if month >= FISCAL_YEAR_START_MONTH {
            date.year()
        } else {
            date.year() - 1
        };
        // Months since April, 0..=11.
        let offset = (month + 12 - FISCAL_YEAR_START_MONTH) % 12;
        Self {
            year,
            quarter: (offset / 3 + 1) as u8,
        }
    }

    /// Build from stored tags, rejecting quarters outside 1..=4 and years
    /// outside [`PLAUSIBLE_FISCAL_YEARS`].
    pub fn from_tags(year: i32, quarter: u8) -> Option<Self> {
        let valid = (1..=4).contains(&quarter) && PLAUSIBLE_FISCAL_YEARS.contains(&year);
        if !valid {
            tracing::debug!(year, quarter, "ignoring implausible fiscal tags");
        }
        valid.then_some(Self { year, quarter })
    }

    /// `FY2025-26` style financial year label.
    pub fn year_label(&self) -> String {
        let next = (i64::from(self.year) + 1).rem_euclid(100);
        format!("FY{}-{:02}", self.year, next)
    }

    /// `FY2025-26 Q4` style label.
    pub fn label(&self) -> String {
        format!("{} Q{}", self.year_label(), self.quarter)
    }
}

impl std::fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(FiscalPeriod::from_date(date(2025, 4, 1)), FiscalPeriod { year: 2025, quarter: 1 });
        assert_eq!(FiscalPeriod::from_date(date(2025, 6, 30)), FiscalPeriod { year: 2025, quarter: 1 });
        assert_eq!(FiscalPeriod::from_date(date(2025, 7, 1)), FiscalPeriod { year: 2025, quarter: 2 });
        assert_eq!(FiscalPeriod::from_date(date(2025, 9, 30)), FiscalPeriod { year: 2025, quarter: 2 });
        assert_eq!(FiscalPeriod::from_date(date(2025, 10, 1)), FiscalPeriod { year: 2025, quarter: 3 });
        assert_eq!(FiscalPeriod::from_date(date(2025, 12, 31)), FiscalPeriod { year: 2025, quarter: 3 });
        assert_eq!(FiscalPeriod::from_date(date(2026, 1, 1)), FiscalPeriod { year: 2025, quarter: 4 });
        assert_eq!(FiscalPeriod::from_date(date(2026, 3, 31)), FiscalPeriod { year: 2025, quarter: 4 });
    }

    #[test]
    fn labels() {
        let p = FiscalPeriod::from_date(date(2026, 2, 10));
        assert_eq!(p.year_label(), "FY2025-26");
        assert_eq!(p.label(), "FY2025-26 Q4");
        assert_eq!(p.to_string(), "FY2025-26 Q4");
        assert_eq!(FiscalPeriod { year: 1999, quarter: 1 }.year_label(), "FY1999-00");
    }

    #[test]
    fn from_tags_rejects_bad_quarter() {
        assert!(FiscalPeriod::from_tags(2025, 0).is_none());
        assert!(FiscalPeriod::from_tags(2025, 5).is_none());
        assert_eq!(FiscalPeriod::from_tags(2025, 2), Some(FiscalPeriod { year: 2025, quarter: 2 }));
    }

    #[test]
    fn from_tags_rejects_implausible_year() {
        assert!(FiscalPeriod::from_tags(i32::MAX, 1).is_none());
        assert!(FiscalPeriod::from_tags(i32::MIN, 1).is_none());
        assert!(FiscalPeriod::from_tags(1899, 1).is_none());
        assert!(FiscalPeriod::from_tags(10_000, 1).is_none());
        assert!(FiscalPeriod::from_tags(1900, 1).is_some());
        assert!(FiscalPeriod::from_tags(9999, 4).is_some());
    }

    #[test]
    fn year_label_at_i32_extremes() {
        let max = FiscalPeriod { year: i32::MAX, quarter: 1 };
        assert_eq!(max.year_label(), format!("FY{}-48", i32::MAX));
        let min = FiscalPeriod { year: i32::MIN, quarter: 1 };
        assert_eq!(min.year_label(), format!("FY{}-53", i32::MIN));
    }
}
