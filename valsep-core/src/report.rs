//! Aggregation and totals messages.
//!
//! Which messages appear depends on which groups produced entries:
//! both groups → positive, other and grand totals; positive only → one
//! message; other only → a single "all values" total; neither → a notice.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Sum of amounts across a group; empty input yields 0
pub fn total(entries: &[Entry]) -> i64 {
    entries.iter().map(|e| e.amount).sum()
}

/// Combined total across both groups
pub fn grand_total(positive_total: i64, other_total: i64) -> i64 {
    positive_total + other_total
}

/// Format an amount with thousands separators and the fixed currency label,
/// e.g. `format_rs(1234567)` → `"RS 1,234,567"`.
pub fn format_rs(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("RS -{}", grouped)
    } else {
        format!("RS {}", grouped)
    }
}

/// Totals outcome for the current pair of entry groups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TotalsReport {
    /// Both groups have entries: report each total and the grand total
    Both {
        positive: i64,
        other: i64,
        grand: i64,
    },
    /// Only `+` lines produced entries
    PositiveOnly { positive: i64 },
    /// Only non-`+` lines produced entries: one combined total
    AllValues { total: i64 },
    /// Neither group produced an entry
    Empty,
}

impl TotalsReport {
    /// Apply the message-selection rules to the two entry groups.
    pub fn build(positive: &[Entry], other: &[Entry]) -> Self {
        let positive_total = total(positive);
        let other_total = total(other);

        match (positive.is_empty(), other.is_empty()) {
            (false, false) => TotalsReport::Both {
                positive: positive_total,
                other: other_total,
                grand: grand_total(positive_total, other_total),
            },
            (false, true) => TotalsReport::PositiveOnly {
                positive: positive_total,
            },
            (true, false) => TotalsReport::AllValues { total: other_total },
            (true, true) => TotalsReport::Empty,
        }
    }

    /// User-facing totals messages, one string per line of output.
    pub fn messages(&self) -> Vec<String> {
        match self {
            TotalsReport::Both {
                positive,
                other,
                grand,
            } => vec![
                format!("Total of Positive (+) Values: {}", format_rs(*positive)),
                format!("Total of Other Values: {}", format_rs(*other)),
                format!("Grand Total: {}", format_rs(*grand)),
            ],
            TotalsReport::PositiveOnly { positive } => {
                vec![format!("Total of Positive (+) Values: {}", format_rs(*positive))]
            }
            TotalsReport::AllValues { total } => {
                vec![format!("Total of All Values: {}", format_rs(*total))]
            }
            TotalsReport::Empty => {
                vec!["No valid numerical values found to calculate totals.".to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(amounts: &[i64]) -> Vec<Entry> {
        amounts
            .iter()
            .map(|&a| Entry::new(a.to_string(), a))
            .collect()
    }

    #[test]
    fn test_total_sums_amounts() {
        assert_eq!(total(&entries(&[100, 25])), 125);
        assert_eq!(total(&entries(&[-30])), -30);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn test_grand_total() {
        assert_eq!(grand_total(125, 50), 175);
        assert_eq!(grand_total(0, -30), -30);
    }

    #[test]
    fn test_format_rs() {
        assert_eq!(format_rs(0), "RS 0");
        assert_eq!(format_rs(175), "RS 175");
        assert_eq!(format_rs(1200), "RS 1,200");
        assert_eq!(format_rs(1234567), "RS 1,234,567");
        assert_eq!(format_rs(-1234567), "RS -1,234,567");
        assert_eq!(format_rs(-30), "RS -30");
    }

    #[test]
    fn test_report_both_groups() {
        let report = TotalsReport::build(&entries(&[100, 25]), &entries(&[50]));
        assert_eq!(
            report,
            TotalsReport::Both {
                positive: 125,
                other: 50,
                grand: 175
            }
        );
        let msgs = report.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0], "Total of Positive (+) Values: RS 125");
        assert_eq!(msgs[2], "Grand Total: RS 175");
    }

    #[test]
    fn test_report_positive_only() {
        let report = TotalsReport::build(&entries(&[1200]), &[]);
        assert_eq!(
            report.messages(),
            vec!["Total of Positive (+) Values: RS 1,200"]
        );
    }

    #[test]
    fn test_report_other_only_collapses_to_all_values() {
        let report = TotalsReport::build(&[], &entries(&[10, 20, 30]));
        assert_eq!(report, TotalsReport::AllValues { total: 60 });
        assert_eq!(report.messages(), vec!["Total of All Values: RS 60"]);
    }

    #[test]
    fn test_report_empty() {
        let report = TotalsReport::build(&[], &[]);
        assert_eq!(report, TotalsReport::Empty);
        assert_eq!(report.messages().len(), 1);
    }
}
