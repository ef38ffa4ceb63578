//! Line classifier: partition pasted text into `+`-prefixed lines and the rest.
//!
//! Expected input is free-form pasted text, e.g.:
//!   +1,200 salary
//!   450 rent
//!   -30 refund reversal
//!
//! Blank lines are discarded; everything else lands in exactly one group,
//! in input order.

use serde::{Deserialize, Serialize};

/// Ordered, disjoint partition of the non-blank input lines
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    /// Trimmed lines whose first character is `+`
    pub positive_lines: Vec<String>,
    /// All remaining non-blank trimmed lines
    pub other_lines: Vec<String>,
}

impl Classification {
    /// Total number of classified lines across both groups
    pub fn len(&self) -> usize {
        self.positive_lines.len() + self.other_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive_lines.is_empty() && self.other_lines.is_empty()
    }
}

/// Split raw multi-line text into positive (`+`) and other lines.
///
/// Lines are trimmed before classification; lines that trim to empty are
/// dropped. Relative order within each group matches the input.
pub fn classify(raw: &str) -> Classification {
    let mut out = Classification::default();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('+') {
            out.positive_lines.push(trimmed.to_string());
        } else {
            out.other_lines.push(trimmed.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_basic() {
        let c = classify("+100\n50\n+25");
        assert_eq!(c.positive_lines, vec!["+100", "+25"]);
        assert_eq!(c.other_lines, vec!["50"]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let c = classify("  +10  \n\n   \n20\n");
        assert_eq!(c.positive_lines, vec!["+10"]);
        assert_eq!(c.other_lines, vec!["20"]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(classify("").is_empty());
        assert!(classify(" \n\t\n").is_empty());
    }

    #[test]
    fn test_leading_whitespace_before_plus() {
        // trimming happens before the prefix check
        let c = classify("   +5\n - 7");
        assert_eq!(c.positive_lines, vec!["+5"]);
        assert_eq!(c.other_lines, vec!["- 7"]);
    }

    #[test]
    fn test_every_nonblank_line_lands_exactly_once() {
        let raw = "+1\nfoo\n+2\n\nbar\n+3";
        let c = classify(raw);
        let nonblank: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(c.len(), nonblank.len());
        for line in nonblank {
            let in_pos = c.positive_lines.iter().any(|l| l == line);
            let in_other = c.other_lines.iter().any(|l| l == line);
            assert!(in_pos ^ in_other, "line {:?} must be in exactly one group", line);
            assert_eq!(in_pos, line.starts_with('+'));
        }
    }
}
