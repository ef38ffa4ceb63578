//! Session state for the presentation layer.
//!
//! The core stays pure; the only thing retained between triggers is the last
//! classification result, replaced wholesale on each successful process.

use anyhow::Result;
use valsep_core::{classify, extract, Classification, Entry, ExtractPolicy, TotalsReport};

/// Result of a "process" trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Input was classified; counts per group
    Processed { positive: usize, other: usize },
    /// Input was empty or whitespace-only; prior state left untouched
    EmptyInput,
}

#[derive(Debug, Default)]
pub struct Session {
    classification: Classification,
    processed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once at least one process trigger has succeeded
    pub fn processed(&self) -> bool {
        self.processed
    }

    /// Classify `raw` and replace the retained state.
    ///
    /// Whitespace-only input is rejected with `EmptyInput` and does not
    /// disturb the previous classification.
    pub fn process(&mut self, raw: &str) -> ProcessOutcome {
        if raw.trim().is_empty() {
            return ProcessOutcome::EmptyInput;
        }
        self.classification = classify(raw);
        self.processed = true;
        ProcessOutcome::Processed {
            positive: self.classification.positive_lines.len(),
            other: self.classification.other_lines.len(),
        }
    }

    /// Re-extract both entry groups from the retained classification.
    pub fn entries(&self, policy: ExtractPolicy) -> Result<(Vec<Entry>, Vec<Entry>)> {
        let positive = extract(&self.classification.positive_lines, policy)?;
        let other = extract(&self.classification.other_lines, policy)?;
        Ok((positive, other))
    }

    /// Build the totals report for the retained classification.
    pub fn totals(&self, policy: ExtractPolicy) -> Result<TotalsReport> {
        let (positive, other) = self.entries(policy)?;
        Ok(TotalsReport::build(&positive, &other))
    }
}

/// Display order: amount descending, ties keep input order.
pub fn sort_for_display(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_replaces_state() {
        let mut session = Session::new();
        assert!(!session.processed());

        let outcome = session.process("+100\n50\n+25");
        assert_eq!(
            outcome,
            ProcessOutcome::Processed {
                positive: 2,
                other: 1
            }
        );
        assert!(session.processed());

        let outcome = session.process("7");
        assert_eq!(
            outcome,
            ProcessOutcome::Processed {
                positive: 0,
                other: 1
            }
        );
        let (positive, other) = session.entries(ExtractPolicy::SkipUnmatched).unwrap();
        assert!(positive.is_empty());
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_empty_input_leaves_state_untouched() {
        let mut session = Session::new();
        session.process("+100\n50");

        assert_eq!(session.process("   \n\t"), ProcessOutcome::EmptyInput);
        assert!(session.processed());

        let (positive, other) = session.entries(ExtractPolicy::SkipUnmatched).unwrap();
        assert_eq!(positive.len(), 1);
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_totals_through_session() {
        let mut session = Session::new();
        session.process("+100\n50\n+25");
        let report = session.totals(ExtractPolicy::SkipUnmatched).unwrap();
        assert_eq!(report.messages().last().unwrap(), "Grand Total: RS 175");
    }

    #[test]
    fn test_sort_for_display_is_stable() {
        let entries = vec![
            Entry::new("a 10", 10),
            Entry::new("b 30", 30),
            Entry::new("c 10", 10),
        ];
        let sorted = sort_for_display(entries);
        let texts: Vec<&str> = sorted.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b 30", "a 10", "c 10"]);
    }
}
