//! Entry type: one input line paired with its parsed amount.

use serde::{Deserialize, Serialize};

/// A single parsed line from the pasted input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// The original line, already trimmed of surrounding whitespace
    pub text: String,
    /// Signed integer amount extracted from the line
    pub amount: i64,
}

impl Entry {
    /// Create a new Entry
    pub fn new(text: impl Into<String>, amount: i64) -> Self {
        Self {
            text: text.into(),
            amount,
        }
    }

    /// Returns true if the amount is positive
    pub fn is_credit(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is negative
    pub fn is_debit(&self) -> bool {
        self.amount < 0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> i64 {
        self.amount.abs()
    }
}
