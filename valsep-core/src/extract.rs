//! Amount extractor: derive a signed integer amount from each classified line.
//!
//! Two historical behaviors exist for lines that carry no parseable number,
//! so the policy is explicit:
//!   - `SkipUnmatched`: scan the whole line for the first digit run and drop
//!     lines without one (canonical default).
//!   - `ZeroFill`: only accept a digit run at the very start of the
//!     (`+`-stripped) line, and keep unmatched lines with amount 0.
//!
//! Commas are stripped before matching in both policies, so `+1,200`
//! parses as 1200.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// How to treat lines without a parseable amount
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExtractPolicy {
    /// Match the first digit run anywhere in the line; skip lines with none
    #[default]
    #[serde(rename = "skip-unmatched")]
    SkipUnmatched,
    /// Match only a leading digit run; keep unmatched lines with amount 0
    #[serde(rename = "zero-fill")]
    ZeroFill,
}

/// Parse each line into an Entry according to `policy`.
///
/// Output order matches input order. Never fails on malformed lines; the
/// only error path is regex construction.
pub fn extract(lines: &[String], policy: ExtractPolicy) -> Result<Vec<Entry>> {
    // First digit run, optionally signed. A leading `+` is consumed but does
    // not negate; only a `-` directly before the digits does.
    let anywhere_re = Regex::new(r"\+?(-?\d+)")?;
    let leading_re = Regex::new(r"^(-?\d+)")?;

    let mut out = Vec::new();

    for line in lines {
        let stripped = line.replace(',', "");

        match policy {
            ExtractPolicy::SkipUnmatched => {
                if let Some(caps) = anywhere_re.captures(&stripped) {
                    let amount: i64 = caps[1].parse().unwrap_or(0);
                    out.push(Entry::new(line.clone(), amount));
                }
            }
            ExtractPolicy::ZeroFill => {
                let body = stripped.strip_prefix('+').unwrap_or(&stripped);
                let amount = leading_re
                    .captures(body)
                    .and_then(|caps| caps[1].parse().ok())
                    .unwrap_or(0);
                out.push(Entry::new(line.clone(), amount));
            }
        }
    }

    Ok(out)
}
