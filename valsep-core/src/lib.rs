//! valsep-core: line classification, amount extraction and totals for pasted value lists.

pub mod classify;
pub mod entry;
pub mod extract;
pub mod report;

pub use classify::{classify, Classification};
pub use entry::Entry;
pub use extract::{extract, ExtractPolicy};
pub use report::{format_rs, grand_total, total, TotalsReport};
