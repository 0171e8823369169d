//! Word Store
//!
//! The learner's word list: adding, bulk adding, editing, deleting (with
//! the progress cascade) and filling in missing details.

#![warn(missing_docs)]

pub mod store;
pub mod fill;

pub use store::{parse_bulk_line, BulkAddReport, Result, WordError, WordStore, WordUpdate};
pub use fill::{FillDraft, FillOutcome, FillSource, WordFiller};
