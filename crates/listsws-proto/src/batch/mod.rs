//! `UpdateListItems` batches.
//!
//! Builds the `<Batch>` request payload from commands and field values and
//! decodes the per-command `<Result>` elements of the reply.

mod build;
mod command;
mod result;

pub use build::build_update_batch;
pub use command::{BatchCommand, CommandKind, FieldValue, OnError, UpdateBatch};
pub use result::{BatchOutcome, RowOrError, collect_failures, extract_error_code, parse_batch_results};
