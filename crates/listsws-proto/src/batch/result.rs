//! Per-command results of `UpdateListItems`.

use listsws_core::constants::SUCCESS_ERROR_CODE;

use super::command::OnError;
use crate::error::{ProtoError, ProtoResult};
use crate::rowset::{ResultRow, extract_single_row};
use crate::xml::XmlElement;

/// What a command produced: the written row, or the server's error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOrError {
    Row(ResultRow),
    Error(String),
}

/// Result of one batch command, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// The `ID` attribute of the `<Result>`, e.g. `1,New`.
    pub id: String,
    pub error_code: String,
    pub row_or_error: RowOrError,
}

impl BatchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code == SUCCESS_ERROR_CODE
    }

    #[must_use]
    pub fn row(&self) -> Option<&ResultRow> {
        match &self.row_or_error {
            RowOrError::Row(row) => Some(row),
            RowOrError::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        match &self.row_or_error {
            RowOrError::Row(_) => None,
            RowOrError::Error(text) => Some(text),
        }
    }
}

/// Error code of a failed command; `None` when the command succeeded.
///
/// Only the all-zero code counts as success. Any other value, including an
/// empty one, is returned verbatim.
#[must_use]
pub fn extract_error_code(outcome: &BatchOutcome) -> Option<&str> {
    (!outcome.is_success()).then_some(outcome.error_code.as_str())
}

/// Decodes every `<Result>` of an `UpdateListItems` reply.
///
/// ## Summary
/// A successful result must carry exactly one row with an `ows_ID`
/// column. A failed result carries its `ErrorText` (empty if absent).
///
/// ## Errors
/// Returns `MalformedResponse` if a result lacks `ErrorCode`, and the row
/// shape errors of [`extract_single_row`] for a successful result.
#[tracing::instrument(skip(payload))]
pub fn parse_batch_results(payload: &XmlElement) -> ProtoResult<Vec<BatchOutcome>> {
    payload
        .self_and_descendants()
        .filter(|element| element.local_name() == "Result")
        .map(parse_result)
        .collect()
}

fn parse_result(result: &XmlElement) -> ProtoResult<BatchOutcome> {
    let id = result.attr("ID").unwrap_or_default().to_owned();
    let error_code = result
        .child_text("ErrorCode")
        .ok_or_else(|| ProtoError::MalformedResponse(format!("result {id} has no ErrorCode")))?
        .trim()
        .to_owned();

    let row_or_error = if let Some(text) = result.child_text("ErrorText") {
        RowOrError::Error(text.to_owned())
    } else if error_code == SUCCESS_ERROR_CODE {
        RowOrError::Row(extract_single_row(result)?)
    } else {
        RowOrError::Error(String::new())
    };

    if !matches!(row_or_error, RowOrError::Row(_)) {
        tracing::debug!(result = %id, error_code = %error_code, "Batch command failed");
    }

    Ok(BatchOutcome {
        id,
        error_code,
        row_or_error,
    })
}

/// Failed outcomes a caller has to account for under the batch's policy.
///
/// With [`OnError::Return`] the server stops at the first failure, so only
/// that one is reported. With [`OnError::Continue`] every failure is.
#[must_use]
pub fn collect_failures(outcomes: &[BatchOutcome], on_error: OnError) -> Vec<&BatchOutcome> {
    let failures = outcomes.iter().filter(|outcome| !outcome.is_success());
    match on_error {
        OnError::Return => failures.take(1).collect(),
        OnError::Continue => failures.collect(),
    }
}
