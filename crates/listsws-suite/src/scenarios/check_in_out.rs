//! `CheckOutFile`, `CheckInFile` and `UndoCheckOut`.
//!
//! Every scenario works on a freshly uploaded file in its own document
//! library.

use chrono::{TimeDelta, Utc};
use listsws_core::types::CheckinType;
use listsws_proto::soap::CallResult;

use crate::adapter::ListsAdapter;
use crate::context::TestContext;
use crate::error::SuiteResult;
use crate::requirement::catalog;

/// Format of the `lastModified` argument of `CheckOutFile`.
const LAST_MODIFIED_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";

/// A call was refused if it returned `false` or faulted.
fn rejected(result: &CallResult<bool>) -> bool {
    match result {
        Ok(accepted) => !accepted,
        Err(fault) => {
            tracing::debug!(error_code = %fault.error_code(), error = %fault, "Call faulted");
            true
        }
    }
}

fn comment<A: ListsAdapter>(ctx: &TestContext<A>) -> String {
    ctx.settings().suite.check_in_comment.clone()
}

/// ## Errors
/// Returns the first fault or violated requirement.
pub async fn check_out_and_check_in<A: ListsAdapter>(ctx: &mut TestContext<A>) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;

    let checked_out = ctx.adapter().check_out_file(&url, false, None).await?;
    ctx.capture(catalog::CHECK_OUT_SUCCEEDS, checked_out)?;

    let comment = comment(ctx);
    let checked_in = ctx
        .adapter()
        .check_in_file(&url, &comment, CheckinType::MajorCheckIn)
        .await?;
    ctx.capture(catalog::CHECK_IN_SUCCEEDS, checked_in)
}

/// ## Errors
/// Returns the first fault or violated requirement.
pub async fn undo_check_out_after_check_out<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;

    let checked_out = ctx.adapter().check_out_file(&url, false, None).await?;
    ctx.capture(catalog::CHECK_OUT_SUCCEEDS, checked_out)?;

    let undone = ctx.adapter().undo_check_out(&url).await?;
    ctx.capture(catalog::UNDO_CHECK_OUT_SUCCEEDS, undone)
}

/// ## Errors
/// Returns a setup fault or the violated requirement.
pub async fn check_in_file_not_checked_out<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;

    let comment = comment(ctx);
    let result = ctx
        .adapter()
        .check_in_file(&url, &comment, CheckinType::MinorCheckIn)
        .await;
    ctx.capture(catalog::CHECK_IN_NOT_CHECKED_OUT, rejected(&result))
}

/// ## Errors
/// Returns a setup fault or the violated requirement.
pub async fn undo_check_out_not_checked_out<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;

    let result = ctx.adapter().undo_check_out(&url).await;
    ctx.capture(catalog::UNDO_CHECK_OUT_NOT_CHECKED_OUT, rejected(&result))
}

/// ## Errors
/// Returns the violated requirement.
pub async fn check_out_invalid_url<A: ListsAdapter>(ctx: &mut TestContext<A>) -> SuiteResult<()> {
    let result = ctx
        .adapter()
        .check_out_file("not a valid url", false, None)
        .await;

    let has_error_string = match result {
        Ok(checked_out) => {
            tracing::warn!(checked_out, "Check-out of an invalid URL did not fault");
            false
        }
        Err(fault) => fault.error_string().is_some_and(|s| !s.trim().is_empty()),
    };
    ctx.capture(catalog::CHECK_OUT_INVALID_URL_FAULTS, has_error_string)
}

/// ## Errors
/// Returns a setup fault or the violated requirement.
pub async fn check_out_stale_last_modified<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;

    let stale = (Utc::now() - TimeDelta::days(3650))
        .format(LAST_MODIFIED_FORMAT)
        .to_string();
    let result = ctx.adapter().check_out_file(&url, false, Some(&stale)).await;
    let refused = rejected(&result);

    if !refused {
        tracing::warn!(%url, last_modified = %stale, "Stale check-out was accepted, undoing");
        if let Err(fault) = ctx.adapter().undo_check_out(&url).await {
            tracing::warn!(%url, error = %fault, "Failed to undo check-out");
        }
    }
    ctx.capture(catalog::CHECK_OUT_STALE_LAST_MODIFIED, refused)
}

/// ## Errors
/// Returns a setup fault or the violated requirement.
pub async fn check_in_with_each_type<A: ListsAdapter>(ctx: &mut TestContext<A>) -> SuiteResult<()> {
    let (_, url) = ctx.create_library_with_file().await?;
    let comment = comment(ctx);

    let mut all_accepted = true;
    for checkin_type in CheckinType::ALL {
        let checked_out = ctx.adapter().check_out_file(&url, false, None).await?;
        ctx.capture(catalog::CHECK_OUT_SUCCEEDS, checked_out)?;

        let accepted = match ctx.adapter().check_in_file(&url, &comment, checkin_type).await {
            Ok(accepted) => accepted,
            Err(fault) => {
                tracing::warn!(%checkin_type, error = %fault, "Check-in faulted");
                false
            }
        };
        tracing::debug!(%checkin_type, accepted, "Checked in");
        all_accepted &= accepted;
    }
    ctx.capture(catalog::CHECK_IN_ALL_TYPES, all_accepted)
}
