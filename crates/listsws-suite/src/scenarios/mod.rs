//! Conformance scenarios and the runner that drives them.

pub mod check_in_out;
pub mod list_items;

use crate::adapter::ListsAdapter;
use crate::context::TestContext;
use crate::error::SuiteResult;

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: SuiteResult<()>,
}

/// Results of a full run, in execution order.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
    /// Lists that could not be deleted during cleanup.
    pub cleanup_failures: usize,
}

impl ScenarioReport {
    fn record(&mut self, name: &'static str, result: SuiteResult<()>) {
        match &result {
            Ok(()) => tracing::info!(scenario = name, "Scenario passed"),
            Err(e) => tracing::error!(scenario = name, error = %e, "Scenario failed"),
        }
        self.outcomes.push(ScenarioOutcome { name, result });
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// Runs every scenario in order, then removes the lists the run created.
///
/// A failing scenario does not stop the run.
pub async fn run_all<A: ListsAdapter>(ctx: &mut TestContext<A>) -> ScenarioReport {
    let mut report = ScenarioReport::default();

    report.record(
        "check_out_and_check_in",
        check_in_out::check_out_and_check_in(ctx).await,
    );
    report.record(
        "undo_check_out_after_check_out",
        check_in_out::undo_check_out_after_check_out(ctx).await,
    );
    report.record(
        "check_in_file_not_checked_out",
        check_in_out::check_in_file_not_checked_out(ctx).await,
    );
    report.record(
        "undo_check_out_not_checked_out",
        check_in_out::undo_check_out_not_checked_out(ctx).await,
    );
    report.record(
        "check_out_invalid_url",
        check_in_out::check_out_invalid_url(ctx).await,
    );
    report.record(
        "check_out_stale_last_modified",
        check_in_out::check_out_stale_last_modified(ctx).await,
    );
    report.record(
        "check_in_with_each_type",
        check_in_out::check_in_with_each_type(ctx).await,
    );
    report.record(
        "new_item_reads_back_by_field",
        list_items::new_item_reads_back_by_field(ctx).await,
    );
    report.record(
        "changes_report_new_item",
        list_items::changes_report_new_item(ctx).await,
    );
    report.record(
        "list_has_content_types",
        list_items::list_has_content_types(ctx).await,
    );
    report.record(
        "new_item_has_no_attachments",
        list_items::new_item_has_no_attachments(ctx).await,
    );

    report.cleanup_failures = ctx.cleanup().await;
    tracing::info!(
        scenarios = report.outcomes.len(),
        failed = report.failed().count(),
        cleanup_failures = report.cleanup_failures,
        verified = ?ctx.verifier().verified().collect::<Vec<_>>(),
        "Run finished"
    );
    report
}
