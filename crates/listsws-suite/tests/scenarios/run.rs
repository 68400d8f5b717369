//! Tests for the full run and cleanup.

use chrono::{TimeZone, Utc};
use listsws_core::types::ListTemplate;
use listsws_core::util::name::NameGenerator;
use listsws_suite::context::TestContext;
use listsws_suite::scenarios::run_all;

use super::mock::{MockAdapter, Quirks, context, settings};

#[test_log::test(tokio::test)]
async fn cooperative_server_passes_every_scenario() {
    let mut ctx = context(MockAdapter::new());

    let report = run_all(&mut ctx).await;

    assert!(report.is_success(), "{:?}", report.failed().collect::<Vec<_>>());
    assert_eq!(report.outcomes.len(), 11);
    assert_eq!(report.cleanup_failures, 0);
    assert!(ctx.created_lists().is_empty());
    assert!(ctx.adapter().list_names().is_empty());
    assert_eq!(
        ctx.verifier().verified().collect::<Vec<_>>(),
        [1001, 1002, 1003, 1004, 1005, 1006, 1007, 1008, 2001, 2002, 2003, 2004, 2005]
    );
}

#[test_log::test(tokio::test)]
async fn one_violation_fails_only_its_scenario() {
    let mut ctx = context(MockAdapter::with_quirks(Quirks {
        check_in_when_not_checked_out: true,
        ..Quirks::default()
    }));

    let report = run_all(&mut ctx).await;

    let failed: Vec<_> = report.failed().map(|outcome| outcome.name).collect();
    assert_eq!(failed, ["check_in_file_not_checked_out"]);
    assert_eq!(report.cleanup_failures, 0);
}

#[test_log::test(tokio::test)]
async fn disabled_violation_passes_the_run() {
    let adapter = MockAdapter::with_quirks(Quirks {
        check_in_when_not_checked_out: true,
        ..Quirks::default()
    });
    let mut ctx = TestContext::new(adapter, settings("[requirements]\ndisabled = [1005]\n"));

    let report = run_all(&mut ctx).await;

    assert!(report.is_success());
    assert!(!ctx.verifier().verified().any(|id| id == 1005));
}

#[test_log::test(tokio::test)]
async fn cleanup_continues_after_delete_fault() {
    let mut ctx = context(MockAdapter::with_quirks(Quirks {
        fail_delete: true,
        ..Quirks::default()
    }));
    ctx.create_list(ListTemplate::GenericList).await.unwrap();
    ctx.create_document_library().await.unwrap();
    ctx.create_list(ListTemplate::GenericList).await.unwrap();

    let failed = ctx.cleanup().await;

    assert_eq!(failed, 3);
    assert_eq!(ctx.adapter().delete_attempts(), 3);
    assert!(ctx.created_lists().is_empty());
    assert_eq!(ctx.adapter().list_names().len(), 3);
}

#[test_log::test(tokio::test)]
async fn run_with_failing_cleanup_still_reports_scenarios() {
    let mut ctx = context(MockAdapter::with_quirks(Quirks {
        fail_delete: true,
        ..Quirks::default()
    }));

    let report = run_all(&mut ctx).await;

    assert!(report.is_success());
    assert!(report.cleanup_failures > 0);
    assert_eq!(report.cleanup_failures, ctx.adapter().list_names().len());
}

#[test_log::test(tokio::test)]
async fn list_names_use_configured_prefix() {
    let mut ctx = TestContext::new(
        MockAdapter::new(),
        settings("[suite]\nresource_prefix = \"CONF\"\n"),
    );

    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();

    assert!(list.starts_with("CONF_List1_"), "{list}");
}

#[test_log::test(tokio::test)]
async fn fixed_name_source_gives_deterministic_names() {
    let started = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut ctx = context(MockAdapter::new()).with_names(NameGenerator::at("T", started));

    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();
    let library = ctx.create_document_library().await.unwrap();

    assert_eq!(list, "T_List1_20240102030405");
    assert_eq!(library, "T_List2_20240102030405");
}
