//! Tests for list item helpers and scenarios.

use listsws_core::types::ListTemplate;
use listsws_proto::ProtoError;
use listsws_proto::batch::FieldValue;
use listsws_proto::rowset::extract_column;
use listsws_suite::error::SuiteError;
use listsws_suite::helpers::row_id;
use listsws_suite::scenarios::list_items;

use super::mock::{MockAdapter, Quirks, context};

#[test_log::test(tokio::test)]
async fn added_items_get_ids_in_order() {
    let mut ctx = context(MockAdapter::new());
    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();

    let rows = ctx
        .add_list_items(
            &list,
            vec![
                vec![FieldValue::new("Title", "first")],
                vec![FieldValue::new("Title", "second"), FieldValue::new("Body", "text")],
            ],
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(row_id(&rows[0]).unwrap(), "1");
    assert_eq!(row_id(&rows[1]).unwrap(), "2");
    assert_eq!(extract_column(&rows[1], "Body").unwrap(), "text");
    assert_eq!(ctx.verifier().verified().collect::<Vec<_>>(), [2001]);
}

#[test_log::test(tokio::test)]
async fn lookup_by_field_with_duplicates_fails() {
    let mut ctx = context(MockAdapter::new());
    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();
    let same = || vec![FieldValue::new("Title", "twin")];
    ctx.add_list_items(&list, vec![same(), same()]).await.unwrap();

    let err = ctx
        .get_list_item_by_field(&list, "Title", "twin")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SuiteError::ProtoError(ProtoError::UnexpectedCardinality { expected: 1, found: 2 })
    ));
}

#[test_log::test(tokio::test)]
async fn lookup_of_missing_value_finds_nothing() {
    let mut ctx = context(MockAdapter::new());
    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();

    let err = ctx
        .get_list_item_by_field(&list, "Title", "absent")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SuiteError::ProtoError(ProtoError::UnexpectedCardinality { found: 0, .. })
    ));
}

#[test_log::test(tokio::test)]
async fn new_item_reads_back_by_field() {
    let mut ctx = context(MockAdapter::new());

    list_items::new_item_reads_back_by_field(&mut ctx).await.unwrap();

    assert_eq!(ctx.verifier().verified().collect::<Vec<_>>(), [2001, 2002]);
}

#[test_log::test(tokio::test)]
async fn changes_since_token_report_new_item() {
    let mut ctx = context(MockAdapter::new());

    list_items::changes_report_new_item(&mut ctx).await.unwrap();

    assert_eq!(ctx.verifier().verified().collect::<Vec<_>>(), [2001, 2003]);
}

#[test_log::test(tokio::test)]
async fn changes_since_latest_token_are_empty() {
    let mut ctx = context(MockAdapter::new());
    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();
    ctx.add_named_items(&list, 2).await.unwrap();

    let all = ctx.changes_since(&list, None).await.unwrap();
    assert_eq!(all.rows.len(), 2);

    let none = ctx
        .changes_since(&list, all.last_change_token.as_deref())
        .await
        .unwrap();
    assert!(none.rows.is_empty());
}

#[test_log::test(tokio::test)]
async fn list_reports_content_types() {
    let mut ctx = context(MockAdapter::new());

    list_items::list_has_content_types(&mut ctx).await.unwrap();

    let list = ctx.created_lists()[0].clone();
    let content_types = ctx.content_types(&list).await.unwrap();
    assert_eq!(content_types[1].name, "Folder");
    assert_eq!(content_types[1].description.as_deref(), Some("Create a new folder."));
}

#[test_log::test(tokio::test)]
async fn list_without_content_types_violates_requirement() {
    let mut ctx = context(MockAdapter::with_quirks(Quirks {
        no_content_types: true,
        ..Quirks::default()
    }));

    let err = list_items::list_has_content_types(&mut ctx).await.unwrap_err();

    assert!(matches!(err, SuiteError::RequirementViolated { id: 2004, .. }));
}

#[test_log::test(tokio::test)]
async fn new_item_has_no_attachments() {
    let mut ctx = context(MockAdapter::new());

    list_items::new_item_has_no_attachments(&mut ctx).await.unwrap();

    assert_eq!(ctx.verifier().verified().collect::<Vec<_>>(), [2001, 2005]);
}

#[test_log::test(tokio::test)]
async fn attachments_of_unknown_item_fault() {
    let mut ctx = context(MockAdapter::new());
    let list = ctx.create_list(ListTemplate::GenericList).await.unwrap();

    let err = ctx.attachment_urls(&list, "99").await.unwrap_err();

    let SuiteError::Fault(fault) = err else {
        panic!("expected fault, got {err:?}");
    };
    assert!(fault.has_error_code("0x81020016"));
}
