//! Item round trips through `UpdateListItems`, `GetListItems`,
//! `GetListItemChangesSinceToken`, `GetListContentTypes` and
//! `GetAttachmentCollection`.

use listsws_core::types::{ListTemplate, NameCategory};
use listsws_proto::batch::FieldValue;
use listsws_proto::rowset::extract_column;

use crate::adapter::ListsAdapter;
use crate::context::TestContext;
use crate::error::SuiteResult;
use crate::helpers::row_id;
use crate::requirement::catalog;

/// ## Errors
/// Returns the first fault, shape error, or violated requirement.
pub async fn new_item_reads_back_by_field<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let list = ctx.create_list(ListTemplate::GenericList).await?;
    let field = ctx.settings().suite.common_field_name.clone();
    let value = ctx.next_name(NameCategory::ListItem);

    let written = ctx
        .add_list_item(&list, vec![FieldValue::new(field.as_str(), value.as_str())])
        .await?;
    let read = ctx.get_list_item_by_field(&list, &field, &value).await?;

    let matches = extract_column(&read, &field)? == value && read.id() == written.id();
    ctx.capture(catalog::QUERY_RETURNS_MATCH, matches)
}

/// ## Errors
/// Returns the first fault, shape error, or violated requirement.
pub async fn changes_report_new_item<A: ListsAdapter>(ctx: &mut TestContext<A>) -> SuiteResult<()> {
    let list = ctx.create_list(ListTemplate::GenericList).await?;
    let baseline = ctx.changes_since(&list, None).await?;

    let rows = ctx.add_named_items(&list, 1).await?;
    let Some(row) = rows.first() else {
        return ctx.capture(catalog::CHANGES_REPORT_NEW_ITEM, false);
    };
    let id = row_id(row)?;

    let changes = ctx
        .changes_since(&list, baseline.last_change_token.as_deref())
        .await?;
    let reported = changes.rows.iter().any(|changed| changed.id() == Some(id));
    ctx.capture(catalog::CHANGES_REPORT_NEW_ITEM, reported)
}

/// ## Errors
/// Returns a setup fault or the violated requirement.
pub async fn list_has_content_types<A: ListsAdapter>(ctx: &mut TestContext<A>) -> SuiteResult<()> {
    let list = ctx.create_list(ListTemplate::GenericList).await?;
    let content_types = ctx.content_types(&list).await?;
    tracing::debug!(count = content_types.len(), "Listed content types");
    ctx.capture(catalog::LIST_HAS_CONTENT_TYPES, !content_types.is_empty())
}

/// ## Errors
/// Returns the first fault, shape error, or violated requirement.
pub async fn new_item_has_no_attachments<A: ListsAdapter>(
    ctx: &mut TestContext<A>,
) -> SuiteResult<()> {
    let list = ctx.create_list(ListTemplate::GenericList).await?;
    let rows = ctx.add_named_items(&list, 1).await?;
    let Some(row) = rows.first() else {
        return ctx.capture(catalog::NEW_ITEM_HAS_NO_ATTACHMENTS, false);
    };

    let urls = ctx.attachment_urls(&list, row_id(row)?).await?;
    ctx.capture(catalog::NEW_ITEM_HAS_NO_ATTACHMENTS, urls.is_empty())
}
