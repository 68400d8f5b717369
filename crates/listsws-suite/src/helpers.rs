//! Setup and lookup steps shared by scenarios.

use listsws_core::types::{ListTemplate, NameCategory};
use listsws_proto::batch::{
    CommandKind, FieldValue, OnError, build_update_batch, collect_failures, extract_error_code,
    parse_batch_results,
};
use listsws_proto::caml::{CamlQuery, build_equality_filter, build_view_fields};
use listsws_proto::results::{
    ContentTypeSummary, ItemChanges, extract_attachment_urls, extract_content_types,
    extract_item_changes, extract_list_id,
};
use listsws_proto::rowset::{ResultRow, extract_single_row};
use uuid::Uuid;

use crate::adapter::{ListItemsRequest, ListsAdapter};
use crate::context::TestContext;
use crate::error::{SuiteError, SuiteResult};
use crate::requirement::catalog;

impl<A: ListsAdapter> TestContext<A> {
    /// Creates a uniquely named list and schedules it for cleanup.
    ///
    /// ## Errors
    /// Returns the fault if `AddList` fails, or a shape error if the reply
    /// has no list GUID.
    pub async fn create_list(&mut self, template: ListTemplate) -> SuiteResult<String> {
        let list_name = self.next_name(NameCategory::List);
        let list = self
            .adapter()
            .add_list(&list_name, "Created by the conformance suite", template)
            .await?;
        self.track_list(list_name.clone());

        let list_id: Uuid = extract_list_id(&list)?;
        tracing::info!(list = %list_name, %list_id, template = template.id(), "Created list");
        Ok(list_name)
    }

    /// ## Errors
    /// See [`Self::create_list`].
    pub async fn create_document_library(&mut self) -> SuiteResult<String> {
        self.create_list(ListTemplate::DocumentLibrary).await
    }

    /// Adds one item and returns the row the server wrote.
    ///
    /// ## Errors
    /// See [`Self::add_list_items`].
    pub async fn add_list_item(&mut self, list_name: &str, fields: Vec<FieldValue>) -> SuiteResult<ResultRow> {
        self.add_list_items(list_name, vec![fields])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SuiteError::UnexpectedOutcome("New command returned no row".to_owned()))
    }

    /// Adds one item per field list in a single `Continue` batch.
    ///
    /// ## Errors
    /// Returns the fault if the call fails, and `RequirementViolated` if
    /// any command does not succeed with a row.
    pub async fn add_list_items(
        &mut self,
        list_name: &str,
        items: Vec<Vec<FieldValue>>,
    ) -> SuiteResult<Vec<ResultRow>> {
        let kinds = vec![CommandKind::New; items.len()];
        let batch = build_update_batch(&kinds, items, OnError::Continue)?;
        let reply = self.adapter().update_list_items(list_name, &batch).await?;
        let outcomes = parse_batch_results(&reply)?;

        for failure in collect_failures(&outcomes, batch.on_error) {
            tracing::error!(
                result = %failure.id,
                error_code = ?extract_error_code(failure),
                error_text = ?failure.error_text(),
                "Adding list item failed"
            );
        }

        let rows: Vec<ResultRow> = outcomes
            .iter()
            .filter_map(|outcome| outcome.row().cloned())
            .collect();
        self.capture(
            catalog::BATCH_NEW_RETURNS_ROW,
            outcomes.len() == batch.commands.len() && rows.len() == outcomes.len(),
        )?;
        Ok(rows)
    }

    /// Adds `count` items whose common text field holds a generated name.
    ///
    /// ## Errors
    /// See [`Self::add_list_items`].
    pub async fn add_named_items(&mut self, list_name: &str, count: usize) -> SuiteResult<Vec<ResultRow>> {
        let field = self.settings().suite.common_field_name.clone();
        let items: Vec<Vec<FieldValue>> = (0..count)
            .map(|_| vec![FieldValue::new(field.as_str(), self.next_name(NameCategory::ListItem))])
            .collect();
        self.add_list_items(list_name, items).await
    }

    /// Fetches the single item whose `field_name` equals `value`.
    ///
    /// ## Errors
    /// Returns the fault if the call fails, and `UnexpectedCardinality`
    /// unless exactly one item matches.
    pub async fn get_list_item_by_field(
        &self,
        list_name: &str,
        field_name: &str,
        value: &str,
    ) -> SuiteResult<ResultRow> {
        let request = ListItemsRequest {
            query: Some(CamlQuery::filtered(build_equality_filter(field_name, value))),
            view_fields: Some(build_view_fields(false, [field_name, "ID"])),
            ..ListItemsRequest::default()
        };
        let reply = self.adapter().get_list_items(list_name, &request).await?;
        Ok(extract_single_row(&reply)?)
    }

    /// Uploads a small text file into a document library.
    ///
    /// ## Errors
    /// Returns the fault if the upload fails.
    pub async fn upload_file(&mut self, library: &str) -> SuiteResult<String> {
        let file_name = format!("{}.txt", self.next_name(NameCategory::File));
        let content = format!("Content of {file_name}");
        let url = self
            .adapter()
            .upload_file(library, &file_name, content.as_bytes())
            .await?;
        tracing::debug!(%url, "Uploaded file");
        Ok(url)
    }

    /// Creates a document library holding one uploaded file.
    ///
    /// ## Errors
    /// Returns the fault of whichever setup call fails.
    pub async fn create_library_with_file(&mut self) -> SuiteResult<(String, String)> {
        let library = self.create_document_library().await?;
        let url = self.upload_file(&library).await?;
        Ok((library, url))
    }

    /// ## Errors
    /// Returns the fault if the call fails.
    pub async fn content_types(&self, list_name: &str) -> SuiteResult<Vec<ContentTypeSummary>> {
        let reply = self.adapter().get_list_content_types(list_name).await?;
        Ok(extract_content_types(&reply))
    }

    /// ## Errors
    /// Returns the fault if the call fails.
    pub async fn changes_since(&self, list_name: &str, token: Option<&str>) -> SuiteResult<ItemChanges> {
        let reply = self
            .adapter()
            .get_list_item_changes_since_token(list_name, token)
            .await?;
        Ok(extract_item_changes(&reply))
    }

    /// ## Errors
    /// Returns the fault if the call fails.
    pub async fn attachment_urls(&self, list_name: &str, item_id: &str) -> SuiteResult<Vec<String>> {
        let reply = self
            .adapter()
            .get_attachment_collection(list_name, item_id)
            .await?;
        Ok(extract_attachment_urls(&reply))
    }
}

/// Item id of a row returned by a successful command.
///
/// ## Errors
/// Returns `UnexpectedOutcome` if the row has no `ows_ID`.
pub fn row_id(row: &ResultRow) -> SuiteResult<&str> {
    row.id()
        .ok_or_else(|| SuiteError::UnexpectedOutcome("row without ows_ID".to_owned()))
}
