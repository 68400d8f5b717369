//! The seam to the system under test.
//!
//! An adapter performs the actual service calls. Every call resolves to a
//! [`CallResult`]: the operation's result or the SOAP fault the server
//! returned instead.

use std::future::Future;
use std::pin::Pin;

use listsws_core::types::{CheckinType, ListTemplate};
use listsws_proto::batch::UpdateBatch;
use listsws_proto::caml::{CamlQuery, QueryOptions, ViewFieldSpec};
use listsws_proto::soap::CallResult;
use listsws_proto::xml::XmlElement;

pub type AdapterFuture<'a, T> = Pin<Box<dyn Future<Output = CallResult<T>> + Send + 'a>>;

/// Arguments of `GetListItems` beyond the list name.
#[derive(Debug, Clone, Default)]
pub struct ListItemsRequest {
    pub query: Option<CamlQuery>,
    pub view_fields: Option<ViewFieldSpec>,
    pub query_options: Option<QueryOptions>,
    pub row_limit: Option<u32>,
}

pub trait ListsAdapter: Send + Sync {
    /// `AddList`; resolves to the `List` element of the reply.
    fn add_list<'a>(
        &'a self,
        list_name: &'a str,
        description: &'a str,
        template: ListTemplate,
    ) -> AdapterFuture<'a, XmlElement>;

    fn delete_list<'a>(&'a self, list_name: &'a str) -> AdapterFuture<'a, ()>;

    /// `UpdateListItems`; resolves to the `Results` element.
    fn update_list_items<'a>(
        &'a self,
        list_name: &'a str,
        batch: &'a UpdateBatch,
    ) -> AdapterFuture<'a, XmlElement>;

    /// `GetListItems`; resolves to the `listitems` element.
    fn get_list_items<'a>(
        &'a self,
        list_name: &'a str,
        request: &'a ListItemsRequest,
    ) -> AdapterFuture<'a, XmlElement>;

    /// `GetListContentTypes`; resolves to the `ContentTypes` element.
    fn get_list_content_types<'a>(&'a self, list_name: &'a str) -> AdapterFuture<'a, XmlElement>;

    /// `GetListItemChangesSinceToken`; resolves to the `listitems` element.
    fn get_list_item_changes_since_token<'a>(
        &'a self,
        list_name: &'a str,
        change_token: Option<&'a str>,
    ) -> AdapterFuture<'a, XmlElement>;

    /// `GetAttachmentCollection`; resolves to the `Attachments` element.
    fn get_attachment_collection<'a>(
        &'a self,
        list_name: &'a str,
        item_id: &'a str,
    ) -> AdapterFuture<'a, XmlElement>;

    /// Puts a file into a document library; resolves to the file's URL.
    fn upload_file<'a>(
        &'a self,
        list_name: &'a str,
        file_name: &'a str,
        content: &'a [u8],
    ) -> AdapterFuture<'a, String>;

    fn check_out_file<'a>(
        &'a self,
        page_url: &'a str,
        check_out_to_local: bool,
        last_modified: Option<&'a str>,
    ) -> AdapterFuture<'a, bool>;

    fn check_in_file<'a>(
        &'a self,
        page_url: &'a str,
        comment: &'a str,
        checkin_type: CheckinType,
    ) -> AdapterFuture<'a, bool>;

    fn undo_check_out<'a>(&'a self, page_url: &'a str) -> AdapterFuture<'a, bool>;
}
