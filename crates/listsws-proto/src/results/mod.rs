//! Extractors for the list-level replies the scenarios inspect.

mod attachments;
mod changes;
mod content_types;
mod list;

pub use attachments::extract_attachment_urls;
pub use changes::{ItemChanges, extract_item_changes};
pub use content_types::{ContentTypeSummary, extract_content_types};
pub use list::extract_list_id;
