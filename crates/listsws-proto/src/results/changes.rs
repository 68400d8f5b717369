use crate::rowset::{ResultRow, extract_rows};
use crate::xml::XmlElement;

/// Decoded `GetListItemChangesSinceToken` reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemChanges {
    pub last_change_token: Option<String>,
    /// Items reported deleted since the token.
    pub deleted_ids: Vec<String>,
    /// Items added or changed since the token.
    pub rows: Vec<ResultRow>,
}

#[must_use]
pub fn extract_item_changes(payload: &XmlElement) -> ItemChanges {
    let changes = payload
        .self_and_descendants()
        .find(|element| element.local_name() == "Changes");

    let last_change_token = changes
        .and_then(|c| c.attr("LastChangeToken"))
        .map(str::to_owned);
    let deleted_ids = changes
        .into_iter()
        .flat_map(|c| c.children_named("Id"))
        .filter(|id| id.attr("ChangeType") == Some("Delete"))
        .map(|id| id.text().trim().to_owned())
        .collect();

    ItemChanges {
        last_change_token,
        deleted_ids,
        rows: extract_rows(payload).collect(),
    }
}
