use crate::xml::XmlElement;

/// One entry of a `GetListContentTypes` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Content types of a list, in reply order. Entries without `ID` are skipped.
#[must_use]
pub fn extract_content_types(payload: &XmlElement) -> Vec<ContentTypeSummary> {
    payload
        .self_and_descendants()
        .filter(|element| element.local_name() == "ContentType")
        .filter_map(|element| {
            let Some(id) = element.attr("ID") else {
                tracing::warn!("Content type without ID in reply");
                return None;
            };
            Some(ContentTypeSummary {
                id: id.to_owned(),
                name: element.attr("Name").unwrap_or_default().to_owned(),
                description: element.attr("Description").map(str::to_owned),
            })
        })
        .collect()
}
