use crate::xml::XmlElement;

/// Attachment URLs from a `GetAttachmentCollection` reply, in order.
#[must_use]
pub fn extract_attachment_urls(payload: &XmlElement) -> Vec<String> {
    payload
        .self_and_descendants()
        .filter(|element| element.local_name() == "Attachment")
        .map(|element| element.text().trim().to_owned())
        .collect()
}
