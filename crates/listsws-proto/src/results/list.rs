use uuid::Uuid;

use crate::error::{ProtoError, ProtoResult};
use crate::xml::{ParseError, XmlElement};

/// List identifier from an `AddList` / `GetList` reply.
///
/// ## Errors
/// Returns an error if no `List` element is present, it has no `ID`, or the
/// `ID` is not a GUID.
pub fn extract_list_id(payload: &XmlElement) -> ProtoResult<Uuid> {
    let list = payload
        .self_and_descendants()
        .find(|element| element.local_name() == "List")
        .ok_or_else(|| ParseError::missing_element("List"))?;
    let id = list
        .attr("ID")
        .ok_or_else(|| ParseError::missing_attribute("List", "ID"))?;

    Uuid::parse_str(id.trim_start_matches('{').trim_end_matches('}'))
        .map_err(|e| ProtoError::MalformedResponse(format!("list ID {id} is not a GUID: {e}")))
}
