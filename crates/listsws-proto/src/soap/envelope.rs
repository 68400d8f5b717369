//! SOAP request envelopes and reply decoding.

use listsws_core::constants::{LISTS_NS, SOAP11_NS, SOAP12_NS};

use super::fault::{CallResult, SoapFault};
use crate::error::{ProtoError, ProtoResult};
use crate::xml::{Namespace, ParseError, XmlElement, parse_document};

/// SOAP protocol version of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SoapVersion {
    #[default]
    Soap11,
    Soap12,
}

impl SoapVersion {
    #[must_use]
    pub const fn namespace_uri(self) -> &'static str {
        match self {
            Self::Soap11 => SOAP11_NS,
            Self::Soap12 => SOAP12_NS,
        }
    }

    fn namespace(self) -> Namespace {
        match self {
            Self::Soap11 => Namespace::SOAP11,
            Self::Soap12 => Namespace::SOAP12,
        }
    }
}

/// Wraps an operation element in a SOAP envelope document.
///
/// ## Summary
/// The operation element is placed in the Lists namespace as the default
/// namespace of the body, e.g. `<CheckOutFile xmlns="...soap/">`.
///
/// ## Errors
/// Returns an error if XML writing fails.
pub fn wrap_body(operation: XmlElement, version: SoapVersion) -> ProtoResult<String> {
    let operation = operation.with_attr("xmlns", LISTS_NS);
    let envelope = XmlElement::namespaced(version.namespace(), Some("soap"), "Envelope")
        .with_attr("xmlns:soap", version.namespace_uri())
        .with_child(
            XmlElement::namespaced(version.namespace(), Some("soap"), "Body").with_child(operation),
        );

    Ok(envelope.to_document()?)
}

/// Decodes a SOAP reply.
///
/// ## Summary
/// Returns the first element of the body, or the decoded fault when the
/// body holds a `Fault`. Both SOAP 1.1 and 1.2 envelopes are accepted.
///
/// ## Errors
/// Returns an error if the document is not XML, is not a SOAP envelope, or
/// has an empty body.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_envelope(xml: &[u8]) -> ProtoResult<CallResult<XmlElement>> {
    let mut document = parse_document(xml)?;
    if document.local_name() != "Envelope" || !document.name.is_soap() {
        return Err(ProtoError::MalformedResponse(format!(
            "expected a SOAP envelope, found {}",
            document.name
        )));
    }

    let body = document
        .take_child("Body")
        .ok_or_else(|| ParseError::missing_element("Body"))?;
    let content = body
        .into_children()
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::missing_element("Body content"))?;

    if content.local_name() == "Fault" && content.name.is_soap() {
        let fault = SoapFault::from_element(&content);
        tracing::debug!(
            error_code = %fault.error_code(),
            fault_string = ?fault.fault_string,
            "Reply is a SOAP fault"
        );
        return Ok(Err(fault));
    }

    Ok(Ok(content))
}
