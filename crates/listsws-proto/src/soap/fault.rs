//! Protocol faults and their detail classification.

use thiserror::Error;

use crate::xml::XmlElement;

/// Outcome of one adapter call: the operation's result, or a SOAP fault.
pub type CallResult<T> = Result<T, SoapFault>;

/// A SOAP fault returned instead of a normal reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "SOAP fault {}: {}",
    .fault_code.as_deref().unwrap_or("<no code>"),
    .fault_string.as_deref().unwrap_or("<no reason>")
)]
pub struct SoapFault {
    /// `faultcode` (1.1) or `Code/Value` (1.2).
    pub fault_code: Option<String>,
    /// `faultstring` (1.1) or `Reason/Text` (1.2).
    pub fault_string: Option<String>,
    /// The `detail` / `Detail` element.
    pub detail: Option<XmlElement>,
}

impl SoapFault {
    /// Fault with only a detail element, as most scenarios assert on it.
    #[must_use]
    pub fn with_detail(detail: XmlElement) -> Self {
        Self {
            fault_code: None,
            fault_string: None,
            detail: Some(detail),
        }
    }

    /// Decodes a SOAP 1.1 or 1.2 `Fault` element.
    #[must_use]
    pub fn from_element(fault: &XmlElement) -> Self {
        let fault_code = fault
            .child_text("faultcode")
            .or_else(|| fault.child("Code").and_then(|code| code.child_text("Value")))
            .map(|s| s.trim().to_owned());
        let fault_string = fault
            .child_text("faultstring")
            .or_else(|| fault.child("Reason").and_then(|reason| reason.child_text("Text")))
            .map(str::to_owned);
        let detail = fault
            .child("detail")
            .or_else(|| fault.child("Detail"))
            .cloned();

        Self {
            fault_code,
            fault_string,
            detail,
        }
    }

    /// The service error code from `detail/errorcode`; empty when absent.
    #[must_use]
    pub fn error_code(&self) -> String {
        self.detail
            .as_ref()
            .and_then(|detail| detail.child_text("errorcode"))
            .map(|code| code.trim().to_owned())
            .unwrap_or_default()
    }

    /// The service error string, when the first `detail` child is
    /// `errorstring`.
    #[must_use]
    pub fn error_string(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(XmlElement::first_child)
            .filter(|child| child.local_name() == "errorstring")
            .map(|child| child.text().to_owned())
    }

    /// Whether the detail carries the given error code. Hex codes compare
    /// case-insensitively; an absent code never matches.
    #[must_use]
    pub fn has_error_code(&self, expected: &str) -> bool {
        let code = self.error_code();
        !code.is_empty() && code.eq_ignore_ascii_case(expected.trim())
    }
}
