//! Errors raised while reading a reply document.

use std::fmt;

use quick_xml::encoding::EncodingError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A reply document that could not be read, or lacks a required part.
///
/// `position` is the byte offset the reader had reached, when known.
#[derive(Debug, Error)]
#[error("{kind}{}: {message}", .position.map(|p| format!(" at byte {p}")).unwrap_or_default())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub position: Option<u64>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
        }
    }

    /// Attaches the reader's byte offset.
    #[must_use]
    pub fn at(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn unclosed_element(name: &str) -> Self {
        Self::new(ParseErrorKind::UnclosedElement, format!("<{name}> is never closed"))
    }

    #[must_use]
    pub fn no_root() -> Self {
        Self::new(ParseErrorKind::NoRoot, "document has no root element")
    }

    #[must_use]
    pub fn second_root(name: &str) -> Self {
        Self::new(
            ParseErrorKind::SecondRoot,
            format!("<{name}> follows the root element"),
        )
    }

    /// An entity or character reference that does not resolve to a legal
    /// XML character.
    #[must_use]
    pub fn invalid_reference(reference: &str) -> Self {
        Self::new(ParseErrorKind::InvalidReference, format!("&{reference};"))
    }

    /// A reply without an element the operation always returns.
    #[must_use]
    pub fn missing_element(name: &str) -> Self {
        Self::new(ParseErrorKind::MissingElement, format!("no <{name}> in reply"))
    }

    #[must_use]
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingAttribute,
            format!("<{element}> has no {attribute} attribute"),
        )
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        Self::new(ParseErrorKind::Malformed, err.to_string())
    }
}

impl From<AttrError> for ParseError {
    fn from(err: AttrError) -> Self {
        Self::new(ParseErrorKind::Malformed, err.to_string())
    }
}

impl From<EscapeError> for ParseError {
    fn from(err: EscapeError) -> Self {
        Self::new(ParseErrorKind::InvalidReference, err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(ParseErrorKind::Encoding, err.to_string())
    }
}

impl From<EncodingError> for ParseError {
    fn from(err: EncodingError) -> Self {
        Self::new(ParseErrorKind::Encoding, err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not well-formed XML: bad syntax, mismatched tags, broken attributes.
    Malformed,
    /// Bytes that are not valid text in the document encoding.
    Encoding,
    InvalidReference,
    UnclosedElement,
    NoRoot,
    SecondRoot,
    MissingElement,
    MissingAttribute,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed XML",
            Self::Encoding => "bad encoding",
            Self::InvalidReference => "invalid reference",
            Self::UnclosedElement => "unclosed element",
            Self::NoRoot => "empty document",
            Self::SecondRoot => "second root element",
            Self::MissingElement => "missing element",
            Self::MissingAttribute => "missing attribute",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
