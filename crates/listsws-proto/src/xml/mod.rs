//! XML document model.
//!
//! Responses are parsed into a generic [`XmlElement`] tree with
//! `quick-xml`, and request payloads are assembled as the same tree and
//! serialized back out. Extractors map that tree onto typed values.

mod error;
mod namespace;
mod parse;
mod tree;
mod write;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use namespace::{Namespace, QName};
pub use parse::parse_document;
pub use tree::{Descendants, XmlElement};
