//! Payload codec for the Lists web service.
//!
//! - [`batch`], [`caml`], [`content_type`]: request builders.
//! - [`rowset`], [`results`], [`batch`]: response extractors.
//! - [`soap`]: envelope codec and fault classification.

pub mod batch;
pub mod caml;
pub mod content_type;
pub mod error;
pub mod results;
pub mod rowset;
pub mod soap;
pub mod xml;


pub use error::{ProtoError, ProtoResult};
