//! SOAP envelope codec and fault classification.
//!
//! Adapters use these to turn raw service replies into either the
//! operation's result element or a [`SoapFault`]; neither performs I/O.

mod envelope;
mod fault;

pub use envelope::{SoapVersion, parse_envelope, wrap_body};
pub use fault::{CallResult, SoapFault};
