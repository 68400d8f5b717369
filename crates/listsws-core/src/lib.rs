//! Shared building blocks for the MS-LISTSWS conformance suite.
//!
//! Holds configuration loading, protocol constants, the core error type,
//! and the run-scoped [`util::name::NameGenerator`].

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
