//! MS-LISTSWS conformance scenarios.
//!
//! Scenarios drive a [`adapter::ListsAdapter`] through a
//! [`context::TestContext`], build payloads with `listsws-proto`, and
//! check the replies against the numbered requirements in
//! [`requirement::catalog`].

pub mod adapter;
pub mod context;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod requirement;
pub mod scenarios;
