//! Scenario tests against a scripted in-memory adapter.

mod list_items;
mod mock;
mod run;
