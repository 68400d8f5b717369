//! Unique resource names for objects created during a test run.
//!
//! ## Summary
//! Each category keeps its own counter. A name is the configured prefix,
//! the category with its next counter value, and the run timestamp, so two
//! names from the same generator never collide. Names from separate runs
//! only differ when the run timestamps differ.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::NameCategory;

/// Run-scoped name source owned by the test context.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefix: String,
    stamp: String,
    counters: BTreeMap<NameCategory, u32>,
}

impl NameGenerator {
    /// Creates a generator stamped with the current time.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::at(prefix, Utc::now())
    }

    /// Creates a generator stamped with a fixed time.
    #[must_use]
    pub fn at(prefix: impl Into<String>, started: DateTime<Utc>) -> Self {
        Self {
            prefix: prefix.into(),
            stamp: started.format("%Y%m%d%H%M%S").to_string(),
            counters: BTreeMap::new(),
        }
    }

    /// Increments the category counter and formats the next name.
    pub fn next(&mut self, category: NameCategory) -> String {
        let counter = self.counters.entry(category).or_insert(0);
        *counter += 1;
        format!("{}_{}{}_{}", self.prefix, category, counter, self.stamp)
    }

    /// Number of names handed out for a category so far.
    #[must_use]
    pub fn issued(&self, category: NameCategory) -> u32 {
        self.counters.get(&category).copied().unwrap_or(0)
    }
}
