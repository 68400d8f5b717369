//! Per-run scenario state.

use listsws_core::config::Settings;
use listsws_core::types::NameCategory;
use listsws_core::util::name::NameGenerator;

use crate::adapter::ListsAdapter;
use crate::error::SuiteResult;
use crate::requirement::{Requirement, Verifier};

/// Everything a scenario needs: the adapter, settings, a name source, the
/// requirement verifier, and the lists to remove when the run ends.
pub struct TestContext<A> {
    adapter: A,
    settings: Settings,
    names: NameGenerator,
    verifier: Verifier,
    created_lists: Vec<String>,
}

impl<A: ListsAdapter> TestContext<A> {
    #[must_use]
    pub fn new(adapter: A, settings: Settings) -> Self {
        let names = NameGenerator::new(settings.suite.resource_prefix.clone());
        let verifier = Verifier::new(&settings.requirements);
        Self {
            adapter,
            settings,
            names,
            verifier,
            created_lists: Vec::new(),
        }
    }

    /// Replaces the name source, e.g. with a fixed-time generator.
    #[must_use]
    pub fn with_names(mut self, names: NameGenerator) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    pub fn next_name(&mut self, category: NameCategory) -> String {
        self.names.next(category)
    }

    /// ## Errors
    /// Returns `RequirementViolated` if an enabled requirement does not hold.
    pub fn capture(&mut self, requirement: Requirement, condition: bool) -> SuiteResult<()> {
        self.verifier.capture(requirement, condition)
    }

    pub(crate) fn track_list(&mut self, list_name: String) {
        self.created_lists.push(list_name);
    }

    /// Lists created in this run and not yet cleaned up.
    #[must_use]
    pub fn created_lists(&self) -> &[String] {
        &self.created_lists
    }

    /// Deletes every list created in this run.
    ///
    /// ## Summary
    /// Failures are logged and skipped so that a cleanup problem never hides
    /// a scenario's own result. Returns how many deletions failed.
    pub async fn cleanup(&mut self) -> usize {
        let mut failed = 0;
        for list_name in std::mem::take(&mut self.created_lists) {
            match self.adapter.delete_list(&list_name).await {
                Ok(()) => tracing::debug!(list = %list_name, "Deleted list"),
                Err(fault) => {
                    failed += 1;
                    tracing::warn!(list = %list_name, error = %fault, "Failed to delete list");
                }
            }
        }
        failed
    }
}
