//! Numbered requirements and their verification.

use std::collections::BTreeSet;

use listsws_core::config::RequirementConfig;

use crate::error::{SuiteError, SuiteResult};

/// A numbered, normative statement a scenario checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub id: u32,
    pub description: &'static str,
}

impl Requirement {
    #[must_use]
    pub const fn new(id: u32, description: &'static str) -> Self {
        Self { id, description }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.id)
    }
}

/// Requirements checked by this suite.
pub mod catalog {
    use super::Requirement;

    pub const CHECK_OUT_SUCCEEDS: Requirement = Requirement::new(
        1001,
        "CheckOutFile returns true when the file is checked out.",
    );
    pub const CHECK_OUT_INVALID_URL_FAULTS: Requirement = Requirement::new(
        1002,
        "CheckOutFile returns a SOAP fault with an error string when pageUrl is not a valid URL.",
    );
    pub const CHECK_OUT_STALE_LAST_MODIFIED: Requirement = Requirement::new(
        1003,
        "CheckOutFile does not check out the file when lastModified does not match the file.",
    );
    pub const CHECK_IN_SUCCEEDS: Requirement = Requirement::new(
        1004,
        "CheckInFile returns true when a checked-out file is checked in.",
    );
    pub const CHECK_IN_NOT_CHECKED_OUT: Requirement = Requirement::new(
        1005,
        "CheckInFile does not succeed for a file that is not checked out.",
    );
    pub const CHECK_IN_ALL_TYPES: Requirement = Requirement::new(
        1006,
        "CheckInFile accepts minor, major and overwrite check-in types.",
    );
    pub const UNDO_CHECK_OUT_SUCCEEDS: Requirement = Requirement::new(
        1007,
        "UndoCheckOut returns true for a checked-out file.",
    );
    pub const UNDO_CHECK_OUT_NOT_CHECKED_OUT: Requirement = Requirement::new(
        1008,
        "UndoCheckOut does not succeed for a file that is not checked out.",
    );
    pub const BATCH_NEW_RETURNS_ROW: Requirement = Requirement::new(
        2001,
        "A successful New command reports error code 0x00000000 and returns the new row.",
    );
    pub const QUERY_RETURNS_MATCH: Requirement = Requirement::new(
        2002,
        "GetListItems with an equality query returns the matching item.",
    );
    pub const CHANGES_REPORT_NEW_ITEM: Requirement = Requirement::new(
        2003,
        "GetListItemChangesSinceToken reports items added after the change token.",
    );
    pub const LIST_HAS_CONTENT_TYPES: Requirement = Requirement::new(
        2004,
        "GetListContentTypes returns the content types of the list.",
    );
    pub const NEW_ITEM_HAS_NO_ATTACHMENTS: Requirement = Requirement::new(
        2005,
        "GetAttachmentCollection returns an empty collection for an item without attachments.",
    );
}

/// Checks conditions against requirements the server under test implements.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    disabled: BTreeSet<u32>,
    verified: BTreeSet<u32>,
}

impl Verifier {
    #[must_use]
    pub fn new(config: &RequirementConfig) -> Self {
        Self {
            disabled: config.disabled_set(),
            verified: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, id: u32) -> bool {
        !self.disabled.contains(&id)
    }

    /// Records the outcome of checking a requirement.
    ///
    /// ## Errors
    /// Returns `RequirementViolated` if the requirement is enabled and the
    /// condition does not hold. Disabled requirements always pass.
    pub fn capture(&mut self, requirement: Requirement, condition: bool) -> SuiteResult<()> {
        if !self.is_enabled(requirement.id) {
            tracing::debug!(requirement = %requirement, "Requirement disabled, skipping");
            return Ok(());
        }

        if condition {
            tracing::info!(requirement = %requirement, "Requirement verified");
            self.verified.insert(requirement.id);
            Ok(())
        } else {
            tracing::error!(
                requirement = %requirement,
                description = requirement.description,
                "Requirement violated"
            );
            Err(SuiteError::RequirementViolated {
                id: requirement.id,
                description: requirement.description,
            })
        }
    }

    /// Requirement numbers verified so far, ascending.
    pub fn verified(&self) -> impl Iterator<Item = u32> + '_ {
        self.verified.iter().copied()
    }
}
