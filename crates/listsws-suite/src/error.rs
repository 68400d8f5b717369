use listsws_proto::ProtoError;
use listsws_proto::soap::SoapFault;
use thiserror::Error;

/// Scenario-level errors
#[derive(Error, Debug)]
pub enum SuiteError {
    #[error(transparent)]
    Fault(#[from] SoapFault),

    #[error(transparent)]
    ProtoError(#[from] ProtoError),

    #[error("Requirement {id} violated: {description}")]
    RequirementViolated { id: u32, description: &'static str },

    #[error("Unexpected outcome: {0}")]
    UnexpectedOutcome(String),
}

pub type SuiteResult<T> = std::result::Result<T, SuiteError>;
