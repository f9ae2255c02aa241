//! Application services for claim orchestration.

mod claim;
mod error;
mod failure;
mod release;
mod verification;

pub use claim::{ClaimRequest, ClaimService};
pub use error::{ErrorKind, WorkflowError, WorkflowResult};
pub use failure::{FailedStep, PartialFailure, partial_failure};
pub use release::{ReleaseRequest, ReleaseService};
pub use verification::{VerificationService, VerifyRequest};
