//! Error kinds for the breach lookup path.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure modes of the remote range lookup.
///
/// These never surface as hard errors to callers of
/// [`assess`](crate::SecurityCheckOrchestrator::assess); the orchestrator
/// folds them into [`BreachResult::error`](crate::BreachResult) so an
/// unreachable provider cannot block registration or login flows.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Provider did not answer within the configured bound.
    #[error("breach provider did not respond within {0:?}")]
    Timeout(Duration),

    /// Provider answered with a non-success status or the transport failed.
    #[error("breach provider request failed: {0}")]
    Provider(String),

    /// Response body did not match the expected `SUFFIX:COUNT` format.
    #[error("malformed range response: {0}")]
    Parse(String),

    /// Caller cancelled the lookup while it was in flight.
    #[error("breach lookup cancelled by caller")]
    Cancelled,
}
