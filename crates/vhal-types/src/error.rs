//! Error type for hardware dispatch.

use crate::operation::Operation;
use crate::status::StatusCode;

/// Why a get/set dispatch was rejected.
///
/// Every variant maps onto a [`StatusCode`] via [`HardwareError::status`],
/// which is what the real hardware layer reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HardwareError {
    #[error("{operation} rejected with forced status {status}")]
    Forced {
        operation: Operation,
        status: StatusCode,
    },

    #[error("no more canned responses for {operation}")]
    ResponsesExhausted { operation: Operation },

    #[error("failed to schedule delayed {operation}: {reason}")]
    Spawn {
        operation: Operation,
        reason: String,
    },
}

impl HardwareError {
    /// Returns the status code reported for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Forced { status, .. } => *status,
            Self::ResponsesExhausted { .. } | Self::Spawn { .. } => StatusCode::InternalError,
        }
    }
}
