//! Status code registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code returned by hardware operations and carried in per-request results.
///
/// Serialized names match the hardware layer's registry so scenario files and
/// transcripts can use them verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    #[default]
    Ok,
    /// Transient failure; the caller may retry.
    TryAgain,
    /// Malformed or out-of-range argument.
    InvalidArg,
    /// Property is not available right now.
    NotAvailable,
    /// Caller lacks permission for the property.
    AccessDenied,
    /// Unexpected failure inside the hardware layer.
    InternalError,
    NotAvailableDisabled,
    NotAvailableSpeedLow,
    NotAvailableSpeedHigh,
    NotAvailablePoorVisibility,
    NotAvailableSafety,
}

impl StatusCode {
    /// Returns the registry name of this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::TryAgain => "TRY_AGAIN",
            Self::InvalidArg => "INVALID_ARG",
            Self::NotAvailable => "NOT_AVAILABLE",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::NotAvailableDisabled => "NOT_AVAILABLE_DISABLED",
            Self::NotAvailableSpeedLow => "NOT_AVAILABLE_SPEED_LOW",
            Self::NotAvailableSpeedHigh => "NOT_AVAILABLE_SPEED_HIGH",
            Self::NotAvailablePoorVisibility => "NOT_AVAILABLE_POOR_VISIBILITY",
            Self::NotAvailableSafety => "NOT_AVAILABLE_SAFETY",
        }
    }

    /// Returns true for [`StatusCode::Ok`]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
