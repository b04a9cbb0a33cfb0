//! Dispatch operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardware operations that go through request/response dispatch.
///
/// The text form (`getValues`, `setValues`) is the key used for status
/// overrides in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    GetValues,
    SetValues,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetValues => "getValues",
            Self::SetValues => "setValues",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation name matches neither dispatch operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getValues" => Ok(Self::GetValues),
            "setValues" => Ok(Self::SetValues),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("getValues".parse::<Operation>(), Ok(Operation::GetValues));
        assert_eq!("setValues".parse::<Operation>(), Ok(Operation::SetValues));
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        assert!("GetValues".parse::<Operation>().is_err());
        assert!("get_values".parse::<Operation>().is_err());
        let err = "subscribe".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: subscribe");
    }
}
