//! Status Overrides for Mock Hardware
//!
//! Per-operation forced result codes, used to exercise error paths.

use std::collections::HashMap;

use vhal_types::{Operation, StatusCode};

/// Forced status codes keyed by operation
#[derive(Debug, Default, Clone)]
pub struct StatusOverrides {
    statuses: HashMap<Operation, StatusCode>,
}

impl StatusOverrides {
    /// Force `status` for every later dispatch of `op`
    pub fn set(&mut self, op: Operation, status: StatusCode) {
        self.statuses.insert(op, status);
    }

    /// Clear the override for a single operation
    pub fn clear_op(&mut self, op: Operation) {
        self.statuses.remove(&op);
    }

    /// Clear all overrides
    pub fn clear(&mut self) {
        self.statuses.clear();
    }

    /// Returns the forced code for `op`, if one is set and it is not OK.
    ///
    /// An `OK` override behaves exactly like no override.
    pub fn check(&self, op: Operation) -> Option<StatusCode> {
        self.statuses.get(&op).copied().filter(|status| !status.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override() {
        let overrides = StatusOverrides::default();
        assert!(overrides.check(Operation::GetValues).is_none());
        assert!(overrides.check(Operation::SetValues).is_none());
    }

    #[test]
    fn test_override_is_per_operation() {
        let mut overrides = StatusOverrides::default();
        overrides.set(Operation::SetValues, StatusCode::AccessDenied);

        assert_eq!(overrides.check(Operation::SetValues), Some(StatusCode::AccessDenied));
        assert!(overrides.check(Operation::GetValues).is_none());
    }

    #[test]
    fn test_ok_override_is_success_path() {
        let mut overrides = StatusOverrides::default();
        overrides.set(Operation::GetValues, StatusCode::TryAgain);
        overrides.set(Operation::GetValues, StatusCode::Ok);

        assert!(overrides.check(Operation::GetValues).is_none());
    }

    #[test]
    fn test_clear() {
        let mut overrides = StatusOverrides::default();
        overrides.set(Operation::GetValues, StatusCode::TryAgain);
        overrides.set(Operation::SetValues, StatusCode::TryAgain);

        overrides.clear_op(Operation::GetValues);
        assert!(overrides.check(Operation::GetValues).is_none());
        assert!(overrides.check(Operation::SetValues).is_some());

        overrides.clear();
        assert!(overrides.check(Operation::SetValues).is_none());
    }
}
