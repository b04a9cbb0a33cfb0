//! Scenario Files
//!
//! Parses and validates TOML scenario files. A scenario seeds a mock with
//! property configs, canned responses, forced statuses and latency, and may
//! script a sequence of get/set calls to run against it.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vhal_types::{
    GetValueRequest, GetValueResult, Operation, ParseOperationError, SetValueRequest,
    SetValueResult, StatusCode, VehiclePropConfig, VehiclePropValue,
};

use crate::mock::MockVehicleHardware;

/// Mock hardware scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Delivery delay in milliseconds (0 = deliver inside the call)
    #[serde(default)]
    pub sleep_ms: u64,

    /// Forced status codes keyed by operation name (`getValues`, `setValues`)
    #[serde(default)]
    pub status: BTreeMap<String, StatusCode>,

    /// Property configs exposed by the mock
    #[serde(default)]
    pub configs: Vec<VehiclePropConfig>,

    /// Canned `get_values` result batches, consumed in order
    #[serde(default)]
    pub get_responses: Vec<GetResponseBatch>,

    /// Canned `set_values` result batches, consumed in order
    #[serde(default)]
    pub set_responses: Vec<SetResponseBatch>,

    /// Calls to issue when the scenario is run
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One canned `get_values` result batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetResponseBatch {
    #[serde(default)]
    pub results: Vec<GetValueResult>,
}

/// One canned `set_values` result batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetResponseBatch {
    #[serde(default)]
    pub results: Vec<SetValueResult>,
}

/// A scripted call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub op: Operation,
    #[serde(default)]
    pub requests: Vec<StepRequest>,
}

/// Request element shared by get and set steps.
///
/// For `getValues` the prop names what to read; for `setValues` it is the
/// value to write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRequest {
    pub request_id: i64,
    pub prop: VehiclePropValue,
}

impl StepRequest {
    pub fn to_get_request(&self) -> GetValueRequest {
        GetValueRequest::new(self.request_id, self.prop.clone())
    }

    pub fn to_set_request(&self) -> SetValueRequest {
        SetValueRequest::new(self.request_id, self.prop.clone())
    }
}

/// Errors that can occur when loading or validating a scenario
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Scenario file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid status override: {0}")]
    UnknownOperation(#[from] ParseOperationError),

    #[error("Step {step}: duplicate request_id {request_id}")]
    DuplicateRequestId { step: usize, request_id: i64 },
}

impl Scenario {
    /// Load a scenario from a specific path
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        if !path.exists() {
            return Err(ScenarioError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from a TOML string
    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Validate the scenario
    fn validate(&self) -> Result<(), ScenarioError> {
        self.status_overrides()?;

        for (index, step) in self.steps.iter().enumerate() {
            let mut seen = HashSet::new();
            for request in &step.requests {
                if !seen.insert(request.request_id) {
                    return Err(ScenarioError::DuplicateRequestId {
                        step: index,
                        request_id: request.request_id,
                    });
                }
            }
        }

        Ok(())
    }

    /// Status overrides with their operation names resolved
    pub fn status_overrides(&self) -> Result<Vec<(Operation, StatusCode)>, ScenarioError> {
        self.status
            .iter()
            .map(|(name, status)| Ok((name.parse::<Operation>()?, *status)))
            .collect()
    }

    pub fn sleep_time(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }

    /// Build a mock seeded with everything except the scripted steps
    pub fn build(&self) -> Result<MockVehicleHardware, ScenarioError> {
        let hardware = MockVehicleHardware::new();
        hardware.set_property_configs(self.configs.clone());
        for batch in &self.get_responses {
            hardware.add_get_value_responses(batch.results.clone());
        }
        for batch in &self.set_responses {
            hardware.add_set_value_responses(batch.results.clone());
        }
        for (op, status) in self.status_overrides()? {
            hardware.set_status(op, status);
        }
        hardware.set_sleep_time(self.sleep_time());
        Ok(hardware)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::VehicleHardware;

    const BASIC: &str = r#"
sleep_ms = 25

[status]
setValues = "ACCESS_DENIED"

[[configs]]
prop = 100
access = "READ_WRITE"
change_mode = "ON_CHANGE"

[[get_responses]]
results = [{ request_id = 1, prop = { prop = 100, value = { int32_values = [42] } } }]

[[get_responses]]
results = [{ request_id = 2, status = "NOT_AVAILABLE" }]

[[set_responses]]
results = [{ request_id = 3 }]

[[steps]]
op = "getValues"
requests = [{ request_id = 1, prop = { prop = 100 } }]
"#;

    #[test]
    fn test_parse_basic() {
        let scenario = Scenario::parse(BASIC).unwrap();

        assert_eq!(scenario.sleep_time(), Duration::from_millis(25));
        assert_eq!(scenario.configs.len(), 1);
        assert_eq!(scenario.get_responses.len(), 2);
        assert_eq!(scenario.get_responses[1].results[0].status, StatusCode::NotAvailable);
        assert_eq!(scenario.set_responses[0].results[0].status, StatusCode::Ok);
        assert_eq!(scenario.steps[0].op, Operation::GetValues);
        assert_eq!(
            scenario.status_overrides().unwrap(),
            vec![(Operation::SetValues, StatusCode::AccessDenied)]
        );
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = Scenario::parse("").unwrap();
        assert!(scenario.steps.is_empty());
        assert!(scenario.sleep_time().is_zero());
    }

    #[test]
    fn test_unknown_status_operation() {
        let result = Scenario::parse("[status]\nsubscribe = \"TRY_AGAIN\"\n");
        assert!(matches!(result, Err(ScenarioError::UnknownOperation(_))));
    }

    #[test]
    fn test_unknown_status_code() {
        let result = Scenario::parse("[status]\ngetValues = \"BROKEN\"\n");
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn test_duplicate_request_id() {
        let content = r#"
[[steps]]
op = "setValues"
requests = [
    { request_id = 4, prop = { prop = 1 } },
    { request_id = 4, prop = { prop = 2 } },
]
"#;
        let result = Scenario::parse(content);
        assert!(matches!(
            result,
            Err(ScenarioError::DuplicateRequestId { step: 0, request_id: 4 })
        ));
    }

    #[test]
    fn test_build_seeds_mock() {
        let hardware = Scenario::parse(BASIC).unwrap().build().unwrap();

        assert_eq!(hardware.get_all_property_configs()[0].prop, 100);
        assert_eq!(hardware.pending_get_value_responses(), 2);
        assert_eq!(hardware.pending_set_value_responses(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scenario::load(Path::new("/nonexistent/scenario.toml"));
        assert!(matches!(result, Err(ScenarioError::NotFound(_))));
    }
}
