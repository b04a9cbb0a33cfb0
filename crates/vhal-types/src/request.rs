//! Get/set request and result records.

use serde::{Deserialize, Serialize};

use crate::property::VehiclePropValue;
use crate::status::StatusCode;

/// One element of a get-values batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetValueRequest {
    /// Caller-chosen ID, echoed in the matching result
    pub request_id: i64,
    /// Property (and area) to read; value fields are usually empty
    pub prop: VehiclePropValue,
}

impl GetValueRequest {
    pub fn new(request_id: i64, prop: VehiclePropValue) -> Self {
        Self { request_id, prop }
    }
}

/// One element of a get-values result batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetValueResult {
    pub request_id: i64,
    #[serde(default)]
    pub status: StatusCode,
    /// Present when `status` is OK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop: Option<VehiclePropValue>,
}

impl GetValueResult {
    /// Successful read carrying `prop`
    pub fn ok(request_id: i64, prop: VehiclePropValue) -> Self {
        Self {
            request_id,
            status: StatusCode::Ok,
            prop: Some(prop),
        }
    }

    /// Failed read with no value
    pub fn error(request_id: i64, status: StatusCode) -> Self {
        Self {
            request_id,
            status,
            prop: None,
        }
    }
}

/// One element of a set-values batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetValueRequest {
    pub request_id: i64,
    /// Value to write
    pub value: VehiclePropValue,
}

impl SetValueRequest {
    pub fn new(request_id: i64, value: VehiclePropValue) -> Self {
        Self { request_id, value }
    }
}

/// One element of a set-values result batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetValueResult {
    pub request_id: i64,
    #[serde(default)]
    pub status: StatusCode,
}

impl SetValueResult {
    pub fn new(request_id: i64, status: StatusCode) -> Self {
        Self { request_id, status }
    }

    pub fn ok(request_id: i64) -> Self {
        Self::new(request_id, StatusCode::Ok)
    }
}

/// Asynchronous failure of a previously accepted write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetValueErrorEvent {
    pub error_code: StatusCode,
    pub prop_id: i32,
    pub area_id: i32,
}

/// Output of a diagnostic dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpResult {
    /// Whether the caller should append its own state to the dump
    pub caller_should_dump_state: bool,
    pub buffer: String,
    /// Whether the caller should re-read property configs
    pub refresh_property_configs: bool,
}
