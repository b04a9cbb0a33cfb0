//! Property values and configuration records.
//!
//! The mock never interprets these; they are carried through request logs and
//! canned responses as-is. Most fields default so fixtures stay terse.

use serde::{Deserialize, Serialize};

/// Availability of a property value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehiclePropertyStatus {
    #[default]
    Available,
    Unavailable,
    Error,
}

/// Raw value storage, one vector per primitive type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPropValues {
    pub int32_values: Vec<i32>,
    pub float_values: Vec<f32>,
    pub int64_values: Vec<i64>,
    pub byte_values: Vec<u8>,
    pub string_value: String,
}

/// A single property value for one area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehiclePropValue {
    /// Property identifier
    pub prop: i32,
    #[serde(default)]
    pub area_id: i32,
    /// Elapsed-realtime timestamp in nanoseconds
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub status: VehiclePropertyStatus,
    #[serde(default)]
    pub value: RawPropValues,
}

impl VehiclePropValue {
    pub fn new(prop: i32) -> Self {
        Self {
            prop,
            ..Self::default()
        }
    }

    pub fn with_area(mut self, area_id: i32) -> Self {
        self.area_id = area_id;
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_int32(mut self, values: impl Into<Vec<i32>>) -> Self {
        self.value.int32_values = values.into();
        self
    }

    pub fn with_float(mut self, values: impl Into<Vec<f32>>) -> Self {
        self.value.float_values = values.into();
        self
    }
}

/// Who may read or write a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehiclePropertyAccess {
    #[default]
    None,
    Read,
    Write,
    ReadWrite,
}

/// How a property reports changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehiclePropertyChangeMode {
    #[default]
    Static,
    OnChange,
    Continuous,
}

/// Per-area limits of a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleAreaConfig {
    pub area_id: i32,
    pub min_int32_value: i32,
    pub max_int32_value: i32,
    pub min_int64_value: i64,
    pub max_int64_value: i64,
    pub min_float_value: f32,
    pub max_float_value: f32,
}

/// Descriptor of one property exposed by the hardware layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehiclePropConfig {
    pub prop: i32,
    #[serde(default)]
    pub access: VehiclePropertyAccess,
    #[serde(default)]
    pub change_mode: VehiclePropertyChangeMode,
    #[serde(default)]
    pub area_configs: Vec<VehicleAreaConfig>,
    #[serde(default)]
    pub config_array: Vec<i32>,
    #[serde(default)]
    pub config_string: String,
    #[serde(default)]
    pub min_sample_rate: f32,
    #[serde(default)]
    pub max_sample_rate: f32,
}

impl VehiclePropConfig {
    pub fn new(prop: i32) -> Self {
        Self {
            prop,
            ..Self::default()
        }
    }

    pub fn with_access(mut self, access: VehiclePropertyAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_change_mode(mut self, change_mode: VehiclePropertyChangeMode) -> Self {
        self.change_mode = change_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_builder() {
        let value = VehiclePropValue::new(0x1111)
            .with_area(2)
            .with_int32([42])
            .with_timestamp(7);

        assert_eq!(value.prop, 0x1111);
        assert_eq!(value.area_id, 2);
        assert_eq!(value.timestamp, 7);
        assert_eq!(value.value.int32_values, vec![42]);
        assert_eq!(value.status, VehiclePropertyStatus::Available);
    }

    #[test]
    fn test_value_sparse_json() {
        let value: VehiclePropValue =
            serde_json::from_str(r#"{"prop": 1, "value": {"float_values": [1.5]}}"#).unwrap();
        assert_eq!(value.area_id, 0);
        assert_eq!(value.value.float_values, vec![1.5]);
        assert!(value.value.int32_values.is_empty());
    }

    #[test]
    fn test_config_access_names() {
        let config = VehiclePropConfig::new(5)
            .with_access(VehiclePropertyAccess::ReadWrite)
            .with_change_mode(VehiclePropertyChangeMode::OnChange);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["access"], "READ_WRITE");
        assert_eq!(json["change_mode"], "ON_CHANGE");
    }
}
