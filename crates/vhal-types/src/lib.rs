//! Vehicle Property Types
//!
//! Payload records exchanged with the vehicle property hardware layer:
//! property values and configs, get/set request and result batches, and the
//! status code registry shared by every operation.

pub mod error;
pub mod operation;
pub mod property;
pub mod request;
pub mod status;

pub use error::HardwareError;
pub use operation::{Operation, ParseOperationError};
pub use property::{
    RawPropValues, VehicleAreaConfig, VehiclePropConfig, VehiclePropValue,
    VehiclePropertyAccess, VehiclePropertyChangeMode, VehiclePropertyStatus,
};
pub use request::{
    DumpResult, GetValueRequest, GetValueResult, SetValueErrorEvent, SetValueRequest,
    SetValueResult,
};
pub use status::StatusCode;
