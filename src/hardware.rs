//! Vehicle Hardware Interface
//!
//! The contract between vehicle property services and the hardware layer
//! underneath them. Results of get/set dispatches are delivered through
//! callbacks, possibly on another thread and after the call has returned.

use std::sync::Arc;

use vhal_types::{
    DumpResult, GetValueRequest, GetValueResult, HardwareError, SetValueErrorEvent,
    SetValueRequest, SetValueResult, StatusCode, VehiclePropConfig, VehiclePropValue,
};

/// Completion callback for `get_values`
pub type GetValuesCallback = Arc<dyn Fn(Vec<GetValueResult>) + Send + Sync>;

/// Completion callback for `set_values`
pub type SetValuesCallback = Arc<dyn Fn(Vec<SetValueResult>) + Send + Sync>;

/// Receives property values whenever the hardware reports a change
pub type PropertyChangeCallback = Box<dyn Fn(Vec<VehiclePropValue>) + Send + Sync>;

/// Receives asynchronous write failures
pub type PropertySetErrorCallback = Box<dyn Fn(Vec<SetValueErrorEvent>) + Send + Sync>;

/// Hardware layer for vehicle properties.
///
/// Implementations must be shareable across threads: the service above calls
/// in from its binder threads while results come back on hardware threads.
pub trait VehicleHardware: Send + Sync {
    /// All property configs the hardware supports
    fn get_all_property_configs(&self) -> Vec<VehiclePropConfig>;

    /// Write a batch of values. `callback` receives the per-request results.
    ///
    /// An `Err` means the whole batch was rejected and `callback` will not be
    /// called for it.
    fn set_values(
        &self,
        callback: SetValuesCallback,
        requests: &[SetValueRequest],
    ) -> Result<(), HardwareError>;

    /// Read a batch of values. `callback` receives the per-request results.
    fn get_values(
        &self,
        callback: GetValuesCallback,
        requests: &[GetValueRequest],
    ) -> Result<(), HardwareError>;

    /// Diagnostic dump
    fn dump(&self, options: &[String]) -> DumpResult;

    /// Health check
    fn check_health(&self) -> StatusCode;

    /// Replace the property change listener
    fn register_on_property_change_event(&self, callback: PropertyChangeCallback);

    /// Replace the asynchronous write-failure listener
    fn register_on_property_set_error_event(&self, callback: PropertySetErrorCallback);
}
