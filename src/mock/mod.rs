//! Mock Vehicle Hardware
//!
//! In-process test double for the vehicle hardware layer. Supports canned
//! responses, per-operation forced status codes, and simulated latency for
//! testing the asynchronous paths of property services.
//!
//! # Operations
//!
//! - `get_values` / `set_values`: record the request batch, then deliver the
//!   next canned result batch to the callback (immediately, or after the
//!   configured sleep time on a background thread)
//! - `register_on_property_change_event`: listener invoked with the values of
//!   every accepted `set_values` batch
//! - `get_all_property_configs`: configs seeded with `set_property_configs`

mod hardware;
mod recorder;
mod state;
mod status;

pub use hardware::MockVehicleHardware;
pub use recorder::CallbackRecorder;
