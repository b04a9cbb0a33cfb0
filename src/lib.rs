//! VHAL Mock - test double for the vehicle property hardware layer
//!
//! This crate provides an in-process mock of the vehicle hardware interface
//! used to test property services without hardware: canned responses,
//! forced status codes, simulated latency, and a log of every request the
//! code under test issued.

pub mod hardware;
pub mod mock;
pub mod scenario;

pub use hardware::{
    GetValuesCallback, PropertyChangeCallback, PropertySetErrorCallback, SetValuesCallback,
    VehicleHardware,
};
pub use mock::{CallbackRecorder, MockVehicleHardware};
pub use scenario::{Scenario, ScenarioError, Transcript};
pub use vhal_types as types;
