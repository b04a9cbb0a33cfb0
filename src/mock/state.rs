//! Mock Hardware State
//!
//! Everything the mock mutates, held behind one lock: property configs, the
//! request log and canned-response queue for each operation, status
//! overrides, simulated latency, the change listener and the count of
//! in-flight delayed dispatches.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use vhal_types::{
    GetValueRequest, GetValueResult, SetValueRequest, SetValueResult, VehiclePropConfig,
    VehiclePropValue,
};

use super::status::StatusOverrides;

/// Shared form of the registered change listener
pub type ChangeListener = Arc<dyn Fn(Vec<VehiclePropValue>) + Send + Sync>;

/// Request history and canned responses for one operation.
///
/// Both sides are FIFO: requests are appended per call and drained oldest
/// first; responses are primed by tests and consumed oldest first.
pub struct Channel<Q, R> {
    requests: VecDeque<Vec<Q>>,
    responses: VecDeque<Vec<R>>,
}

impl<Q, R> Channel<Q, R> {
    pub fn new() -> Self {
        Self {
            requests: VecDeque::new(),
            responses: VecDeque::new(),
        }
    }

    /// Append a received request batch
    pub fn record(&mut self, batch: Vec<Q>) {
        self.requests.push_back(batch);
    }

    /// Remove and return the oldest recorded request batch
    pub fn pop_request(&mut self) -> Option<Vec<Q>> {
        self.requests.pop_front()
    }

    /// Queue a canned response batch
    pub fn push_response(&mut self, batch: Vec<R>) {
        self.responses.push_back(batch);
    }

    /// Remove and return the next canned response batch, `None` once exhausted
    pub fn pop_response(&mut self) -> Option<Vec<R>> {
        self.responses.pop_front()
    }

    pub fn recorded_requests(&self) -> usize {
        self.requests.len()
    }

    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }
}

impl<Q, R> Default for Channel<Q, R> {
    fn default() -> Self {
        Self::new()
    }
}

pub type GetChannel = Channel<GetValueRequest, GetValueResult>;
pub type SetChannel = Channel<SetValueRequest, SetValueResult>;

/// Mock hardware state container
#[derive(Default)]
pub struct MockState {
    pub configs: Vec<VehiclePropConfig>,
    pub get: GetChannel,
    pub set: SetChannel,
    pub statuses: StatusOverrides,
    /// Delivery delay; zero means callbacks run inside the dispatching call
    pub sleep_time: Duration,
    pub change_listener: Option<ChangeListener>,
    /// Delayed dispatches spawned but not yet finished
    pub outstanding: usize,
    /// Delayed dispatches that found no canned response
    pub missed_deliveries: usize,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_channel(&mut self) -> &mut GetChannel {
        &mut self.get
    }

    pub fn set_channel(&mut self) -> &mut SetChannel {
        &mut self.set
    }
}

impl fmt::Debug for MockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockState")
            .field("configs", &self.configs.len())
            .field("get_requests", &self.get.recorded_requests())
            .field("get_responses", &self.get.pending_responses())
            .field("set_requests", &self.set.recorded_requests())
            .field("set_responses", &self.set.pending_responses())
            .field("statuses", &self.statuses)
            .field("sleep_time", &self.sleep_time)
            .field("change_listener", &self.change_listener.is_some())
            .field("outstanding", &self.outstanding)
            .field("missed_deliveries", &self.missed_deliveries)
            .finish()
    }
}
