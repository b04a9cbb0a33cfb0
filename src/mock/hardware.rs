//! Mock Hardware Implementation
//!
//! Configurable stand-in for the vehicle hardware layer. Tests prime canned
//! responses, force status codes, and add latency; the code under test
//! drives it through [`VehicleHardware`] and the test inspects the requests
//! it issued afterwards.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use tracing::{debug, error, warn};
use vhal_types::{
    DumpResult, GetValueRequest, GetValueResult, HardwareError, Operation, SetValueRequest,
    SetValueResult, StatusCode, VehiclePropConfig, VehiclePropValue,
};

use crate::hardware::{
    GetValuesCallback, PropertyChangeCallback, PropertySetErrorCallback, SetValuesCallback,
    VehicleHardware,
};

use super::state::{ChangeListener, Channel, MockState};

/// Name prefix of delayed-dispatch threads
const THREAD_PREFIX: &str = "vhal-mock-";

/// Picks the request log / response queue pair a dispatch works on
type ChannelSelector<Q, R> = fn(&mut MockState) -> &mut Channel<Q, R>;

/// State plus the condition signalled when the last delayed dispatch ends
struct Shared {
    state: Mutex<MockState>,
    idle: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases one outstanding-dispatch slot when dropped, even if the callback panicked
struct InFlight<'a>(&'a Shared);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.0.lock();
        state.outstanding -= 1;
        if state.outstanding == 0 {
            self.0.idle.notify_all();
        }
    }
}

/// Configurable mock of the vehicle hardware layer.
///
/// Dropping the mock blocks until every delayed dispatch has delivered (or
/// failed to deliver) its response. Callbacks handed to it must therefore not
/// own the mock themselves; debug builds panic instead of deadlocking when
/// the last handle is released from a delivery thread.
pub struct MockVehicleHardware {
    shared: Arc<Shared>,
}

impl MockVehicleHardware {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(MockState::new()),
                idle: Condvar::new(),
            }),
        }
    }

    // === Public API for test configuration ===

    /// Replace the property configs reported by `get_all_property_configs`
    pub fn set_property_configs(&self, configs: Vec<VehiclePropConfig>) {
        self.shared.lock().configs = configs;
    }

    /// Queue one result batch for a later `get_values` call
    pub fn add_get_value_responses(&self, responses: Vec<GetValueResult>) {
        self.shared.lock().get.push_response(responses);
    }

    /// Queue one result batch for a later `set_values` call
    pub fn add_set_value_responses(&self, responses: Vec<SetValueResult>) {
        self.shared.lock().set.push_response(responses);
    }

    /// Oldest request batch passed to `get_values`, or an empty batch
    pub fn next_get_value_requests(&self) -> Vec<GetValueRequest> {
        self.shared.lock().get.pop_request().unwrap_or_default()
    }

    /// Oldest request batch passed to `set_values`, or an empty batch
    pub fn next_set_value_requests(&self) -> Vec<SetValueRequest> {
        self.shared.lock().set.pop_request().unwrap_or_default()
    }

    /// Force every later dispatch of `op` to fail with `status`.
    ///
    /// Setting `StatusCode::Ok` restores the normal path.
    pub fn set_status(&self, op: Operation, status: StatusCode) {
        self.shared.lock().statuses.set(op, status);
    }

    /// Remove the forced status for `op`
    pub fn clear_status(&self, op: Operation) {
        self.shared.lock().statuses.clear_op(op);
    }

    /// Remove all forced statuses
    pub fn clear_statuses(&self) {
        self.shared.lock().statuses.clear();
    }

    /// Delay every later response delivery by `sleep_time`.
    ///
    /// With a non-zero delay, dispatch returns before the callback runs and
    /// the callback is invoked from a background thread.
    pub fn set_sleep_time(&self, sleep_time: Duration) {
        self.shared.lock().sleep_time = sleep_time;
    }

    /// Canned `get_values` batches not yet consumed
    pub fn pending_get_value_responses(&self) -> usize {
        self.shared.lock().get.pending_responses()
    }

    /// Canned `set_values` batches not yet consumed
    pub fn pending_set_value_responses(&self) -> usize {
        self.shared.lock().set.pending_responses()
    }

    /// Delayed dispatches that have not finished yet
    pub fn outstanding_dispatches(&self) -> usize {
        self.shared.lock().outstanding
    }

    /// Delayed dispatches that woke up to an empty response queue
    pub fn missed_deliveries(&self) -> usize {
        self.shared.lock().missed_deliveries
    }

    /// Block until no delayed dispatch is in flight
    pub fn wait_for_idle(&self) {
        let state = self.shared.lock();
        let _state = self
            .shared
            .idle
            .wait_while(state, |state| state.outstanding > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    // === Dispatch ===

    /// Record `requests`, then resolve them against the forced status and
    /// canned responses of `op`.
    ///
    /// `changes` carries the values of a set batch. The change listener is
    /// read in the same locked section that accepts the batch and is invoked
    /// before the result callback.
    fn dispatch<Q, R>(
        &self,
        op: Operation,
        callback: Arc<dyn Fn(Vec<R>) + Send + Sync>,
        requests: &[Q],
        select: ChannelSelector<Q, R>,
        changes: Option<Vec<VehiclePropValue>>,
    ) -> Result<(), HardwareError>
    where
        Q: Clone + 'static,
        R: Send + 'static,
    {
        let mut state = self.shared.lock();
        select(&mut state).record(requests.to_vec());
        debug!(%op, requests = requests.len(), "recorded request batch");

        if let Some(status) = state.statuses.check(op) {
            warn!(%op, %status, "rejecting dispatch with forced status");
            return Err(HardwareError::Forced {
                operation: op,
                status,
            });
        }

        let sleep_time = state.sleep_time;
        if sleep_time.is_zero() {
            let Some(batch) = select(&mut state).pop_response() else {
                return Err(exhausted(op));
            };
            let notice = take_notice(&state, changes);
            drop(state);
            notify(notice);
            callback(batch);
            return Ok(());
        }

        state.outstanding += 1;
        let notice = take_notice(&state, changes);
        drop(state);

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(format!("{}{}", THREAD_PREFIX, op))
            .spawn(move || {
                let _in_flight = InFlight(&shared);
                thread::sleep(sleep_time);
                let responses = select(&mut shared.lock()).pop_response();
                match responses {
                    Some(batch) => callback(batch),
                    None => {
                        error!(%op, "no more canned responses");
                        shared.lock().missed_deliveries += 1;
                    }
                }
                debug!(%op, "delayed dispatch finished");
            });

        match spawned {
            Ok(_) => {
                debug!(%op, ?sleep_time, "scheduled delayed dispatch");
                notify(notice);
                Ok(())
            }
            Err(e) => {
                drop(InFlight(&self.shared));
                error!(%op, error = %e, "failed to spawn delayed dispatch");
                Err(HardwareError::Spawn {
                    operation: op,
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Change listener paired with the set values it is owed
type Notice = (ChangeListener, Vec<VehiclePropValue>);

fn take_notice(state: &MockState, changes: Option<Vec<VehiclePropValue>>) -> Option<Notice> {
    let values = changes?;
    let listener = state.change_listener.clone()?;
    Some((listener, values))
}

fn notify(notice: Option<Notice>) {
    if let Some((listener, values)) = notice {
        listener(values);
    }
}

fn exhausted(op: Operation) -> HardwareError {
    error!(%op, "no more canned responses");
    HardwareError::ResponsesExhausted { operation: op }
}

impl VehicleHardware for MockVehicleHardware {
    fn get_all_property_configs(&self) -> Vec<VehiclePropConfig> {
        self.shared.lock().configs.clone()
    }

    fn set_values(
        &self,
        callback: SetValuesCallback,
        requests: &[SetValueRequest],
    ) -> Result<(), HardwareError> {
        let changes = requests.iter().map(|request| request.value.clone()).collect();
        self.dispatch(
            Operation::SetValues,
            callback,
            requests,
            MockState::set_channel,
            Some(changes),
        )
    }

    fn get_values(
        &self,
        callback: GetValuesCallback,
        requests: &[GetValueRequest],
    ) -> Result<(), HardwareError> {
        self.dispatch(Operation::GetValues, callback, requests, MockState::get_channel, None)
    }

    fn dump(&self, _options: &[String]) -> DumpResult {
        DumpResult::default()
    }

    fn check_health(&self) -> StatusCode {
        StatusCode::Ok
    }

    fn register_on_property_change_event(&self, callback: PropertyChangeCallback) {
        self.shared.lock().change_listener = Some(Arc::from(callback));
    }

    fn register_on_property_set_error_event(&self, _callback: PropertySetErrorCallback) {
        debug!("set-error listener registered; the mock never raises set errors");
    }
}

impl Default for MockVehicleHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MockVehicleHardware {
    fn drop(&mut self) {
        // Waiting here from a delivery thread would wait on its own slot
        debug_assert!(
            self.outstanding_dispatches() == 0
                || !thread::current()
                    .name()
                    .is_some_and(|name| name.starts_with(THREAD_PREFIX)),
            "MockVehicleHardware dropped from its own delivery thread"
        );
        self.wait_for_idle();
    }
}

impl std::fmt::Debug for MockVehicleHardware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockVehicleHardware")
            .field("state", &*self.shared.lock())
            .finish()
    }
}
