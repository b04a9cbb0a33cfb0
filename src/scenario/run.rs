//! Scenario execution
//!
//! Runs the scripted steps of a scenario against a freshly seeded mock and
//! collects what each call returned and what its callback received.

use serde::Serialize;
use tracing::info;
use vhal_types::{
    GetValueRequest, GetValueResult, HardwareError, Operation, SetValueRequest, SetValueResult,
    StatusCode, VehiclePropValue,
};

use crate::hardware::VehicleHardware;
use crate::mock::CallbackRecorder;

use super::file::{Scenario, ScenarioError, StepRequest};

/// Outcome of one scripted call
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub op: Operation,
    /// Status returned by the call itself
    pub status: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Batch delivered to a `getValues` callback, if it fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_results: Option<Vec<GetValueResult>>,
    /// Batch delivered to a `setValues` callback, if it fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_results: Option<Vec<SetValueResult>>,
}

/// Everything observed while running a scenario
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub steps: Vec<StepOutcome>,
    /// Batches received by the property change listener
    pub property_changes: Vec<Vec<VehiclePropValue>>,
    /// Delayed deliveries that found no canned response
    pub missed_deliveries: usize,
    pub unconsumed_get_responses: usize,
    pub unconsumed_set_responses: usize,
}

enum Delivery {
    Get(CallbackRecorder<GetValueResult>),
    Set(CallbackRecorder<SetValueResult>),
}

impl Scenario {
    /// Build the mock, issue every step in order, wait for delayed
    /// deliveries, and report the outcome.
    ///
    /// With a non-zero sleep time, steps that share a delay may receive
    /// canned batches in a different order than they were issued.
    pub fn run(&self) -> Result<Transcript, ScenarioError> {
        let hardware = self.build()?;
        let changes = CallbackRecorder::new();
        hardware.register_on_property_change_event(changes.boxed());

        let mut issued = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            info!(step = index, op = %step.op, requests = step.requests.len(), "issuing step");
            let (result, delivery) = match step.op {
                Operation::GetValues => {
                    let recorder = CallbackRecorder::new();
                    let requests: Vec<GetValueRequest> =
                        step.requests.iter().map(StepRequest::to_get_request).collect();
                    let result = hardware.get_values(recorder.callback(), &requests);
                    (result, Delivery::Get(recorder))
                }
                Operation::SetValues => {
                    let recorder = CallbackRecorder::new();
                    let requests: Vec<SetValueRequest> =
                        step.requests.iter().map(StepRequest::to_set_request).collect();
                    let result = hardware.set_values(recorder.callback(), &requests);
                    (result, Delivery::Set(recorder))
                }
            };
            issued.push((index, step.op, result, delivery));
        }

        hardware.wait_for_idle();

        let steps = issued
            .into_iter()
            .map(|(step, op, result, delivery)| outcome(step, op, result, delivery))
            .collect();

        Ok(Transcript {
            steps,
            property_changes: changes.take(),
            missed_deliveries: hardware.missed_deliveries(),
            unconsumed_get_responses: hardware.pending_get_value_responses(),
            unconsumed_set_responses: hardware.pending_set_value_responses(),
        })
    }
}

fn outcome(
    step: usize,
    op: Operation,
    result: Result<(), HardwareError>,
    delivery: Delivery,
) -> StepOutcome {
    let (status, error) = match result {
        Ok(()) => (StatusCode::Ok, None),
        Err(e) => (e.status(), Some(e.to_string())),
    };

    let mut outcome = StepOutcome {
        step,
        op,
        status,
        error,
        get_results: None,
        set_results: None,
    };
    match delivery {
        Delivery::Get(recorder) => outcome.get_results = recorder.take().into_iter().next(),
        Delivery::Set(recorder) => outcome.set_results = recorder.take().into_iter().next(),
    }
    outcome
}
