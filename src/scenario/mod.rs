//! Scenario fixtures
//!
//! TOML files that seed a mock in one step and optionally script calls
//! against it:
//! - `sleep_ms`, `[status]`, `[[configs]]`, `[[get_responses]]`,
//!   `[[set_responses]]` seed the mock
//! - `[[steps]]` are issued in order by [`Scenario::run`]

mod file;
mod run;

pub use file::{GetResponseBatch, Scenario, ScenarioError, SetResponseBatch, Step, StepRequest};
pub use run::{StepOutcome, Transcript};
