//! Scenario fixtures shared by integration tests

use std::path::{Path, PathBuf};

/// Directory holding the scenario fixtures
pub fn scenarios_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios")
}

/// Path to a named scenario fixture
pub fn scenario_path(name: &str) -> PathBuf {
    scenarios_dir().join(format!("{}.toml", name))
}
