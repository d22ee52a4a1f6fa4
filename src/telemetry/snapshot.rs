//! telemetry/snapshot.rs
//!
//! Immutable summary of one encode run, built from the timer at the end of
//! the pass. Serializable for logs and tooling.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::timers::{EncodeTimer, StageTimes};

/// Snapshot of one encode run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Units pushed to the sink.
    pub units: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    pub throughput_units_per_sec: f64,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from_timer(units: u64, timer: &EncodeTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            units as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        Self {
            units,
            elapsed,
            throughput_units_per_sec: throughput,
            stage_times: timer.stage_times.clone(),
        }
    }

    /// JSON form for structured logs.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
