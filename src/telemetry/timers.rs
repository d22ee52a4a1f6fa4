//! telemetry/timers.rs
//! Stage timers for encode runs.
//!
//! Records durations for the read, encode, and write stages of a streaming
//! pass. Durations accumulate per stage across the whole run.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Pipeline stage of an encode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Read,
    Encode,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Encode => "encode",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Accumulated per-stage durations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Total duration for a stage.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Stage duration in milliseconds.
    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    /// Sum of all stage durations.
    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    /// All recorded stage times.
    pub fn all(&self) -> &HashMap<Stage, Duration> {
        &self.times
    }
}

/// Wall clock plus stage accumulator for one encode run.
#[derive(Debug, Clone)]
pub struct EncodeTimer {
    started: Instant,
    pub stage_times: StageTimes,
}

impl EncodeTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stage_times: StageTimes::default(),
        }
    }

    /// Elapsed wall-clock time since construction.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn add_stage(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }
}

impl Default for EncodeTimer {
    fn default() -> Self {
        Self::new()
    }
}
