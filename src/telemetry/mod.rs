//! telemetry/mod.rs
//!
//! Optional observability around `encode()`. The cipher core itself performs
//! no logging; the encoders fill stage timers and return a snapshot, and
//! [`time_it`] wraps any call with a wall-clock log line.

pub mod snapshot;
pub mod timers;

pub use snapshot::TelemetrySnapshot;
pub use timers::{EncodeTimer, Stage, StageTimes};

use std::time::Instant;

/// Run `f`, logging its wall-clock duration at info level.
///
/// Reimplementation of a timing decorator: instrumentation composed around
/// the call, not part of the encoder's contract.
pub fn time_it<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = f();
    log::info!(
        "{} complete in {:.2} seconds.",
        label,
        started.elapsed().as_secs_f64()
    );
    out
}
