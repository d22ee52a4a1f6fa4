//! stream/encoder.rs
//!
//! Drives a unit source through a cipher into a sink, one unit at a time.
//!
//! Single-threaded, synchronous, pull-based: read a unit, transform it,
//! push it. Cipher errors abort the pass immediately; units already pushed
//! stay in the sink (no rollback). The sink is finalized exactly once, after
//! source exhaustion.

use std::time::Instant;

use crate::cipher::Coder;
use crate::constants::HEADER_TERMINATOR;
use crate::stream::io::{Sink, UnitReader};
use crate::telemetry::{EncodeTimer, Stage, TelemetrySnapshot};
use crate::types::CodecError;

/// Result of a completed encode pass.
#[derive(Debug)]
pub struct EncodeOutcome {
    /// Units pushed to the sink (header units included for headed passes).
    pub units: u64,
    /// Collected output; `Some` only for buffering sinks.
    pub collected: Option<Vec<u8>>,
    pub telemetry: TelemetrySnapshot,
}

impl EncodeOutcome {
    /// Collected output as text, when the sink buffered any.
    pub fn collected_string(&self) -> Option<String> {
        self.collected
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Encodes every unit of the source.
pub struct StreamEncoder {
    reader: UnitReader,
    sink: Sink,
    coder: Coder,
}

impl StreamEncoder {
    pub fn new(reader: UnitReader, sink: Sink, coder: Coder) -> Self {
        Self {
            reader,
            sink,
            coder,
        }
    }

    /// Pull, transform, push until the source exhausts, then finalize the
    /// sink.
    pub fn encode(mut self) -> Result<EncodeOutcome, CodecError> {
        let mut timer = EncodeTimer::new();
        let mut units: u64 = 0;

        loop {
            let t = Instant::now();
            let unit = self.reader.next_unit()?;
            timer.add_stage(Stage::Read, t.elapsed());

            let Some(unit) = unit else { break };

            let t = Instant::now();
            let coded = self.coder.encode_unit(unit)?;
            timer.add_stage(Stage::Encode, t.elapsed());

            let t = Instant::now();
            self.sink.write_unit(coded)?;
            timer.add_stage(Stage::Write, t.elapsed());
            units += 1;
        }

        let collected = self.sink.finish()?;
        Ok(EncodeOutcome {
            units,
            collected,
            telemetry: TelemetrySnapshot::from_timer(units, &timer),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderState {
    InHeader,
    InBody,
    Done,
}

/// Encodes a stream whose prefix is an unencoded header.
///
/// Units are copied verbatim until the terminator (inclusive) passes
/// through; the remainder is transformed by the cipher. A stream with no
/// terminator is all header: copied verbatim, cipher never consulted, and
/// that is a valid terminal state rather than an error.
pub struct HeadedStreamEncoder {
    reader: UnitReader,
    sink: Sink,
    coder: Coder,
    terminator: u8,
    state: HeaderState,
}

impl HeadedStreamEncoder {
    /// Headed encoder with the default newline terminator.
    pub fn new(reader: UnitReader, sink: Sink, coder: Coder) -> Self {
        Self::with_terminator(reader, sink, coder, HEADER_TERMINATOR)
    }

    /// Headed encoder splitting at the first occurrence of `terminator`.
    pub fn with_terminator(reader: UnitReader, sink: Sink, coder: Coder, terminator: u8) -> Self {
        Self {
            reader,
            sink,
            coder,
            terminator,
            state: HeaderState::InHeader,
        }
    }

    pub fn encode(mut self) -> Result<EncodeOutcome, CodecError> {
        let mut timer = EncodeTimer::new();
        let mut units: u64 = 0;

        loop {
            let t = Instant::now();
            let unit = self.reader.next_unit()?;
            timer.add_stage(Stage::Read, t.elapsed());

            let Some(unit) = unit else { break };

            let coded = match self.state {
                HeaderState::InHeader => {
                    if unit == self.terminator {
                        self.state = HeaderState::InBody;
                    }
                    unit
                }
                HeaderState::InBody => {
                    let t = Instant::now();
                    let coded = self.coder.encode_unit(unit)?;
                    timer.add_stage(Stage::Encode, t.elapsed());
                    coded
                }
                HeaderState::Done => unreachable!("encode loop ended before Done"),
            };

            let t = Instant::now();
            self.sink.write_unit(coded)?;
            timer.add_stage(Stage::Write, t.elapsed());
            units += 1;
        }

        self.state = HeaderState::Done;
        let collected = self.sink.finish()?;
        Ok(EncodeOutcome {
            units,
            collected,
            telemetry: TelemetrySnapshot::from_timer(units, &timer),
        })
    }
}
