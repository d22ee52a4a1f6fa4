//! config.rs
//!
//! Boundary layer: turns selections (from the CLI or a caller) into a
//! runnable encode job. Every selection is validated before any I/O opens,
//! so configuration errors never leave a half-written sink behind.

use crate::cipher::Coder;
use crate::keystream::KeyStream;
use crate::stream::{
    open_input, open_output, EncodeOutcome, HeadedStreamEncoder, InputSource, OutputSink, Sink,
    StreamEncoder, UnitReader,
};
use crate::types::CodecError;

/// Cipher selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoderSpec {
    Additive,
    Xor,
}

/// Key selection: one scalar, a cyclic integer sequence, or literal text
/// used as a character key stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    Scalar(i64),
    Integers(Vec<i64>),
    Text(String),
}

impl KeySpec {
    fn build(self) -> Result<KeyStream, CodecError> {
        match self {
            KeySpec::Scalar(key) => Ok(KeyStream::scalar(key)),
            KeySpec::Integers(keys) => KeyStream::cycle(keys),
            KeySpec::Text(text) => KeyStream::from_text(&text),
        }
    }
}

/// One encode run's worth of selections. `None` fields are missing
/// selections and fail validation with a descriptive message.
pub struct JobSpec {
    pub input: Option<InputSource>,
    pub output: Option<OutputSink>,
    pub coder: Option<CoderSpec>,
    pub key: Option<KeySpec>,
    pub headed: bool,
}

impl JobSpec {
    /// Validate all selections, then open source and sink.
    pub fn build(self) -> Result<EncodeJob, CodecError> {
        let input = self
            .input
            .ok_or_else(|| CodecError::Config("no input source selected".into()))?;
        let output = self
            .output
            .ok_or_else(|| CodecError::Config("no output sink selected".into()))?;
        let coder_spec = self
            .coder
            .ok_or_else(|| CodecError::Config("no cipher selected".into()))?;
        let key = self
            .key
            .ok_or_else(|| CodecError::Config("no key selected".into()))?;

        let keys = key.build()?;
        let coder = match coder_spec {
            CoderSpec::Additive => Coder::additive(keys),
            CoderSpec::Xor => Coder::xor(keys),
        };

        // Selections are complete; only now touch the outside world.
        let reader = open_input(input)?;
        let sink = open_output(output)?;

        Ok(EncodeJob {
            reader,
            sink,
            coder,
            headed: self.headed,
        })
    }
}

/// Fully assembled encode run.
pub struct EncodeJob {
    reader: UnitReader,
    sink: Sink,
    coder: Coder,
    headed: bool,
}

impl std::fmt::Debug for EncodeJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodeJob")
            .field("coder", &self.coder)
            .field("headed", &self.headed)
            .finish_non_exhaustive()
    }
}

impl EncodeJob {
    pub fn run(self) -> Result<EncodeOutcome, CodecError> {
        if self.headed {
            HeadedStreamEncoder::new(self.reader, self.sink, self.coder).encode()
        } else {
            StreamEncoder::new(self.reader, self.sink, self.coder).encode()
        }
    }
}
