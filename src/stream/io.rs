//! stream/io.rs
//!
//! Normalized input/output for the encoders.
//!
//! Sources and sinks arrive as canonical enums and are normalized by
//! [`open_input`] / [`open_output`] into a pull-based [`UnitReader`] and a
//! push-based [`Sink`]. Whether a sink can hand its output back after
//! `finish()` is a property of the variant, not a runtime probe: only
//! `Memory` retrieves.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;

use crate::constants::CONSOLE_PROMPT;
use crate::types::CodecError;

/// Canonical input abstraction.
pub enum InputSource {
    /// Literal text supplied by the caller.
    Literal(String),
    /// Raw bytes supplied by the caller.
    Memory(Vec<u8>),
    /// File path, opened lazily at `open_input`.
    File(PathBuf),
    /// Arbitrary reader.
    Reader(Box<dyn Read + Send>),
    /// One prompted line from stdin, trailing newline stripped.
    Console,
}

/// Canonical output abstraction.
pub enum OutputSink {
    /// Collects in memory; the encoder returns the bytes at finish.
    Memory,
    /// File path, created at `open_output`, made durable at finish.
    File(PathBuf),
    /// Buffers and prints one line to stdout at finish.
    Console,
    /// Arbitrary writer, flushed at finish.
    Writer(Box<dyn Write + Send>),
}

/// Pull-based unit source. Finite; restartable only by reconstruction.
pub struct UnitReader {
    inner: Box<dyn Read + Send>,
}

impl std::fmt::Debug for UnitReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitReader").finish_non_exhaustive()
    }
}

impl UnitReader {
    /// Next unit, or `None` at source exhaustion.
    pub fn next_unit(&mut self) -> Result<Option<u8>, CodecError> {
        let mut unit = [0u8; 1];
        loop {
            match self.inner.read(&mut unit) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(unit[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Normalize an input source into a unit reader.
pub fn open_input(src: InputSource) -> Result<UnitReader, CodecError> {
    let inner: Box<dyn Read + Send> = match src {
        InputSource::Literal(s) => Box::new(Cursor::new(s.into_bytes())),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
        InputSource::File(p) => Box::new(BufReader::new(File::open(p)?)),
        InputSource::Reader(r) => r,
        InputSource::Console => {
            let mut out = io::stdout();
            out.write_all(CONSOLE_PROMPT.as_bytes())?;
            out.flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Box::new(Cursor::new(line.into_bytes()))
        }
    };
    Ok(UnitReader { inner })
}

/// Push-based unit sink. `finish()` must be called exactly once after the
/// last write; it flushes, closes, or materializes depending on the variant.
pub enum Sink {
    Memory(Vec<u8>),
    File(BufWriter<File>),
    Console(Vec<u8>),
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Whether `finish()` returns the collected output.
    pub fn is_buffering(&self) -> bool {
        matches!(self, Sink::Memory(_))
    }

    /// Accept one unit.
    pub fn write_unit(&mut self, unit: u8) -> Result<(), CodecError> {
        match self {
            Sink::Memory(buf) => buf.push(unit),
            Sink::File(writer) => writer.write_all(&[unit])?,
            Sink::Console(buf) => buf.push(unit),
            Sink::Writer(writer) => writer.write_all(&[unit])?,
        }
        Ok(())
    }

    /// Finalize the sink. Returns the collected bytes for `Memory`; file
    /// sinks flush and sync so the output is durable before this returns.
    pub fn finish(self) -> Result<Option<Vec<u8>>, CodecError> {
        match self {
            Sink::Memory(buf) => Ok(Some(buf)),
            Sink::File(mut writer) => {
                writer.flush()?;
                writer.get_ref().sync_all()?;
                Ok(None)
            }
            Sink::Console(buf) => {
                let mut out = io::stdout().lock();
                out.write_all(&buf)?;
                out.write_all(b"\n")?;
                out.flush()?;
                Ok(None)
            }
            Sink::Writer(mut writer) => {
                writer.flush()?;
                Ok(None)
            }
        }
    }
}

/// Normalize an output sink.
pub fn open_output(sink: OutputSink) -> Result<Sink, CodecError> {
    Ok(match sink {
        OutputSink::Memory => Sink::Memory(Vec::new()),
        OutputSink::File(p) => Sink::File(BufWriter::new(File::create(p)?)),
        OutputSink::Console => Sink::Console(Vec::new()),
        OutputSink::Writer(w) => Sink::Writer(w),
    })
}
