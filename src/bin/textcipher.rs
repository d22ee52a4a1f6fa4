//! textcipher CLI.
//!
//! Selects one input source, one output sink, one cipher, and one key form,
//! then runs the encode pass. Invalid or missing combinations fail with a
//! configuration error before any encoding starts.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use textcipher::config::{CoderSpec, JobSpec, KeySpec};
use textcipher::stream::{InputSource, OutputSink};
use textcipher::telemetry::time_it;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CipherKind {
    /// Caesar-style shift over the printable alphabet.
    Additive,
    /// Bitwise XOR over the full byte range.
    Xor,
}

#[derive(Debug, Parser)]
#[command(
    name = "textcipher",
    about = "Encode a character stream with a classical reversible cipher"
)]
struct Cli {
    /// Input string
    #[arg(long, group = "input")]
    in_string: Option<String>,

    /// Input file path
    #[arg(long, group = "input")]
    in_file: Option<PathBuf>,

    /// Read one line from the console
    #[arg(long, group = "input")]
    in_console: bool,

    /// Output file path
    #[arg(long, group = "output")]
    out_file: Option<PathBuf>,

    /// Print output to the console
    #[arg(long, group = "output")]
    out_console: bool,

    /// Cipher to apply
    #[arg(long, value_enum)]
    cipher: Option<CipherKind>,

    /// Single integer key
    #[arg(long, group = "key_form", allow_negative_numbers = true)]
    key: Option<i64>,

    /// Comma-separated integer keys, cycled per character
    #[arg(long, group = "key_form", value_delimiter = ',', allow_negative_numbers = true)]
    keys_int: Option<Vec<i64>>,

    /// Literal text used as a character key stream
    #[arg(long, group = "key_form")]
    key_text: Option<String>,

    /// Copy everything up to and including the first newline unencoded
    #[arg(long)]
    headed: bool,
}

impl Cli {
    fn input(&mut self) -> Option<InputSource> {
        if let Some(s) = self.in_string.take() {
            Some(InputSource::Literal(s))
        } else if let Some(p) = self.in_file.take() {
            Some(InputSource::File(p))
        } else if self.in_console {
            Some(InputSource::Console)
        } else {
            None
        }
    }

    fn output(&mut self) -> Option<OutputSink> {
        if let Some(p) = self.out_file.take() {
            Some(OutputSink::File(p))
        } else if self.out_console {
            Some(OutputSink::Console)
        } else {
            None
        }
    }

    fn coder(&self) -> Option<CoderSpec> {
        self.cipher.map(|kind| match kind {
            CipherKind::Additive => CoderSpec::Additive,
            CipherKind::Xor => CoderSpec::Xor,
        })
    }

    fn key(&mut self) -> Option<KeySpec> {
        if let Some(k) = self.key {
            Some(KeySpec::Scalar(k))
        } else if let Some(keys) = self.keys_int.take() {
            Some(KeySpec::Integers(keys))
        } else if let Some(text) = self.key_text.take() {
            Some(KeySpec::Text(text))
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut cli = Cli::parse();
    let spec = JobSpec {
        input: cli.input(),
        output: cli.output(),
        coder: cli.coder(),
        key: cli.key(),
        headed: cli.headed,
    };

    let job = spec.build().context("invalid configuration")?;
    let outcome = time_it("encode", || job.run()).context("encode failed")?;

    log::debug!(
        "telemetry: {}",
        outcome
            .telemetry
            .to_json()
            .unwrap_or_else(|e| format!("<serialize failed: {e}>"))
    );
    Ok(())
}
