//! Host input/output channels.
//!
//! The interpreter talks to the outside world through two channels: one
//! output line per `print` (or `inputi` prompt) and one input line per
//! `inputi`. The destination is chosen by the embedder:
//! - Console: stdout/stdin (the `brewin` binary)
//! - Buffer: in-memory capture with scripted input (tests, embedders)

use super::error::{InterpResult, RuntimeError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Console channels backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl ConsoleIo {
    /// Write one newline-terminated line to stdout.
    pub fn output(&mut self, line: &str) -> InterpResult<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{line}")
            .and_then(|()| lock.flush())
            .map_err(|e| RuntimeError::io_error(&e.to_string()))
    }

    /// Read one line from stdin, without its line terminator.
    /// Returns `None` at end of input.
    pub fn get_input(&mut self) -> InterpResult<Option<String>> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| RuntimeError::io_error(&e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// In-memory channels: output lines are captured, input lines are served
/// from a pre-seeded queue.
#[derive(Debug, Default)]
pub struct BufferIo {
    output: Vec<String>,
    input: VecDeque<String>,
}

impl BufferIo {
    pub fn new() -> Self {
        BufferIo::default()
    }

    /// Create a buffer that will answer `get_input` with `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferIo {
            output: Vec::new(),
            input: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn output(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    pub fn get_input(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    /// Lines emitted so far.
    pub fn captured(&self) -> &[String] {
        &self.output
    }

    /// Input lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

/// Host I/O implementation using enum dispatch.
#[derive(Debug)]
pub enum HostIo {
    /// stdin/stdout
    Console(ConsoleIo),
    /// Captured output, scripted input
    Buffer(BufferIo),
}

impl HostIo {
    pub fn console() -> Self {
        HostIo::Console(ConsoleIo)
    }

    pub fn buffer() -> Self {
        HostIo::Buffer(BufferIo::new())
    }

    pub fn buffer_with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HostIo::Buffer(BufferIo::with_input(lines))
    }

    /// Emit one output line.
    pub fn output(&mut self, line: &str) -> InterpResult<()> {
        match self {
            HostIo::Console(h) => h.output(line),
            HostIo::Buffer(h) => {
                h.output(line);
                Ok(())
            }
        }
    }

    /// Read one input line; `None` once input is exhausted.
    pub fn get_input(&mut self) -> InterpResult<Option<String>> {
        match self {
            HostIo::Console(h) => h.get_input(),
            HostIo::Buffer(h) => Ok(h.get_input()),
        }
    }

    /// Captured output lines. Empty for the console, which does not capture.
    pub fn captured(&self) -> &[String] {
        match self {
            HostIo::Console(_) => &[],
            HostIo::Buffer(h) => h.captured(),
        }
    }
}

impl Default for HostIo {
    fn default() -> Self {
        HostIo::console()
    }
}
