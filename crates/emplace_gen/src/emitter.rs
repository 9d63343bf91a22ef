//! Output Emitter
//!
//! Abstraction for the generated text stream. Supports string building for
//! in-memory generation and buffered streaming for stdout or file output.
//!
//! Unlike an in-memory formatter, a generator that writes to a pipe must
//! observe every write failure, so each operation returns the emitter's error.

use std::convert::Infallible;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for emitting generated output.
pub trait Emitter {
    /// Failure type of the underlying stream.
    type Error;

    /// Emit a text fragment.
    fn emit(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) -> Result<(), Self::Error>;
}

/// String-based emitter for in-memory generation.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    type Error = Infallible;

    fn emit(&mut self, text: &str) -> Result<(), Infallible> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn emit_newline(&mut self) -> Result<(), Infallible> {
        self.buffer.push('\n');
        Ok(())
    }
}

/// Buffered emitter over any [`Write`] sink (stdout, a file, a socket).
pub struct WriterEmitter<W: Write> {
    writer: BufWriter<W>,
}

/// Emitter that streams into a file.
pub type FileEmitter = WriterEmitter<File>;

impl<W: Write> WriterEmitter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    /// Flush buffered output.
    ///
    /// A flush failure means the stream is incomplete and must not be used.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl FileEmitter {
    /// Create (or truncate) `path` and stream into it.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    type Error = io::Error;

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn emit_newline(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }
}
