use std::fmt::Display;
use std::io;
use std::io::Write;

use chrono::Local;

pub const FATAL_PREFIX: &str = "ERROR: ";

/// Receives the message of an error that ends the run.
pub trait DiagnosticSink {
    fn fatal(&mut self, message: &dyn Display);
}

/// Writes `ERROR: HH:MM:SS message` lines to a stream.
pub struct StreamSink<W> {
    out: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> StreamSink<W> {
        StreamSink { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for StreamSink<W> {
    fn fatal(&mut self, message: &dyn Display) {
        // nowhere left to report a failing diagnostic stream
        let _ = writeln!(self.out, "{}{} {}", FATAL_PREFIX, Local::now().format("%H:%M:%S"), message);
        let _ = self.out.flush();
    }
}

pub fn stderr() -> StreamSink<io::Stderr> {
    StreamSink::new(io::stderr())
}
