use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;

use crate::config::{Config, Source};
use crate::diag::DiagnosticSink;
use crate::error::{Error, Result};
use crate::output;
use crate::scan::{Numbers, ScanStats};
use crate::topn::TopN;

#[derive(Debug, PartialEq)]
pub struct Report {
    pub stats: ScanStats,
    pub retained: usize,
}

/// Scans `reader` and returns the `count` largest integers, smallest first.
pub fn select<R: BufRead>(reader: R, count: usize) -> Result<(Vec<i64>, ScanStats)> {
    if count == 0 {
        debug!("count is 0, input not scanned");
        return Ok((Vec::new(), ScanStats::default()));
    }
    let mut top = TopN::new(count);
    let mut numbers = Numbers::new(reader);
    for value in numbers.by_ref() {
        top.offer(value?);
    }
    if top.is_empty() {
        debug!("no integers found");
    } else {
        debug!("retained {} of {}", top.len(), top.capacity());
    }
    Ok((top.drain(count), numbers.stats()))
}

/// Runs one full pass. Nothing is written to `out` unless the scan completes.
pub fn execute<W: Write>(config: &Config, mut out: W) -> Result<Report> {
    let (top, stats) = match &config.source {
        Source::Stdin => {
            debug!("reading stdin");
            let stdin = io::stdin();
            let lock = stdin.lock();
            select(lock, config.count)?
        }
        Source::File(path) => {
            debug!("reading {}", path.display());
            let file = File::open(path).map_err(|source| Error::Open { path: path.clone(), source })?;
            select(BufReader::new(file), config.count)?
        }
    };
    info!("lines: {}, numbers: {}, skipped: {}, retained: {}", stats.lines, stats.numbers, stats.skipped, top.len());
    output::write_line(&mut out, &top)?;
    Ok(Report { stats, retained: top.len() })
}

pub struct Driver<S> {
    sink: S,
}

impl<S: DiagnosticSink> Driver<S> {
    pub fn new(sink: S) -> Driver<S> {
        Driver { sink }
    }

    /// Returns the process exit code.
    pub fn run<W: Write>(&mut self, config: &Config, out: W) -> i32 {
        debug!("{:?}", config);
        match execute(config, out) {
            Ok(_) => 0,
            Err(err) => {
                self.sink.fatal(&err);
                1
            }
        }
    }

    #[cfg(test)]
    fn into_sink(self) -> S {
        self.sink
    }
}
