use std::io::BufRead;
use std::io::Read;
use std::str;

use crate::error::{Error, Result};

/// Longest line accepted before the scan is aborted.
pub const MAX_LINE_LEN: usize = 64 * 1024;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScanStats {
    pub lines: usize,
    pub numbers: usize,
    pub skipped: usize,
}

/// Integers read one per line, lines that don't parse are skipped.
///
/// Yields `Err` at most once: the first read failure or over-long line ends the scan.
pub struct Numbers<R> {
    reader: R,
    buf: Vec<u8>,
    max_line_len: usize,
    stats: ScanStats,
    done: bool,
}

impl<R: BufRead> Numbers<R> {
    pub fn new(reader: R) -> Numbers<R> {
        Numbers::with_max_line_len(reader, MAX_LINE_LEN)
    }

    pub fn with_max_line_len(reader: R, max_line_len: usize) -> Numbers<R> {
        Numbers { reader, buf: Vec::new(), max_line_len, stats: ScanStats::default(), done: false }
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Reads the next line into `buf` without its terminator. `Ok(false)` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let limit = self.max_line_len as u64 + 1;
        let len = (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf).map_err(Error::Read)?;
        if len == 0 {
            return Ok(false);
        }
        self.stats.lines += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if self.buf.len() > self.max_line_len {
            return Err(Error::LineTooLong { line: self.stats.lines, limit: self.max_line_len });
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Numbers<R> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Result<i64>> {
        while !self.done {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => self.done = true,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
            if self.done {
                break;
            }
            match parse_line(&self.buf) {
                Some(value) => {
                    self.stats.numbers += 1;
                    return Some(Ok(value));
                }
                None => {
                    self.stats.skipped += 1;
                    trace!("skipping line {}: {:?}", self.stats.lines, String::from_utf8_lossy(&self.buf));
                }
            }
        }
        None
    }
}

/// Parses a whole line as a decimal integer with an optional sign. No trimming.
pub fn parse_line(line: &[u8]) -> Option<i64> {
    str::from_utf8(line).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::BufReader;
    use std::io::Cursor;
    use std::io::Read;

    use super::*;

    fn scan(input: &str) -> (Vec<i64>, ScanStats) {
        let mut numbers = Numbers::new(Cursor::new(input.as_bytes().to_vec()));
        let values = numbers.by_ref().map(|r| r.unwrap()).collect();
        (values, numbers.stats())
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
            }
            self.served = true;
            let data = b"12\n34\n5";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(b"42"), Some(42));
        assert_eq!(parse_line(b"-17"), Some(-17));
        assert_eq!(parse_line(b"+8"), Some(8));
        assert_eq!(parse_line(b"9223372036854775807"), Some(i64::max_value()));
        assert_eq!(parse_line(b"9223372036854775808"), None);
        assert_eq!(parse_line(b""), None);
        assert_eq!(parse_line(b"abc"), None);
        assert_eq!(parse_line(b" 5"), None);
        assert_eq!(parse_line(b"1.5"), None);
        assert_eq!(parse_line(b"\xff1"), None);
    }

    #[test]
    fn test_scan() {
        let (values, stats) = scan("5\n3\nabc\n9\n\n1\r\n-4");
        assert_eq!(values, vec![5, 3, 9, 1, -4]);
        assert_eq!(stats, ScanStats { lines: 7, numbers: 5, skipped: 2 });

        let (values, stats) = scan("");
        assert_eq!(values, Vec::<i64>::new());
        assert_eq!(stats, ScanStats::default());

        let (values, _) = scan("7\n");
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_line_too_long() {
        let input = "1\n123456789\n2\n";
        let mut numbers = Numbers::with_max_line_len(Cursor::new(input.as_bytes().to_vec()), 4);
        assert_eq!(numbers.next().unwrap().unwrap(), 1);
        match numbers.next() {
            Some(Err(Error::LineTooLong { line, limit })) => {
                assert_eq!(line, 2);
                assert_eq!(limit, 4);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(numbers.next().is_none());

        // exactly at the limit, with and without terminator
        let numbers = Numbers::with_max_line_len(Cursor::new(b"1234\n5678".to_vec()), 4);
        let values: Vec<i64> = numbers.map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![1234, 5678]);
    }

    #[test]
    fn test_read_error() {
        let reader = BufReader::new(FailingReader { served: false });
        let results: Vec<Result<i64>> = Numbers::new(reader).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &12);
        assert_eq!(results[1].as_ref().unwrap(), &34);
        match &results[2] {
            Err(Error::Read(err)) => assert_eq!(err.to_string(), "device unplugged"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
