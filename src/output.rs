use std::io::Write;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Formats values given smallest first as one line, largest first.
pub fn format_line(ascending: &[i64]) -> String {
    ascending.iter().rev().join(" ")
}

pub fn write_line<W: Write>(out: &mut W, ascending: &[i64]) -> Result<()> {
    writeln!(out, "{}", format_line(ascending)).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)
}
