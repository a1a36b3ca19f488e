//! Prints the N largest integers of a file or stdin, one integer per line,
//! on a single line in descending order. Lines that are not integers are skipped.
//!
//!     topn --file ./data -n 15
//!     seq 0 1000 | topn -n 15

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::io;
use std::process;

use crate::config::Config;
use crate::pipeline::Driver;

mod config;
mod diag;
mod error;
mod output;
mod pipeline;
mod scan;
mod topn;

fn main() {
    env_logger::init();

    let config = Config::from_args();
    let code = {
        let stdout = io::stdout();
        Driver::new(diag::stderr()).run(&config, stdout.lock())
    };
    process::exit(code);
}
