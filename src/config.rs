use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

const DEFAULT_COUNT: &str = "5";

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    pub count: usize,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("topn")
        .about("Prints the N largest integers of the input in descending order, one integer per input line")
        .arg(Arg::with_name("file")
            .help("File to read (stdin when omitted or '-')")
            .short("f")
            .long("file")
            .takes_value(true))
        .arg(Arg::with_name("count")
            .help("Amount of numbers to select")
            .short("n")
            .long("count")
            .takes_value(true)
            .default_value(DEFAULT_COUNT))
}

impl Config {
    /// Parses the process arguments, exiting with a usage message on error.
    pub fn from_args() -> Config {
        let matches = app().get_matches();
        Config::from_matches(&matches).unwrap_or_else(|err| err.exit())
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Config, clap::Error> {
        let count = value_t!(matches, "count", usize)?;
        let source = match matches.value_of("file") {
            None | Some("") | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        };
        Ok(Config { source, count })
    }
}
