//! Command-line parsing.

use std::path::PathBuf;

use anyhow::{bail, Result};

pub const USAGE: &str = "\
Usage:
  navdeck [--data <path>]              Browse bookmarks in the terminal
  navdeck import <bookmarks.html> [--out <dir>]
                                       Convert a browser bookmark export to data.json

Options:
  -d, --data <path>   Dataset JSON file (default: config data_path, then ./data.json)
  -o, --out <dir>     Output directory for import (default: current directory)
  -h, --help          Show this help
  -V, --version       Show version

Environment:
  NAVDECK_DATA        Dataset JSON text; takes precedence over --data
  NAVDECK_LOG         Log filter (default: info)";

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the navigation page
    Run { data: Option<PathBuf> },
    /// Convert a bookmark export into a dataset file
    Import { source: PathBuf, out: PathBuf },
    Help,
    Version,
}

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self {
            iter: args.into_iter(),
            command_name: command_name.to_string(),
        }
    }

    /// Extract a string value for a flag
    pub fn extract_value(&mut self, flag: &str) -> Result<String> {
        match self.iter.next() {
            Some(v) if !v.starts_with('-') => Ok(v),
            _ => bail!("Provide a value after {} for {}", flag, self.command_name),
        }
    }

    /// Get next argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    /// Collect remaining args
    pub fn collect_remaining(self) -> Vec<String> {
        self.iter.collect()
    }
}

/// Parse arguments (without the program name)
pub fn parse_args(args: Vec<String>) -> Result<Command> {
    let mut parser = ArgParser::new(args, "navdeck");
    let mut data = None;

    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-d" | "--data" => data = Some(PathBuf::from(parser.extract_value(&arg)?)),
            "import" if data.is_none() => return parse_import(parser.collect_remaining()),
            other => bail!("Unexpected argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Run { data })
}

fn parse_import(args: Vec<String>) -> Result<Command> {
    let mut parser = ArgParser::new(args, "import");
    let mut source = None;
    let mut out = None;

    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--out" => out = Some(PathBuf::from(parser.extract_value(&arg)?)),
            flag if flag.starts_with('-') => bail!("Unknown flag for import: {}", flag),
            _ if source.is_some() => bail!("Unexpected argument: {}", arg),
            _ => source = Some(PathBuf::from(arg)),
        }
    }

    let Some(source) = source else {
        bail!("Provide a bookmark HTML file for import");
    };
    Ok(Command::Import {
        source,
        out: out.unwrap_or_else(|| PathBuf::from(".")),
    })
}
