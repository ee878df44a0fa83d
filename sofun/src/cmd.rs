//! Module for `sofun` subcommands.

use crate::elf::ElfFile;
use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
    str::FromStr,
};
use structopt::StructOpt;

pub mod dump;
pub mod header;
pub mod sections;
pub mod symbols;

#[derive(StructOpt)]
#[structopt(name = "sofun", about = "List the dynamic symbols of ELF shared libraries 🦀")]
pub enum Options {
    #[structopt(about = "Print the section table and dynamic symbols.")]
    Dump(dump::Options),
    #[structopt(about = "Print the section header table location.")]
    Header(header::Options),
    #[structopt(about = "Print the sections and their file offsets.")]
    Sections(sections::Options),
    #[structopt(about = "Print the names of the dynamic symbols.")]
    Symbols(symbols::Options),
}

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(Options::from_args(), &mut out)
}

/// Runs a subcommand, writing its output to `out`.
pub fn execute(options: Options, out: &mut impl Write) -> Result<()> {
    match options {
        Options::Dump(options) => dump::run(options, out),
        Options::Header(options) => header::run(options, out),
        Options::Sections(options) => sections::run(options, out),
        Options::Symbols(options) => symbols::run(options, out),
    }
}

/// Options shared by all subcommands.
#[derive(StructOpt)]
pub struct Input {
    #[structopt(name = "FILE", help = "Path to the ELF file.")]
    path: PathBuf,

    #[structopt(
        long,
        default_value = "text",
        env = "SOFUN_FORMAT",
        help = "Output format, either `text` or `json`."
    )]
    format: Format,
}

impl Input {
    /// Opens and parses the input ELF file.
    pub fn open(&self) -> Result<ElfFile<BufReader<File>>> {
        let file = File::open(&self.path)
            .with_context(|| format!("error opening {}", self.path.display()))?;
        ElfFile::parse(BufReader::new(file))
            .with_context(|| format!("error reading {}", self.path.display()))
    }
}

/// Output format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Text,
    Json,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => bail!("unknown output format '{}'", s),
        }
    }
}

/// Writes `value` as pretty printed JSON followed by a new line.
fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
