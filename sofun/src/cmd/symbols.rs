//! Symbols subcommand implementation.

use super::{write_json, Format, Input};
use anyhow::Result;
use std::io::Write;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    input: Input,

    /// Name of the symbol table section.
    #[structopt(long, default_value = ".dynsym")]
    dynsym: String,

    /// Name of the string table section holding the symbol names.
    #[structopt(long, default_value = ".dynstr")]
    dynstr: String,
}

/// Run the `symbols` subcommand.
pub fn run(options: Options, out: &mut impl Write) -> Result<()> {
    let mut elf = options.input.open()?;
    let symbols = elf.dynamic_symbols(&options.dynsym, &options.dynstr)?;

    match options.input.format {
        Format::Text => {
            for name in &symbols {
                writeln!(out, "{}", name)?;
            }
        }
        Format::Json => write_json(out, &symbols)?,
    }

    Ok(())
}
