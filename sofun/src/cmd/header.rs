//! Header subcommand implementation.

use super::{write_json, Format, Input};
use anyhow::Result;
use std::io::Write;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    input: Input,
}

/// Run the `header` subcommand.
pub fn run(options: Options, out: &mut impl Write) -> Result<()> {
    let elf = options.input.open()?;
    let header = elf.header();

    match options.input.format {
        Format::Text => {
            writeln!(out, "e_shoff: {:#x}", header.e_shoff)?;
            writeln!(out, "e_shnum: {}", header.e_shnum)?;
            writeln!(out, "e_shstrndx: {}", header.e_shstrndx)?;
            writeln!(out, "e_shentsize: {}", header.e_shentsize)?;
        }
        Format::Json => write_json(out, header)?,
    }

    Ok(())
}
