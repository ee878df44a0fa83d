//! Dump subcommand implementation.

use super::{write_json, Format, Input};
use crate::elf::{ElfHeader, Section};
use anyhow::Result;
use serde::Serialize;
use std::{io::Write, path::Path};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    input: Input,
}

#[derive(Serialize)]
struct Dump<'a> {
    path: &'a Path,
    header: &'a ElfHeader,
    sections: &'a [Section],
    dynsym: &'a Section,
    dynstr: &'a Section,
    symbols: Vec<String>,
}

/// Run the `dump` subcommand.
pub fn run(options: Options, out: &mut impl Write) -> Result<()> {
    let mut elf = options.input.open()?;
    let symbols = elf.dynamic_symbols(".dynsym", ".dynstr")?;
    let dump = Dump {
        path: &options.input.path,
        header: elf.header(),
        sections: elf.sections(),
        dynsym: elf.section(".dynsym")?,
        dynstr: elf.section(".dynstr")?,
        symbols,
    };

    match options.input.format {
        Format::Text => write_text(out, &dump)?,
        Format::Json => write_json(out, &dump)?,
    }

    Ok(())
}

fn write_text(out: &mut impl Write, dump: &Dump) -> Result<()> {
    writeln!(out, "{}:", dump.path.display())?;
    writeln!(out, "e_shoff: {:#x}", dump.header.e_shoff)?;
    writeln!(out, "e_shnum: {}", dump.header.e_shnum)?;
    writeln!(out, "e_shstrndx: {}", dump.header.e_shstrndx)?;
    writeln!(out, "e_shentsize: {}", dump.header.e_shentsize)?;

    writeln!(out, "\nFound the following segments:")?;
    for section in dump.sections {
        writeln!(out, "{}: {:#x}", section.name, section.file_offset)?;
    }
    writeln!(out, ".dynsym: {:#x}", dump.dynsym.file_offset)?;
    writeln!(out, ".dynstr: {:#x}", dump.dynstr.file_offset)?;

    writeln!(out, "\nSymbols found:")?;
    for name in &dump.symbols {
        writeln!(out, "{}", name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cmd::testing::run_on_sample;

    #[test]
    fn text_output() {
        let output = run_on_sample(&["dump"]).unwrap();
        let expected = "\
e_shoff: 0x100
e_shnum: 4
e_shstrndx: 1
e_shentsize: 64

Found the following segments:
.text: 0x340
.shstrtab: 0x300
.dynsym: 0x200
.dynstr: 0x280
.dynsym: 0x200
.dynstr: 0x280

Symbols found:

add
factorial
";

        let (path, rest) = output.split_at(output.find('\n').unwrap() + 1);
        assert!(path.ends_with(":\n"));
        assert_eq!(rest, expected);
    }

    #[test]
    fn json_output() {
        let output = run_on_sample(&["dump", "--format", "json"]).unwrap();
        let dump = serde_json::from_str::<serde_json::Value>(&output).unwrap();
        assert_eq!(dump["header"]["e_shnum"], 4);
        assert_eq!(dump["sections"].as_array().unwrap().len(), 4);
        assert_eq!(dump["dynstr"]["file_offset"], 0x280);
        assert_eq!(dump["symbols"], serde_json::json!(["", "add", "factorial"]));
    }
}
