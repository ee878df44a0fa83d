//! Sections subcommand implementation.

use super::{write_json, Format, Input};
use anyhow::Result;
use std::io::Write;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    input: Input,
}

/// Run the `sections` subcommand.
pub fn run(options: Options, out: &mut impl Write) -> Result<()> {
    let elf = options.input.open()?;

    match options.input.format {
        Format::Text => {
            for section in elf.sections() {
                writeln!(out, "{}: {:#x}", section.name, section.file_offset)?;
            }
        }
        Format::Json => write_json(out, &elf.sections())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cmd::testing::run_on_sample;

    #[test]
    fn text_output() {
        assert_eq!(
            run_on_sample(&["sections"]).unwrap(),
            ".text: 0x340\n.shstrtab: 0x300\n.dynsym: 0x200\n.dynstr: 0x280\n",
        );
    }

    #[test]
    fn json_output() {
        let output = run_on_sample(&["sections", "--format", "json"]).unwrap();
        let sections = serde_json::from_str::<serde_json::Value>(&output).unwrap();
        assert_eq!(sections.as_array().unwrap().len(), 4);
        assert_eq!(
            sections[2],
            serde_json::json!({
                "name": ".dynsym",
                "header_offset": 0x180,
                "name_offset": 17,
                "file_offset": 0x200,
                "size": 72,
            }),
        );
    }
}
