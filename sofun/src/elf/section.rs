//! Section header table.

use super::{at, read_field, read_str, ElfHeader, Field};
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::{
    convert::TryFrom,
    io::{Read, Seek},
};

pub const SH_NAME: Field = Field { offset: 0, size: 4 };
pub const SH_OFFSET: Field = Field {
    offset: 0x18,
    size: 8,
};
pub const SH_SIZE: Field = Field {
    offset: 0x20,
    size: 8,
};

/// A named section of an ELF file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    /// File offset of the section's header.
    pub header_offset: u64,
    /// Offset of the name in the section name string table.
    pub name_offset: u64,
    /// File offset of the section's contents.
    pub file_offset: u64,
    pub size: u64,
}

/// Returns the file offsets of all section headers.
fn section_header_offsets(header: &ElfHeader) -> Result<Vec<u64>> {
    (0..header.e_shnum)
        .map(|i| {
            i.checked_mul(header.e_shentsize)
                .and_then(|offset| offset.checked_add(header.e_shoff))
                .context("section header table overflows")
        })
        .collect()
}

/// Reads all section headers, resolving their names through the section name
/// string table.
pub fn parse_sections<R>(reader: &mut R, header: &ElfHeader) -> Result<Vec<Section>>
where
    R: Read + Seek,
{
    let header_offsets = section_header_offsets(header)?;
    if header_offsets.is_empty() {
        return Ok(Vec::new());
    }

    let strtab_header = usize::try_from(header.e_shstrndx)
        .ok()
        .and_then(|index| header_offsets.get(index))
        .with_context(|| {
            format!(
                "section name string table index {} out of range",
                header.e_shstrndx,
            )
        })?;
    let strtab_offset = read_field(reader, *strtab_header, SH_OFFSET)?;

    header_offsets
        .iter()
        .map(|&header_offset| -> Result<Section> {
            let name_offset = read_field(reader, header_offset, SH_NAME)?;
            Ok(Section {
                name: read_str(reader, at(strtab_offset, name_offset)?)?,
                header_offset,
                name_offset,
                file_offset: read_field(reader, header_offset, SH_OFFSET)?,
                size: read_field(reader, header_offset, SH_SIZE)?,
            })
        })
        .collect()
}

/// Finds a section by name.
pub fn find_section<'a>(sections: &'a [Section], name: &str) -> Result<&'a Section> {
    sections
        .iter()
        .find(|section| section.name == name)
        .with_context(|| format!("section {} not found", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elf::testing::*;
    use std::io::Cursor;

    #[test]
    fn parses_sections_from_in_memory_layout() {
        let mut reader = Cursor::new(sample_elf());
        let header = ElfHeader::read(&mut reader).unwrap();

        let sections = parse_sections(&mut reader, &header).unwrap();

        assert_eq!(
            sections.iter().map(|s| &*s.name).collect::<Vec<_>>(),
            [".text", ".shstrtab", ".dynsym", ".dynstr"],
        );
        assert_eq!(sections[header.e_shstrndx as usize].name, ".shstrtab");

        let text = find_section(&sections, ".text").unwrap();
        assert_eq!(
            *text,
            Section {
                name: ".text".to_owned(),
                header_offset: SHOFF as _,
                name_offset: 1,
                file_offset: TEXT as _,
                size: 0x10,
            },
        );
        assert!(find_section(&sections, ".missing").is_err());
    }

    #[test]
    fn no_sections() {
        let header = ElfHeader {
            e_shoff: 0,
            e_shnum: 0,
            e_shstrndx: 0,
            e_shentsize: SHENTSIZE as _,
        };
        let sections = parse_sections(&mut Cursor::new(Vec::new()), &header).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn string_table_index_out_of_range() {
        let mut data = sample_elf();
        write_int(&mut data, 0x3E, 4, 2);
        let mut reader = Cursor::new(data);
        let header = ElfHeader::read(&mut reader).unwrap();

        assert!(parse_sections(&mut reader, &header).is_err());
    }

    #[test]
    fn truncated_section_table() {
        let mut data = sample_elf();
        data.truncate(SHOFF + SHENTSIZE + 8);
        let mut reader = Cursor::new(data);
        let header = ElfHeader::read(&mut reader).unwrap();

        assert!(parse_sections(&mut reader, &header).is_err());
    }
}
