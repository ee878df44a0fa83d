//! Minimal reader for the section headers and dynamic symbol table of 64-bit
//! little-endian ELF files.
//!
//! Layouts follow <https://en.wikipedia.org/wiki/Executable_and_Linkable_Format>
//! and `/usr/include/elf.h`. Only the fields needed to resolve section and
//! symbol names are read.

pub mod header;
pub mod section;
pub mod symbol;

pub use self::{
    header::ElfHeader,
    section::{find_section, parse_sections, Section},
    symbol::list_dynamic_symbols,
};

use anyhow::{ensure, Context as _, Result};
use std::io::{Read, Seek, SeekFrom};

/// An ELF file with its section headers parsed.
pub struct ElfFile<R> {
    reader: R,
    header: ElfHeader,
    sections: Vec<Section>,
}

impl<R> ElfFile<R>
where
    R: Read + Seek,
{
    /// Reads the ELF header and section headers.
    pub fn parse(mut reader: R) -> Result<Self> {
        let header = ElfHeader::read(&mut reader)?;
        let sections = parse_sections(&mut reader, &header)?;

        Ok(Self {
            reader,
            header,
            sections,
        })
    }

    /// Returns the ELF header.
    pub fn header(&self) -> &ElfHeader {
        &self.header
    }

    /// Returns all sections in header table order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section with the specified name.
    pub fn section(&self, name: &str) -> Result<&Section> {
        find_section(&self.sections, name)
    }

    /// Lists the names of the symbols in the `dynsym` symbol table, resolved
    /// through the `dynstr` string table.
    pub fn dynamic_symbols(&mut self, dynsym: &str, dynstr: &str) -> Result<Vec<String>> {
        let dynsym = find_section(&self.sections, dynsym)?;
        let dynstr = find_section(&self.sections, dynstr)?;
        list_dynamic_symbols(&mut self.reader, dynsym, dynstr)
    }
}

/// A fixed size integer field within an ELF structure.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Offset of the field from the start of its structure.
    pub offset: u64,
    /// Size of the field in bytes.
    pub size: usize,
}

/// Reads `field` of the structure starting at `base`.
pub fn read_field<R>(reader: &mut R, base: u64, field: Field) -> Result<u64>
where
    R: Read + Seek,
{
    read_int(reader, at(base, field.offset)?, field.size)
}

/// Reads a little-endian unsigned integer of `size` bytes at `offset`.
pub fn read_int<R>(reader: &mut R, offset: u64, size: usize) -> Result<u64>
where
    R: Read + Seek,
{
    ensure!(size <= 8, "cannot read a {} byte integer", size);

    let mut bytes = [0; 8];
    reader.seek(SeekFrom::Start(offset))?;
    reader
        .read_exact(&mut bytes[..size])
        .with_context(|| format!("truncated {} byte integer at {:#x}", size, offset))?;

    Ok(u64::from_le_bytes(bytes))
}

/// Reads a NUL-terminated UTF-8 string at `offset`. A string that runs into
/// the end of the input ends there.
pub fn read_str<R>(reader: &mut R, offset: u64) -> Result<String>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(offset))?;

    let mut bytes = Vec::new();
    for byte in reader.by_ref().bytes() {
        match byte? {
            0 => break,
            byte => bytes.push(byte),
        }
    }

    String::from_utf8(bytes).with_context(|| format!("invalid UTF-8 string at {:#x}", offset))
}

/// Returns `base + offset`, failing instead of overflowing on corrupt input.
pub fn at(base: u64, offset: u64) -> Result<u64> {
    base.checked_add(offset)
        .with_context(|| format!("offset {:#x} + {:#x} overflows", base, offset))
}
