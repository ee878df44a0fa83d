//! Dynamic symbol table.

use super::{at, read_field, read_str, Field, Section};
use anyhow::Result;
use std::io::{Read, Seek};

/// Size of an `Elf64_Sym` symbol table entry.
pub const ST_SIZE: u64 = 24;
pub const ST_NAME: Field = Field { offset: 0, size: 4 };

/// Lists the names of all entries in the `dynsym` symbol table, resolved
/// through the `dynstr` string table. The first entry of a symbol table is
/// reserved and has an empty name.
pub fn list_dynamic_symbols<R>(
    reader: &mut R,
    dynsym: &Section,
    dynstr: &Section,
) -> Result<Vec<String>>
where
    R: Read + Seek,
{
    (0..dynsym.size / ST_SIZE)
        .map(|i| -> Result<String> {
            let entry = at(dynsym.file_offset, i * ST_SIZE)?;
            let name_offset = read_field(reader, entry, ST_NAME)?;
            read_str(reader, at(dynstr.file_offset, name_offset)?)
        })
        .collect()
}
