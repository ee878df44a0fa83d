//! ELF file header.

use super::{read_field, Field};
use anyhow::{ensure, Context as _, Result};
use serde::Serialize;
use std::io::{Read, Seek, SeekFrom};

pub const ELF_MAGIC: [u8; 4] = *b"\x7fELF";
pub const EI_CLASS: usize = 4;
pub const EI_DATA: usize = 5;
pub const ELFCLASS64: u8 = 2;
pub const ELFDATA2LSB: u8 = 1;

const E_SHOFF: Field = Field {
    offset: 0x28,
    size: 8,
};
const E_SHENTSIZE: Field = Field {
    offset: 0x3A,
    size: 2,
};
const E_SHNUM: Field = Field {
    offset: 0x3C,
    size: 2,
};
const E_SHSTRNDX: Field = Field {
    offset: 0x3E,
    size: 2,
};

/// The parts of the ELF header describing the section header table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ElfHeader {
    /// File offset of the section header table.
    pub e_shoff: u64,
    /// Number of section headers.
    pub e_shnum: u64,
    /// Index of the section holding the section names.
    pub e_shstrndx: u64,
    /// Size of a single section header.
    pub e_shentsize: u64,
}

impl ElfHeader {
    /// Reads the header of a 64-bit little-endian ELF file.
    pub fn read<R>(reader: &mut R) -> Result<Self>
    where
        R: Read + Seek,
    {
        let mut ident = [0; 6];
        reader.seek(SeekFrom::Start(0))?;
        reader
            .read_exact(&mut ident)
            .context("file too short for an ELF identification")?;
        ensure!(ident[..4] == ELF_MAGIC, "not an ELF file");
        ensure!(
            ident[EI_CLASS] == ELFCLASS64,
            "only 64-bit ELF files are supported",
        );
        ensure!(
            ident[EI_DATA] == ELFDATA2LSB,
            "only little-endian ELF files are supported",
        );

        Ok(Self {
            e_shoff: read_field(reader, 0, E_SHOFF)?,
            e_shnum: read_field(reader, 0, E_SHNUM)?,
            e_shstrndx: read_field(reader, 0, E_SHSTRNDX)?,
            e_shentsize: read_field(reader, 0, E_SHENTSIZE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elf::testing::{sample_elf, SHENTSIZE, SHOFF};
    use std::io::Cursor;

    #[test]
    fn reads_section_table_fields() {
        let header = ElfHeader::read(&mut Cursor::new(sample_elf())).unwrap();
        assert_eq!(
            header,
            ElfHeader {
                e_shoff: SHOFF as _,
                e_shnum: 4,
                e_shstrndx: 1,
                e_shentsize: SHENTSIZE as _,
            },
        );
    }

    #[test]
    fn rejects_other_files() {
        let read = |data: Vec<u8>| ElfHeader::read(&mut Cursor::new(data));

        assert!(read(b"\x7fEL".to_vec()).is_err());
        assert!(read(vec![0; 0x40]).is_err());

        let mut elf32 = sample_elf();
        elf32[EI_CLASS] = 1;
        assert!(read(elf32).is_err());

        let mut big_endian = sample_elf();
        big_endian[EI_DATA] = 2;
        assert!(read(big_endian).is_err());

        let mut truncated = sample_elf();
        truncated.truncate(0x30);
        assert!(read(truncated).is_err());
    }
}
