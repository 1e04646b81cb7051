use std::fmt;
use std::path::{Component, Path};

pub const PAK_IDENT: [u8; 4] = *b"PACK";
pub const PAK_HEADER_LEN: usize = 12;
pub const PAK_DIR_ENTRY_LEN: usize = 64;
pub const PAK_NAME_LEN: usize = 56;
pub const MAX_PAK_ENTRIES: usize = 2048;

#[derive(Debug, PartialEq, Eq)]
pub enum PakError {
    EmptyArchive,
    TooManyEntries { entries: usize },
    NameTooLong { name: String },
    DuplicateName { name: String },
    UnsafePath(String),
    ArchiveTooLarge,
}

impl fmt::Display for PakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PakError::EmptyArchive => write!(f, "pak has no entries"),
            PakError::TooManyEntries { entries } => {
                write!(f, "pak directory has too many entries: {}", entries)
            }
            PakError::NameTooLong { name } => write!(
                f,
                "pak entry name exceeds {} bytes: {}",
                PAK_NAME_LEN - 1,
                name
            ),
            PakError::DuplicateName { name } => write!(f, "duplicate pak entry: {}", name),
            PakError::UnsafePath(name) => write!(f, "pak entry path is unsafe: {}", name),
            PakError::ArchiveTooLarge => write!(f, "pak archive exceeds 4 GiB"),
        }
    }
}

impl std::error::Error for PakError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PakEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Collects files and lays them out as a Quake PAK: header, file data in
/// insertion order, then the directory.
#[derive(Debug, Default)]
pub struct PakBuilder {
    entries: Vec<PakEntry>,
}

impl PakBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PakEntry] {
        &self.entries
    }

    pub fn add(&mut self, name: &str, data: Vec<u8>) -> Result<(), PakError> {
        let name = sanitize_name(name);
        check_entry_name(&name)?;
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(PakError::DuplicateName { name });
        }
        if self.entries.len() >= MAX_PAK_ENTRIES {
            return Err(PakError::TooManyEntries {
                entries: self.entries.len() + 1,
            });
        }
        self.entries.push(PakEntry { name, data });
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>, PakError> {
        if self.entries.is_empty() {
            return Err(PakError::EmptyArchive);
        }
        let data_len: usize = self.entries.iter().map(|entry| entry.data.len()).sum();
        let dir_offset = PAK_HEADER_LEN + data_len;
        let dir_len = self.entries.len() * PAK_DIR_ENTRY_LEN;
        let total = dir_offset + dir_len;
        if u32::try_from(total).is_err() {
            return Err(PakError::ArchiveTooLarge);
        }

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&PAK_IDENT);
        out.extend_from_slice(&(dir_offset as u32).to_le_bytes());
        out.extend_from_slice(&(dir_len as u32).to_le_bytes());

        let mut offsets = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            offsets.push(out.len() as u32);
            out.extend_from_slice(&entry.data);
        }

        for (entry, offset) in self.entries.iter().zip(offsets) {
            let mut name = [0u8; PAK_NAME_LEN];
            name[..entry.name.len()].copy_from_slice(entry.name.as_bytes());
            out.extend_from_slice(&name);
            out.extend_from_slice(&offset.to_le_bytes());
            out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
        }
        Ok(out)
    }
}

fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim_matches(char::from(0));
    trimmed.replace('\\', "/")
}

fn check_entry_name(name: &str) -> Result<(), PakError> {
    if name.is_empty() || name.starts_with('/') {
        return Err(PakError::UnsafePath(name.to_string()));
    }
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(PakError::UnsafePath(name.to_string())),
        }
    }
    if name.len() >= PAK_NAME_LEN {
        return Err(PakError::NameTooLong {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(data: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    #[test]
    fn layout_with_two_entries() {
        let mut pak = PakBuilder::new();
        pak.add("gfx/a.lmp", vec![1, 2, 3]).unwrap();
        pak.add("maps\\b.bsp", vec![4, 5]).unwrap();
        let data = pak.encode().expect("encode");

        assert_eq!(&data[0..4], b"PACK");
        let dir_offset = u32_at(&data, 4) as usize;
        let dir_len = u32_at(&data, 8) as usize;
        assert_eq!(dir_offset, 12 + 5);
        assert_eq!(dir_len, 2 * 64);
        assert_eq!(data.len(), dir_offset + dir_len);
        assert_eq!(&data[12..17], &[1, 2, 3, 4, 5]);

        let second = dir_offset + 64;
        assert_eq!(&data[second..second + 10], b"maps/b.bsp");
        assert_eq!(data[second + 10], 0);
        assert_eq!(u32_at(&data, second + 56), 15);
        assert_eq!(u32_at(&data, second + 60), 2);
    }

    #[test]
    fn rejects_duplicates_and_unsafe_names() {
        let mut pak = PakBuilder::new();
        pak.add("progs/progs.dat", vec![]).unwrap();
        assert!(matches!(
            pak.add("progs/progs.dat", vec![]),
            Err(PakError::DuplicateName { .. })
        ));
        assert!(matches!(
            pak.add("../escape.txt", vec![]),
            Err(PakError::UnsafePath(_))
        ));
        assert!(matches!(
            pak.add("/abs.txt", vec![]),
            Err(PakError::UnsafePath(_))
        ));
        assert_eq!(pak.entries().len(), 1);
    }

    #[test]
    fn rejects_long_names() {
        let mut pak = PakBuilder::new();
        let name = "a".repeat(56);
        assert!(matches!(
            pak.add(&name, vec![]),
            Err(PakError::NameTooLong { .. })
        ));
        pak.add(&"b".repeat(55), vec![]).expect("55 bytes fits");
    }

    #[test]
    fn entry_limit() {
        let mut pak = PakBuilder::new();
        for index in 0..MAX_PAK_ENTRIES {
            pak.add(&format!("gfx/{}.lmp", index), vec![]).unwrap();
        }
        let err = pak.add("gfx/overflow.lmp", vec![]).expect_err("limit");
        assert_eq!(err, PakError::TooManyEntries { entries: 2049 });
        assert_eq!(pak.entries().len(), 2048);
    }

    #[test]
    fn empty_archive_is_an_error() {
        assert_eq!(PakBuilder::new().encode(), Err(PakError::EmptyArchive));
    }
}
