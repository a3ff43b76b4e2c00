//! Constant pool plumbing shared by the reader and writer.
//!
//! Indices are 1-based; index 0 is reserved and means "none" where the body
//! allows it (absent super type).

use crate::{ContainerError, TypePath};
use std::collections::HashMap;

pub(crate) const TAG_UTF8: u8 = 1;
pub(crate) const TAG_TYPE: u8 = 2;

///
/// PoolEntry
///

#[derive(Clone, Debug)]
pub(crate) enum PoolEntry {
    Utf8(String),
    Type { name_index: u16 },
}

///
/// Pool
/// A parsed constant pool, resolved on demand.
///

#[derive(Debug, Default)]
pub(crate) struct Pool {
    entries: Vec<PoolEntry>,
}

impl Pool {
    pub fn push(&mut self, entry: PoolEntry) {
        self.entries.push(entry);
    }

    fn get(&self, index: u16) -> Result<&PoolEntry, ContainerError> {
        if index == 0 {
            return Err(ContainerError::BadPoolIndex(index));
        }
        self.entries
            .get(usize::from(index) - 1)
            .ok_or(ContainerError::BadPoolIndex(index))
    }

    pub fn utf8(&self, index: u16) -> Result<&str, ContainerError> {
        match self.get(index)? {
            PoolEntry::Utf8(s) => Ok(s),
            PoolEntry::Type { .. } => Err(ContainerError::WrongEntryKind {
                index,
                expected: "Utf8",
            }),
        }
    }

    pub fn type_path(&self, index: u16) -> Result<TypePath, ContainerError> {
        match self.get(index)? {
            PoolEntry::Type { name_index } => Ok(TypePath::new(self.utf8(*name_index)?)),
            PoolEntry::Utf8(_) => Err(ContainerError::WrongEntryKind {
                index,
                expected: "Type",
            }),
        }
    }

    /// Reject Type entries whose name index does not resolve to a Utf8 entry,
    /// referenced or not.
    pub fn validate(&self) -> Result<(), ContainerError> {
        for entry in &self.entries {
            if let PoolEntry::Type { name_index } = entry {
                self.utf8(*name_index)?;
            }
        }
        Ok(())
    }
}

///
/// PoolBuilder
/// Deduplicating pool assembly for the writer.
///

#[derive(Debug, Default)]
pub(crate) struct PoolBuilder {
    entries: Vec<PoolEntry>,
    utf8_index: HashMap<String, u16>,
    type_index: HashMap<String, u16>,
}

impl PoolBuilder {
    pub fn utf8(&mut self, s: &str) -> Result<u16, ContainerError> {
        if let Some(&index) = self.utf8_index.get(s) {
            return Ok(index);
        }
        if s.len() > usize::from(u16::MAX) {
            return Err(ContainerError::StringTooLong(s.len()));
        }

        let index = self.push(PoolEntry::Utf8(s.to_string()))?;
        self.utf8_index.insert(s.to_string(), index);
        Ok(index)
    }

    pub fn type_ref(&mut self, path: &TypePath) -> Result<u16, ContainerError> {
        if let Some(&index) = self.type_index.get(path.as_str()) {
            return Ok(index);
        }

        let name_index = self.utf8(path.as_str())?;
        let index = self.push(PoolEntry::Type { name_index })?;
        self.type_index.insert(path.as_str().to_string(), index);
        Ok(index)
    }

    fn push(&mut self, entry: PoolEntry) -> Result<u16, ContainerError> {
        // index n+1 and the count field (entries + 1) must both fit in a u16
        if self.entries.len() + 1 >= usize::from(u16::MAX) {
            return Err(ContainerError::PoolOverflow(self.entries.len()));
        }
        self.entries.push(entry);

        let index = u16::try_from(self.entries.len())
            .map_err(|_| ContainerError::PoolOverflow(self.entries.len()))?;
        Ok(index)
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }
}

///
/// TESTS
///
