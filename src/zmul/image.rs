use std::fs;
use std::path::Path;

use super::errors::PatchError;

/// Full contents of a program image, held in memory between one read and
/// one write of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let bytes = fs::read(path).map_err(|source| PatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(bytes))
    }

    /// Overwrites `path` with the whole buffer, truncating whatever was there.
    pub fn save(&self, path: &Path) -> Result<(), PatchError> {
        fs::write(path, &self.bytes).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    // 32-bit little-endian word; None when [addr, addr + 4) leaves the image
    pub fn read_word(&self, addr: usize) -> Option<u32> {
        let end = addr.checked_add(4)?;
        let raw = self.bytes.get(addr..end)?;
        Some(u32::from_le_bytes(raw.try_into().ok()?))
    }

    /// The 4 bytes at [addr, addr + 4), or None when they leave the image.
    pub fn word_mut(&mut self, addr: usize) -> Option<&mut [u8; 4]> {
        let end = addr.checked_add(4)?;
        self.bytes.get_mut(addr..end)?.try_into().ok()
    }
}

impl From<Vec<u8>> for Image {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
