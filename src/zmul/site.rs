// zmul/site.rs
use super::arch::*;
use super::field::Field;

/// One instruction to rewrite: where it lives, what must be there, and
/// which field gets which value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSite {
    pub name: &'static str,
    pub target_addr: u64,
    pub load_base: u64,
    pub expected: u32,
    pub field: Field,
    pub value: u32,
}

/// `mulw a4, a4, a5` at 0x10624 becomes the zmul variant (funct3 = 0b001).
pub const MULW_TO_ZMUL: PatchSite = PatchSite {
    name: "mulw",
    target_addr: MULW_ADDR,
    load_base: LOAD_BASE,
    expected: MULW_WORD,
    field: FUNCT3,
    value: F3_ZMUL,
};

impl PatchSite {
    /// File offset of the target, or None if the target sits below the
    /// load base or does not fit in `usize`.
    pub fn file_offset(&self) -> Option<usize> {
        let off = self.target_addr.checked_sub(self.load_base)?;
        usize::try_from(off).ok()
    }

    /// Word the site is rewritten to.
    pub fn replacement(&self) -> u32 {
        self.field.set(self.expected, self.value)
    }
}
