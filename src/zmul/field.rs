// zmul/field.rs

/// A contiguous bit-field of a 32-bit instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub lo: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(lo: u8, width: u8) -> Self {
        Self { lo, width }
    }

    #[inline] pub const fn hi(&self) -> u8 { self.lo + self.width - 1 }

    /// Bits of the field in place, e.g. `0b111 << 12` for funct3.
    #[inline] pub const fn mask(&self) -> u32 { ((1u32 << self.width) - 1) << self.lo }

    #[inline] pub fn get(&self, word: u32) -> u32 { bits(word, self.hi(), self.lo) }

    /// Clears the field and stores `value` in it. Bits of `value` that do
    /// not fit the field are dropped.
    #[inline] pub fn set(&self, word: u32, value: u32) -> u32 { with_bits(word, self.hi(), self.lo, value) }
}

#[inline] pub fn bits(v: u32, hi: u8, lo: u8) -> u32 { (v >> lo) & ((1u32 << (hi - lo + 1)) - 1) }

#[inline] pub fn with_bits(v: u32, hi: u8, lo: u8, value: u32) -> u32 {
    let mask = ((1u32 << (hi - lo + 1)) - 1) << lo;
    (v & !mask) | ((value << lo) & mask)
}
