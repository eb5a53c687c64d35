// zmul/arch.rs
use super::field::Field;

// Image layout
pub const LOAD_BASE: u64 = 0x1_0000;
pub const MULW_ADDR: u64 = 0x1_0624;

// Major opcode
pub const OPC_OP32: u32 = 0x3B; // OP-32 (addw/subw/mulw/...)

// funct3 lives in bits 14..12 of every R-type word
pub const FUNCT3: Field = Field::new(12, 3);

pub const F3_MULW: u32 = 0b000;
pub const F3_ZMUL: u32 = 0b001;

// mulw a4, a4, a5
pub const MULW_WORD: u32 = 0x02F7_07BB;
// same operands with funct3 = F3_ZMUL
pub const ZMUL_WORD: u32 = 0x02F7_17BB;
