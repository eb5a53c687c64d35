//! Rewrites the `mulw` at 0x10624 of an RV64 image into its zmul variant.

pub mod zmul;

pub use zmul::{MULW_TO_ZMUL, Outcome, PatchError, PatchSite, patch_file};
