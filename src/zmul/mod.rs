pub mod arch;
pub mod errors;
pub mod field;
pub mod image;
pub mod patcher;
pub mod site;


pub use errors::PatchError;
pub use image::Image;
pub use patcher::{Outcome, apply, patch_file};
pub use site::{MULW_TO_ZMUL, PatchSite};
