use std::path::Path;

use super::errors::PatchError;
use super::image::Image;
use super::site::PatchSite;

/// What happened to the site. The image is only modified on `Patched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Patched { offset: usize, before: u32, after: u32 },
    /// The word at the site is not the expected encoding.
    Mismatch { offset: usize, found: u32 },
    /// The image ends before the 4-byte word at the site does.
    OutOfRange { len: usize },
}

/// Rewrites the site inside `img` if, and only if, it holds the expected word.
pub fn apply(img: &mut Image, site: &PatchSite) -> Outcome {
    let len = img.len();
    let Some(offset) = site.file_offset() else {
        return Outcome::OutOfRange { len };
    };
    let Some(slot) = img.word_mut(offset) else {
        return Outcome::OutOfRange { len };
    };

    let before = u32::from_le_bytes(*slot);
    if before != site.expected {
        return Outcome::Mismatch { offset, found: before };
    }

    let after = site.replacement();
    *slot = after.to_le_bytes();
    Outcome::Patched { offset, before, after }
}

/// Reads `path`, applies `site` and writes the whole image back in place.
/// The file is rewritten even when nothing changed.
pub fn patch_file(path: &Path, site: &PatchSite) -> Result<Outcome, PatchError> {
    let mut img = Image::load(path)?;
    let outcome = apply(&mut img, site);
    img.save(path)?;
    Ok(outcome)
}
