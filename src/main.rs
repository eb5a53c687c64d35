mod cli;

use std::path::Path;

use zmulpatch::{MULW_TO_ZMUL, Outcome, PatchError, PatchSite, patch_file};

fn main() {
    let matches = cli::build_cli().get_matches();

    let Some(path) = cli::binary_path(&matches) else {
        println!("{}", cli::USAGE);
        std::process::exit(-1);
    };

    if let Err(e) = run(&path, &MULW_TO_ZMUL) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &Path, site: &PatchSite) -> Result<(), PatchError> {
    let outcome = patch_file(path, site)?;
    match render(site, &outcome) {
        (Stream::Stdout, line) => println!("{line}"),
        (Stream::Stderr, line) => eprintln!("{line}"),
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

// Only a mismatch is a user-facing warning; the rest are notes.
fn render(site: &PatchSite, outcome: &Outcome) -> (Stream, String) {
    match *outcome {
        Outcome::Patched { offset, before, after } => (
            Stream::Stderr,
            format!(
                "note: patched {} -> zmul at offset 0x{offset:x} (0x{before:08x} -> 0x{after:08x})",
                site.name
            ),
        ),
        Outcome::Mismatch { offset, found } => (
            Stream::Stdout,
            format!(
                "Warning: Expected {} instruction not found at offset 0x{offset:x} (found 0x{found:08x})",
                site.name
            ),
        ),
        Outcome::OutOfRange { len } => (
            Stream::Stderr,
            format!(
                "note: skipped: image too short ({len} bytes) for {} at 0x{:x}",
                site.name, site.target_addr
            ),
        ),
    }
}
