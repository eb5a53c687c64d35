//! Command-line surface: a single positional path to the image to patch.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

pub const USAGE: &str = "usage: zmulpatch </path/to/binaryfile>";

pub fn build_cli() -> Command {
    Command::new("zmulpatch")
        .about("Rewrite the mulw at 0x10624 of an RV64 image into zmul, in place")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(binary_arg())
}

/// Image to patch (positional). Optional so that a missing path can be
/// reported with our own usage line instead of clap's error.
pub fn binary_arg() -> Arg {
    Arg::new("binary")
        .value_name("BINARY")
        .value_parser(value_parser!(PathBuf))
        .help("Program image to patch in place")
}

pub fn binary_path(m: &ArgMatches) -> Option<PathBuf> {
    m.get_one::<PathBuf>("binary").cloned()
}
