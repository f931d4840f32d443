//! CLI argument definitions using clap.
//!
//! Tid is a single-purpose command: it takes one JSX/TSX file path and
//! produces a `<name>_with_testids<ext>` sibling, so there are no
//! subcommands. Missing arguments are reported by clap on stderr with a
//! non-zero exit.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the JSX/TSX file to process
    pub file: PathBuf,
}
