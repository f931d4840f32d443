//! Main entry point for the tid CLI.
//!
//! The run is strictly linear: read the input, inject identifiers, write the
//! output next to the input, print the report. Any failure surfaces as an
//! `Err` that main turns into a one-line stderr diagnostic and exit code 1.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::injector::inject_test_ids;
use crate::report;

pub fn run(Arguments { file }: Arguments) -> Result<ExitStatus> {
    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let injection = inject_test_ids(source, &file.to_string_lossy())?;

    let output = output_path(&file);
    write_output(&output, &injection.output)?;

    report::print(&injection.components, &injection.report, &output);

    Ok(ExitStatus::Success)
}

/// Derive the output path: same directory, `<stem>_with_testids<ext>`.
///
/// The input file is never overwritten in place.
fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let name = match input.extension() {
        Some(ext) => format!("{}_with_testids.{}", stem, ext.to_string_lossy()),
        None => format!("{}_with_testids", stem),
    };

    input.with_file_name(name)
}

/// Write through a sibling temporary path and rename into place, so a failed
/// write never leaves a half-written output file behind.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    tmp_name.push_str(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write output: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to write output: {}", path.display()))?;

    Ok(())
}
