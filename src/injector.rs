//! The text-to-text injection pipeline.
//!
//! IO-free so it can be driven directly on strings: detection, parsing, the
//! walk, and splicing happen back-to-back with no suspension points. The
//! component set and identifier registry are constructed fresh for every
//! call, so independent invocations never interfere.

use anyhow::Result;
use swc_ecma_visit::VisitWith;

use crate::detect::ComponentSet;
use crate::edits::apply_insertions;
use crate::parsers::jsx::parse_jsx_source;
use crate::report::ChangeReport;
use crate::visitor::TestIdVisitor;

/// Result of one injection run.
pub struct Injection {
    /// The rewritten source text.
    pub output: String,
    /// The component set the walk used.
    pub components: ComponentSet,
    /// What changed, for the console report.
    pub report: ChangeReport,
}

/// Inject `data-testid` attributes into one JSX/TSX source.
///
/// `file_path` is used for parse diagnostics only.
pub fn inject_test_ids(source: String, file_path: &str) -> Result<Injection> {
    let components = ComponentSet::detect(&source);
    let parsed = parse_jsx_source(source, file_path)?;

    let mut visitor = TestIdVisitor::new(&components, &parsed.source, parsed.start_pos);
    parsed.module.visit_with(&mut visitor);

    let insertions = visitor.insertions;
    let report = visitor.report;
    let output = apply_insertions(&parsed.source, insertions);

    Ok(Injection {
        output,
        components,
        report,
    })
}
