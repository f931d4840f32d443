//! Minimal-diff source regeneration.
//!
//! The walker records byte offsets instead of mutating the AST, so the output
//! is the original text with attribute snippets spliced in. Every byte of
//! pre-existing code, including line structure and quoting, survives
//! untouched.

/// One pending text insertion at a byte offset into the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub offset: usize,
    pub text: String,
}

/// Splice all insertions into `source` in one ascending pass.
///
/// Offsets refer to the original text; equal offsets keep insertion order.
pub fn apply_insertions(source: &str, mut insertions: Vec<Insertion>) -> String {
    insertions.sort_by_key(|insertion| insertion.offset);

    let extra: usize = insertions.iter().map(|insertion| insertion.text.len()).sum();
    let mut output = String::with_capacity(source.len() + extra);

    let mut last = 0;
    for insertion in &insertions {
        output.push_str(&source[last..insertion.offset]);
        output.push_str(&insertion.text);
        last = insertion.offset;
    }
    output.push_str(&source[last..]);

    output
}
