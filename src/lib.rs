//! Tid - data-testid injector for Chakra UI
//!
//! Tid is a CLI tool and library that adds stable `data-testid` attributes to
//! Chakra UI elements in JSX/TSX files. It detects which JSX tags are Chakra
//! components (or Chakra-style wrappers), derives a readable identifier for
//! each from the element's own attributes, and writes a sibling
//! `<name>_with_testids<ext>` file that differs from the input only by the
//! inserted attributes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, run pipeline)
//! - `detect`: Import scanning that builds the recognized component set
//! - `edits`: Minimal-diff source splicing at recorded byte offsets
//! - `injector`: The pure text-to-text injection pipeline
//! - `parsers`: SWC-based JSX/TSX parsing
//! - `report`: Change summary accumulation and printing
//! - `testid`: Identifier synthesis and uniqueness registry
//! - `visitor`: AST walk that decides which elements get tagged

pub mod cli;
pub mod detect;
pub mod edits;
pub mod injector;
pub mod parsers;
pub mod report;
pub mod testid;
pub mod visitor;
