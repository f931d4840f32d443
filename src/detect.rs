//! Component set detection from import statements.
//!
//! A best-effort regex pre-pass over the raw source text, run before the file
//! is parsed. Each import shape gets its own pass over the whole file. The
//! result decides which JSX tags the walker is allowed to tag, so
//! over-detection here only risks extra identifiers, never broken output.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Package prefix that marks a module path as Chakra-owned,
/// e.g. `@chakra-ui/react` or `@chakra-ui/icons`.
pub const FRAMEWORK_PACKAGE_PREFIX: &str = "@chakra-ui";

/// Components assumed present when no Chakra imports could be classified.
pub const FALLBACK_COMPONENTS: [&str; 9] = [
    "Box",
    "Flex",
    "VStack",
    "HStack",
    "Image",
    "Text",
    "Button",
    "Container",
    "Input",
];

/// `import { Box, Text as ChakraText } from '@chakra-ui/react'`
static NAMED_IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+["']([^"']+)["']"#).unwrap()
});

/// `import Box from '@chakra-ui/react'`
static DEFAULT_IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+(\w+)\s+from\s+["']([^"']+)["']"#).unwrap());

/// Default imports whose local name suggests a Chakra-style wrapper component,
/// regardless of where they come from. Locally wrapped components re-export
/// Chakra primitives under new names, so import-path matching alone misses them.
static WRAPPER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"import\s+(\w+(?:Tool|Modal|Tooltip|Container|Button|Box|Card|Element))\s+from")
        .unwrap()
});

/// The set of tag names treated as framework components for one run.
///
/// Built once per invocation from import analysis and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ComponentSet {
    names: HashSet<String>,
    used_fallback: bool,
}

impl ComponentSet {
    /// Scan the raw source text and build the recognized component set.
    ///
    /// If nothing recognizable is found, the fixed fallback list is used so
    /// the tool still does useful work on files with non-standard imports.
    pub fn detect(source: &str) -> Self {
        let mut names: HashSet<String> = HashSet::new();

        for caps in NAMED_IMPORT_REGEX.captures_iter(source) {
            if !is_framework_package(&caps[2]) {
                continue;
            }
            for import in caps[1].split(',') {
                // `Button as ChakraButton` binds the local alias, not the
                // exported name.
                let local = match import.split_once(" as ") {
                    Some((_, alias)) => alias.trim(),
                    None => import.trim(),
                };
                if !local.is_empty() {
                    names.insert(local.to_string());
                }
            }
        }

        for caps in DEFAULT_IMPORT_REGEX.captures_iter(source) {
            if is_framework_package(&caps[2]) {
                names.insert(caps[1].to_string());
            }
        }

        for caps in WRAPPER_NAME_REGEX.captures_iter(source) {
            names.insert(caps[1].to_string());
        }

        let used_fallback = names.is_empty();
        if used_fallback {
            names.extend(FALLBACK_COMPONENTS.iter().map(|s| s.to_string()));
        }

        Self {
            names,
            used_fallback,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True when the fixed fallback list was substituted for an empty scan.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    /// Names in alphabetical order, for stable report output.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn is_framework_package(module_path: &str) -> bool {
    module_path.starts_with(FRAMEWORK_PACKAGE_PREFIX)
}
