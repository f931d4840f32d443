//! AST walk that decides which elements receive a test identifier.
//!
//! Visits every JSX opening element once in document order. Elements outside
//! the recognized component set, or already carrying a test identifier under
//! either accepted spelling, are left alone. Everything else gets one
//! insertion recording ` data-testid='<id>'` positioned after its last
//! existing attribute.

use swc_common::BytePos;
use swc_ecma_ast::{JSXAttrName, JSXAttrOrSpread, JSXElementName, JSXOpeningElement};
use swc_ecma_visit::{Visit, VisitWith};

use crate::detect::ComponentSet;
use crate::edits::Insertion;
use crate::report::ChangeReport;
use crate::testid::IdRegistry;

/// The attribute name written into output files. Downstream UI test
/// automation consumes these as stable selectors.
pub const TESTID_ATTR: &str = "data-testid";

/// Older spelling, still treated as "already tagged".
pub const LEGACY_TESTID_ATTR: &str = "data-test-id";

pub struct TestIdVisitor<'a> {
    components: &'a ComponentSet,
    source: &'a str,
    start_pos: BytePos,
    registry: IdRegistry,
    pub insertions: Vec<Insertion>,
    pub report: ChangeReport,
}

impl<'a> TestIdVisitor<'a> {
    pub fn new(components: &'a ComponentSet, source: &'a str, start_pos: BytePos) -> Self {
        Self {
            components,
            source,
            start_pos,
            registry: IdRegistry::new(),
            insertions: Vec::new(),
            report: ChangeReport::default(),
        }
    }

    fn process(&mut self, node: &JSXOpeningElement) {
        // Member (`<Chakra.Box>`) and namespaced names are never in the set.
        let JSXElementName::Ident(ident) = &node.name else {
            return;
        };
        let tag = ident.sym.as_str();
        if !self.components.contains(tag) {
            return;
        }
        if has_test_id(&node.attrs) {
            return;
        }

        let test_id = self.registry.synthesize(tag, &node.attrs);
        self.insertions.push(Insertion {
            offset: self.insert_offset(node),
            text: format!(" {}='{}'", TESTID_ATTR, test_id),
        });
        self.report.record(&test_id);
    }

    /// Byte offset just after the last attribute (or the tag name), before
    /// the closing `>` or `/>` and any whitespace in front of it.
    fn insert_offset(&self, node: &JSXOpeningElement) -> usize {
        let end = (node.span.hi.0 - self.start_pos.0) as usize;
        let head = &self.source[..end];
        let head = head.strip_suffix('>').unwrap_or(head);
        let head = head.strip_suffix('/').unwrap_or(head);
        head.trim_end().len()
    }
}

fn has_test_id(attrs: &[JSXAttrOrSpread]) -> bool {
    attrs.iter().any(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr) => match &attr.name {
            JSXAttrName::Ident(ident) => {
                let name = ident.sym.as_str();
                name == TESTID_ATTR || name == LEGACY_TESTID_ATTR
            }
            JSXAttrName::JSXNamespacedName(_) => false,
        },
        JSXAttrOrSpread::SpreadElement(_) => false,
    })
}

impl Visit for TestIdVisitor<'_> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        self.process(node);
        // Attribute values can hold nested JSX (`icon={<Icon />}`).
        node.visit_children_with(self);
    }
}
