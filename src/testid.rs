//! Test identifier synthesis.
//!
//! The registry guarantees uniqueness within one run: for a base string
//! requested `n` times it has emitted exactly the suffixes `1..n`. Base
//! strings are derived from the element's own attributes through an ordered
//! chain of extraction strategies; each strategy returns an optional suffix
//! and the first non-empty result wins. Unexpected attribute shapes simply
//! fall through to the next strategy, never abort the run.

use std::collections::HashMap;

use swc_ecma_ast::{
    Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXExpr, MemberProp, OptChainBase,
};

/// Tag name (lower-cased) that triggers the image `src` heuristic.
const IMAGE_TAG: &str = "image";

/// Per-run counter registry mapping base identifier strings to how many
/// times they have been requested. Never shared between runs.
#[derive(Debug, Default)]
pub struct IdRegistry {
    counters: HashMap<String, usize>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique identifier for an element from its tag name and
    /// attribute list. Deterministic given the sequence of calls so far.
    pub fn synthesize(&mut self, tag_name: &str, attrs: &[JSXAttrOrSpread]) -> String {
        let lower = tag_name.to_lowercase();
        let base = match derive_suffix(&lower, attrs) {
            Some(suffix) => format!("{}-{}", lower, suffix),
            None => lower,
        };

        let count = self.counters.entry(base.clone()).or_insert(0);
        *count += 1;
        format!("{}-{}", base, count)
    }
}

fn derive_suffix(lower_tag: &str, attrs: &[JSXAttrOrSpread]) -> Option<String> {
    suffix_from_class_name(attrs)
        .or_else(|| suffix_from_id(attrs))
        .or_else(|| {
            if lower_tag == IMAGE_TAG {
                suffix_from_image_src(attrs)
            } else {
                None
            }
        })
}

/// `className={Styles.cardWrapper}` -> `cardWrapper`,
/// `className="card-wrapper extra"` -> `card-wrapper`.
fn suffix_from_class_name(attrs: &[JSXAttrOrSpread]) -> Option<String> {
    let attr = find_attr(attrs, "className")?;
    match attr.value.as_ref()? {
        JSXAttrValue::JSXExprContainer(container) => {
            let JSXExpr::Expr(expr) = &container.expr else {
                return None;
            };
            member_prop_name(expr)
        }
        JSXAttrValue::Str(s) => {
            let token = s.value.as_str()?.split_whitespace().next()?;
            Some(sanitize(token))
        }
        _ => None,
    }
}

/// `id="login-form"` -> `login-form`.
fn suffix_from_id(attrs: &[JSXAttrOrSpread]) -> Option<String> {
    let attr = find_attr(attrs, "id")?;
    match attr.value.as_ref()? {
        JSXAttrValue::Str(s) => s
            .value
            .as_str()
            .map(|v| v.to_string())
            // An empty id would leave a dangling `-`-terminated base.
            .filter(|v| !v.is_empty()),
        _ => None,
    }
}

/// `src={Logo}` -> `logo`, `src={assets.headerLogo}` -> `headerlogo`.
fn suffix_from_image_src(attrs: &[JSXAttrOrSpread]) -> Option<String> {
    let attr = find_attr(attrs, "src")?;
    let JSXAttrValue::JSXExprContainer(container) = attr.value.as_ref()? else {
        return None;
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        return None;
    };
    match &**expr {
        Expr::Ident(ident) => Some(ident.sym.to_lowercase()),
        _ => member_prop_name(expr).map(|name| name.to_lowercase()),
    }
}

/// Find a plain (non-spread, non-namespaced) attribute by name.
fn find_attr<'a>(attrs: &'a [JSXAttrOrSpread], name: &str) -> Option<&'a JSXAttr> {
    attrs.iter().find_map(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(ident) if ident.sym.as_str() == name) =>
        {
            Some(attr)
        }
        _ => None,
    })
}

/// Accessed property name of a property-access expression, including the
/// optional-chained form (`Styles.foo` and `Styles?.foo`).
fn member_prop_name(expr: &Expr) -> Option<String> {
    let member = match expr {
        Expr::Member(member) => member,
        Expr::OptChain(chain) => match &*chain.base {
            OptChainBase::Member(member) => member,
            _ => return None,
        },
        _ => return None,
    };
    match &member.prop {
        MemberProp::Ident(ident) => Some(ident.sym.to_string()),
        _ => None,
    }
}

/// Replace every character outside `[A-Za-z0-9_-]` with `-`.
fn sanitize(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
