//! Schema type expression to TypeScript type mapping.
//!
//! The mapper is an ordered table of `(Pattern, Rewrite)` rules. The first
//! pattern that matches the whole expression wins, and its rewrite may map
//! the captured inner expression recursively. Expressions no rule matches
//! are treated as references to named types and pass through unchanged.
//!
//! All integer widths collapse to `number`.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::mapper::map_type;
//!
//! assert_eq!(map_type("String"), "string");
//! assert_eq!(map_type("Option<Option<u64>>"), "number | null");
//! assert_eq!(map_type("Vec<Box<String>>"), "string[]");
//! assert_eq!(map_type("Vec<Option<String>>"), "(string | null)[]");
//! assert_eq!(map_type("UserProfile"), "UserProfile");
//! ```

use crate::ast::{TsPrimitive, TsType};
use crate::emit::Emit;
use tracing::debug;

/// Integer spellings that map to `number`.
pub const INTEGER_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// Shape a rule matches against a whole type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The expression is exactly this name
    Exact(&'static str),
    /// The expression is one of [`INTEGER_TYPES`]
    Integer,
    /// The expression is `name<inner>` with a non-empty, balanced `inner`
    Generic(&'static str),
}

impl Pattern {
    /// Returns the rule subject if `expr` matches.
    ///
    /// For generic patterns the subject is the inner expression, otherwise it
    /// is the expression itself.
    #[must_use]
    pub fn capture<'a>(&self, expr: &'a str) -> Option<&'a str> {
        match self {
            Self::Exact(name) => (expr == *name).then_some(expr),
            Self::Integer => INTEGER_TYPES.iter().any(|int| *int == expr).then_some(expr),
            Self::Generic(name) => expr
                .strip_prefix(*name)
                .and_then(|rest| rest.strip_prefix('<'))
                .and_then(|rest| rest.strip_suffix('>'))
                .filter(|inner| !inner.is_empty() && is_balanced(inner)),
        }
    }
}

/// Returns `true` if angle brackets in `expr` nest properly.
fn is_balanced(expr: &str) -> bool {
    let mut depth = 0usize;
    for ch in expr.chars() {
        match ch {
            '<' => depth += 1,
            '>' => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// How a matched expression is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace with a primitive keyword
    Primitive(TsPrimitive),
    /// Map the inner expression and admit `null`
    Nullable,
    /// Map the inner expression as is
    Transparent,
    /// Map the inner expression and make it an array
    ArrayOf,
}

impl Rewrite {
    fn apply(self, subject: &str) -> TsType {
        match self {
            Self::Primitive(primitive) => TsType::Primitive(primitive),
            Self::Nullable => map(subject).nullable(),
            Self::Transparent => map(subject),
            Self::ArrayOf => TsType::Array(Box::new(map(subject))),
        }
    }
}

/// One mapping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// What the rule matches
    pub pattern: Pattern,
    /// What a match becomes
    pub rewrite: Rewrite,
}

const fn rule(pattern: Pattern, rewrite: Rewrite) -> Rule {
    Rule { pattern, rewrite }
}

/// The mapping rules, in precedence order.
pub static RULES: &[Rule] = &[
    rule(Pattern::Exact("String"), Rewrite::Primitive(TsPrimitive::String)),
    rule(Pattern::Exact("bool"), Rewrite::Primitive(TsPrimitive::Boolean)),
    rule(Pattern::Integer, Rewrite::Primitive(TsPrimitive::Number)),
    rule(Pattern::Generic("Option"), Rewrite::Nullable),
    rule(Pattern::Exact("TempFile"), Rewrite::Primitive(TsPrimitive::Unknown)),
    rule(Pattern::Generic("Box"), Rewrite::Transparent),
    rule(Pattern::Exact("IpAddr"), Rewrite::Primitive(TsPrimitive::String)),
    rule(Pattern::Generic("Vec"), Rewrite::ArrayOf),
];

/// Maps a schema type expression to a TypeScript type.
///
/// Total: expressions no rule matches become named references.
#[must_use]
pub fn map(expr: &str) -> TsType {
    RULES
        .iter()
        .find_map(|rule| {
            rule.pattern
                .capture(expr)
                .map(|subject| rule.rewrite.apply(subject))
        })
        .unwrap_or_else(|| TsType::reference(expr))
}

/// Maps a schema type expression to TypeScript source text.
#[must_use]
pub fn map_type(expr: &str) -> String {
    let mapped = map(expr).emit();
    debug!("Converting {expr} to {mapped}");
    mapped
}
