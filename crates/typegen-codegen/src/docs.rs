//! Documentation rendering.
//!
//! Schema docs are Markdown with Rust-style intra-doc links. They are turned
//! into JSDoc text at compile time and wrapped in comment blocks at emit time.

use crate::naming::to_camel_case;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

static INTRA_DOC_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[`(.+?)`\]").expect("valid regex"));

/// Rewrites schema docs for the generated module.
///
/// Links to route items are renamed to the route function's camelCase
/// identifier so they resolve inside the module.
///
/// # Examples
///
/// ```
/// use typegen_codegen::docs::DocRenderer;
///
/// let docs = DocRenderer::new(["create_session"]);
/// assert_eq!(
///     docs.render("Obtained from the [`create_session`] route, see [`Session`].").as_deref(),
///     Some("Obtained from the {@link createSession} route, see {@link Session}.")
/// );
/// assert_eq!(docs.render("  "), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocRenderer {
    route_names: HashSet<String>,
}

impl DocRenderer {
    /// Creates a renderer that knows the given route item names.
    pub fn new<I, S>(route_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route_names: route_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders a doc string, returning `None` for blank docs.
    #[must_use]
    pub fn render(&self, doc: &str) -> Option<String> {
        let doc = doc.trim_start_matches(['\n', '\r']).trim_end();
        if doc.is_empty() {
            return None;
        }

        let rendered = INTRA_DOC_LINK.replace_all(doc, |caps: &Captures<'_>| {
            let target = &caps[1];
            if self.route_names.contains(target) {
                format!("{{@link {}}}", to_camel_case(target))
            } else {
                format!("{{@link {target}}}")
            }
        });

        Some(rendered.into_owned())
    }

    /// Renders an optional doc string.
    #[must_use]
    pub fn render_opt(&self, doc: Option<&str>) -> Option<String> {
        doc.and_then(|doc| self.render(doc))
    }
}

/// Wraps rendered documentation in a JSDoc block at the given indentation.
///
/// Single-line docs stay on one line. The returned text ends with a newline.
///
/// # Examples
///
/// ```
/// use typegen_codegen::docs::doc_comment;
///
/// assert_eq!(doc_comment("The user's email.", "  "), "  /** The user's email. */\n");
/// assert_eq!(
///     doc_comment("First.\n\nSecond.", ""),
///     "/**\n * First.\n *\n * Second.\n */\n"
/// );
/// ```
#[must_use]
pub fn doc_comment(doc: &str, indent: &str) -> String {
    let doc = doc.replace("*/", "*\\/");

    if !doc.contains('\n') {
        return format!("{indent}/** {doc} */\n");
    }

    let mut out = format!("{indent}/**\n");
    for line in doc.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
    out
}
