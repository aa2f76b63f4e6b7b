//! TypeScript emission via the `Emit` trait.
//!
//! Every IR node renders itself at an indentation level. Members use two
//! spaces per level, matching the layout of hand-written client code.

use crate::ast::{
    DeclarationKind, Member, Param, RegistryEntry, RouteBuilder, RouteRegistry, TemplatePart,
    TsPrimitive, TsType, TypeDeclaration,
};
use crate::docs::doc_comment;

const INDENT: &str = "  ";

/// Trait for emitting TypeScript source from IR nodes.
pub trait Emit {
    /// Emits the node with nested blocks indented `level` steps.
    fn emit_at(&self, level: usize) -> String;

    /// Emits the node at the top level.
    fn emit(&self) -> String {
        self.emit_at(0)
    }
}

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

impl Emit for TsPrimitive {
    fn emit_at(&self, _level: usize) -> String {
        self.as_str().to_string()
    }
}

impl Emit for TsType {
    fn emit_at(&self, level: usize) -> String {
        match self {
            Self::Primitive(primitive) => primitive.emit_at(level),
            Self::Ref(name) => name.clone(),
            Self::Literal(value) => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{escaped}\"")
            }
            Self::Array(inner) => {
                let inner_str = inner.emit_at(level);
                if matches!(**inner, Self::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            Self::Union(members) if members.is_empty() => TsPrimitive::Never.emit_at(level),
            Self::Union(members) => members
                .iter()
                .map(|member| member.emit_at(level))
                .collect::<Vec<_>>()
                .join(" | "),
            Self::Object(members) if members.is_empty() => "{}".to_string(),
            Self::Object(members) => {
                let mut out = String::from("{\n");
                for member in members {
                    out.push_str(&member.emit_at(level + 1));
                }
                out.push_str(&indent(level));
                out.push('}');
                out
            }
        }
    }
}

impl Emit for Member {
    fn emit_at(&self, level: usize) -> String {
        let pad = indent(level);
        let mut out = self
            .doc
            .as_deref()
            .map(|doc| doc_comment(doc, &pad))
            .unwrap_or_default();
        let optional = if self.optional { "?" } else { "" };
        out.push_str(&format!(
            "{pad}{}{optional}: {};\n",
            self.name,
            self.ty.emit_at(level)
        ));
        out
    }
}

impl Emit for TypeDeclaration {
    fn emit_at(&self, level: usize) -> String {
        let pad = indent(level);
        let mut out = self
            .doc
            .as_deref()
            .map(|doc| doc_comment(doc, &pad))
            .unwrap_or_default();

        match &self.kind {
            DeclarationKind::Interface { extends, members } => {
                out.push_str(&format!("{pad}export interface {}", self.name));
                if !extends.is_empty() {
                    out.push_str(&format!(" extends {}", extends.join(", ")));
                }
                out.push_str(" {\n");
                for member in members {
                    out.push_str(&member.emit_at(level + 1));
                }
                out.push_str(&pad);
                out.push_str("}\n");
            }
            DeclarationKind::Alias(ty) => {
                out.push_str(&format!(
                    "{pad}export type {} = {};\n",
                    self.name,
                    ty.emit_at(level)
                ));
            }
        }

        out
    }
}

impl Emit for Param {
    fn emit_at(&self, level: usize) -> String {
        format!("{}: {}", self.name, self.ty.emit_at(level))
    }
}

impl Emit for TemplatePart {
    fn emit_at(&self, _level: usize) -> String {
        match self {
            Self::Static(text) => text
                .replace('\\', "\\\\")
                .replace('`', "\\`")
                .replace("${", "\\${"),
            Self::Param(name) => format!("${{{name}}}"),
        }
    }
}

impl Emit for RouteBuilder {
    fn emit_at(&self, level: usize) -> String {
        let pad = indent(level);
        let params = self
            .params
            .iter()
            .map(|param| param.emit_at(level))
            .collect::<Vec<_>>()
            .join(", ");
        let template: String = self.template.iter().map(|part| part.emit_at(level)).collect();

        format!(
            "{pad}function {}({params}): string {{\n{pad}{INDENT}return `{template}`;\n{pad}}}\n",
            self.name
        )
    }
}

impl Emit for RegistryEntry {
    fn emit_at(&self, level: usize) -> String {
        let pad = indent(level);
        let mut out = self
            .doc
            .as_deref()
            .map(|doc| doc_comment(doc, &pad))
            .unwrap_or_default();
        out.push_str(&format!("{pad}{},\n", self.name));
        out
    }
}

impl Emit for RouteRegistry {
    fn emit_at(&self, level: usize) -> String {
        let pad = indent(level);
        if self.entries.is_empty() {
            return format!("{pad}export const {} = {{}};\n", Self::NAME);
        }

        let mut out = format!("{pad}export const {} = {{\n", Self::NAME);
        for entry in &self.entries {
            out.push_str(&entry.emit_at(level + 1));
        }
        out.push_str(&pad);
        out.push_str("};\n");
        out
    }
}
