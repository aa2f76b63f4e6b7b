//! TypeScript declaration IR.
//!
//! Compilers build these values; the [`Emit`](crate::emit::Emit) trait turns
//! them into source text in a single separate pass.

use serde::Serialize;

/// TypeScript primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `unknown`
    Unknown,
    /// `never`
    Never,
}

impl TsPrimitive {
    /// Returns the TypeScript keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::Never => "never",
        }
    }
}

/// TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive keyword
    Primitive(TsPrimitive),
    /// Named type reference, emitted verbatim
    Ref(String),
    /// String literal type: `"ONLINE"`
    Literal(String),
    /// Array type: `T[]`
    Array(Box<TsType>),
    /// Union type: `A | B`
    Union(Vec<TsType>),
    /// Inline object type with one member per line
    Object(Vec<Member>),
}

impl TsType {
    /// Shorthand for a named reference.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    /// Returns `true` if `null` is one of the values of this type.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Primitive(TsPrimitive::Null) => true,
            Self::Union(members) => members.iter().any(Self::is_nullable),
            _ => false,
        }
    }

    /// Returns this type with `null` added, unless it already admits `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_codegen::ast::{TsPrimitive, TsType};
    ///
    /// let ty = TsType::Primitive(TsPrimitive::String).nullable().nullable();
    /// assert_eq!(
    ///     ty,
    ///     TsType::Union(vec![
    ///         TsType::Primitive(TsPrimitive::String),
    ///         TsType::Primitive(TsPrimitive::Null),
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn nullable(self) -> Self {
        if self.is_nullable() {
            return self;
        }
        match self {
            Self::Union(mut members) => {
                members.push(Self::Primitive(TsPrimitive::Null));
                Self::Union(members)
            }
            other => Self::Union(vec![other, Self::Primitive(TsPrimitive::Null)]),
        }
    }
}

/// A member of an interface or inline object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member name, emitted verbatim
    pub name: String,
    /// Member type
    pub ty: TsType,
    /// Whether the member may be absent (`name?:`)
    pub optional: bool,
    /// Rendered documentation
    pub doc: Option<String>,
}

impl Member {
    /// Creates a required, undocumented member.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    /// Attaches documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

/// Shape of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `export interface Name extends A, B { ... }`
    Interface {
        /// Base types, in field order
        extends: Vec<String>,
        /// Own members, in field order
        members: Vec<Member>,
    },
    /// `export type Name = ...;`
    Alias(TsType),
}

/// A named, exported type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Declaration name
    pub name: String,
    /// Rendered documentation
    pub doc: Option<String>,
    /// Declaration shape
    pub kind: DeclarationKind,
}

impl TypeDeclaration {
    /// Returns the names this declaration directly depends on for its shape.
    ///
    /// For interfaces these are the `extends` bases. For aliases these are the
    /// named references of the aliased union.
    #[must_use]
    pub fn shape_dependencies(&self) -> Vec<&str> {
        match &self.kind {
            DeclarationKind::Interface { extends, .. } => {
                extends.iter().map(String::as_str).collect()
            }
            DeclarationKind::Alias(TsType::Union(members)) => members
                .iter()
                .filter_map(|member| match member {
                    TsType::Ref(name) => Some(name.as_str()),
                    _ => None,
                })
                .collect(),
            DeclarationKind::Alias(TsType::Ref(name)) => vec![name.as_str()],
            DeclarationKind::Alias(_) => Vec::new(),
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name (camelCase)
    pub name: String,
    /// Parameter type
    pub ty: TsType,
}

/// Part of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text
    Static(String),
    /// `${param}` interpolation
    Param(String),
}

/// A URL-building function for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBuilder {
    /// Function name (camelCase)
    pub name: String,
    /// Rendered documentation, carried by the registry entry
    pub doc: Option<String>,
    /// Parameters, starting with `baseUrl`
    pub params: Vec<Param>,
    /// Returned template literal
    pub template: Vec<TemplatePart>,
}

/// One entry of the exported route registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Route function name
    pub name: String,
    /// Rendered documentation
    pub doc: Option<String>,
}

/// The exported `ROUTES` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    /// Entries in inventory order
    pub entries: Vec<RegistryEntry>,
}

impl RouteRegistry {
    /// Exported name of the registry object.
    pub const NAME: &'static str = "ROUTES";
}

impl From<&[RouteBuilder]> for RouteRegistry {
    fn from(routes: &[RouteBuilder]) -> Self {
        Self {
            entries: routes
                .iter()
                .map(|route| RegistryEntry {
                    name: route.name.clone(),
                    doc: route.doc.clone(),
                })
                .collect(),
        }
    }
}

/// Counts of what a generation run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Struct declarations
    pub structs: usize,
    /// Enum unions
    pub enums: usize,
    /// Variant declarations across all enums
    pub variants: usize,
    /// Variants left out of the output
    pub omitted_variants: usize,
    /// Route functions
    pub routes: usize,
    /// Items of an unrecognised kind
    pub skipped_items: usize,
}

/// A fully rendered output module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Schema version the module was generated from
    pub version: String,
    /// File name, `v<version>.ts`
    pub file_name: String,
    /// Module source text
    pub content: String,
    /// Generation counts
    pub stats: GenerationStats,
}
