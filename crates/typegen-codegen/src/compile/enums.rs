//! Enum compiler.
//!
//! An enum becomes a union alias plus one declaration per variant. The shape
//! of each variant declaration depends on three inputs only: whether values
//! carry a discriminant, whether payloads are wrapped in a content member,
//! and the variant kind. [`variant_shape`] is that decision table.
//!
//! | Kind   | Tagged, no content    | Tagged, content       | Untagged       |
//! |--------|-----------------------|-----------------------|----------------|
//! | Unit   | `TagOnly`             | `TagOnly`             | `LiteralAlias` |
//! | Tuple  | `TagOnly`             | `TagWithContent`      | `Omitted`      |
//! | Struct | `TagWithInlineFields` | `TagWithNestedFields` | `Omitted`      |
//!
//! A tagged tuple variant without a content member loses its payload type,
//! and untagged tuple and struct variants produce no declaration at all.
//! Both are kept as is for compatibility with existing clients.

use super::layout_fields;
use crate::ast::{DeclarationKind, Member, TsPrimitive, TsType, TypeDeclaration};
use crate::docs::DocRenderer;
use crate::mapper;
use crate::naming::rename_variant;
use tracing::debug;
use typegen_core::{EnumInfo, EnumVariant, ItemInfo, VariantKind};

/// How a variant is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantShape {
    /// `export type EV = "Variant";`
    LiteralAlias,
    /// Interface with the tag member only
    TagOnly,
    /// Interface with the tag member and the payload under the content member
    TagWithContent,
    /// Interface with the tag member and own fields at the top level
    TagWithInlineFields,
    /// Interface with the tag member and own fields nested under the content member
    TagWithNestedFields,
    /// No declaration
    Omitted,
}

/// Decides how a variant is declared.
///
/// # Examples
///
/// ```
/// use typegen_codegen::compile::{VariantShape, variant_shape};
/// use typegen_core::VariantKind;
///
/// assert_eq!(variant_shape(false, false, VariantKind::Unit), VariantShape::LiteralAlias);
/// assert_eq!(variant_shape(true, true, VariantKind::Struct), VariantShape::TagWithNestedFields);
/// ```
#[must_use]
pub const fn variant_shape(tag_present: bool, content_present: bool, kind: VariantKind) -> VariantShape {
    match (tag_present, content_present, kind) {
        (false, _, VariantKind::Unit) => VariantShape::LiteralAlias,
        (false, _, VariantKind::Tuple | VariantKind::Struct) => VariantShape::Omitted,
        (true, _, VariantKind::Unit) | (true, false, VariantKind::Tuple) => VariantShape::TagOnly,
        (true, true, VariantKind::Tuple) => VariantShape::TagWithContent,
        (true, false, VariantKind::Struct) => VariantShape::TagWithInlineFields,
        (true, true, VariantKind::Struct) => VariantShape::TagWithNestedFields,
    }
}

/// Output of compiling one enum item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledEnum {
    /// `export type Enum = EnumA | EnumB;`
    pub union: TypeDeclaration,
    /// Variant declarations in variant order, without omitted variants
    pub variants: Vec<TypeDeclaration>,
    /// Number of variants that produced no declaration
    pub omitted: usize,
}

impl CompiledEnum {
    /// Returns the union followed by the variant declarations.
    pub fn declarations(&self) -> impl Iterator<Item = &TypeDeclaration> {
        std::iter::once(&self.union).chain(&self.variants)
    }
}

/// Compiles an enum item into a union and its variant declarations.
///
/// The union lists `<Enum><Variant>` for every variant in order, including
/// variants whose declaration is omitted. An enum without variants is
/// `never`.
#[must_use]
pub fn compile_enum(info: &ItemInfo, enumeration: &EnumInfo, docs: &DocRenderer) -> CompiledEnum {
    let members: Vec<TsType> = enumeration
        .variants
        .iter()
        .map(|variant| TsType::reference(declaration_name(info, variant)))
        .collect();
    let union_ty = if members.is_empty() {
        TsType::Primitive(TsPrimitive::Never)
    } else {
        TsType::Union(members)
    };

    let union = TypeDeclaration {
        name: info.name.clone(),
        doc: docs.render(&info.doc),
        kind: DeclarationKind::Alias(union_ty),
    };

    let mut variants = Vec::with_capacity(enumeration.variants.len());
    let mut omitted = 0;
    for variant in &enumeration.variants {
        match compile_variant(info, enumeration, variant, docs) {
            Some(decl) => variants.push(decl),
            None => {
                debug!(
                    enum_name = %info.name,
                    variant = variant.name(),
                    "Omitting untagged {:?} variant",
                    variant.kind()
                );
                omitted += 1;
            }
        }
    }

    CompiledEnum {
        union,
        variants,
        omitted,
    }
}

fn declaration_name(info: &ItemInfo, variant: &EnumVariant) -> String {
    format!("{}{}", info.name, variant.name())
}

fn compile_variant(
    info: &ItemInfo,
    enumeration: &EnumInfo,
    variant: &EnumVariant,
    docs: &DocRenderer,
) -> Option<TypeDeclaration> {
    let tag = enumeration.discriminant();
    let content = enumeration.content.as_deref();
    let shape = variant_shape(tag.is_some(), content.is_some(), variant.kind());

    let name = declaration_name(info, variant);
    let literal = TsType::Literal(rename_variant(
        variant.name(),
        enumeration.rename_all.as_ref(),
    ));
    let doc = docs.render_opt(variant.doc());

    match shape {
        VariantShape::Omitted => return None,
        VariantShape::LiteralAlias => {
            return Some(TypeDeclaration {
                name,
                doc,
                kind: DeclarationKind::Alias(literal),
            });
        }
        _ => {}
    }
    let tag = tag?;

    let mut extends = Vec::new();
    let mut members = vec![Member::new(tag, literal).with_doc(doc)];

    match (shape, variant, content) {
        (VariantShape::TagWithContent, EnumVariant::Tuple { field_type, .. }, Some(content)) => {
            members.push(Member::new(content, mapper::map(field_type)));
        }
        (VariantShape::TagWithInlineFields, EnumVariant::Struct { fields, .. }, _) => {
            let layout = layout_fields(fields, docs);
            extends = layout.bases;
            members.extend(layout.members);
        }
        (VariantShape::TagWithNestedFields, EnumVariant::Struct { fields, .. }, Some(content)) => {
            let layout = layout_fields(fields, docs);
            extends = layout.bases;
            members.push(Member::new(content, TsType::Object(layout.members)));
        }
        _ => {}
    }

    Some(TypeDeclaration {
        name,
        doc: None,
        kind: DeclarationKind::Interface { extends, members },
    })
}
