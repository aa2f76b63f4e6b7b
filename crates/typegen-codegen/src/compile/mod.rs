//! Schema item compilers.
//!
//! Each compiler turns one inventory item into IR values. Compilers are pure:
//! they read the item and the shared [`DocRenderer`] and never look at other
//! items' output.

pub mod enums;
pub mod routes;
pub mod structs;

pub use enums::{CompiledEnum, VariantShape, compile_enum, variant_shape};
pub use routes::{compile_route, strip_placeholders};
pub use structs::compile_struct;

use crate::ast::Member;
use crate::docs::DocRenderer;
use crate::mapper;
use typegen_core::FieldInfo;

/// Fields split into flattened bases and own members, each in field order.
#[derive(Debug, Default)]
pub(crate) struct FieldLayout {
    pub(crate) bases: Vec<String>,
    pub(crate) members: Vec<Member>,
}

/// Builds the member for an own (non-flattened) field.
pub(crate) fn field_member(field: &FieldInfo, docs: &DocRenderer) -> Member {
    Member {
        name: field.name.clone(),
        ty: mapper::map(&field.field_type),
        optional: field.omittable,
        doc: docs.render_opt(field.doc.as_deref()),
    }
}

/// Partitions fields into `extends` bases and own members.
///
/// A flattened field's mapped type is used verbatim as the base name.
pub(crate) fn layout_fields(fields: &[FieldInfo], docs: &DocRenderer) -> FieldLayout {
    let mut layout = FieldLayout::default();
    for field in fields {
        if field.flattened {
            layout.bases.push(mapper::map_type(&field.field_type));
        } else {
            layout.members.push(field_member(field, docs));
        }
    }
    layout
}
