//! Struct compiler.

use super::layout_fields;
use crate::ast::{DeclarationKind, TypeDeclaration};
use crate::docs::DocRenderer;
use typegen_core::{ItemInfo, StructInfo};

/// Compiles a struct item into an exported interface.
///
/// Flattened fields become `extends` bases and the remaining fields become
/// members. Structs without fields still produce an (empty) interface. The
/// item's `hidden` flag does not affect the output.
///
/// # Examples
///
/// ```
/// use typegen_codegen::compile::compile_struct;
/// use typegen_codegen::docs::DocRenderer;
/// use typegen_codegen::emit::Emit;
/// use typegen_core::{FieldInfo, Item, ItemInfo, StructInfo};
///
/// let field = |name: &str, ty: &str, flattened: bool| FieldInfo {
///     name: name.to_string(),
///     doc: None,
///     field_type: ty.to_string(),
///     flattened,
///     nullable: false,
///     omittable: false,
/// };
/// let structure = StructInfo {
///     fields: vec![field("base", "Base", true), field("content", "String", false)],
/// };
/// let info = ItemInfo {
///     name: "Message".to_string(),
///     doc: String::new(),
///     category: String::new(),
///     hidden: false,
///     package: String::new(),
///     item: Item::Struct(structure.clone()),
/// };
///
/// let decl = compile_struct(&info, &structure, &DocRenderer::default());
/// assert_eq!(decl.emit(), "export interface Message extends Base {\n  content: string;\n}\n");
/// ```
#[must_use]
pub fn compile_struct(info: &ItemInfo, structure: &StructInfo, docs: &DocRenderer) -> TypeDeclaration {
    let layout = layout_fields(&structure.fields, docs);

    TypeDeclaration {
        name: info.name.clone(),
        doc: docs.render(&info.doc),
        kind: DeclarationKind::Interface {
            extends: layout.bases,
            members: layout.members,
        },
    }
}
