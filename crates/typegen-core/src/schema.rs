//! Schema inventory model.
//!
//! These types mirror the JSON documents published by the schema source
//! field for field. Every item document has the shape
//! `{ name, doc, category, hidden, package, item }` where `item` is
//! discriminated by its `type` key (`struct`, `enum` or `route`).
//!
//! # Examples
//!
//! ```
//! use typegen_core::{Item, ItemInfo};
//!
//! let json = r#"{
//!     "name": "Session",
//!     "doc": "A user session.",
//!     "category": "sessions",
//!     "hidden": false,
//!     "package": "todel",
//!     "item": {
//!         "type": "struct",
//!         "fields": [{
//!             "name": "id",
//!             "doc": null,
//!             "field_type": "u64",
//!             "flattened": false,
//!             "nullable": false,
//!             "ommitable": false
//!         }]
//!     }
//! }"#;
//!
//! let info: ItemInfo = serde_json::from_str(json).unwrap();
//! assert!(matches!(info.item, Item::Struct(_)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index document listing every item of one inventory version.
///
/// Published as `index.json` at the inventory root. Each entry of `items`
/// is a path relative to that root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryIndex {
    /// Schema version, used to name the output file
    pub version: String,
    /// Relative paths of the item documents
    pub items: Vec<String>,
}

/// A fully retrieved inventory.
///
/// Items are kept in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Schema version
    pub version: String,
    /// Item descriptors in index order
    pub items: Vec<ItemInfo>,
}

impl Inventory {
    /// Creates an inventory from a version and its items.
    #[must_use]
    pub fn new(version: impl Into<String>, items: Vec<ItemInfo>) -> Self {
        Self {
            version: version.into(),
            items,
        }
    }

    /// Returns the name of the generated file for this version.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Inventory;
    ///
    /// let inventory = Inventory::new("0.4.0-alpha1", vec![]);
    /// assert_eq!(inventory.file_name(), "v0.4.0-alpha1.ts");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("v{}.ts", self.version)
    }

    /// Returns the number of items of each kind as `(structs, enums, routes, unknown)`.
    #[must_use]
    pub fn kind_counts(&self) -> (usize, usize, usize, usize) {
        self.items
            .iter()
            .fold((0, 0, 0, 0), |(s, e, r, u), info| match info.item {
                Item::Struct(_) => (s + 1, e, r, u),
                Item::Enum(_) => (s, e + 1, r, u),
                Item::Route(_) => (s, e, r + 1, u),
                Item::Unknown => (s, e, r, u + 1),
            })
    }
}

/// One named entry of the inventory.
///
/// `name` is the identity key within an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Item name (type name or route function name)
    pub name: String,
    /// Documentation, empty when the item is undocumented
    #[serde(default)]
    pub doc: String,
    /// Grouping category assigned by the schema source
    #[serde(default)]
    pub category: String,
    /// Whether the schema source hides this item from its own docs
    #[serde(default)]
    pub hidden: bool,
    /// Package that owns the item
    #[serde(default)]
    pub package: String,
    /// The item payload
    pub item: Item,
}

impl ItemInfo {
    /// Returns the documentation if it is not blank.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        let doc = self.doc.trim();
        (!doc.is_empty()).then_some(self.doc.as_str())
    }
}

/// Item payload, discriminated by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    /// A struct with named fields
    Struct(StructInfo),
    /// An enum with unit, tuple or struct variants
    Enum(EnumInfo),
    /// An HTTP route
    Route(RouteInfo),
    /// Any kind this version of typegen does not know about
    #[serde(other)]
    Unknown,
}

impl Item {
    /// Returns the `type` key of this payload.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Enum(_) => "enum",
            Self::Route(_) => "route",
            Self::Unknown => "unknown",
        }
    }
}

/// A single struct field or struct-variant field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Field name as serialized
    pub name: String,
    /// Field documentation
    #[serde(default)]
    pub doc: Option<String>,
    /// Schema type expression, e.g. `Option<Vec<u64>>`
    pub field_type: String,
    /// Whether the field's members are merged into the container
    #[serde(default)]
    pub flattened: bool,
    /// Whether the field accepts `null`
    #[serde(default)]
    pub nullable: bool,
    /// Whether the field may be absent
    #[serde(default, rename = "ommitable")]
    pub omittable: bool,
}

/// Struct payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructInfo {
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
}

/// Case-conversion rule applied to enum variant names.
///
/// The rule set mirrors serde's `rename_all` values. Unrecognised values are
/// kept in [`RenameRule::Other`] instead of failing the whole item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RenameRule {
    /// `lowercase`
    Lowercase,
    /// `UPPERCASE`
    Uppercase,
    /// `PascalCase`
    PascalCase,
    /// `camelCase`
    CamelCase,
    /// `snake_case`
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebabCase,
    /// Any other value
    Other(String),
}

impl RenameRule {
    /// Returns the serde spelling of the rule.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "UPPERCASE",
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snake_case",
            Self::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
            Self::KebabCase => "kebab-case",
            Self::ScreamingKebabCase => "SCREAMING-KEBAB-CASE",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for RenameRule {
    fn from(value: String) -> Self {
        match value.as_str() {
            "lowercase" => Self::Lowercase,
            "UPPERCASE" => Self::Uppercase,
            "PascalCase" => Self::PascalCase,
            "camelCase" => Self::CamelCase,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "kebab-case" => Self::KebabCase,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebabCase,
            _ => Self::Other(value),
        }
    }
}

impl From<RenameRule> for String {
    fn from(rule: RenameRule) -> Self {
        match rule {
            RenameRule::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RenameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enum payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    /// Name of the discriminant member, if the enum is internally or adjacently tagged
    #[serde(default)]
    pub tag: Option<String>,
    /// Whether the enum is serialized without any discriminant
    #[serde(default)]
    pub untagged: bool,
    /// Name of the member wrapping variant payloads, if adjacently tagged
    #[serde(default)]
    pub content: Option<String>,
    /// Rename rule applied to variant names
    #[serde(default)]
    pub rename_all: Option<RenameRule>,
    /// Variants in declaration order
    #[serde(default)]
    pub variants: Vec<EnumVariant>,
}

impl EnumInfo {
    /// Returns the discriminant member name, if values of this enum carry one.
    ///
    /// An `untagged` enum never has a discriminant, whatever `tag` says.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::EnumInfo;
    ///
    /// let info = EnumInfo { tag: Some("op".to_string()), ..EnumInfo::default() };
    /// assert_eq!(info.discriminant(), Some("op"));
    ///
    /// let untagged = EnumInfo { untagged: true, ..info };
    /// assert_eq!(untagged.discriminant(), None);
    /// ```
    #[must_use]
    pub fn discriminant(&self) -> Option<&str> {
        if self.untagged {
            return None;
        }
        self.tag.as_deref()
    }
}

/// Shape of an enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// No payload
    Unit,
    /// Single unnamed payload
    Tuple,
    /// Named fields
    Struct,
}

/// One enum variant, discriminated by its `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnumVariant {
    /// Variant without data
    Unit {
        /// Variant name
        name: String,
        /// Variant documentation
        #[serde(default)]
        doc: Option<String>,
    },
    /// Variant with a single unnamed field
    Tuple {
        /// Variant name
        name: String,
        /// Variant documentation
        #[serde(default)]
        doc: Option<String>,
        /// Schema type expression of the payload
        field_type: String,
    },
    /// Variant with named fields
    Struct {
        /// Variant name
        name: String,
        /// Variant documentation
        #[serde(default)]
        doc: Option<String>,
        /// Fields in declaration order
        #[serde(default)]
        fields: Vec<FieldInfo>,
    },
}

impl EnumVariant {
    /// Returns the variant name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Unit { name, .. } | Self::Tuple { name, .. } | Self::Struct { name, .. } => name,
        }
    }

    /// Returns the variant documentation.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        match self {
            Self::Unit { doc, .. } | Self::Tuple { doc, .. } | Self::Struct { doc, .. } => {
                doc.as_deref()
            }
        }
    }

    /// Returns the variant shape.
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Unit { .. } => VariantKind::Unit,
            Self::Tuple { .. } => VariantKind::Tuple,
            Self::Struct { .. } => VariantKind::Struct,
        }
    }
}

/// A route path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParamInfo {
    /// Parameter name (snake_case)
    pub name: String,
    /// Schema type expression
    pub param_type: String,
}

/// A route query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamInfo {
    /// Parameter name (snake_case)
    pub name: String,
    /// Schema type expression
    pub param_type: String,
}

/// Route payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// HTTP method
    pub method: String,
    /// Path template, e.g. `/users/<user_id>`
    pub route: String,
    /// Path parameters in declaration order
    #[serde(default)]
    pub path_params: Vec<PathParamInfo>,
    /// Query parameters in declaration order
    #[serde(default)]
    pub query_params: Vec<QueryParamInfo>,
    /// Request body type, if any
    #[serde(default)]
    pub body_type: Option<String>,
    /// Response type, if any
    #[serde(default)]
    pub return_type: Option<String>,
    /// Request guards applied by the server
    #[serde(default)]
    pub guards: Vec<String>,
}
