//! Module generator.
//!
//! Compiles a whole inventory into one TypeScript module.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::Generator;
//! use typegen_core::Inventory;
//!
//! let generator = Generator::new().unwrap();
//! let module = generator.generate(&Inventory::new("1.0.0", vec![])).unwrap();
//!
//! assert_eq!(module.file_name, "v1.0.0.ts");
//! assert_eq!(
//!     module.content,
//!     "// This file was @generated by typegen\n\nexport const ROUTES = {};\n"
//! );
//! ```

use crate::ast::{GeneratedModule, GenerationStats, RouteBuilder, RouteRegistry, TypeDeclaration};
use crate::compile::{compile_enum, compile_route, compile_struct};
use crate::docs::DocRenderer;
use crate::emit::Emit;
use crate::template_engine::{MODULE_TEMPLATE, TemplateEngine};
use crate::validate::check_flatten_cycles;
use serde::Serialize;
use tracing::{debug, info, warn};
use typegen_core::{Inventory, Item, Result};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// This file was @generated by typegen";

#[derive(Debug, Serialize)]
struct ModuleContext<'a> {
    header: &'a str,
    structs: Vec<String>,
    enums: Vec<String>,
    routes: Vec<String>,
    registry: String,
}

/// Declarations compiled from one inventory, before emission.
#[derive(Debug, Default)]
struct CompiledModule {
    structs: Vec<TypeDeclaration>,
    enums: Vec<TypeDeclaration>,
    routes: Vec<RouteBuilder>,
    stats: GenerationStats,
}

/// Generator for TypeScript client modules.
///
/// Output sections, each in inventory order: structs, enums (union then
/// variants), route functions, and the `ROUTES` registry. The same inventory
/// always produces byte-identical output.
#[derive(Debug)]
pub struct Generator<'a> {
    engine: TemplateEngine<'a>,
}

impl Generator<'_> {
    /// Creates a new generator.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Generates the module for an inventory.
    ///
    /// Items of unknown kind are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`typegen_core::Error::FlattenCycle`] if flattened fields form
    /// a cycle, or a render error if templating fails.
    pub fn generate(&self, inventory: &Inventory) -> Result<GeneratedModule> {
        info!(
            "Generating module v{} from {} items",
            inventory.version,
            inventory.items.len()
        );

        let compiled = Self::compile(inventory);
        check_flatten_cycles(compiled.structs.iter().chain(&compiled.enums))?;

        let registry = RouteRegistry::from(compiled.routes.as_slice());
        let context = ModuleContext {
            header: GENERATED_HEADER,
            structs: compiled.structs.iter().map(section_entry).collect(),
            enums: compiled.enums.iter().map(section_entry).collect(),
            routes: compiled.routes.iter().map(section_entry).collect(),
            registry: section_entry(&registry),
        };
        let content = self.engine.render(MODULE_TEMPLATE, &context)?;

        info!(
            structs = compiled.stats.structs,
            enums = compiled.stats.enums,
            routes = compiled.stats.routes,
            "Generated {}",
            inventory.file_name()
        );

        Ok(GeneratedModule {
            version: inventory.version.clone(),
            file_name: inventory.file_name(),
            content,
            stats: compiled.stats,
        })
    }

    fn compile(inventory: &Inventory) -> CompiledModule {
        let route_names = inventory
            .items
            .iter()
            .filter(|info| matches!(info.item, Item::Route(_)))
            .map(|info| info.name.clone());
        let docs = DocRenderer::new(route_names);

        let mut module = CompiledModule::default();
        for info in &inventory.items {
            match &info.item {
                Item::Struct(structure) => {
                    debug!("Compiling struct {}", info.name);
                    module.structs.push(compile_struct(info, structure, &docs));
                    module.stats.structs += 1;
                }
                Item::Enum(enumeration) => {
                    debug!("Compiling enum {}", info.name);
                    let compiled = compile_enum(info, enumeration, &docs);
                    module.stats.enums += 1;
                    module.stats.variants += compiled.variants.len();
                    module.stats.omitted_variants += compiled.omitted;
                    module.enums.push(compiled.union);
                    module.enums.extend(compiled.variants);
                }
                Item::Route(route) => {
                    debug!("Compiling route {}", info.name);
                    module.routes.push(compile_route(info, route, &docs));
                    module.stats.routes += 1;
                }
                Item::Unknown => {
                    warn!("Skipping item {} of unknown kind", info.name);
                    module.stats.skipped_items += 1;
                }
            }
        }
        module
    }
}

/// Emits a node as a template section entry, preceded by a blank line.
fn section_entry<T: Emit>(node: &T) -> String {
    format!("\n{}", node.emit())
}
