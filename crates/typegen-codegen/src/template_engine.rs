//! Template engine for module rendering using Handlebars.
//!
//! Declarations are emitted to TypeScript before templating; the template
//! only arranges the emitted sections. HTML escaping is disabled.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "// {{name}}").unwrap();
//! assert_eq!(engine.render("greeting", &json!({"name": "<T>"})).unwrap(), "// <T>");
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use typegen_core::{Error, Result};

/// Name of the output module template.
pub const MODULE_TEMPLATE: &str = "module";

/// Template engine for code generation.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_builtin_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        // Trailing newline of the file is not part of the output
        handlebars
            .register_template_string(
                MODULE_TEMPLATE,
                include_str!("../templates/module.ts.hbs").trim_end(),
            )
            .map_err(|e| Error::RenderError {
                message: format!("Failed to register module template: {e}"),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context is missing a variable the template uses
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::RenderError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::RenderError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }
}
