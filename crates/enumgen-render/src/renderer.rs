//! Enum and type adapter rendering
//!
//! Rendering is pure: the same spec always yields byte-identical text.

use enumgen_core::{ArtifactKind, Config, ConfigError, EnumSpec, TypeSpec};
use minijinja::{Environment, Error as JinjaError};
use tracing::debug;

use crate::context::{EnumContext, TypeContext};

/// Built-in enum template
pub const ENUM_TEMPLATE: &str = include_str!("../templates/enum.php.j2");

/// Built-in type adapter template
pub const TYPE_TEMPLATE: &str = include_str!("../templates/type.php.j2");

/// Error during rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render {kind} template: {message}")]
    Template { kind: ArtifactKind, message: String },
}

/// Renders enum and type adapter sources
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
    enum_template: String,
    type_template: String,
}

impl TemplateRenderer {
    /// Create a renderer with the given template sources
    pub fn new(enum_template: impl Into<String>, type_template: impl Into<String>) -> Self {
        let mut env = Environment::new();

        // Block tags sit on their own lines in the templates
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_filter("php_string", crate::filters::php_string);
        env.add_filter("snake_case", crate::filters::snake_case);

        Self {
            env,
            enum_template: enum_template.into(),
            type_template: type_template.into(),
        }
    }

    /// Create a renderer with the built-in templates
    pub fn with_defaults() -> Self {
        Self::new(ENUM_TEMPLATE, TYPE_TEMPLATE)
    }

    /// Create a renderer honoring template overrides from the config
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let enum_template = config.read_template(ArtifactKind::Enum)?;
        let type_template = config.read_template(ArtifactKind::Type)?;

        if enum_template.is_some() || type_template.is_some() {
            debug!(
                custom_enum = enum_template.is_some(),
                custom_type = type_template.is_some(),
                "Using template overrides"
            );
        }

        Ok(Self::new(
            enum_template.unwrap_or_else(|| ENUM_TEMPLATE.to_string()),
            type_template.unwrap_or_else(|| TYPE_TEMPLATE.to_string()),
        ))
    }

    /// Render the enum definition
    pub fn render_enum(&self, spec: &EnumSpec) -> Result<String, RenderError> {
        let context = EnumContext::from(spec);
        self.env
            .render_str(&self.enum_template, context.to_minijinja_value())
            .map_err(|e| Self::template_error(ArtifactKind::Enum, e))
    }

    /// Render the type adapter definition
    pub fn render_type(&self, spec: &TypeSpec) -> Result<String, RenderError> {
        let context = TypeContext::from(spec);
        self.env
            .render_str(&self.type_template, context.to_minijinja_value())
            .map_err(|e| Self::template_error(ArtifactKind::Type, e))
    }

    fn template_error(kind: ArtifactKind, error: JinjaError) -> RenderError {
        RenderError::Template {
            kind,
            message: error.to_string(),
        }
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
