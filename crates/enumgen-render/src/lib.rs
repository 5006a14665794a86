//! Source rendering for generated enums and type adapters
//!
//! This crate handles:
//! - Rendering the enum definition from an `EnumSpec`
//! - Rendering the type adapter definition from a `TypeSpec`
//! - Template overrides loaded from the project config
//! - Filters available to templates (`php_string`, `snake_case`)

pub mod context;
pub mod filters;
pub mod renderer;

pub use context::{CaseContext, EnumContext, TypeContext};
pub use filters::{php_string, snake_case};
pub use renderer::{RenderError, TemplateRenderer, ENUM_TEMPLATE, TYPE_TEMPLATE};
