//! enumgen core
//!
//! Data model, name derivation and case parsing for the enum/type generator.
//! Type names produced here are registry keys: changing the derivation
//! renames every generated type.

pub mod cases;
pub mod config;
pub mod error;
pub mod naming;
pub mod spec;

pub use cases::{parse_case_line, CaseLine, CaseSet};
pub use config::{AutoloadRule, Config, ConfigError, TemplateOverrides, CONFIG_FILE_NAME};
pub use error::{ErrorCode, ValidationError};
pub use naming::{derive_type_name, resolve_type_name, to_snake_case, type_class_name, TypeNaming};
pub use spec::{ArtifactKind, EnumCase, EnumName, EnumSpec, GeneratedArtifact, Namespace, TypeSpec};
