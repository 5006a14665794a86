//! Generator data model
//!
//! `EnumSpec` and `TypeSpec` are built per invocation and never persisted.
//! Their constructors enforce the invariants the renderer relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::cases::CaseSet;
use crate::error::ValidationError;
use crate::naming::{self, TypeNaming};

/// Namespace separator used in generated sources
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Validated enum name (`^[A-Z][a-zA-Z0-9]*$`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnumName(String);

impl EnumName {
    /// Validate and wrap an enum name. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if naming::is_valid_enum_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ValidationError::InvalidEnumName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EnumName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EnumName> for String {
    fn from(name: EnumName) -> Self {
        name.0
    }
}

/// Validated namespace such as `App\Enum`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Validate a namespace. A single leading separator is dropped.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let ns = trimmed.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(trimmed);

        let valid = !ns.is_empty()
            && ns.split(NAMESPACE_SEPARATOR).all(|segment| {
                let mut chars = segment.chars();
                matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            });

        if valid {
            Ok(Self(ns.to_string()))
        } else {
            Err(ValidationError::InvalidNamespace(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace segments in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(NAMESPACE_SEPARATOR)
    }

    /// Last segment (the short name when this is a class reference)
    pub fn last_segment(&self) -> &str {
        self.segments().last().unwrap_or(&self.0)
    }

    /// Fully qualified name of `name` inside this namespace
    pub fn qualify(&self, name: &str) -> String {
        format!("{}{}{}", self.0, NAMESPACE_SEPARATOR, name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

/// One enum case and its backing value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    pub name: String,
    pub value: String,
}

impl EnumCase {
    /// Create a case after checking the name
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !naming::is_valid_case_name(&name) {
            return Err(ValidationError::InvalidCaseName(name));
        }

        Ok(Self {
            name,
            value: value.into(),
        })
    }
}

/// Everything needed to render an enum definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumSpec {
    name: EnumName,
    namespace: Namespace,
    cases: Vec<EnumCase>,
}

impl EnumSpec {
    /// Build a spec. Cases must be non-empty with unique names and values.
    pub fn new(
        name: EnumName,
        namespace: Namespace,
        cases: impl IntoIterator<Item = EnumCase>,
    ) -> Result<Self, ValidationError> {
        let mut set = CaseSet::new();
        for case in cases {
            set.push(case)?;
        }

        Ok(Self {
            name,
            namespace,
            cases: set.finish()?,
        })
    }

    pub fn name(&self) -> &EnumName {
        &self.name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Cases in declaration order
    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    /// Fully qualified enum name
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(self.name.as_str())
    }
}

/// Everything needed to render a type adapter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    /// Namespace of the generated adapter class
    pub type_namespace: Namespace,

    /// Namespace of the enum the adapter converts
    pub enum_namespace: Namespace,

    /// Short name of the enum
    pub enum_name: EnumName,

    /// Adapter class name (`<EnumName>EnumType`)
    pub class_name: String,

    /// Registry key for the adapter
    pub type_name: String,

    /// Fully qualified base class the adapter extends
    pub base_class: Namespace,
}

impl TypeSpec {
    /// Type spec for an enum, with the type name derived from the class name
    pub fn for_enum(enum_spec: &EnumSpec, type_namespace: Namespace, base_class: Namespace) -> Self {
        let class_name = naming::type_class_name(enum_spec.name().as_str());
        let type_name = TypeNaming::derived(class_name.as_str()).type_name();

        Self {
            type_namespace,
            enum_namespace: enum_spec.namespace().clone(),
            enum_name: enum_spec.name().clone(),
            class_name,
            type_name,
            base_class,
        }
    }

    /// Replace the derived type name with an explicit one
    pub fn with_type_name(mut self, type_name: &str) -> Result<Self, ValidationError> {
        let type_name = type_name.trim();
        if type_name.is_empty() {
            return Err(ValidationError::EmptyTypeName);
        }

        self.type_name = type_name.to_string();
        Ok(self)
    }

    /// Fully qualified adapter class name
    pub fn qualified_class_name(&self) -> String {
        self.type_namespace.qualify(&self.class_name)
    }

    /// Fully qualified enum name
    pub fn qualified_enum_name(&self) -> String {
        self.enum_namespace.qualify(self.enum_name.as_str())
    }
}

/// Which of the two generated files an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Enum,
    Type,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum => write!(f, "enum"),
            Self::Type => write!(f, "type"),
        }
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: content.into(),
        }
    }
}
