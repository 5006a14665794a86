//! Identifier transforms and type name resolution
//!
//! Type names are the keys a column-type registry dispatches on, so the
//! derivation here must stay stable: changing it renames every generated type.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Suffix appended to an enum name to form its type adapter class name
pub const TYPE_CLASS_SUFFIX: &str = "EnumType";

/// Fallback suffix stripped when `EnumType` is absent
const SHORT_TYPE_SUFFIX: &str = "Type";

static ENUM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid enum name pattern"));

static CASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").expect("valid case name pattern"));

/// Convert a PascalCase/camelCase identifier to snake_case.
///
/// An underscore is inserted before every ASCII uppercase letter except the
/// first character, then the whole string is lowercased. Runs of capitals are
/// not treated as acronyms: `UserID` becomes `user_i_d`.
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, ch) in identifier.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

/// Derive the canonical type name from a type adapter class name.
///
/// Strips a trailing `EnumType`, or failing that a trailing `Type`, then
/// snake_cases the rest. At most one suffix is removed.
pub fn derive_type_name(class_name: &str) -> String {
    let base = class_name
        .strip_suffix(TYPE_CLASS_SUFFIX)
        .or_else(|| class_name.strip_suffix(SHORT_TYPE_SUFFIX))
        .unwrap_or(class_name);

    to_snake_case(base)
}

/// Resolve a type name: an explicit override wins, otherwise derive it.
pub fn resolve_type_name(declared_name: &str, override_name: Option<&str>) -> String {
    match override_name {
        Some(name) => name.to_string(),
        None => derive_type_name(declared_name),
    }
}

/// Name of the type adapter class generated for an enum
pub fn type_class_name(enum_name: &str) -> String {
    format!("{}{}", enum_name, TYPE_CLASS_SUFFIX)
}

/// Check an enum name: uppercase first letter, then letters and digits only
pub fn is_valid_enum_name(name: &str) -> bool {
    ENUM_NAME.is_match(name)
}

/// Check a case name: uppercase letters, digits, underscores, no leading digit
pub fn is_valid_case_name(name: &str) -> bool {
    CASE_NAME.is_match(name)
}

/// Naming configuration for a type adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNaming {
    /// Declared class name of the adapter (e.g. `DayOfWeekEnumType`)
    pub declared_name: String,

    /// Explicit type name, takes precedence over derivation
    #[serde(default)]
    pub override_name: Option<String>,
}

impl TypeNaming {
    /// Naming derived from the declared class name
    pub fn derived(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            override_name: None,
        }
    }

    /// Set an explicit type name
    pub fn with_override(mut self, name: impl Into<String>) -> Self {
        self.override_name = Some(name.into());
        self
    }

    /// The resolved type name
    pub fn type_name(&self) -> String {
        resolve_type_name(&self.declared_name, self.override_name.as_deref())
    }
}
