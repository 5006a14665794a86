//! Template contexts
//!
//! Flat, serializable views of the specs. Templates only see these.

use enumgen_core::{EnumSpec, TypeSpec};
use minijinja::Value as MinijinjaValue;
use serde::Serialize;

/// One case as seen by the enum template
#[derive(Debug, Clone, Serialize)]
pub struct CaseContext {
    pub name: String,
    pub value: String,
}

/// Context for the enum template
#[derive(Debug, Clone, Serialize)]
pub struct EnumContext {
    pub namespace: String,
    pub name: String,
    pub cases: Vec<CaseContext>,
}

impl EnumContext {
    /// Convert to MiniJinja value for rendering
    pub fn to_minijinja_value(&self) -> MinijinjaValue {
        MinijinjaValue::from_serialize(self)
    }
}

impl From<&EnumSpec> for EnumContext {
    fn from(spec: &EnumSpec) -> Self {
        Self {
            namespace: spec.namespace().to_string(),
            name: spec.name().to_string(),
            cases: spec
                .cases()
                .iter()
                .map(|c| CaseContext {
                    name: c.name.clone(),
                    value: c.value.clone(),
                })
                .collect(),
        }
    }
}

/// Context for the type adapter template
#[derive(Debug, Clone, Serialize)]
pub struct TypeContext {
    pub type_namespace: String,
    pub enum_namespace: String,
    pub enum_name: String,
    pub class_name: String,
    pub type_name: String,

    /// `use` target for the base class, aliased when its short name clashes
    pub base_import: String,

    /// Name the adapter extends
    pub base_name: String,
}

impl TypeContext {
    /// Convert to MiniJinja value for rendering
    pub fn to_minijinja_value(&self) -> MinijinjaValue {
        MinijinjaValue::from_serialize(self)
    }
}

impl From<&TypeSpec> for TypeContext {
    fn from(spec: &TypeSpec) -> Self {
        let short = spec.base_class.last_segment();
        let clashes = short == spec.enum_name.as_str() || short == spec.class_name;

        let (base_import, base_name) = if clashes {
            let alias = format!("Base{}", short);
            (format!("{} as {}", spec.base_class, alias), alias)
        } else {
            (spec.base_class.to_string(), short.to_string())
        };

        Self {
            type_namespace: spec.type_namespace.to_string(),
            enum_namespace: spec.enum_namespace.to_string(),
            enum_name: spec.enum_name.to_string(),
            class_name: spec.class_name.clone(),
            type_name: spec.type_name.clone(),
            base_import,
            base_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::{EnumCase, EnumName, Namespace};

    fn spec(enum_name: &str, base: &str) -> TypeSpec {
        let enum_spec = EnumSpec::new(
            EnumName::parse(enum_name).unwrap(),
            Namespace::parse("App\\Enum").unwrap(),
            vec![EnumCase::new("A", "a").unwrap()],
        )
        .unwrap();

        TypeSpec::for_enum(
            &enum_spec,
            Namespace::parse("App\\Type").unwrap(),
            Namespace::parse(base).unwrap(),
        )
    }

    #[test]
    fn base_class_imported_by_short_name() {
        let ctx = TypeContext::from(&spec("Status", "Vendor\\Type\\EnumType"));
        assert_eq!(ctx.base_import, "Vendor\\Type\\EnumType");
        assert_eq!(ctx.base_name, "EnumType");
    }

    #[test]
    fn clashing_base_class_is_aliased() {
        let ctx = TypeContext::from(&spec("Status", "Vendor\\Status"));
        assert_eq!(ctx.base_import, "Vendor\\Status as BaseStatus");
        assert_eq!(ctx.base_name, "BaseStatus");
    }
}
