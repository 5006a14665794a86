//! Explicitly populated type registry
//!
//! Adapters are registered by an initialization call at program start;
//! nothing is discovered implicitly.

use std::collections::BTreeMap;
use tracing::debug;

use crate::adapter::{RegistryError, TypeAdapter};
use crate::builtin::DayOfWeek;

/// Registry of column type adapters keyed by type name
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, Box<dyn TypeAdapter>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in adapters
    pub fn with_builtins() -> Result<Self, RegistryError> {
        Ok(Self::builder().with_builtins()?.build())
    }

    /// Start building a registry
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Register an adapter under its type name
    pub fn register<A: TypeAdapter + 'static>(&mut self, adapter: A) -> Result<(), RegistryError> {
        let type_name = adapter.type_name().to_string();

        if let Some(existing) = self.types.get(&type_name) {
            return Err(RegistryError::DuplicateTypeName {
                type_name,
                existing: existing.declared_name().to_string(),
            });
        }

        debug!(type_name = %type_name, adapter = adapter.declared_name(), "Registered type adapter");
        self.types.insert(type_name, Box::new(adapter));
        Ok(())
    }

    /// Look up an adapter
    pub fn get(&self, type_name: &str) -> Option<&dyn TypeAdapter> {
        self.types.get(type_name).map(|adapter| adapter.as_ref())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// `{type_name: adapter}` pairs for a column type layer
    pub fn type_map(&self) -> BTreeMap<String, String> {
        self.types
            .iter()
            .map(|(name, adapter)| (name.clone(), adapter.declared_name().to_string()))
            .collect()
    }

    fn adapter(&self, type_name: &str) -> Result<&dyn TypeAdapter, RegistryError> {
        self.get(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))
    }

    /// Validate a value for storage in a column of `type_name`
    pub fn encode_value(&self, type_name: &str, value: &str) -> Result<&'static str, RegistryError> {
        self.adapter(type_name)?
            .normalize(value)
            .ok_or_else(|| RegistryError::UnknownValue {
                type_name: type_name.to_string(),
                value: value.to_string(),
            })
    }

    /// Read a stored value; unknown or missing values decode to `None`
    pub fn decode_value(&self, type_name: &str, raw: Option<&str>) -> Result<Option<&'static str>, RegistryError> {
        let adapter = self.adapter(type_name)?;
        Ok(raw.and_then(|value| adapter.normalize(value)))
    }

    /// Column declaration for `type_name`
    pub fn sql_declaration(&self, type_name: &str) -> Result<String, RegistryError> {
        Ok(self.adapter(type_name)?.sql_declaration())
    }
}

/// Builder for `TypeRegistry`
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    registry: TypeRegistry,
}

impl TypeRegistryBuilder {
    /// Include the built-in adapters
    pub fn with_builtins(mut self) -> Result<Self, RegistryError> {
        self.registry.register(DayOfWeek::adapter())?;
        Ok(self)
    }

    /// Add an adapter
    pub fn with<A: TypeAdapter + 'static>(mut self, adapter: A) -> Result<Self, RegistryError> {
        self.registry.register(adapter)?;
        Ok(self)
    }

    pub fn build(self) -> TypeRegistry {
        self.registry
    }
}
