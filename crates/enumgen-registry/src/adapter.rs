//! Backed enums and their column type adapters

use enumgen_core::TypeNaming;
use std::fmt;
use std::marker::PhantomData;

/// An enum whose cases each carry a string value
pub trait BackedEnum: Copy + Eq + Send + Sync + 'static {
    /// Reference name of the enum (what a generated adapter points at)
    const NAME: &'static str;

    /// All cases in declaration order
    fn cases() -> &'static [Self];

    /// Backing value of this case
    fn value(&self) -> &'static str;

    /// Case with the given backing value, if any
    fn try_from_value(value: &str) -> Option<Self> {
        Self::cases().iter().copied().find(|case| case.value() == value)
    }
}

/// Errors from adapter lookup and value conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Type '{type_name}' is already registered by {existing}")]
    DuplicateTypeName { type_name: String, existing: String },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Value '{value}' is not a case of type '{type_name}'")]
    UnknownValue { type_name: String, value: String },
}

/// Type-erased adapter, so the registry can dispatch by type name
pub trait TypeAdapter: fmt::Debug + Send + Sync {
    /// Registry key
    fn type_name(&self) -> &str;

    /// Declared adapter name (e.g. `DayOfWeekEnumType`)
    fn declared_name(&self) -> &str;

    /// Reference to the enum this adapter converts
    fn enum_reference(&self) -> &'static str;

    /// Backing values in declaration order
    fn values(&self) -> Vec<&'static str>;

    /// The stored value for `raw`, or `None` if it is not a case value
    fn normalize(&self, raw: &str) -> Option<&'static str>;

    /// Column declaration listing every allowed value
    fn sql_declaration(&self) -> String {
        let values: Vec<String> = self
            .values()
            .into_iter()
            .map(|v| format!("'{}'", v.replace('\'', "''")))
            .collect();

        format!("ENUM({})", values.join(", "))
    }
}

/// Column type adapter for a backed enum
///
/// Naming is configuration rather than inheritance: the type name comes from
/// the declared adapter name unless an explicit override is set.
pub struct EnumType<E> {
    naming: TypeNaming,
    type_name: String,
    _marker: PhantomData<fn() -> E>,
}

impl<E: BackedEnum> EnumType<E> {
    /// Adapter whose type name is derived from `declared_name`
    pub fn new(declared_name: impl Into<String>) -> Self {
        Self::with_naming(TypeNaming::derived(declared_name))
    }

    /// Adapter with explicit naming configuration
    pub fn with_naming(naming: TypeNaming) -> Self {
        let type_name = naming.type_name();
        Self {
            naming,
            type_name,
            _marker: PhantomData,
        }
    }

    /// Registry key
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Reference name of the converted enum
    pub fn enum_reference(&self) -> &'static str {
        E::NAME
    }

    pub fn naming(&self) -> &TypeNaming {
        &self.naming
    }

    /// Enum case to stored value; `None` stays `None`
    pub fn encode(&self, value: Option<E>) -> Option<&'static str> {
        value.map(|case| case.value())
    }

    /// Stored value to enum case; unknown values decode to `None`
    pub fn decode(&self, raw: Option<&str>) -> Option<E> {
        raw.and_then(E::try_from_value)
    }
}

impl<E> fmt::Debug for EnumType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("naming", &self.naming)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl<E> Clone for EnumType<E> {
    fn clone(&self) -> Self {
        Self {
            naming: self.naming.clone(),
            type_name: self.type_name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: BackedEnum> TypeAdapter for EnumType<E> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn declared_name(&self) -> &str {
        &self.naming.declared_name
    }

    fn enum_reference(&self) -> &'static str {
        E::NAME
    }

    fn values(&self) -> Vec<&'static str> {
        E::cases().iter().map(|case| case.value()).collect()
    }

    fn normalize(&self, raw: &str) -> Option<&'static str> {
        E::try_from_value(raw).map(|case| case.value())
    }
}
