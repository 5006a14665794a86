//! Column type adapters for backed enums
//!
//! Adapters translate between enum cases and their stored string values.
//! A `TypeRegistry` maps type names to adapters and is populated explicitly:
//!
//! ```rust,ignore
//! use enumgen_registry::{DayOfWeek, EnumType, TypeRegistry};
//!
//! let registry = TypeRegistry::builder()
//!     .with_builtins()?
//!     .with(EnumType::<OrderState>::new("OrderStateEnumType"))?
//!     .build();
//!
//! let stored = registry.encode_value("order_state", "paid")?;
//! ```

pub mod adapter;
pub mod builtin;
pub mod registry;

pub use adapter::{BackedEnum, EnumType, RegistryError, TypeAdapter};
pub use builtin::{DayOfWeek, DayOfWeekEnumType};
pub use registry::{TypeRegistry, TypeRegistryBuilder};
