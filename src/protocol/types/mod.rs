//! Column metadata types: wire records, the type catalog and resolved descriptors.

mod catalog;
mod column;
mod gate;
mod metadata;
mod resolve;
mod type_code;

pub use catalog::{entries, lookup, SizingRule, TypeCatalogEntry, VersionGate, WireFormat};
pub use column::{ColumnDescriptor, Description, DescriptorField, DescriptorTuple};
pub use gate::{decide, resolve_gated_type, EffectiveType, GateDecision};
pub use metadata::RawColumn;
pub use resolve::ColumnDescriptorBuilder;
pub use type_code::TypeCode;
