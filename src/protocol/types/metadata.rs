//! Raw column metadata as received on the wire.
//!
//! This struct preserves the declared values from COLMETADATA.
//! For the user-facing description, use `ColumnDescriptor`.

/// Raw per-column metadata.
///
/// Use `ColumnDescriptor` for the user-facing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    /// Column name (empty when the server supplies no alias).
    pub name: String,
    /// Wire type identifier.
    pub type_id: u8,
    /// Declared length in bytes (0 for types without a length on the wire).
    pub declared_length: u32,
    /// Declared precision.
    pub precision: u8,
    /// Declared scale.
    pub scale: u8,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl RawColumn {
    /// Create raw metadata with minimal info.
    pub fn new(name: impl Into<String>, type_id: u8) -> Self {
        Self {
            name: name.into(),
            type_id,
            declared_length: 0,
            precision: 0,
            scale: 0,
            nullable: true,
        }
    }

    /// Set the declared length.
    pub fn with_length(mut self, declared_length: u32) -> Self {
        self.declared_length = declared_length;
        self
    }

    /// Set declared precision and scale.
    pub fn with_precision_scale(mut self, precision: u8, scale: u8) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
