//! ColumnDescriptor and Description types for the user-facing API.
//!
//! A `Description` is the resolved shape of one result set. Both types are
//! immutable values; a new execution produces a new `Description`.

use std::fmt;
use std::sync::Arc;

use super::type_code::TypeCode;

/// Positional value of one descriptor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorField<'a> {
    Name(&'a str),
    TypeCode(TypeCode),
    DisplaySize(u32),
    InternalSize(u32),
    Precision(u8),
    Scale(u8),
    NullOk(bool),
}

/// Tuple form of a descriptor, in field order.
pub type DescriptorTuple<'a> = (&'a str, TypeCode, u32, u32, u8, u8, bool);

/// Resolved description of one result-set column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    name: String,
    type_code: TypeCode,
    size: u32,
    precision: u8,
    scale: u8,
    null_ok: bool,
}

impl ColumnDescriptor {
    /// Field names in positional order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "name",
        "type_code",
        "display_size",
        "internal_size",
        "precision",
        "scale",
        "null_ok",
    ];

    pub(crate) fn new(
        name: String,
        type_code: TypeCode,
        size: u32,
        precision: u8,
        scale: u8,
        null_ok: bool,
    ) -> Self {
        Self {
            name,
            type_code,
            size,
            precision,
            scale,
            null_ok,
        }
    }

    /// Column name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical type.
    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    /// Size needed to render the value.
    pub fn display_size(&self) -> u32 {
        self.size
    }

    /// Bytes the client reserves for the decoded value.
    pub fn internal_size(&self) -> u32 {
        self.size
    }

    /// Precision (decimal/numeric/time only, else 0).
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Scale (decimal/numeric/time only, else 0).
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether the column may carry NULL.
    pub fn null_ok(&self) -> bool {
        self.null_ok
    }

    /// Field at position `index` (0..7).
    pub fn field(&self, index: usize) -> Option<DescriptorField<'_>> {
        let field = match index {
            0 => DescriptorField::Name(self.name.as_str()),
            1 => DescriptorField::TypeCode(self.type_code),
            2 => DescriptorField::DisplaySize(self.display_size()),
            3 => DescriptorField::InternalSize(self.internal_size()),
            4 => DescriptorField::Precision(self.precision),
            5 => DescriptorField::Scale(self.scale),
            6 => DescriptorField::NullOk(self.null_ok),
            _ => return None,
        };
        Some(field)
    }

    /// Field by name, as listed in `FIELD_NAMES`.
    pub fn field_by_name(&self, name: &str) -> Option<DescriptorField<'_>> {
        Self::FIELD_NAMES
            .iter()
            .position(|f| *f == name)
            .and_then(|index| self.field(index))
    }

    /// All seven fields as a tuple.
    pub fn as_tuple(&self) -> DescriptorTuple<'_> {
        (
            self.name.as_str(),
            self.type_code,
            self.display_size(),
            self.internal_size(),
            self.precision,
            self.scale,
            self.null_ok,
        )
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', {}, {}, {}, {}, {}, {})",
            self.name,
            self.type_code,
            self.display_size(),
            self.internal_size(),
            self.precision,
            self.scale,
            self.null_ok
        )
    }
}

/// Ordered column descriptors for one result set.
///
/// Cloning shares the underlying columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    columns: Arc<[ColumnDescriptor]>,
}

impl Description {
    /// Create a description from resolved columns.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    /// Column descriptors in server order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.columns.get(index)
    }

    /// Iterate over descriptors.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Every descriptor in tuple form.
    pub fn to_tuples(&self) -> Vec<DescriptorTuple<'_>> {
        self.columns.iter().map(ColumnDescriptor::as_tuple).collect()
    }
}

impl std::ops::Index<usize> for Description {
    type Output = ColumnDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}

impl<'a> IntoIterator for &'a Description {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
