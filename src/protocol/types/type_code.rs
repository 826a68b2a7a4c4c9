//! Logical type codes exposed in column descriptions.
//!
//! The discriminants are the numeric codes db-library clients have always
//! reported for these types, so a code can be persisted or compared across
//! driver versions.

use std::fmt;

/// Client-facing logical type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeCode {
    /// Character data of any width or encoding.
    Char = 47,
    /// Binary data.
    Binary = 45,
    /// 1-byte unsigned integer.
    TinyInt = 48,
    /// Bit flag.
    Bit = 50,
    /// 2-byte integer.
    SmallInt = 52,
    /// 4-byte integer.
    Int = 56,
    /// 8-byte integer.
    BigInt = 127,
    /// 4-byte float.
    Real = 59,
    /// 8-byte float.
    Float = 62,
    /// 4-byte money.
    SmallMoney = 122,
    /// 8-byte money.
    Money = 60,
    /// 4-byte datetime.
    SmallDateTime = 58,
    /// 8-byte datetime.
    DateTime = 61,
    /// Native date (TDS 7.3+).
    Date = 40,
    /// Native time (TDS 7.3+).
    Time = 41,
    /// Exact decimal.
    Decimal = 106,
    /// Exact numeric.
    Numeric = 108,
    /// Unique identifier.
    Guid = 36,
}

impl TypeCode {
    /// Stable numeric code of this type.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether precision and scale are meaningful for this type.
    pub fn has_precision_scale(&self) -> bool {
        matches!(self, TypeCode::Decimal | TypeCode::Numeric | TypeCode::Time)
    }

    /// Whether this is the decimal/numeric family.
    pub fn is_exact_numeric(&self) -> bool {
        matches!(self, TypeCode::Decimal | TypeCode::Numeric)
    }

    /// Type name as used in SQL.
    pub fn name(&self) -> &'static str {
        match self {
            TypeCode::Char => "CHAR",
            TypeCode::Binary => "BINARY",
            TypeCode::TinyInt => "TINYINT",
            TypeCode::Bit => "BIT",
            TypeCode::SmallInt => "SMALLINT",
            TypeCode::Int => "INT",
            TypeCode::BigInt => "BIGINT",
            TypeCode::Real => "REAL",
            TypeCode::Float => "FLOAT",
            TypeCode::SmallMoney => "SMALLMONEY",
            TypeCode::Money => "MONEY",
            TypeCode::SmallDateTime => "SMALLDATETIME",
            TypeCode::DateTime => "DATETIME",
            TypeCode::Date => "DATE",
            TypeCode::Time => "TIME",
            TypeCode::Decimal => "DECIMAL",
            TypeCode::Numeric => "NUMERIC",
            TypeCode::Guid => "GUID",
        }
    }
}

impl From<TypeCode> for u8 {
    fn from(code: TypeCode) -> Self {
        code.code()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_codes() {
        assert_eq!(TypeCode::Char.code(), 47);
        assert_eq!(TypeCode::Int.code(), 56);
        assert_eq!(TypeCode::BigInt.code(), 127);
        assert_eq!(TypeCode::Binary.code(), 45);
        assert_eq!(TypeCode::DateTime.code(), 61);
        assert_eq!(TypeCode::Date.code(), 40);
        assert_eq!(TypeCode::Time.code(), 41);
        assert_eq!(TypeCode::Decimal.code(), 106);
        assert_eq!(TypeCode::Money.code(), 60);
    }

    #[test]
    fn test_precision_scale_families() {
        assert!(TypeCode::Decimal.has_precision_scale());
        assert!(TypeCode::Numeric.has_precision_scale());
        assert!(TypeCode::Time.has_precision_scale());
        assert!(!TypeCode::Money.has_precision_scale());
        assert!(!TypeCode::Int.has_precision_scale());
        assert!(!TypeCode::Time.is_exact_numeric());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeCode::SmallDateTime.to_string(), "SMALLDATETIME");
        assert_eq!(format!("{}", TypeCode::Decimal), "DECIMAL");
    }
}
