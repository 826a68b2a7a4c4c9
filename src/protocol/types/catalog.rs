//! Registry of supported wire types.
//!
//! Each entry records how a wire type identifier is laid out in TYPE_INFO,
//! how its client size is derived, and whether it only exists from a given
//! protocol version onward. The table is a `static` and never mutated.

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use crate::protocol::version::TdsVersion;

use super::type_code::TypeCode;

/// How the client size of a column is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingRule {
    /// Fixed client size in bytes.
    Fixed(u32),
    /// Size taken from the declared length, clamped to `max_length`.
    ///
    /// `char_width` is the server's bytes per character for character
    /// types and `None` for everything else.
    Variable {
        max_length: u32,
        char_width: Option<u32>,
    },
    /// The declared length selects a concrete type whose size equals it.
    ByLength(&'static [(u32, TypeCode)]),
}

/// Layout of the TYPE_INFO that follows the type identifier on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Nothing follows.
    Fixed,
    /// One length byte.
    ByteLen,
    /// Two-byte length, followed by a collation on character types.
    UShortLen { collation: bool },
    /// Length byte, precision byte, scale byte.
    Decimal,
    /// One fractional-second scale byte.
    Scale,
}

/// Minimum protocol version for a type, with the width of its character
/// rendering for older peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGate {
    /// First version carrying the native type.
    pub since: TdsVersion,
    /// Character size reported before `since`.
    pub legacy_size: u32,
}

/// One row of the type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCatalogEntry {
    /// Wire type identifier.
    pub type_id: u8,
    /// Logical type (the widest variant for length-selected types).
    pub type_code: TypeCode,
    /// Size derivation.
    pub sizing: SizingRule,
    /// TYPE_INFO layout.
    pub wire_format: WireFormat,
    /// Whether declared precision/scale are carried through.
    pub carries_precision_scale: bool,
    /// Optional minimum protocol version.
    pub version_gate: Option<VersionGate>,
}

const INTN_VARIANTS: &[(u32, TypeCode)] = &[
    (1, TypeCode::TinyInt),
    (2, TypeCode::SmallInt),
    (4, TypeCode::Int),
    (8, TypeCode::BigInt),
];
const BITN_VARIANTS: &[(u32, TypeCode)] = &[(1, TypeCode::Bit)];
const FLTN_VARIANTS: &[(u32, TypeCode)] = &[(4, TypeCode::Real), (8, TypeCode::Float)];
const MONEYN_VARIANTS: &[(u32, TypeCode)] = &[(4, TypeCode::SmallMoney), (8, TypeCode::Money)];
const DATETIMN_VARIANTS: &[(u32, TypeCode)] =
    &[(4, TypeCode::SmallDateTime), (8, TypeCode::DateTime)];
const GUID_VARIANTS: &[(u32, TypeCode)] = &[(16, TypeCode::Guid)];

// Sign byte plus up to 16 magnitude bytes.
const DECIMAL_MAX_LENGTH: u32 = 17;

const fn fixed(type_id: u8, type_code: TypeCode, size: u32) -> TypeCatalogEntry {
    TypeCatalogEntry {
        type_id,
        type_code,
        sizing: SizingRule::Fixed(size),
        wire_format: WireFormat::Fixed,
        carries_precision_scale: false,
        version_gate: None,
    }
}

const fn by_length(
    type_id: u8,
    type_code: TypeCode,
    variants: &'static [(u32, TypeCode)],
) -> TypeCatalogEntry {
    TypeCatalogEntry {
        type_id,
        type_code,
        sizing: SizingRule::ByLength(variants),
        wire_format: WireFormat::ByteLen,
        carries_precision_scale: false,
        version_gate: None,
    }
}

const fn exact_numeric(type_id: u8, type_code: TypeCode) -> TypeCatalogEntry {
    TypeCatalogEntry {
        type_id,
        type_code,
        sizing: SizingRule::Variable {
            max_length: DECIMAL_MAX_LENGTH,
            char_width: None,
        },
        wire_format: WireFormat::Decimal,
        carries_precision_scale: true,
        version_gate: None,
    }
}

const fn variable(
    type_id: u8,
    type_code: TypeCode,
    wire_format: WireFormat,
    char_width: Option<u32>,
) -> TypeCatalogEntry {
    let max_length = match wire_format {
        WireFormat::UShortLen { .. } => TDS_MAX_USHORTLEN,
        _ => TDS_MAX_BYTELEN,
    };
    TypeCatalogEntry {
        type_id,
        type_code,
        sizing: SizingRule::Variable {
            max_length,
            char_width,
        },
        wire_format,
        carries_precision_scale: false,
        version_gate: None,
    }
}

static CATALOG: &[TypeCatalogEntry] = &[
    // Fixed-length
    fixed(SYBINT1, TypeCode::TinyInt, 1),
    fixed(SYBBIT, TypeCode::Bit, 1),
    fixed(SYBINT2, TypeCode::SmallInt, 2),
    fixed(SYBINT4, TypeCode::Int, 4),
    fixed(SYBINT8, TypeCode::BigInt, 8),
    fixed(SYBREAL, TypeCode::Real, 4),
    fixed(SYBFLT8, TypeCode::Float, 8),
    fixed(SYBMONEY4, TypeCode::SmallMoney, 4),
    fixed(SYBMONEY, TypeCode::Money, 8),
    fixed(SYBDATETIME4, TypeCode::SmallDateTime, 4),
    fixed(SYBDATETIME, TypeCode::DateTime, 8),
    // Nullable, length-selected
    by_length(SYBINTN, TypeCode::BigInt, INTN_VARIANTS),
    by_length(SYBBITN, TypeCode::Bit, BITN_VARIANTS),
    by_length(SYBFLTN, TypeCode::Float, FLTN_VARIANTS),
    by_length(SYBMONEYN, TypeCode::Money, MONEYN_VARIANTS),
    by_length(SYBDATETIMN, TypeCode::DateTime, DATETIMN_VARIANTS),
    by_length(SYBUNIQUE, TypeCode::Guid, GUID_VARIANTS),
    // Exact numerics
    exact_numeric(SYBDECIMAL, TypeCode::Decimal),
    exact_numeric(SYBNUMERIC, TypeCode::Numeric),
    // Native date/time
    TypeCatalogEntry {
        type_id: SYBMSDATE,
        type_code: TypeCode::Date,
        sizing: SizingRule::Fixed(TDS_NATIVE_DATE_SIZE),
        wire_format: WireFormat::Fixed,
        carries_precision_scale: false,
        version_gate: Some(VersionGate {
            since: TdsVersion::V7_3,
            legacy_size: TDS_LEGACY_DATE_SIZE,
        }),
    },
    TypeCatalogEntry {
        type_id: SYBMSTIME,
        type_code: TypeCode::Time,
        sizing: SizingRule::Fixed(TDS_NATIVE_TIME_SIZE),
        wire_format: WireFormat::Scale,
        carries_precision_scale: true,
        version_gate: Some(VersionGate {
            since: TdsVersion::V7_3,
            legacy_size: TDS_LEGACY_TIME_SIZE,
        }),
    },
    // Legacy byte-length character and binary
    variable(SYBCHAR, TypeCode::Char, WireFormat::ByteLen, Some(1)),
    variable(SYBVARCHAR, TypeCode::Char, WireFormat::ByteLen, Some(1)),
    variable(SYBBINARY, TypeCode::Binary, WireFormat::ByteLen, None),
    variable(SYBVARBINARY, TypeCode::Binary, WireFormat::ByteLen, None),
    // USHORTLEN character and binary
    variable(XSYBCHAR, TypeCode::Char, WireFormat::UShortLen { collation: true }, Some(1)),
    variable(XSYBVARCHAR, TypeCode::Char, WireFormat::UShortLen { collation: true }, Some(1)),
    variable(XSYBNCHAR, TypeCode::Char, WireFormat::UShortLen { collation: true }, Some(2)),
    variable(XSYBNVARCHAR, TypeCode::Char, WireFormat::UShortLen { collation: true }, Some(2)),
    variable(XSYBBINARY, TypeCode::Binary, WireFormat::UShortLen { collation: false }, None),
    variable(XSYBVARBINARY, TypeCode::Binary, WireFormat::UShortLen { collation: false }, None),
];

/// Look up the catalog entry for a wire type identifier.
///
/// Returns `Err(Error::UnsupportedType)` for identifiers with no entry.
pub fn lookup(type_id: u8) -> Result<&'static TypeCatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.type_id == type_id)
        .ok_or(Error::UnsupportedType { type_id })
}

/// All registered entries.
pub fn entries() -> &'static [TypeCatalogEntry] {
    CATALOG
}
