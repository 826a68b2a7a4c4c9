//! TDS protocol constants.
//!
//! Type identifiers follow the MS-TDS TYPE_INFO encoding. The legacy fallback
//! sizes are protocol-compatibility constants and must not be derived.

// Token types
pub const TDS_TOKEN_COLMETADATA: u8 = 0x81;

// COLMETADATA column count meaning "no metadata"
pub const TDS_NO_METADATA: u16 = 0xFFFF;

// Column flags
pub const TDS_COLUMN_FLAG_NULLABLE: u16 = 0x0001;

// Fixed-length data types
pub const SYBINT1: u8 = 0x30;
pub const SYBBIT: u8 = 0x32;
pub const SYBINT2: u8 = 0x34;
pub const SYBINT4: u8 = 0x38;
pub const SYBDATETIME4: u8 = 0x3A;
pub const SYBREAL: u8 = 0x3B;
pub const SYBMONEY: u8 = 0x3C;
pub const SYBDATETIME: u8 = 0x3D;
pub const SYBFLT8: u8 = 0x3E;
pub const SYBMONEY4: u8 = 0x7A;
pub const SYBINT8: u8 = 0x7F;

// Byte-length nullable data types
pub const SYBUNIQUE: u8 = 0x24;
pub const SYBINTN: u8 = 0x26;
pub const SYBBITN: u8 = 0x68;
pub const SYBFLTN: u8 = 0x6D;
pub const SYBMONEYN: u8 = 0x6E;
pub const SYBDATETIMN: u8 = 0x6F;

// Exact numerics
pub const SYBDECIMAL: u8 = 0x6A;
pub const SYBNUMERIC: u8 = 0x6C;

// Date/time types introduced in TDS 7.3
pub const SYBMSDATE: u8 = 0x28;
pub const SYBMSTIME: u8 = 0x29;

// Legacy byte-length character and binary types
pub const SYBVARBINARY: u8 = 0x25;
pub const SYBVARCHAR: u8 = 0x27;
pub const SYBBINARY: u8 = 0x2D;
pub const SYBCHAR: u8 = 0x2F;

// USHORTLEN character and binary types
pub const XSYBVARBINARY: u8 = 0xA5;
pub const XSYBVARCHAR: u8 = 0xA7;
pub const XSYBBINARY: u8 = 0xAD;
pub const XSYBCHAR: u8 = 0xAF;
pub const XSYBNVARCHAR: u8 = 0xE7;
pub const XSYBNCHAR: u8 = 0xEF;

// Maximum declared lengths per length prefix
pub const TDS_MAX_BYTELEN: u32 = 255;
pub const TDS_MAX_USHORTLEN: u32 = 8000;

// USHORTLEN value announcing a PLP (max) column
pub const TDS_USHORTLEN_UNBOUNDED: u32 = 0xFFFF;

// Collation length on character TYPE_INFO (TDS 7.1+)
pub const TDS_COLLATION_LEN: usize = 5;

// Client-side size of the native date/time structures
pub const TDS_NATIVE_DATE_SIZE: u32 = 16;
pub const TDS_NATIVE_TIME_SIZE: u32 = 16;

// Character widths used when date/time are described for pre-7.3 peers
pub const TDS_LEGACY_DATE_SIZE: u32 = 40;
pub const TDS_LEGACY_TIME_SIZE: u32 = 64;

// Fractional-second digits reported for native TIME
pub const TDS_TIME_PRECISION: u8 = 7;
