//! TDS Thin Client: result-set metadata
//!
//! Resolves the column metadata a TDS server sends for a result set into
//! stable, client-facing column descriptors: logical type code, display and
//! internal size, precision, scale and nullability. Types that only exist
//! from TDS 7.3 onward (DATE, TIME) are described as character data for
//! older peers.
//!
//! Transport, login and row decoding live outside this crate; the network
//! layer plugs in through [`StatementExecutor`].
//!
//! # Example
//!
//! ```
//! use tds_thin_rs::protocol::constants::{SYBINTN, SYBMSDATE};
//! use tds_thin_rs::{ColumnDescriptorBuilder, RawColumn, TdsVersion, TypeCode};
//!
//! let raws = [
//!     RawColumn::new("id", SYBINTN).with_length(4),
//!     RawColumn::new("born", SYBMSDATE),
//! ];
//!
//! let legacy = ColumnDescriptorBuilder::new(TdsVersion::V7_2).resolve_all(&raws)?;
//! assert_eq!(legacy[1].type_code(), TypeCode::Char);
//! assert_eq!(legacy[1].internal_size(), 40);
//!
//! let native = ColumnDescriptorBuilder::new(TdsVersion::V7_3).resolve_all(&raws)?;
//! assert_eq!(native[0].as_tuple(), ("id", TypeCode::Int, 4, 4, 0, 0, true));
//! assert_eq!(native[1].type_code(), TypeCode::Date);
//! # Ok::<(), tds_thin_rs::Error>(())
//! ```

pub mod connection;
pub mod cursor;
pub mod error;
pub mod protocol;

// Re-export main types
pub use connection::{Connection, ResultMetadata, StatementExecutor};
pub use cursor::{Cursor, MetadataState};
pub use error::{Error, Result};
pub use protocol::session::{ClientCharset, SessionParams};
pub use protocol::types::{
    ColumnDescriptor, ColumnDescriptorBuilder, Description, DescriptorField, RawColumn, TypeCode,
};
pub use protocol::version::TdsVersion;
