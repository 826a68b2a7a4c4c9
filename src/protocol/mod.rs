//! TDS protocol support for column metadata.

pub mod buffer;
pub mod colmetadata;
pub mod constants;
pub mod session;
pub mod types;
pub mod version;

pub use buffer::ReadBuffer;
pub use colmetadata::{decode_colmetadata_token, parse_colmetadata};
pub use session::{ClientCharset, SessionParams};
pub use types::{
    ColumnDescriptor, ColumnDescriptorBuilder, Description, DescriptorField, RawColumn, TypeCode,
};
pub use version::TdsVersion;
