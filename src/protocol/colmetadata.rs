//! COLMETADATA token decoding.
//!
//! Token layout (after the 0x81 token byte):
//!
//! ```text
//! count: u16                     (0xFFFF = no metadata)
//! per column:
//!   user_type: u16 | u32         (u32 from TDS 7.2)
//!   flags: u16                   (bit 0 = nullable)
//!   type_id: u8
//!   type_info: depends on type   (see WireFormat)
//!   name: B_VARCHAR
//! ```

use bytes::Bytes;
use tracing::trace;

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;
use crate::protocol::types::{lookup, RawColumn, WireFormat};
use crate::protocol::version::TdsVersion;

/// Decode a COLMETADATA token including its leading token byte.
///
/// Returns `Ok(None)` when the server announced no metadata.
pub fn decode_colmetadata_token(data: Bytes, version: TdsVersion) -> Result<Option<Vec<RawColumn>>> {
    let mut buf = ReadBuffer::new(data);
    let token = buf.read_u8()?;
    if token != TDS_TOKEN_COLMETADATA {
        return Err(Error::protocol(format!(
            "Expected COLMETADATA token {:#04x}, got {:#04x}",
            TDS_TOKEN_COLMETADATA, token
        )));
    }
    parse_colmetadata(&mut buf, version)
}

/// Parse the body of a COLMETADATA token.
///
/// Unknown type identifiers fail with `Error::UnsupportedType`, since the
/// size of their TYPE_INFO cannot be known.
pub fn parse_colmetadata(buf: &mut ReadBuffer, version: TdsVersion) -> Result<Option<Vec<RawColumn>>> {
    let count = buf.read_u16_le()?;
    if count == TDS_NO_METADATA {
        return Ok(None);
    }

    // Smallest column: user type, flags, type id and an empty name.
    let min_column_len = if version >= TdsVersion::V7_2 { 8 } else { 6 };
    let mut columns = Vec::with_capacity((count as usize).min(buf.remaining() / min_column_len));
    for _ in 0..count {
        columns.push(parse_column(buf, version)?);
    }
    trace!(columns = columns.len(), "parsed COLMETADATA");

    Ok(Some(columns))
}

fn parse_column(buf: &mut ReadBuffer, version: TdsVersion) -> Result<RawColumn> {
    if version >= TdsVersion::V7_2 {
        let _user_type = buf.read_u32_le()?;
    } else {
        let _user_type = buf.read_u16_le()?;
    }
    let flags = buf.read_u16_le()?;
    let type_id = buf.read_u8()?;
    let entry = lookup(type_id)?;

    let mut declared_length = 0;
    let mut precision = 0;
    let mut scale = 0;
    match entry.wire_format {
        WireFormat::Fixed => {}
        WireFormat::ByteLen => {
            declared_length = buf.read_u8()? as u32;
        }
        WireFormat::UShortLen { collation } => {
            declared_length = buf.read_u16_le()? as u32;
            if collation && version >= TdsVersion::V7_1 {
                buf.skip(TDS_COLLATION_LEN)?;
            }
        }
        WireFormat::Decimal => {
            declared_length = buf.read_u8()? as u32;
            precision = buf.read_u8()?;
            scale = buf.read_u8()?;
        }
        WireFormat::Scale => {
            scale = buf.read_u8()?;
        }
    }

    let name = buf.read_b_varchar()?;

    Ok(RawColumn {
        name,
        type_id,
        declared_length,
        precision,
        scale,
        nullable: flags & TDS_COLUMN_FLAG_NULLABLE != 0,
    })
}
