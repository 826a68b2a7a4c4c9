//! Resolution of raw column metadata into column descriptors.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::protocol::constants::{TDS_TIME_PRECISION, TDS_USHORTLEN_UNBOUNDED};
use crate::protocol::session::{ClientCharset, SessionParams};
use crate::protocol::version::TdsVersion;

use super::catalog::{self, SizingRule, WireFormat};
use super::column::{ColumnDescriptor, Description};
use super::gate::resolve_gated_type;
use super::metadata::RawColumn;
use super::type_code::TypeCode;

/// Builds `ColumnDescriptor`s for one negotiated session.
///
/// Resolution is a pure function of the raw metadata and the session
/// parameters; it performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnDescriptorBuilder {
    tds_version: TdsVersion,
    client_charset: ClientCharset,
}

impl ColumnDescriptorBuilder {
    /// Create a builder for a negotiated version, reporting declared lengths verbatim.
    pub fn new(tds_version: TdsVersion) -> Self {
        Self {
            tds_version,
            client_charset: ClientCharset::Passthrough,
        }
    }

    /// Create a builder from session parameters.
    pub fn from_session(params: &SessionParams) -> Self {
        Self {
            tds_version: params.tds_version,
            client_charset: params.client_charset,
        }
    }

    /// Set the client character set used to size character columns.
    pub fn with_client_charset(mut self, charset: ClientCharset) -> Self {
        self.client_charset = charset;
        self
    }

    /// Negotiated version this builder resolves for.
    pub fn tds_version(&self) -> TdsVersion {
        self.tds_version
    }

    /// Resolve one column.
    ///
    /// Fails with `Error::UnsupportedType` when the wire type is not in the
    /// catalog, `Error::UnboundedLength` for max-length columns, and
    /// `Error::InvalidColumnLength` when a length-selected type declares a
    /// length none of its variants has.
    pub fn resolve(&self, raw: &RawColumn) -> Result<ColumnDescriptor> {
        let entry = catalog::lookup(raw.type_id).inspect_err(|_| {
            debug!(column = %raw.name, type_id = raw.type_id, "no catalog entry for wire type");
        })?;
        let effective = resolve_gated_type(entry, self.tds_version);
        if effective.is_fallback() {
            debug!(
                column = %raw.name,
                native = %entry.type_code,
                version = %self.tds_version,
                "describing version-gated type as character data"
            );
        }

        let (type_code, size) = match effective.sizing {
            SizingRule::Fixed(size) => (effective.type_code, size),
            SizingRule::Variable {
                max_length,
                char_width,
            } => {
                if raw.declared_length == TDS_USHORTLEN_UNBOUNDED
                    && matches!(entry.wire_format, WireFormat::UShortLen { .. })
                {
                    return Err(Error::UnboundedLength {
                        column: raw.name.clone(),
                    });
                }
                let length = raw.declared_length.min(max_length);
                (effective.type_code, self.client_length(length, char_width))
            }
            SizingRule::ByLength(variants) => variants
                .iter()
                .find(|(length, _)| *length == raw.declared_length)
                .map(|(length, code)| (*code, *length))
                .ok_or_else(|| Error::InvalidColumnLength {
                    column: raw.name.clone(),
                    type_id: raw.type_id,
                    length: raw.declared_length,
                })?,
        };

        let (precision, scale) = if effective.carries_precision_scale && type_code.is_exact_numeric()
        {
            (raw.precision, raw.scale)
        } else if type_code == TypeCode::Time {
            (TDS_TIME_PRECISION, TDS_TIME_PRECISION)
        } else {
            (0, 0)
        };

        trace!(
            column = %raw.name,
            type_id = raw.type_id,
            %type_code,
            size,
            precision,
            scale,
            "resolved column"
        );

        Ok(ColumnDescriptor::new(
            raw.name.clone(),
            type_code,
            size,
            precision,
            scale,
            raw.nullable,
        ))
    }

    /// Resolve every column of a result set, in order.
    ///
    /// The first failure aborts the whole description.
    pub fn resolve_all(&self, raws: &[RawColumn]) -> Result<Description> {
        let columns = raws
            .iter()
            .map(|raw| self.resolve(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Description::new(columns))
    }

    /// Convert a server length to worst-case client bytes for character types.
    fn client_length(&self, length: u32, char_width: Option<u32>) -> u32 {
        match (char_width, self.client_charset.max_bytes_per_char()) {
            (Some(server), Some(client)) => length / server * client,
            _ => length,
        }
    }
}
