//! Session parameters negotiated for a connection.

use crate::error::Result;
use crate::protocol::version::TdsVersion;

/// Character set the client decodes character columns into.
///
/// Determines how a character column's declared length is reported. With
/// `Passthrough` the declared byte length is used verbatim; the other
/// variants widen the server's character count to the worst-case number of
/// client bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientCharset {
    /// Report declared byte lengths unchanged.
    #[default]
    Passthrough,
    /// Single-byte client encoding (e.g. ISO-8859-1).
    SingleByte,
    /// UCS-2 client encoding.
    Ucs2,
    /// UTF-8 client encoding.
    Utf8,
}

impl ClientCharset {
    /// Worst-case bytes per character, `None` for passthrough.
    pub fn max_bytes_per_char(&self) -> Option<u32> {
        match self {
            ClientCharset::Passthrough => None,
            ClientCharset::SingleByte => Some(1),
            ClientCharset::Ucs2 => Some(2),
            ClientCharset::Utf8 => Some(4),
        }
    }
}

/// Session parameters.
#[derive(Debug, Clone, Default)]
pub struct SessionParams {
    /// Negotiated TDS version.
    pub tds_version: TdsVersion,
    /// Client character set for character column sizing.
    pub client_charset: ClientCharset,
}

impl SessionParams {
    /// Create session parameters for a negotiated version.
    pub fn new(tds_version: TdsVersion) -> Self {
        Self {
            tds_version,
            client_charset: ClientCharset::default(),
        }
    }

    /// Parse a version tag like "7.3" into session parameters.
    pub fn parse(version: &str) -> Result<Self> {
        Ok(Self::new(version.parse()?))
    }

    /// Set the client character set.
    ///
    /// # Example
    ///
    /// ```
    /// use tds_thin_rs::{ClientCharset, SessionParams};
    ///
    /// let params = SessionParams::parse("7.3")
    ///     .unwrap()
    ///     .with_client_charset(ClientCharset::Utf8);
    /// assert_eq!(params.client_charset, ClientCharset::Utf8);
    /// ```
    pub fn with_client_charset(mut self, charset: ClientCharset) -> Self {
        self.client_charset = charset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_params_parse() {
        let params = SessionParams::parse("7.2").unwrap();
        assert_eq!(params.tds_version, TdsVersion::V7_2);
        assert_eq!(params.client_charset, ClientCharset::Passthrough);

        assert!(SessionParams::parse("bogus").is_err());
    }

    #[test]
    fn test_session_params_default() {
        let params = SessionParams::default();
        assert_eq!(params.tds_version, TdsVersion::V7_4);
        assert_eq!(params.client_charset, ClientCharset::Passthrough);
    }

    #[test]
    fn test_charset_width() {
        assert_eq!(ClientCharset::Passthrough.max_bytes_per_char(), None);
        assert_eq!(ClientCharset::Utf8.max_bytes_per_char(), Some(4));
        assert_eq!(ClientCharset::Ucs2.max_bytes_per_char(), Some(2));
    }
}
