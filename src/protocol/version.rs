//! Negotiated TDS protocol version.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A TDS protocol version tag, ordered by (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TdsVersion {
    major: u8,
    minor: u8,
}

impl TdsVersion {
    pub const V7_0: TdsVersion = TdsVersion::new(7, 0);
    pub const V7_1: TdsVersion = TdsVersion::new(7, 1);
    pub const V7_2: TdsVersion = TdsVersion::new(7, 2);
    /// First version carrying native DATE and TIME.
    pub const V7_3: TdsVersion = TdsVersion::new(7, 3);
    pub const V7_4: TdsVersion = TdsVersion::new(7, 4);

    /// Create a version from its components.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Major version number.
    pub fn major(&self) -> u8 {
        self.major
    }

    /// Minor version number.
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Decode the TDS version word sent in LOGINACK.
    ///
    /// The high byte carries major and minor as nibbles (`0x73` is 7.3);
    /// the remaining bytes are a revision and build marker and are ignored.
    ///
    /// ```
    /// use tds_thin_rs::TdsVersion;
    ///
    /// assert_eq!(TdsVersion::from_login_ack(0x730B_0003).unwrap(), TdsVersion::V7_3);
    /// ```
    pub fn from_login_ack(word: u32) -> Result<Self> {
        let high = (word >> 24) as u8;
        let version = Self::new(high >> 4, high & 0x0F);
        if version < Self::V7_0 || version > Self::V7_4 {
            return Err(Error::invalid_version(format!("{:#010x}", word)));
        }
        Ok(version)
    }
}

impl Default for TdsVersion {
    fn default() -> Self {
        Self::V7_4
    }
}

impl FromStr for TdsVersion {
    type Err = Error;

    /// Parse a tag like "7.3". A trailing revision letter ("7.3A", "7.3B")
    /// is accepted and dropped.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (major, minor) = trimmed
            .split_once('.')
            .ok_or_else(|| Error::invalid_version(s))?;
        let minor = minor.trim_end_matches(|c: char| c.is_ascii_alphabetic());

        let major = major.parse::<u8>().map_err(|_| Error::invalid_version(s))?;
        let minor = minor.parse::<u8>().map_err(|_| Error::invalid_version(s))?;
        if major > 15 || minor > 15 {
            return Err(Error::invalid_version(s));
        }

        Ok(Self::new(major, minor))
    }
}

impl fmt::Display for TdsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("7.0".parse::<TdsVersion>().unwrap(), TdsVersion::V7_0);
        assert_eq!("7.3".parse::<TdsVersion>().unwrap(), TdsVersion::V7_3);
        assert_eq!(" 7.4 ".parse::<TdsVersion>().unwrap(), TdsVersion::V7_4);
        assert_eq!("7.3B".parse::<TdsVersion>().unwrap(), TdsVersion::V7_3);
    }

    #[test]
    fn test_parse_invalid() {
        for tag in ["", "7", "seven.three", "7.x", "7.300"] {
            match tag.parse::<TdsVersion>() {
                Err(Error::InvalidTdsVersion { version }) => assert_eq!(version, tag),
                other => panic!("Expected InvalidTdsVersion for {:?}, got {:?}", tag, other),
            }
        }
    }

    #[test]
    fn test_ordering() {
        assert!(TdsVersion::V7_2 < TdsVersion::V7_3);
        assert!(TdsVersion::V7_4 >= TdsVersion::V7_3);
        assert!(TdsVersion::new(8, 0) > TdsVersion::V7_4);
    }

    #[test]
    fn test_from_login_ack() {
        assert_eq!(TdsVersion::from_login_ack(0x7000_0000).unwrap(), TdsVersion::V7_0);
        assert_eq!(TdsVersion::from_login_ack(0x7100_0001).unwrap(), TdsVersion::V7_1);
        assert_eq!(TdsVersion::from_login_ack(0x7209_0002).unwrap(), TdsVersion::V7_2);
        assert_eq!(TdsVersion::from_login_ack(0x730A_0003).unwrap(), TdsVersion::V7_3);
        assert_eq!(TdsVersion::from_login_ack(0x7400_0004).unwrap(), TdsVersion::V7_4);
        assert!(TdsVersion::from_login_ack(0x0500_0000).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TdsVersion::V7_3.to_string(), "7.3");
    }
}
