//! Shared fixtures: an in-memory executor standing in for the network layer.

#![allow(dead_code)]

use bytes::{BufMut, Bytes, BytesMut};
use tds_thin_rs::protocol::constants::*;
use tds_thin_rs::{Error, RawColumn, Result, ResultMetadata, StatementExecutor, TdsVersion};

pub const NO_RESULTS: &str = "PRINT('no results here')";
pub const SINGLE_STRING: &str = "SELECT 'hi there' AS string";
pub const MIXED_TYPES: &str = "SELECT :0 AS none, :1 AS int, ... CONVERT(MONEY, :10) AS money";
pub const USERS: &str = "SELECT id, name, balance FROM users";
pub const XML_COLUMN: &str = "SELECT CAST('<a/>' AS XML) AS doc";
pub const FAILING: &str = "RAISERROR('boom', 16, 1)";
pub const EMPTY_COLUMNS: &str = "SELECT TOP 0 * FROM (SELECT 1 AS x) t WHERE 1 = 0";
pub const SLOW: &str = "WAITFOR DELAY '01:00:00'";

/// Sets up tracing subscriber for tests.
pub fn setup_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Answers a fixed set of statements the way a server of `version` would.
pub struct ScriptedServer {
    version: TdsVersion,
    pub executed: Vec<String>,
}

impl ScriptedServer {
    pub fn new(version: TdsVersion) -> Self {
        Self {
            version,
            executed: Vec::new(),
        }
    }

    fn respond(&self, sql: &str) -> Result<ResultMetadata> {
        match sql {
            NO_RESULTS => Ok(ResultMetadata::NoColumns),
            SINGLE_STRING => Ok(ResultMetadata::from_columns(vec![RawColumn::new(
                "string",
                XSYBVARCHAR,
            )
            .with_length(8)])),
            MIXED_TYPES => Ok(ResultMetadata::from_columns(mixed_type_columns())),
            USERS => ResultMetadata::from_colmetadata(users_token(self.version), self.version),
            XML_COLUMN => Ok(ResultMetadata::from_columns(vec![
                RawColumn::new("id", SYBINT4).with_nullable(false),
                RawColumn::new("doc", 0xF1),
            ])),
            EMPTY_COLUMNS => Ok(ResultMetadata::Columns(Vec::new())),
            FAILING => Err(Error::protocol("server reported error 50000")),
            _ => Err(Error::protocol(format!("unscripted statement: {}", sql))),
        }
    }
}

impl StatementExecutor for ScriptedServer {
    async fn execute(&mut self, sql: &str) -> Result<ResultMetadata> {
        self.executed.push(sql.to_string());
        if sql == SLOW {
            std::future::pending::<()>().await;
        }
        self.respond(sql)
    }
}

/// Metadata of a query selecting one parameter of each common type.
pub fn mixed_type_columns() -> Vec<RawColumn> {
    vec![
        RawColumn::new("none", XSYBVARCHAR).with_length(1),
        RawColumn::new("int", SYBINTN).with_length(4),
        RawColumn::new("bigint", SYBINTN).with_length(8),
        RawColumn::new("bytes", XSYBVARBINARY).with_length(4),
        RawColumn::new("binary10", XSYBBINARY).with_length(10),
        RawColumn::new("varbinary10", XSYBVARBINARY).with_length(10),
        RawColumn::new("bytearray", XSYBVARBINARY).with_length(4),
        RawColumn::new("string", XSYBNVARCHAR).with_length(32),
        RawColumn::new("char10", XSYBCHAR).with_length(10),
        RawColumn::new("varchar10", XSYBVARCHAR).with_length(10),
        RawColumn::new("datetime", SYBDATETIMN).with_length(8),
        RawColumn::new("date", SYBMSDATE),
        RawColumn::new("time", SYBMSTIME).with_precision_scale(0, 3),
        RawColumn::new("decimal", SYBDECIMAL)
            .with_length(17)
            .with_precision_scale(10, 7),
        RawColumn::new("money", SYBMONEYN).with_length(8),
    ]
}

fn put_name(out: &mut BytesMut, name: &str) {
    let units: Vec<u16> = name.encode_utf16().collect();
    out.put_u8(units.len() as u8);
    for unit in units {
        out.put_u16_le(unit);
    }
}

fn put_header(out: &mut BytesMut, version: TdsVersion, flags: u16, type_id: u8) {
    if version >= TdsVersion::V7_2 {
        out.put_u32_le(0);
    } else {
        out.put_u16_le(0);
    }
    out.put_u16_le(flags);
    out.put_u8(type_id);
}

/// COLMETADATA token for `id INT NOT NULL, name NVARCHAR(50), balance DECIMAL(12, 2)`.
pub fn users_token(version: TdsVersion) -> Bytes {
    let mut out = BytesMut::new();
    out.put_u8(TDS_TOKEN_COLMETADATA);
    out.put_u16_le(3);

    put_header(&mut out, version, 0x0000, SYBINT4);
    put_name(&mut out, "id");

    put_header(&mut out, version, TDS_COLUMN_FLAG_NULLABLE, XSYBNVARCHAR);
    out.put_u16_le(100);
    if version >= TdsVersion::V7_1 {
        out.put_slice(&[0x09, 0x04, 0xD0, 0x00, 0x34]);
    }
    put_name(&mut out, "name");

    put_header(&mut out, version, TDS_COLUMN_FLAG_NULLABLE, SYBDECIMAL);
    out.put_slice(&[9, 12, 2]);
    put_name(&mut out, "balance");

    out.freeze()
}
