//! High-level Connection API for the TDS thin client.
//!
//! The network layer is not part of this crate: a `Connection` wraps a
//! `StatementExecutor` that sends statements and returns the column metadata
//! of the first result, and resolves that metadata for the negotiated session.

use std::future::Future;

use bytes::Bytes;
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::protocol::colmetadata::decode_colmetadata_token;
use crate::protocol::session::SessionParams;
use crate::protocol::types::RawColumn;
use crate::protocol::version::TdsVersion;

/// Column metadata returned for an executed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMetadata {
    /// The statement produced no columns.
    NoColumns,
    /// Raw metadata of each column, in server order.
    Columns(Vec<RawColumn>),
}

impl ResultMetadata {
    /// Wrap raw columns; an empty list means no columns.
    pub fn from_columns(columns: Vec<RawColumn>) -> Self {
        if columns.is_empty() {
            ResultMetadata::NoColumns
        } else {
            ResultMetadata::Columns(columns)
        }
    }

    /// Decode a COLMETADATA token received from the server.
    pub fn from_colmetadata(token: Bytes, version: TdsVersion) -> Result<Self> {
        Ok(match decode_colmetadata_token(token, version)? {
            Some(columns) => Self::from_columns(columns),
            None => ResultMetadata::NoColumns,
        })
    }
}

/// Executes statements on behalf of a connection.
///
/// Implemented by the network layer. The returned metadata describes the
/// first result of the statement.
pub trait StatementExecutor {
    /// Execute `sql` and return its column metadata.
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<ResultMetadata>> + Send;
}

/// A TDS database connection.
pub struct Connection<E> {
    /// Statement executor for this connection.
    executor: E,
    /// Negotiated session parameters.
    params: SessionParams,
    /// Whether `close()` has been called.
    closed: bool,
}

impl<E> Connection<E> {
    /// Wrap an executor with the session parameters it negotiated.
    pub fn new(executor: E, params: SessionParams) -> Self {
        Self {
            executor,
            params,
            closed: false,
        }
    }

    /// Get the negotiated TDS version.
    pub fn tds_version(&self) -> TdsVersion {
        self.params.tds_version
    }

    /// Get the session parameters.
    pub fn session(&self) -> &SessionParams {
        &self.params
    }

    /// Get the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Check whether the connection is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the connection. Calling this more than once has no effect.
    pub fn close(&mut self) {
        if !self.closed {
            debug!(tds_version = %self.params.tds_version, "closing connection");
            self.closed = true;
        }
    }

    /// Open a cursor.
    ///
    /// The cursor takes exclusive access to the connection until dropped.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tds_thin_rs::{Connection, ResultMetadata, Result, SessionParams, StatementExecutor};
    ///
    /// struct Network;
    ///
    /// impl StatementExecutor for Network {
    ///     async fn execute(&mut self, _sql: &str) -> Result<ResultMetadata> {
    ///         Ok(ResultMetadata::NoColumns)
    ///     }
    /// }
    ///
    /// # async fn run() -> Result<()> {
    /// let mut conn = Connection::new(Network, SessionParams::parse("7.3")?);
    /// let mut cursor = conn.cursor()?;
    /// cursor.execute("PRINT('no results here')").await?;
    /// assert!(cursor.description().is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn cursor(&mut self) -> Result<Cursor<'_, E>> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        Ok(Cursor::new(self))
    }
}

impl<E: StatementExecutor> Connection<E> {
    /// Send a statement through the executor.
    pub(crate) async fn run(&mut self, sql: &str) -> Result<ResultMetadata> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        self.executor.execute(sql).await
    }
}

impl<E> Drop for Connection<E> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{SYBINT4, TDS_TOKEN_COLMETADATA};

    struct Silent;

    impl StatementExecutor for Silent {
        async fn execute(&mut self, _sql: &str) -> Result<ResultMetadata> {
            Ok(ResultMetadata::NoColumns)
        }
    }

    #[test]
    fn test_result_metadata_from_columns() {
        assert_eq!(ResultMetadata::from_columns(vec![]), ResultMetadata::NoColumns);

        let columns = vec![RawColumn::new("a", SYBINT4)];
        assert_eq!(
            ResultMetadata::from_columns(columns.clone()),
            ResultMetadata::Columns(columns)
        );
    }

    #[test]
    fn test_result_metadata_from_empty_token() {
        let token = Bytes::from_static(&[TDS_TOKEN_COLMETADATA, 0xFF, 0xFF]);
        assert_eq!(
            ResultMetadata::from_colmetadata(token, TdsVersion::V7_4).unwrap(),
            ResultMetadata::NoColumns
        );
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut conn = Connection::new(Silent, SessionParams::default());
        assert!(!conn.is_closed());
        conn.close();
        conn.close();
        assert!(conn.is_closed());
        assert!(matches!(conn.cursor(), Err(Error::ConnectionClosed)));
        assert!(matches!(
            tokio_test::block_on(conn.run("SELECT 1")),
            Err(Error::ConnectionClosed)
        ));
    }
}
