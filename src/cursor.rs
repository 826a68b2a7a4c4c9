//! Cursor and the lifecycle of its result-set description.
//!
//! A cursor's description is owned by an explicit state machine:
//!
//! ```text
//! Unstarted --execute--> NoMetadata | HasMetadata
//! NoMetadata | HasMetadata --execute--> NoMetadata | HasMetadata
//! any --close--> Closed            (irreversible)
//! ```
//!
//! Only `HasMetadata` carries a `Description`, so a closed cursor cannot
//! expose one.

use tracing::{debug, instrument};

use crate::connection::{Connection, ResultMetadata, StatementExecutor};
use crate::error::{Error, Result};
use crate::protocol::types::{ColumnDescriptorBuilder, Description};

/// Metadata state of a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetadataState {
    /// Nothing executed yet.
    #[default]
    Unstarted,
    /// Last execution produced no columns, failed, or is in flight.
    NoMetadata,
    /// Last execution produced these columns.
    HasMetadata(Description),
    /// Cursor closed.
    Closed,
}

impl MetadataState {
    /// Current description, present only in `HasMetadata`.
    pub fn description(&self) -> Option<&Description> {
        match self {
            MetadataState::HasMetadata(description) => Some(description),
            _ => None,
        }
    }

    /// Whether the state is `Closed`.
    pub fn is_closed(&self) -> bool {
        matches!(self, MetadataState::Closed)
    }

    /// Short state name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            MetadataState::Unstarted => "unstarted",
            MetadataState::NoMetadata => "no_metadata",
            MetadataState::HasMetadata(_) => "has_metadata",
            MetadataState::Closed => "closed",
        }
    }

    /// Record the outcome of an execution, replacing any prior description.
    ///
    /// A closed state stays closed.
    pub fn executed(&mut self, description: Option<Description>) {
        if self.is_closed() {
            return;
        }
        *self = match description {
            Some(description) => MetadataState::HasMetadata(description),
            None => MetadataState::NoMetadata,
        };
    }

    /// Move to `Closed`, dropping any description.
    pub fn close(&mut self) {
        *self = MetadataState::Closed;
    }
}

/// Cursor over a connection.
///
/// Holds a mutable reference to the connection, ensuring only one active
/// cursor per connection at a time. Dropping the cursor closes it.
///
/// # Lifecycle
///
/// 1. Created by `Connection::cursor()`
/// 2. `execute()` any number of times; each call replaces the description
/// 3. Closed explicitly via `close()` or when dropped
pub struct Cursor<'conn, E> {
    /// Mutable reference to connection.
    conn: &'conn mut Connection<E>,
    /// Description lifecycle.
    state: MetadataState,
}

impl<'conn, E> Cursor<'conn, E> {
    pub(crate) fn new(conn: &'conn mut Connection<E>) -> Self {
        Self {
            conn,
            state: MetadataState::Unstarted,
        }
    }

    /// Description of the current result set.
    ///
    /// `None` before any execution, after a statement without columns,
    /// after a failed execution, and after close.
    pub fn description(&self) -> Option<&Description> {
        self.state.description()
    }

    /// Current metadata state.
    pub fn state(&self) -> &MetadataState {
        &self.state
    }

    /// Check if the cursor is closed.
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Close the cursor. Calling this more than once has no effect.
    pub fn close(&mut self) {
        if !self.state.is_closed() {
            debug!(from = self.state.name(), "closing cursor");
            self.state.close();
        }
    }
}

impl<'conn, E: StatementExecutor> Cursor<'conn, E> {
    /// Execute a statement and describe its result.
    ///
    /// The previous description is dropped before the statement is sent, so
    /// a failed or cancelled execution leaves the cursor in `NoMetadata`.
    #[instrument(level = "debug", skip(self), fields(tds_version = %self.conn.tds_version()))]
    pub async fn execute(&mut self, sql: &str) -> Result<()> {
        if self.state.is_closed() {
            return Err(Error::CursorClosed);
        }

        let from = self.state.name();
        self.state.executed(None);

        match self.describe(sql).await {
            Ok(description) => {
                debug!(
                    from,
                    columns = description.as_ref().map_or(0, Description::len),
                    "statement described"
                );
                self.state.executed(description);
                Ok(())
            }
            Err(e) => {
                debug!(from, error = %e, "execution failed");
                Err(e)
            }
        }
    }

    async fn describe(&mut self, sql: &str) -> Result<Option<Description>> {
        match self.conn.run(sql).await? {
            ResultMetadata::NoColumns => Ok(None),
            ResultMetadata::Columns(raws) if raws.is_empty() => Ok(None),
            ResultMetadata::Columns(raws) => {
                ColumnDescriptorBuilder::from_session(self.conn.session())
                    .resolve_all(&raws)
                    .map(Some)
            }
        }
    }
}

impl<E> Drop for Cursor<'_, E> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::SYBINT4;
    use crate::protocol::types::{ColumnDescriptor, RawColumn, TypeCode};

    fn make_description() -> Description {
        ColumnDescriptorBuilder::default()
            .resolve_all(&[RawColumn::new("a", SYBINT4)])
            .unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let mut state = MetadataState::default();
        assert_eq!(state, MetadataState::Unstarted);
        assert!(state.description().is_none());

        state.executed(None);
        assert_eq!(state, MetadataState::NoMetadata);

        state.executed(Some(make_description()));
        let columns: Vec<&ColumnDescriptor> = state.description().unwrap().iter().collect();
        assert_eq!(columns[0].type_code(), TypeCode::Int);

        state.executed(None);
        assert!(state.description().is_none());
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut state = MetadataState::HasMetadata(make_description());
        state.close();
        assert!(state.is_closed());
        assert!(state.description().is_none());

        state.executed(Some(make_description()));
        assert!(state.is_closed());
        assert!(state.description().is_none());

        state.close();
        assert_eq!(state.name(), "closed");
    }
}
