//! The two operations the site is built on, plus schema setup.
//!
//! Both operations take the request's session explicitly. Neither one propagates a
//! database failure as a panic: reads degrade to "no name" and writes report
//! failure to the caller.

use namemycat_core::{validate_name, Name};

use crate::error::{StoreResult, SubmitError};
use crate::{NameSession, NameStore};

/// Pick one stored name uniformly at random.
///
/// Returns `None` when there are no names. A failed read (missing table,
/// lost connection) is logged and also reported as `None`.
pub async fn get_random_name(session: &mut dyn NameSession) -> Option<String> {
    match session.random_name().await {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read a random name");
            None
        }
    }
}

/// Validate and store a submitted name.
///
/// # Errors
///
/// - `SubmitError::EmptyName` if `value` is empty. Nothing is written.
/// - `SubmitError::Store` if the insert fails.
pub async fn submit_name(session: &mut dyn NameSession, value: &str) -> Result<Name, SubmitError> {
    validate_name(value)?;

    match session.insert_name(value).await {
        Ok(name) => {
            tracing::info!(name_id = %name.id, "Name submitted");
            Ok(name)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert name");
            Err(e.into())
        }
    }
}

/// Create the `names` table in a session of its own.
///
/// A failure to close the session afterwards is logged and does not mask
/// the outcome of the schema statement.
///
/// # Errors
///
/// Returns an error if the connection or `CREATE TABLE` fails.
pub async fn init_schema(store: &dyn NameStore) -> StoreResult<()> {
    let mut session = store.session();
    let result = session.init_schema().await;
    if let Err(e) = session.close().await {
        tracing::warn!(error = %e, "Failed to close schema session");
    }
    result
}
