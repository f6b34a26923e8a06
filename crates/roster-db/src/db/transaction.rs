//! Transaction helper utilities for database operations.
//!
//! ## Usage
//!
//! Wrap the unit of work in a closure returning a scoped boxed future. Returning
//! `Err` from the closure rolls the transaction back; `Ok` commits it.
//!
//! ```rust,ignore
//! use diesel_async::scoped_futures::ScopedFutureExt;
//! use roster_db::db::transaction::with_transaction;
//!
//! with_transaction(&mut conn, |tx| async move {
//!     query::staff::create_staff(tx, &new_staff).await?;
//!     Ok::<_, ServiceError>(())
//! }.scope_boxed()).await?;
//! ```

use diesel_async::{AsyncConnection, scoped_futures::ScopedBoxFuture};

use crate::db::connection::DbConnection;

/// ## Summary
/// Runs a database transaction and returns the closure result.
///
/// ## Errors
/// Returns any error produced by the closure, or errors raised while starting
/// or committing the transaction (converted into `E`).
pub async fn with_transaction<'a, 'pool, T, E, F>(
    conn: &'a mut DbConnection<'pool>,
    callback: F,
) -> Result<T, E>
where
    F: for<'r> FnOnce(&'r mut DbConnection<'pool>) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
        + Send
        + 'a,
    E: From<diesel::result::Error> + Send + 'a,
    T: Send + 'a,
{
    conn.transaction::<T, E, F>(callback).await
}
