use crate::error::DbResult;
use std::future::Future;
use std::pin::Pin;

pub mod connection;
pub mod migrate;
pub mod query;
pub mod schema;
pub mod transaction;

/// Hands out scoped store handles. The returned connection goes back to the
/// pool when dropped, on success and error paths alike.
pub trait DbProvider: Send + Sync {
    fn get_connection<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = DbResult<connection::DbConnection<'a>>> + Send + 'a>>;
}
