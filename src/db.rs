use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::PgConnection;

use crate::errors::SiteError;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Helper function to get a pooled DB connection
pub fn get_conn(pool: &DbPool) -> Result<DbConn, SiteError> {
    pool.get().map_err(|_| SiteError::Pool)
}
