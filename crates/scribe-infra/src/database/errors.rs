//! Translation of SeaORM failures into repository errors.

use sea_orm::{DbErr, SqlErr};

use scribe_core::error::RepoError;

/// Map a SeaORM error onto the repository taxonomy.
///
/// `RecordNotFound` and `RecordNotUpdated` are the store's not-found signal;
/// unique and foreign-key violations are constraint rejections.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(sql_err) = err.sql_err() {
        match sql_err {
            SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg) => {
                return RepoError::Constraint(msg);
            }
            _ => {}
        }
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
