pub mod schema;

use crate::error::AppError;
use crate::filesystem;
use rusqlite::Connection;

/// Opens the app database and makes sure the schema is in place
pub fn init_database() -> Result<Connection, AppError> {
    let db_path = filesystem::get_database_path();

    // Make sure the directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;

    schema::init_schema(&conn)?;

    Ok(conn)
}

/// Tests the database connection
pub fn test_connection() -> Result<(), AppError> {
    let conn = init_database()?;

    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv_store'",
        [],
        |row| row.get(0),
    )?;

    if count != 1 {
        return Err(AppError::Database(rusqlite::Error::QueryReturnedNoRows));
    }

    Ok(())
}
