use crate::error::AppError;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads the string stored under `key`
pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>, AppError> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Stores `value` under `key`, replacing any previous value
pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        database::schema::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_key_is_none() {
        let conn = setup();
        assert_eq!(get_item(&conn, "@nothing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let conn = setup();
        set_item(&conn, "@key", "one").unwrap();
        set_item(&conn, "@key", "two").unwrap();
        assert_eq!(get_item(&conn, "@key").unwrap().as_deref(), Some("two"));

        let rows: i32 = conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
