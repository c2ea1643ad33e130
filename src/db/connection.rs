use rusqlite::{Connection, Result};

const CREATE_APP_STATE: &str = "CREATE TABLE IF NOT EXISTS app_state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

pub fn establish_connection(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute(CREATE_APP_STATE, [])?;
    Ok(conn)
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute(CREATE_APP_STATE, [])?;
    Ok(conn)
}
