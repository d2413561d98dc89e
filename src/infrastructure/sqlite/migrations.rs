use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL CHECK (price >= 0),
            category TEXT NOT NULL,
            image TEXT,
            sold INTEGER NOT NULL DEFAULT 0,
            date_of_sale TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);
        "
    ).map_err(|e| format!("Migration failed: {e}"))
}
