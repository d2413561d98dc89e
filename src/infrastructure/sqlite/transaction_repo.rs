use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::*;
use crate::domain::values::search::contains_folded;
use crate::domain::views::{CategoryCounts, Statistics};
use crate::infrastructure::sqlite::migrations::run_migrations;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{ToSql, Type};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str = "id, title, description, price, category, image, sold, date_of_sale";

pub struct SqliteTransactionRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTransactionRepo {
    /// Wraps an open connection, registering the SQL functions the
    /// queries rely on.
    pub fn new(conn: Connection) -> Result<Self, DomainError> {
        register_functions(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens (or creates) the database at `path` and brings the schema up to date.
    pub fn open(path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(path)
            .map_err(|e| DomainError::StoreUnavailable(format!("DB error: {e}")))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))
            .map_err(|e| DomainError::StoreUnavailable(format!("WAL error: {e}")))?;
        run_migrations(&conn).map_err(DomainError::StoreUnavailable)?;
        Self::new(conn)
    }

    /// Runs `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, DomainError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DomainError::StoreUnavailable(format!("store task failed: {e}")))?
    }

    fn row_to_transaction(row: &rusqlite::Row) -> Result<Transaction, rusqlite::Error> {
        let date_str: String = row.get(7)?;
        let date_of_sale = DateTime::parse_from_rfc3339(&date_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

        Ok(Transaction {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            category: row.get(4)?,
            image: row.get(5)?,
            sold: row.get(6)?,
            date_of_sale,
        })
    }
}

/// `contains_ci(haystack, needle)`: the same case-folded substring test the
/// in-memory adapter applies, so both stores agree beyond ASCII.
fn register_functions(conn: &Connection) -> Result<(), DomainError> {
    conn.create_scalar_function(
        "contains_ci",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack: String = ctx.get(0)?;
            let needle: String = ctx.get(1)?;
            Ok(contains_folded(&haystack, &needle))
        },
    )?;
    Ok(())
}

/// Translates a filter into a `WHERE` clause and its positional parameters.
fn where_clause(filter: &TransactionFilter) -> (String, Vec<Box<dyn ToSql>>) {
    let mut sql = String::from(" WHERE 1=1");
    let mut param_values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(month) = filter.month {
        // Calendar month only; the year of the sale never takes part.
        sql.push_str(&format!(
            " AND CAST(strftime('%m', date_of_sale) AS INTEGER) = ?{}",
            param_values.len() + 1
        ));
        param_values.push(Box::new(month.number()));
    }
    if let Some(search) = &filter.search {
        let n = param_values.len() + 1;
        sql.push_str(&format!(
            " AND (contains_ci(title, ?{n}) OR contains_ci(description, ?{n})"
        ));
        param_values.push(Box::new(search.lowered().to_string()));
        if let Some(amount) = search.amount() {
            sql.push_str(&format!(" OR price = ?{}", param_values.len() + 1));
            param_values.push(Box::new(amount));
        }
        sql.push(')');
    }
    if let Some(sold) = filter.sold {
        sql.push_str(&format!(" AND sold = ?{}", param_values.len() + 1));
        param_values.push(Box::new(sold));
    }
    if let Some(range) = filter.price_range {
        if let Some(above) = range.above {
            sql.push_str(&format!(" AND price > ?{}", param_values.len() + 1));
            param_values.push(Box::new(above));
        }
        if let Some(up_to) = range.up_to {
            sql.push_str(&format!(" AND price <= ?{}", param_values.len() + 1));
            param_values.push(Box::new(up_to));
        }
    }

    (sql, param_values)
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl TransactionRepository for SqliteTransactionRepo {
    async fn count(&self, filter: &TransactionFilter) -> Result<u64, DomainError> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let (clause, param_values) = where_clause(&filter);
            let params_refs: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();
            let count: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM transactions{clause}"),
                params_refs.as_slice(),
                |r| r.get(0),
            )?;
            Ok(count as u64)
        })
        .await
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DomainError> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let (clause, mut param_values) = where_clause(&filter);
            let sql = format!(
                "SELECT {SELECT_COLS} FROM transactions{clause} ORDER BY rowid LIMIT ?{} OFFSET ?{}",
                param_values.len() + 1,
                param_values.len() + 2
            );
            param_values.push(Box::new(to_i64(limit)));
            param_values.push(Box::new(to_i64(skip)));

            let params_refs: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_refs.as_slice(), Self::row_to_transaction)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
        .await
    }

    async fn sale_totals(&self, filter: &TransactionFilter) -> Result<Statistics, DomainError> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let (clause, param_values) = where_clause(&filter);
            let params_refs: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();
            let (total_amount, sold, not_sold): (f64, i64, i64) = conn.query_row(
                &format!(
                    "SELECT COALESCE(SUM(price), 0.0),
                            COALESCE(SUM(sold <> 0), 0),
                            COALESCE(SUM(sold = 0), 0)
                     FROM transactions{clause}"
                ),
                params_refs.as_slice(),
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )?;
            Ok(Statistics {
                total_amount,
                sold_count: sold as u64,
                not_sold_count: not_sold as u64,
            })
        })
        .await
    }

    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<CategoryCounts, DomainError> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let (clause, param_values) = where_clause(&filter);
            let params_refs: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();
            let mut stmt = conn.prepare(&format!(
                "SELECT category, COUNT(*) FROM transactions{clause} GROUP BY category"
            ))?;
            let counts = stmt
                .query_map(params_refs.as_slice(), |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
                })?
                .collect::<Result<CategoryCounts, _>>()?;
            Ok(counts)
        })
        .await
    }

    async fn insert_many(&self, transactions: &[Transaction]) -> Result<usize, DomainError> {
        let transactions = transactions.to_vec();
        self.with_conn(move |conn| {
            let db_tx = conn.transaction()?;
            let mut inserted = 0;
            {
                let mut stmt = db_tx.prepare(
                    "INSERT OR IGNORE INTO transactions (id, title, description, price, category, image, sold, date_of_sale)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                )?;
                for tx in &transactions {
                    inserted += stmt.execute(params![
                        tx.id,
                        tx.title,
                        tx.description,
                        tx.price,
                        tx.category,
                        tx.image,
                        tx.sold,
                        tx.date_of_sale.to_rfc3339_opts(SecondsFormat::Millis, true),
                    ])?;
                }
            }
            db_tx.commit()?;
            Ok(inserted)
        })
        .await
    }
}
