use crate::error::AppResult;
use crate::models::transaction::Transaction;
use rusqlite::{Connection, OptionalExtension};

/// Well-known slot holding the serialized transaction collection.
const TRANSACTIONS_KEY: &str = "cashflowTransactions";

/// Flush the full collection to the key-value slot, replacing whatever
/// was stored before (last write wins).
pub fn save_transactions(conn: &Connection, transactions: &[Transaction]) -> AppResult<()> {
    let payload = serde_json::to_string(transactions)?;
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        rusqlite::params![TRANSACTIONS_KEY, payload],
    )?;
    log::debug!("persisted {} transactions", transactions.len());
    Ok(())
}

/// Hydrate the collection from the slot. An absent key means no prior
/// data and yields an empty collection, not an error.
pub fn load_transactions(conn: &Connection) -> AppResult<Vec<Transaction>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            [TRANSACTIONS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match payload {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::models::transaction::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn sample_transaction(category: &str, amount: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            category: category.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            description: category.to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_load_without_prior_data() {
        let conn = establish_test_connection().unwrap();
        let loaded = load_transactions(&conn).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let conn = establish_test_connection().unwrap();
        let transactions = vec![
            sample_transaction("Ngopi", "25000.50"),
            sample_transaction("Hiburan", "120000"),
        ];

        save_transactions(&conn, &transactions).unwrap();
        let loaded = load_transactions(&conn).unwrap();

        assert_eq!(loaded, transactions);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let conn = establish_test_connection().unwrap();
        save_transactions(&conn, &[sample_transaction("Ngopi", "10000")]).unwrap();
        save_transactions(&conn, &[]).unwrap();

        let loaded = load_transactions(&conn).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_decimal_precision_survives_round_trip() {
        let conn = establish_test_connection().unwrap();
        let transactions = vec![sample_transaction("Service", "123456.789012")];

        save_transactions(&conn, &transactions).unwrap();
        let loaded = load_transactions(&conn).unwrap();

        assert_eq!(loaded[0].amount, Decimal::from_str("123456.789012").unwrap());
    }
}
