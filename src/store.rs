use crate::db::state_repository;
use crate::error::{AppError, AppResult};
use crate::models::transaction::{Transaction, TransactionDraft};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Exclusive owner of the transaction collection. Every mutation
/// validates first, then flushes the whole collection to the database;
/// if the flush fails the in-memory change is rolled back so memory and
/// disk never diverge.
pub struct TransactionStore {
    conn: Connection,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Hydrate the store from the database. No prior data means an
    /// empty collection.
    pub fn open(conn: Connection) -> AppResult<Self> {
        let transactions = state_repository::load_transactions(&conn)?;
        log::info!("loaded {} transactions", transactions.len());
        Ok(Self { conn, transactions })
    }

    /// Ordered snapshot, most-recently-added first among unedited items.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add(&mut self, draft: TransactionDraft) -> AppResult<Transaction> {
        validate_draft(&draft)?;
        let transaction = Transaction::from_draft(Uuid::new_v4(), draft);
        self.transactions.insert(0, transaction.clone());
        if let Err(e) = self.save() {
            self.transactions.remove(0);
            return Err(e);
        }
        Ok(transaction)
    }

    /// Replace every field except the id, keeping the record's position
    /// in the collection.
    pub fn update(&mut self, id: Uuid, draft: TransactionDraft) -> AppResult<Transaction> {
        validate_draft(&draft)?;
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(AppError::NotFound(id))?;

        let previous = std::mem::replace(
            &mut self.transactions[pos],
            Transaction::from_draft(id, draft),
        );
        if let Err(e) = self.save() {
            self.transactions[pos] = previous;
            return Err(e);
        }
        Ok(self.transactions[pos].clone())
    }

    /// Removing an unknown id is a benign no-op; the caller is
    /// responsible for confirming intent beforehand.
    pub fn remove(&mut self, id: Uuid) -> AppResult<()> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            log::warn!("remove ignored: no transaction with id {}", id);
            return Ok(());
        };

        let removed = self.transactions.remove(pos);
        if let Err(e) = self.save() {
            self.transactions.insert(pos, removed);
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> AppResult<()> {
        state_repository::save_transactions(&self.conn, &self.transactions)
    }
}

fn validate_draft(draft: &TransactionDraft) -> AppResult<()> {
    if draft.category.trim().is_empty() {
        return Err(AppError::Validation("Category cannot be empty".to_string()));
    }
    // Membership in the fixed lists is enforced here, not only by the
    // input layer, so no caller can slip past it.
    if !draft.kind.categories().contains(&draft.category.as_str()) {
        return Err(AppError::Validation(format!(
            "Category '{}' is not valid for type '{}'",
            draft.category, draft.kind
        )));
    }
    if draft.amount <= Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "Amount must be positive, got {}",
            draft.amount
        )));
    }
    Ok(())
}
