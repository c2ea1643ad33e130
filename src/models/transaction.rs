use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const INCOME_CATEGORIES: &[&str] = &["Gaji", "Pendapatan lainnya"];
pub const EXPENSE_CATEGORIES: &[&str] =
    &["Makanan/Minuman", "Ngopi", "Hiburan", "Service", "Lainnya"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Display label used in the CSV export and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Pemasukan",
            TransactionKind::Expense => "Pengeluaran",
        }
    }

    /// Fixed category list associated with this kind.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => INCOME_CATEGORIES,
            TransactionKind::Expense => EXPENSE_CATEGORIES,
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!(
                "Invalid transaction type '{}'. Use 'income' or 'expense'.",
                s
            )),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub notes: Option<String>,
}

impl Transaction {
    pub fn from_draft(id: Uuid, draft: TransactionDraft) -> Self {
        // An empty description falls back to the category so listings
        // always have a label; a future free-text description slots in
        // without a schema change.
        let description = draft
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| draft.category.clone());
        Self {
            id,
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            description,
            notes: draft.notes,
        }
    }
}

/// All user-supplied fields of a transaction; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(TransactionKind::from_str("income").unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::from_str("EXPENSE").unwrap(), TransactionKind::Expense);
        assert!(TransactionKind::from_str("transfer").is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Income.label(), "Pemasukan");
        assert_eq!(TransactionKind::Expense.label(), "Pengeluaran");
    }

    #[test]
    fn test_description_defaults_to_category() {
        let draft = TransactionDraft {
            kind: TransactionKind::Expense,
            category: "Ngopi".to_string(),
            amount: Decimal::new(2500, 2),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            description: None,
            notes: None,
        };
        let transaction = Transaction::from_draft(Uuid::new_v4(), draft);
        assert_eq!(transaction.description, "Ngopi");
    }

    #[test]
    fn test_description_kept_when_given() {
        let draft = TransactionDraft {
            kind: TransactionKind::Expense,
            category: "Ngopi".to_string(),
            amount: Decimal::new(2500, 2),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            description: Some("Kopi susu".to_string()),
            notes: None,
        };
        let transaction = Transaction::from_draft(Uuid::new_v4(), draft);
        assert_eq!(transaction.description, "Kopi susu");
    }
}
