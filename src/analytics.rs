//! Read-only derivations over a transaction snapshot. Nothing in this
//! module mutates the store; every function takes the collection as a
//! slice and computes a summary or ranked view from it.

use crate::models::transaction::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Months shown by the chart screens; older months stay in the
/// aggregates, consumers just window them.
pub const CHART_MONTH_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyAverages {
    pub avg_income: Decimal,
    pub avg_expense: Decimal,
    pub avg_balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(format!(
                "Invalid filter '{}'. Use 'all', 'income' or 'expense'.",
                s
            )),
        }
    }
}

/// Sum amounts grouped by kind; balance = income - expense.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => totals.income += transaction.amount,
            TransactionKind::Expense => totals.expense += transaction.amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

/// Type filter first, then a case-insensitive substring search over
/// description, category and notes. An empty query keeps everything.
pub fn filter_and_search(
    transactions: &[Transaction],
    filter: TypeFilter,
    query: &str,
) -> Vec<Transaction> {
    let query = query.to_lowercase();
    transactions
        .iter()
        .filter(|t| filter.matches(t.kind))
        .filter(|t| {
            if query.is_empty() {
                return true;
            }
            t.description.to_lowercase().contains(&query)
                || t.category.to_lowercase().contains(&query)
                || t.notes
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
        })
        .cloned()
        .collect()
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Group by calendar month; the BTreeMap keeps keys ("YYYY-MM")
/// sorted ascending.
pub fn monthly_aggregates(transactions: &[Transaction]) -> BTreeMap<String, MonthlyTotals> {
    let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
    for transaction in transactions {
        let entry = months.entry(month_key(transaction.date)).or_default();
        match transaction.kind {
            TransactionKind::Income => entry.income += transaction.amount,
            TransactionKind::Expense => entry.expense += transaction.amount,
        }
    }
    months
}

/// The most recent `n` months of an aggregate map, oldest first.
pub fn recent_months(
    aggregates: &BTreeMap<String, MonthlyTotals>,
    n: usize,
) -> Vec<(String, MonthlyTotals)> {
    let skip = aggregates.len().saturating_sub(n);
    aggregates
        .iter()
        .skip(skip)
        .map(|(month, totals)| (month.clone(), *totals))
        .collect()
}

/// Totals restricted to `today`'s calendar month.
pub fn current_month_totals(transactions: &[Transaction], today: NaiveDate) -> MonthlyTotals {
    let current = month_key(today);
    monthly_aggregates(transactions)
        .remove(&current)
        .unwrap_or_default()
}

/// Summed amounts per category for one kind, in first-encountered order.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<(String, Decimal)> {
    let mut order: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        match index.get(&transaction.category) {
            Some(&i) => order[i].1 += transaction.amount,
            None => {
                index.insert(transaction.category.clone(), order.len());
                order.push((transaction.category.clone(), transaction.amount));
            }
        }
    }
    order
}

/// Top expense categories by total spend; ties keep their
/// first-encountered order (stable sort), truncated to `n`.
pub fn top_categories(transactions: &[Transaction], n: usize) -> Vec<(String, Decimal)> {
    let mut breakdown = category_breakdown(transactions, TransactionKind::Expense);
    breakdown.sort_by(|a, b| b.1.cmp(&a.1));
    breakdown.truncate(n);
    breakdown
}

/// Largest transactions by amount across both kinds; stable on ties,
/// truncated to `n`.
pub fn largest_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(n);
    sorted
}

/// Arithmetic mean of each month's totals across all months present.
/// No months means all-zero averages, not a division failure.
pub fn averages_per_month(transactions: &[Transaction]) -> MonthlyAverages {
    let months = monthly_aggregates(transactions);
    if months.is_empty() {
        return MonthlyAverages::default();
    }

    let count = Decimal::from(months.len());
    let sum = months
        .values()
        .fold(MonthlyTotals::default(), |acc, m| MonthlyTotals {
            income: acc.income + m.income,
            expense: acc.expense + m.expense,
        });

    let avg_income = sum.income / count;
    let avg_expense = sum.expense / count;
    MonthlyAverages {
        avg_income,
        avg_expense,
        avg_balance: avg_income - avg_expense,
    }
}
