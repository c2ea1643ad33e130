use crate::analytics::{MonthlyAverages, MonthlyTotals, Totals};
use crate::models::transaction::{Transaction, TransactionKind};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rupiah display format: rounded to whole units, dot-grouped
/// thousands, e.g. `Rp 1.250.000`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

pub fn format_transaction(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    let notes = transaction
        .notes
        .as_deref()
        .map(|n| format!(" • {}", n))
        .unwrap_or_default();
    format!(
        "{}  {}  [{}] {}  {} {}{}",
        transaction.id,
        transaction.date.format("%Y-%m-%d"),
        transaction.category,
        transaction.description,
        sign,
        format_currency(transaction.amount),
        notes
    )
}

pub fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("Tidak ada transaksi ditemukan");
        return;
    }
    for transaction in transactions {
        println!("{}", format_transaction(transaction));
    }
}

pub fn print_totals(totals: &Totals) {
    println!("Pemasukan:   {}", format_currency(totals.income));
    println!("Pengeluaran: {}", format_currency(totals.expense));
    println!("Saldo:       {}", format_currency(totals.balance));
}

pub fn print_monthly(months: &[(String, MonthlyTotals)]) {
    if months.is_empty() {
        println!("Belum ada data");
        return;
    }
    for (month, totals) in months {
        println!(
            "{}  masuk {}  keluar {}",
            month,
            format_currency(totals.income),
            format_currency(totals.expense)
        );
    }
}

pub fn print_analysis(
    averages: &MonthlyAverages,
    top_categories: &[(String, Decimal)],
    largest: &[Transaction],
) {
    println!("Rata-rata per bulan:");
    println!("  Pemasukan:   {}", format_currency(averages.avg_income));
    println!("  Pengeluaran: {}", format_currency(averages.avg_expense));
    println!("  Saldo:       {}", format_currency(averages.avg_balance));

    println!("Kategori pengeluaran teratas:");
    if top_categories.is_empty() {
        println!("  Belum ada data");
    }
    for (category, amount) in top_categories {
        println!("  {:20} {}", category, format_currency(*amount));
    }

    println!("Transaksi terbesar:");
    if largest.is_empty() {
        println!("  Belum ada data");
    }
    for transaction in largest {
        println!(
            "  {:20} {}",
            transaction.description,
            format_currency(transaction.amount)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec("1250000")), "Rp 1.250.000");
        assert_eq!(format_currency(dec("999")), "Rp 999");
        assert_eq!(format_currency(dec("0")), "Rp 0");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(dec("25000.50")), "Rp 25.001");
        assert_eq!(format_currency(dec("25000.49")), "Rp 25.000");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec("-1500")), "-Rp 1.500");
    }
}
