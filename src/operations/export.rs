use crate::error::{AppError, AppResult};
use crate::models::transaction::Transaction;

const CSV_HEADER: [&str; 6] = [
    "Tanggal",
    "Tipe",
    "Kategori",
    "Deskripsi",
    "Jumlah",
    "Catatan",
];

/// Write the collection to a CSV file, one row per transaction with the
/// type rendered as its display label. The csv crate quotes embedded
/// delimiters, so notes containing commas survive a round trip.
pub fn export_to_csv(path: &str, transactions: &[Transaction]) -> AppResult<usize> {
    if transactions.is_empty() {
        return Err(AppError::Validation(
            "Tidak ada data untuk diekspor".to_string(),
        ));
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Persistence(format!("Failed to create '{}': {}", path, e)))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::Persistence(format!("Failed to write header: {}", e)))?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.kind.label().to_string(),
                transaction.category.clone(),
                transaction.description.clone(),
                transaction.amount.to_string(),
                transaction.notes.clone().unwrap_or_default(),
            ])
            .map_err(|e| AppError::Persistence(format!("Failed to write row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::Persistence(format!("Failed to flush '{}': {}", path, e)))?;

    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::NamedTempFile;
    use uuid::Uuid;

    fn sample(kind: TransactionKind, category: &str, amount: &str, notes: Option<&str>) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            category: category.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            description: category.to_string(),
            notes: notes.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let transactions = vec![
            sample(TransactionKind::Income, "Gaji", "5000000", None),
            sample(TransactionKind::Expense, "Ngopi", "25000.50", Some("kopi pagi")),
        ];

        let count = export_to_csv(path, &transactions).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Tanggal,Tipe,Kategori,Deskripsi,Jumlah,Catatan"
        );
        assert_eq!(lines.next().unwrap(), "2025-04-02,Pemasukan,Gaji,Gaji,5000000,");
        assert_eq!(
            lines.next().unwrap(),
            "2025-04-02,Pengeluaran,Ngopi,Ngopi,25000.50,kopi pagi"
        );
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let transactions = vec![sample(
            TransactionKind::Expense,
            "Lainnya",
            "15000",
            Some("kado, bungkus"),
        )];

        export_to_csv(path, &transactions).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"kado, bungkus\""));
    }

    #[test]
    fn test_export_empty_collection_is_refused() {
        let tmp = NamedTempFile::new().unwrap();
        let result = export_to_csv(tmp.path().to_str().unwrap(), &[]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
