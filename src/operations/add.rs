use crate::error::{AppError, AppResult};
use crate::models::transaction::{TransactionDraft, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parse a comma-separated input line into a draft:
/// `date(YYYY-MM-DD), type(income/expense), category, amount[, notes]`
pub fn parse_draft(input: &str) -> AppResult<TransactionDraft> {
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if parts.len() < 4 || parts.len() > 5 {
        return Err(AppError::Validation(format!(
            "Expected 4 or 5 fields separated by commas but got {}",
            parts.len()
        )));
    }

    let date = match NaiveDate::parse_from_str(parts[0], "%Y-%m-%d") {
        Ok(parsed_date) => parsed_date,
        Err(_) => {
            return Err(AppError::Validation(
                "Invalid date format. Please use YYYY-MM-DD.".to_string(),
            ));
        }
    };

    let kind: TransactionKind = parts[1].parse().map_err(AppError::Validation)?;

    let category = parts[2].to_string();

    let amount = match parts[3].parse::<Decimal>() {
        Ok(parsed_amount) => parsed_amount,
        Err(_) => {
            return Err(AppError::Validation(format!(
                "Invalid amount '{}'. Please provide a valid decimal number.",
                parts[3]
            )));
        }
    };

    let notes = parts
        .get(4)
        .filter(|n| !n.is_empty())
        .map(|n| n.to_string());

    Ok(TransactionDraft {
        kind,
        category,
        amount,
        date,
        description: None,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_draft_success() {
        let draft = parse_draft("2025-05-20, expense, Ngopi, 25000").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.category, "Ngopi");
        assert_eq!(draft.amount, Decimal::from_str("25000").unwrap());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_parse_draft_with_notes() {
        let draft = parse_draft("2025-05-20, income, Gaji, 5000000, bonus bulan ini").unwrap();
        assert_eq!(draft.notes.as_deref(), Some("bonus bulan ini"));
    }

    #[test]
    fn test_parse_draft_invalid_date() {
        let result = parse_draft("20-05-2025, expense, Ngopi, 25000");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("date")));
    }

    #[test]
    fn test_parse_draft_invalid_amount() {
        let result = parse_draft("2025-05-20, expense, Ngopi, dua puluh ribu");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("amount")));
    }

    #[test]
    fn test_parse_draft_invalid_kind() {
        let result = parse_draft("2025-05-20, transfer, Ngopi, 25000");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_draft_wrong_field_count() {
        let result = parse_draft("2025-05-20, expense");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("fields")));
    }
}
