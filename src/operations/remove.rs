use crate::error::{AppError, AppResult};
use uuid::Uuid;

pub fn parse_transaction_id(input: &str) -> AppResult<Uuid> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::Validation(
            "Transaction ID cannot be empty.".to_string(),
        ));
    }
    Uuid::parse_str(input).map_err(|_| {
        AppError::Validation(
            "Invalid transaction ID format. Please provide a valid UUID.".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_transaction_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_empty_id() {
        assert!(matches!(
            parse_transaction_id("  "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_malformed_id() {
        assert!(matches!(
            parse_transaction_id("not-a-uuid"),
            Err(AppError::Validation(_))
        ));
    }
}
