//! Boundary validation for new, edited and imported entries
//!
//! The aggregation core tolerates bad amounts and dates; the store does not
//! accept them in the first place.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::date_codec;
use crate::types::{parse_amount, Amount, LedgerEntry, ValidationError};

/// Unvalidated user input for one entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl EntryDraft {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Prefill a draft from an existing entry (for edits)
    pub fn from_entry(entry: &LedgerEntry) -> Self {
        let amount = match &entry.amount {
            Amount::Number(v) => v.to_string(),
            Amount::Text(raw) => raw.clone(),
            Amount::Other(_) => String::new(),
        };
        Self::new(
            entry.date_key.clone(),
            entry.category.clone(),
            amount,
            entry.description.clone(),
        )
    }
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub date_key: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ValidEntry {
    pub fn into_entry(self, id: String, owner: &str) -> LedgerEntry {
        LedgerEntry {
            id,
            owner_ref: owner.to_string(),
            date_key: self.date_key,
            category: self.category,
            amount: Amount::Number(self.amount),
            description: self.description,
        }
    }
}

fn date_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
}

/// Check a draft. Date must be a real `YYYY-MM-DD` date, amount a finite
/// non-negative number, category non-blank.
pub fn validate(draft: &EntryDraft) -> Result<ValidEntry, ValidationError> {
    if draft.date.is_empty() {
        return Err(ValidationError::MissingField("date"));
    }
    if !date_key_regex().is_match(&draft.date) || date_codec::decode(&draft.date).is_none() {
        return Err(ValidationError::InvalidDate(draft.date.clone()));
    }

    if draft.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category"));
    }

    if draft.amount.trim().is_empty() {
        return Err(ValidationError::MissingField("amount"));
    }
    let amount = parse_amount(&draft.amount)
        .ok_or_else(|| ValidationError::InvalidAmount(draft.amount.clone()))?;
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount(draft.amount.clone()));
    }

    Ok(ValidEntry {
        date_key: draft.date.clone(),
        category: draft.category.clone(),
        amount,
        description: draft.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, category: &str, amount: &str) -> EntryDraft {
        EntryDraft::new(date, category, amount, "note")
    }

    #[test]
    fn test_valid_draft() {
        let valid = validate(&draft("2024-03-08", "Transport", "200")).unwrap();
        assert_eq!(valid.date_key, "2024-03-08");
        assert_eq!(valid.amount, 200.0);
        assert_eq!(valid.description, "note");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(
            validate(&draft("", "Food", "1")),
            Err(ValidationError::MissingField("date"))
        );
    }

    #[test]
    fn test_date_with_time_suffix_rejected() {
        assert!(matches!(
            validate(&draft("2024-03-08T10:00", "Food", "1")),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_impossible_date_rejected() {
        assert!(matches!(
            validate(&draft("2023-02-29", "Food", "1")),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_blank_category() {
        assert_eq!(
            validate(&draft("2024-03-08", "  ", "1")),
            Err(ValidationError::MissingField("category"))
        );
    }

    #[test]
    fn test_missing_amount() {
        assert_eq!(
            validate(&draft("2024-03-08", "Food", "")),
            Err(ValidationError::MissingField("amount"))
        );
    }

    #[test]
    fn test_unparsable_amount() {
        assert_eq!(
            validate(&draft("2024-03-08", "Food", "12,50")),
            Err(ValidationError::InvalidAmount("12,50".into()))
        );
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(
            validate(&draft("2024-03-08", "Food", "-5")),
            Err(ValidationError::NegativeAmount("-5".into()))
        );
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert!(validate(&draft("2024-03-08", "Food", "0")).is_ok());
    }

    #[test]
    fn test_into_entry() {
        let entry = validate(&draft("2024-03-08", "Food", "9.5"))
            .unwrap()
            .into_entry("id-1".into(), "guest");
        assert_eq!(entry.id, "id-1");
        assert_eq!(entry.owner_ref, "guest");
        assert_eq!(entry.amount, Amount::Number(9.5));
    }

    #[test]
    fn test_draft_from_entry_round_trips() {
        let entry = validate(&draft("2024-03-08", "Food", "9.5"))
            .unwrap()
            .into_entry("id-1".into(), "guest");
        let again = validate(&EntryDraft::from_entry(&entry)).unwrap();
        assert_eq!(again.amount, 9.5);
        assert_eq!(again.category, "Food");
    }
}
