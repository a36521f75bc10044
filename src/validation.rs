//! Input Validation
//!
//! Turns raw form text into typed request values.

use std::fmt;

use crate::models::{Coordinate, NewIssue};

/// Why an amount field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    NotANumber,
    NotPositive,
    TooLarge,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "amount is empty"),
            AmountError::NotANumber => write!(f, "amount is not a number"),
            AmountError::NotPositive => write!(f, "amount must be greater than zero"),
            AmountError::TooLarge => write!(f, "amount is too large"),
        }
    }
}

/// Why an action was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingLocation,
    InvalidAmount(AmountError),
    EmptyWorkerName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingLocation => write!(f, "no location selected"),
            ValidationError::InvalidAmount(reason) => write!(f, "invalid amount: {}", reason),
            ValidationError::EmptyWorkerName => write!(f, "worker name is empty"),
        }
    }
}

/// Parse a positive integer amount.
///
/// Accepts the same inputs as JavaScript's `parseInt(raw, 10)`: leading
/// whitespace, an optional sign, then the longest run of digits. Anything
/// after the digits is ignored, so `"12.5"` is 12.
pub fn parse_amount(raw: &str) -> Result<u64, AmountError> {
    let s = raw.trim_start();
    if s.trim_end().is_empty() {
        return Err(AmountError::Empty);
    }
    let (negative, rest) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(AmountError::NotANumber);
    }
    if negative {
        return Err(AmountError::NotPositive);
    }
    match rest[..digits_len].parse::<u64>() {
        Ok(0) => Err(AmountError::NotPositive),
        Ok(value) => Ok(value),
        Err(_) => Err(AmountError::TooLarge),
    }
}

/// Trimmed, non-empty worker name
pub fn validate_worker(raw: &str) -> Result<String, ValidationError> {
    let worker = raw.trim();
    if worker.is_empty() {
        return Err(ValidationError::EmptyWorkerName);
    }
    Ok(worker.to_string())
}

/// Raw text of the issue creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub amount: String,
}

impl IssueDraft {
    /// Build the request body.
    ///
    /// With `map_enabled`, a selected `location` is mandatory and is checked
    /// before anything else. Without it, `location` is ignored.
    pub fn validate(&self, map_enabled: bool, location: Option<Coordinate>) -> Result<NewIssue, ValidationError> {
        let location = if map_enabled {
            Some(location.ok_or(ValidationError::MissingLocation)?)
        } else {
            None
        };
        let target_amount = parse_amount(&self.amount).map_err(ValidationError::InvalidAmount)?;
        Ok(NewIssue {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            target_amount,
            lat: location.map(|at| at.lat),
            lng: location.map(|at| at.lng),
        })
    }
}
