//! Phone number validation.
//!
//! Accepts an optional leading `+` followed by 6 to 15 ASCII digits,
//! after trimming surrounding whitespace. Nothing else is normalized:
//! the trimmed text is forwarded upstream as-is.

use crate::lookup::error::InputError;

pub const MIN_DIGITS: usize = 6;
pub const MAX_DIGITS: usize = 15;

/// A validated phone number, ready to be sent as the `cli` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw `number` parameter.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let number = raw.trim();
        if number.is_empty() {
            return Err(InputError::Missing);
        }

        let digits = number.strip_prefix('+').unwrap_or(number);
        let well_formed = (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(InputError::InvalidFormat);
        }

        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
