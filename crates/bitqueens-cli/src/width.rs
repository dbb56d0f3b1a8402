//! Board width parsing for command-line entries.

use std::num::ParseIntError;

use thiserror::Error;

/// A command-line entry that is not a board width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWidthError {
    #[error("invalid width '{input}': {source}")]
    Number {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid width '{input}': sign after hex prefix")]
    SignedHex { input: String },
}

/// Parses a decimal or `0x`-prefixed hexadecimal width.
pub fn parse_width(input: &str) -> Result<u32, ParseWidthError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) if hex.starts_with(['+', '-']) => {
            return Err(ParseWidthError::SignedHex {
                input: input.to_string(),
            });
        }
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };

    parsed.map_err(|source| ParseWidthError::Number {
        input: input.to_string(),
        source,
    })
}
