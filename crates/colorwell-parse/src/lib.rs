//! # colorwell-parse
//!
//! Parsing and formatting of the picker's hex value strings.
//!
//! The picker's public value is a `#RRGGBB` string. On input we also accept
//! the `#RGB` shorthand (each nibble doubled, CSS-style), an optional
//! 2-digit alpha suffix (ignored — the picker is opaque), a missing `#`,
//! and surrounding whitespace.
//!
//! ```rust
//! use colorwell_parse::{parse_hex, to_hex_string};
//!
//! assert_eq!(parse_hex("#20A4f3").unwrap(), [0x20, 0xA4, 0xF3]);
//! assert_eq!(parse_hex("fa0").unwrap(), [0xFF, 0xAA, 0x00]);
//! assert_eq!(to_hex_string([32, 164, 243]), "#20A4F3");
//! ```

#![warn(missing_docs)]

use thiserror::Error;

/// Result type alias using [`ParseColorError`].
pub type Result<T> = std::result::Result<T, ParseColorError>;

/// Errors produced when a value string cannot be read as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string was empty or all whitespace.
    #[error("empty color string")]
    Empty,
    /// The string was not a 3-, 6- or 8-digit hex color.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),
}

/// Decodes one ASCII hex digit.
fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex color string into an RGB byte triple.
///
/// Accepted forms, with or without the leading `#` and with surrounding
/// whitespace: `RRGGBB`, `RRGGBBAA` (alpha ignored), `RGB` (shorthand,
/// nibbles doubled). Case-insensitive.
///
/// # Errors
///
/// [`ParseColorError::Empty`] for a blank string,
/// [`ParseColorError::MalformedHex`] for anything else that does not match.
pub fn parse_hex(input: &str) -> Result<[u8; 3]> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed).as_bytes();
    let malformed = || ParseColorError::MalformedHex(input.to_owned());

    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, &d) in out.iter_mut().zip(digits) {
                let n = nibble(d).ok_or_else(malformed)?;
                *slot = (n << 4) | n;
            }
            Ok(out)
        }
        6 | 8 => {
            let mut out = [0u8; 3];
            for (slot, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
                let hi = nibble(pair[0]).ok_or_else(malformed)?;
                let lo = nibble(pair[1]).ok_or_else(malformed)?;
                *slot = (hi << 4) | lo;
            }
            // The alpha pair, when present, only needs to be valid hex.
            if digits.len() == 8
                && digits[6..].iter().any(|&d| nibble(d).is_none())
            {
                return Err(malformed());
            }
            Ok(out)
        }
        _ => Err(malformed()),
    }
}

/// Formats an RGB byte triple as an uppercase `#RRGGBB` string.
pub fn to_hex_string(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
