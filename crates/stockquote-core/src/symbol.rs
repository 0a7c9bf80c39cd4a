//! Ticker symbol validation.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};

static SYMBOL_PATTERN: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z]{1,5}$").expect("symbol pattern is a valid regex")
});

/// Returns true if `symbol`, after trimming, is 1 to 5 ASCII letters.
///
/// Case is ignored. Empty and whitespace-only input is rejected.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let trimmed = symbol.trim();
    !trimmed.is_empty() && SYMBOL_PATTERN.is_match(trimmed)
}

/// Trim surrounding whitespace and uppercase ASCII letters.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// A validated, normalized ticker symbol (`[A-Z]{1,5}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a raw symbol.
    pub fn parse(raw: &str) -> QuoteResult<Self> {
        if raw.trim().is_empty() {
            return Err(QuoteError::invalid_argument(
                "Stock symbol cannot be null or empty",
            ));
        }
        if !is_valid_symbol(raw) {
            return Err(QuoteError::invalid_argument(
                "Stock symbol must be 1-5 uppercase letters",
            ));
        }
        Ok(Self(normalize_symbol(raw)))
    }

    /// Returns the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_symbols() {
        for s in ["IBM", "AAPL", "MSFT", "A", "GOOGL", "ibm", "BrK"] {
            assert!(is_valid_symbol(s), "{s} should be valid");
        }
    }

    #[test]
    fn test_invalid_symbols() {
        for s in ["", "   ", "123", "TOOLONG", "IBM123", "IBM-A", "BRK.B", "ÄBC"] {
            assert!(!is_valid_symbol(s), "{s:?} should be invalid");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(is_valid_symbol("  ibm "));
        assert!(!is_valid_symbol("I BM"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_symbol("  aapl\t"), "AAPL");
        assert_eq!(normalize_symbol("Msft"), "MSFT");
    }

    #[test]
    fn test_symbol_parse() {
        let symbol = Symbol::parse(" ibm ").unwrap();
        assert_eq!(symbol.as_str(), "IBM");
        assert_eq!(symbol.to_string(), "IBM");

        assert!(matches!(
            Symbol::parse("  "),
            Err(QuoteError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Symbol::parse("TOOLONG"),
            Err(QuoteError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_symbol_serde() {
        let symbol: Symbol = serde_json::from_str("\"aapl\"").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"AAPL\"");
        assert!(serde_json::from_str::<Symbol>("\"A1\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_letters_up_to_five_are_valid(s in "[A-Za-z]{1,5}") {
            prop_assert!(is_valid_symbol(&s));
            let parsed = Symbol::parse(&s).unwrap();
            prop_assert_eq!(parsed.as_str(), s.to_ascii_uppercase());
        }

        #[test]
        fn prop_more_than_five_letters_are_invalid(s in "[A-Za-z]{6,12}") {
            prop_assert!(!is_valid_symbol(&s));
        }

        #[test]
        fn prop_any_non_letter_is_invalid(
            prefix in "[A-Za-z]{0,2}",
            bad in "[0-9._\\-/$]",
            suffix in "[A-Za-z]{0,2}",
        ) {
            let s = format!("{prefix}{bad}{suffix}");
            prop_assert!(!is_valid_symbol(&s));
        }
    }
}
