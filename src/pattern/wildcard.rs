// Fri Oct 16 2026 - Alex

use std::fmt;

/// A single pattern position: a concrete byte or a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternByte {
    Any,
    Byte(u8),
}

impl PatternByte {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// `None` is a position past the end of the heap. Concrete bytes never
    /// match it; wildcards defer to the caller's tail policy.
    pub fn matches(&self, byte: Option<u8>, wildcard_past_end: bool) -> bool {
        match (self, byte) {
            (Self::Any, Some(_)) => true,
            (Self::Any, None) => wildcard_past_end,
            (Self::Byte(b), Some(actual)) => *b == actual,
            (Self::Byte(_), None) => false,
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        if token == "?" || token == "??" {
            Some(Self::Any)
        } else if !token.is_empty() && token.len() <= 2 && token.chars().all(|c| c.is_ascii_hexdigit()) {
            u8::from_str_radix(token, 16).ok().map(Self::Byte)
        } else {
            None
        }
    }

    pub fn to_byte(&self) -> Option<u8> {
        match self {
            Self::Any => None,
            Self::Byte(b) => Some(*b),
        }
    }
}

impl From<u8> for PatternByte {
    fn from(byte: u8) -> Self {
        Self::Byte(byte)
    }
}

impl From<Option<u8>> for PatternByte {
    fn from(byte: Option<u8>) -> Self {
        byte.map_or(Self::Any, Self::Byte)
    }
}

impl fmt::Display for PatternByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "??"),
            Self::Byte(b) => write!(f, "{:02X}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_any_in_bounds_byte() {
        for byte in [0x00, 0x7F, 0xFF] {
            assert!(PatternByte::Any.matches(Some(byte), false));
        }
    }

    #[test]
    fn test_past_end_handling() {
        assert!(PatternByte::Any.matches(None, true));
        assert!(!PatternByte::Any.matches(None, false));
        assert!(!PatternByte::Byte(0).matches(None, true));
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(PatternByte::parse("??"), Some(PatternByte::Any));
        assert_eq!(PatternByte::parse("?"), Some(PatternByte::Any));
        assert_eq!(PatternByte::parse("8b"), Some(PatternByte::Byte(0x8B)));
        assert_eq!(PatternByte::parse("F"), Some(PatternByte::Byte(0x0F)));
        assert_eq!(PatternByte::parse("GG"), None);
        assert_eq!(PatternByte::parse("100"), None);
        assert_eq!(PatternByte::parse("+F"), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(PatternByte::from(None), PatternByte::Any);
        assert_eq!(PatternByte::from(Some(3)), PatternByte::Byte(3));
        assert_eq!(PatternByte::Byte(3).to_byte(), Some(3));
        assert_eq!(PatternByte::Any.to_byte(), None);
    }
}
