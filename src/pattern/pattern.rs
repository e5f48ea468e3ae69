// Fri Oct 16 2026 - Alex

use crate::pattern::{PatternByte, PatternError};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Pattern {
    elements: Vec<PatternByte>,
    name: Option<String>,
}

impl Pattern {
    pub fn new(elements: Vec<PatternByte>) -> Self {
        Self {
            elements,
            name: None,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(PatternByte::Byte).collect())
    }

    /// `None` entries become wildcards.
    pub fn from_options(bytes: &[Option<u8>]) -> Self {
        Self::new(bytes.iter().copied().map(PatternByte::from).collect())
    }

    /// Create a pattern with a byte mask (0xFF = fixed, anything else = wildcard)
    pub fn with_mask(bytes: &[u8], byte_mask: &[u8]) -> Result<Self, PatternError> {
        if bytes.len() != byte_mask.len() {
            return Err(PatternError::MaskLength {
                bytes: bytes.len(),
                mask: byte_mask.len(),
            });
        }

        let elements = bytes.iter()
            .zip(byte_mask.iter())
            .map(|(&b, &m)| if m == 0xFF { PatternByte::Byte(b) } else { PatternByte::Any })
            .collect();
        Ok(Self::new(elements))
    }

    /// Parses `"48 8B ?? 89"`, IDA style `"48 8B ? 89"` or packed `"488B??89"`.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut elements = Vec::new();

        for token in text.split_whitespace() {
            if let Some(element) = PatternByte::parse(token) {
                elements.push(element);
                continue;
            }

            if token.len() % 2 != 0 || !token.is_ascii() {
                return Err(PatternError::InvalidToken(token.to_string()));
            }

            for pair in token.as_bytes().chunks(2) {
                let pair = std::str::from_utf8(pair)
                    .map_err(|_| PatternError::InvalidToken(token.to_string()))?;
                let element = PatternByte::parse(pair)
                    .ok_or_else(|| PatternError::InvalidToken(token.to_string()))?;
                elements.push(element);
            }
        }

        if elements.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self::new(elements))
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[PatternByte] {
        &self.elements
    }

    pub fn significant_byte_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_wildcard()).count()
    }

    pub fn wildcard_byte_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_wildcard()).count()
    }

    pub fn is_all_wildcards(&self) -> bool {
        self.elements.iter().all(PatternByte::is_wildcard)
    }

    pub fn to_hex_string(&self) -> String {
        self.elements.iter().join(" ")
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Pattern {}

impl From<&[u8]> for Pattern {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<PatternByte>> for Pattern {
    fn from(elements: Vec<PatternByte>) -> Self {
        Self::new(elements)
    }
}

pub struct PatternBuilder {
    elements: Vec<PatternByte>,
    name: Option<String>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            name: None,
        }
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.elements.push(PatternByte::Byte(b));
        self
    }

    pub fn bytes(mut self, bs: &[u8]) -> Self {
        self.elements.extend(bs.iter().copied().map(PatternByte::Byte));
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.elements.push(PatternByte::Any);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        self.elements.extend(std::iter::repeat(PatternByte::Any).take(count));
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn build(self) -> Pattern {
        Pattern {
            elements: self.elements,
            name: self.name,
        }
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Pattern`] inline; `?` marks a wildcard.
///
/// ```
/// use heap_scanner::pattern;
///
/// let p = pattern![0x48, 0x8B, ?, 0x89];
/// assert_eq!(p.to_hex_string(), "48 8B ?? 89");
/// ```
#[macro_export]
macro_rules! pattern {
    ($($token:tt),* $(,)?) => {
        $crate::pattern::Pattern::new(vec![$($crate::__pattern_byte!($token)),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pattern_byte {
    (?) => {
        $crate::pattern::PatternByte::Any
    };
    ($byte:expr) => {
        $crate::pattern::PatternByte::Byte($byte)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spaced() {
        let pattern = Pattern::parse("48 8B ?? 89").unwrap();
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.elements()[2], PatternByte::Any);
        assert_eq!(pattern.elements()[1], PatternByte::Byte(0x8B));
    }

    #[test]
    fn test_parse_ida_and_packed_agree() {
        let ida = Pattern::parse("48 8b ? 89").unwrap();
        let packed: Pattern = "488B??89".parse().unwrap();
        assert_eq!(ida, packed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Pattern::parse("48 ZZ"), Err(PatternError::InvalidToken("ZZ".to_string())));
        assert_eq!(Pattern::parse("488"), Err(PatternError::InvalidToken("488".to_string())));
        assert_eq!(Pattern::parse("   "), Err(PatternError::Empty));
    }

    #[test]
    fn test_display_round_trip() {
        let pattern = Pattern::parse("01 02 ?? 04").unwrap();
        assert_eq!(pattern.to_string(), "01 02 ?? 04");
        assert_eq!(Pattern::parse(&pattern.to_string()).unwrap(), pattern);

        let named = pattern.with_name("header");
        assert_eq!(named.to_string(), "header: 01 02 ?? 04");
    }

    #[test]
    fn test_builder() {
        let pattern = PatternBuilder::new()
            .bytes(&[1, 2, 3, 4])
            .wildcard()
            .bytes(&[6, 7])
            .wildcards(2)
            .name("test")
            .build();

        assert_eq!(pattern.len(), 9);
        assert_eq!(pattern.significant_byte_count(), 6);
        assert_eq!(pattern.wildcard_byte_count(), 3);
        assert_eq!(pattern.name(), Some("test"));
    }

    #[test]
    fn test_macro() {
        let pattern = pattern![1, 2, 3, 4, ?, 6, 7, 8];
        assert_eq!(pattern, Pattern::from_options(&[
            Some(1), Some(2), Some(3), Some(4), None, Some(6), Some(7), Some(8),
        ]));

        let wild = pattern![?, ?, ?];
        assert!(wild.is_all_wildcards());
    }

    #[test]
    fn test_with_mask() {
        let pattern = Pattern::with_mask(&[0xAA, 0xBB, 0xCC], &[0xFF, 0x00, 0xFF]).unwrap();
        assert_eq!(pattern.to_hex_string(), "AA ?? CC");
    }

    #[test]
    fn test_with_mask_length_mismatch() {
        assert_eq!(
            Pattern::with_mask(&[0xAA, 0xBB, 0xCC], &[0xFF]),
            Err(PatternError::MaskLength { bytes: 3, mask: 1 })
        );
        assert_eq!(
            Pattern::with_mask(&[0xAA], &[0xFF, 0xFF]),
            Err(PatternError::MaskLength { bytes: 1, mask: 2 })
        );
    }
}
