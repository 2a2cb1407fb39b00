use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

/// A dotted numeric version such as `2.0` or `3.0.1`.
///
/// Missing trailing components compare as zero, so `3.0` and `3.0.0` are
/// equal.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn new(components: impl Into<Vec<u64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Parse a dot-separated version string. Every component must be a
    /// non-empty run of ASCII digits.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedVersion(text.to_string());
        let components = text
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                part.parse::<u64>().map_err(|_| malformed())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn major(&self) -> u64 {
        self.components.first().copied().unwrap_or(0)
    }

    /// Inclusive range check: `lo <= self <= hi`.
    pub fn in_range(&self, lo: &Version, hi: &Version) -> bool {
        self >= lo && self <= hi
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(v("3.0.1").components(), &[3, 0, 1]);
        assert_eq!(v("2.0").major(), 2);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            Version::parse("3.0.0-rc1"),
            Err(ParseError::MalformedVersion(s)) if s == "3.0.0-rc1"
        ));
        assert!(Version::parse("").is_err());
        assert!(Version::parse("3..1").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_padding() {
        for text in ["+2.0", "2.+0", " 3.0.1 ", "3. 0", "-1.0"] {
            assert!(
                matches!(Version::parse(text), Err(ParseError::MalformedVersion(s)) if s == text),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert_eq!(v("3.0"), v("3.0.0"));
        assert_eq!(v("3").cmp(&v("3.0.0")), Ordering::Equal);
    }

    #[test]
    fn test_reflexive() {
        for text in ["2.0", "3.0.0", "3.0.1", "10.4.2.7"] {
            assert_eq!(v(text).cmp(&v(text)), Ordering::Equal);
        }
    }

    #[test]
    fn test_componentwise_order() {
        assert!(v("2.0") < v("3.0"));
        assert!(v("3.0.0") < v("3.0.1"));
        assert!(v("3.0.1") < v("3.1"));
        assert!(v("3.10") > v("3.9"));
        assert!(v("1.9") < v("2.0"));
    }

    #[test]
    fn test_in_range() {
        let lo = v("2.0");
        let hi = v("3.0.1");
        assert!(v("2.0").in_range(&lo, &hi));
        assert!(v("3.0.0").in_range(&lo, &hi));
        assert!(v("3.0.1").in_range(&lo, &hi));
        assert!(!v("1.9").in_range(&lo, &hi));
        assert!(!v("3.1.0").in_range(&lo, &hi));
    }

    #[test]
    fn test_new_matches_parse() {
        assert_eq!(Version::new([3, 0, 1]), v("3.0.1"));
        assert_eq!(Version::new([3]), v("3.0"));
    }

    #[test]
    fn test_display() {
        assert_eq!(v("3.0.1").to_string(), "3.0.1");
    }
}
