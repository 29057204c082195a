use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A typed cell: a number or a trimmed text string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Coerce one raw cell into a typed value.
    ///
    /// The text is trimmed first. If the whole trimmed text is a numeric
    /// literal (integer or decimal, optional exponent) the result is a
    /// number, otherwise it is the trimmed text. Coercion never fails.
    ///
    /// Negative zero reads as zero. A literal too large for `f64` (`1e400`)
    /// has no finite value and stays text.
    #[must_use]
    pub fn parse(raw: &str) -> CellValue {
        let trimmed = raw.trim();

        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Int(i);
        }

        // f64 parsing also accepts "inf" and "NaN", which are not literals here
        if is_decimal_literal(trimmed) {
            if let Ok(f) = trimmed.parse::<f64>() {
                if f.is_finite() {
                    // -0.0 + 0.0 is 0.0
                    return CellValue::Float(f + 0.0);
                }
            }
        }

        CellValue::String(trimmed.to_string())
    }

    /// Check if the value is a number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Get the value as a float. Text never converts.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::String(_) => None,
        }
    }

    /// Get the value as an integer, truncating floats
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Some(*f as i64),
            CellValue::String(_) => None,
        }
    }

    /// Get the text of a string value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of characters in the rendered form of the value.
    #[must_use]
    pub fn text_width(&self) -> usize {
        match self {
            CellValue::String(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }

    /// Total ordering used by the default sort.
    ///
    /// Numbers compare by value regardless of integer/float representation,
    /// text compares lexicographically, and every number sorts before any text.
    #[must_use]
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
            (CellValue::String(_), _) => Ordering::Greater,
            (_, CellValue::String(_)) => Ordering::Less,
            _ => match (self.as_float(), other.as_float()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => Ordering::Equal,
            },
        }
    }
}

fn is_decimal_literal(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(CellValue::parse("42"), CellValue::Int(42));
        assert_eq!(CellValue::parse("-123"), CellValue::Int(-123));
        assert_eq!(CellValue::parse("  8874724 "), CellValue::Int(8_874_724));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(CellValue::parse("2.5"), CellValue::Float(2.5));
        assert_eq!(CellValue::parse(" -0.75"), CellValue::Float(-0.75));
        assert_eq!(CellValue::parse("1e3"), CellValue::Float(1000.0));
    }

    #[test]
    fn test_parse_string_is_trimmed() {
        assert_eq!(
            CellValue::parse("  Mexico City "),
            CellValue::String("Mexico City".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_partial_numbers() {
        assert_eq!(CellValue::parse("12abc"), CellValue::from("12abc"));
        assert_eq!(CellValue::parse("1,000"), CellValue::from("1,000"));
        assert_eq!(CellValue::parse("$5"), CellValue::from("$5"));
    }

    #[test]
    fn test_parse_rejects_non_finite_words() {
        assert_eq!(CellValue::parse("inf"), CellValue::from("inf"));
        assert_eq!(CellValue::parse("NaN"), CellValue::from("NaN"));
        assert_eq!(CellValue::parse("Infinity"), CellValue::from("Infinity"));
    }

    #[test]
    fn test_parse_negative_zero_renders_as_zero() {
        assert_eq!(CellValue::parse("-0").to_string(), "0");
        assert_eq!(CellValue::parse("-0.0").to_string(), "0");
        assert_eq!(CellValue::parse("-0e5").to_string(), "0");
    }

    #[test]
    fn test_parse_out_of_range_literal_is_text() {
        assert_eq!(CellValue::parse("1e400"), CellValue::from("1e400"));
        assert_eq!(CellValue::parse("1e300"), CellValue::Float(1e300));
    }

    #[test]
    fn test_parse_empty_is_text() {
        assert_eq!(CellValue::parse("   "), CellValue::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Int(100).to_string(), "100");
        assert_eq!(CellValue::Float(49.5).to_string(), "49.5");
        assert_eq!(CellValue::Float(1486.0).to_string(), "1486");
        assert_eq!(CellValue::from("London").to_string(), "London");
    }

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(CellValue::from("São Paulo").text_width(), 9);
        assert_eq!(CellValue::Int(-42).text_width(), 3);
    }

    #[test]
    fn test_compare() {
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).compare(&CellValue::Int(3)), Ordering::Equal);
        assert_eq!(CellValue::Int(9).compare(&CellValue::from("a")), Ordering::Less);
        assert_eq!(
            CellValue::from("b").compare(&CellValue::from("a")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CellValue::Int(42).as_float(), Some(42.0));
        assert_eq!(CellValue::Float(3.9).as_int(), Some(3));
        assert_eq!(CellValue::from("42").as_float(), None);
        assert_eq!(CellValue::from("x").as_text(), Some("x"));
    }
}
