//! Lenient numeric form fields.
//!
//! Cargo lines come from free-text inputs and from imported JSON, so a field
//! may hold a number or a string. Coercion happens here, once, at the edge;
//! everything downstream works on plain `f64`/`u32`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl Default for LooseNumber {
    fn default() -> Self {
        LooseNumber::Text(String::new())
    }
}

impl LooseNumber {
    /// Float value with `parseFloat` semantics: longest numeric prefix wins,
    /// anything unparseable or non-finite becomes `0.0`.
    pub fn as_float(&self) -> f64 {
        let value = match self {
            LooseNumber::Number(value) => *value,
            LooseNumber::Text(raw) => float_prefix(raw).unwrap_or(0.0),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Unit count with `parseInt` semantics. Unparseable or non-positive
    /// values fall back to a single unit.
    pub fn as_count(&self) -> u32 {
        let parsed = match self {
            LooseNumber::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            LooseNumber::Number(_) => None,
            LooseNumber::Text(raw) => integer_prefix(raw),
        };
        match parsed {
            Some(count) if count > 0 => u32::try_from(count).unwrap_or(u32::MAX),
            _ => 1,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, LooseNumber::Text(raw) if raw.trim().is_empty())
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseNumber::Number(value) => write!(f, "{value}"),
            LooseNumber::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<u32> for LooseNumber {
    fn from(value: u32) -> Self {
        LooseNumber::Number(f64::from(value))
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

impl From<String> for LooseNumber {
    fn from(value: String) -> Self {
        LooseNumber::Text(value)
    }
}

fn float_prefix(raw: &str) -> Option<f64> {
    let bytes = raw.trim_start().as_bytes();
    let mut idx = 0;
    let mut normalized = String::new();

    if let Some(&sign) = bytes.first().filter(|b| **b == b'+' || **b == b'-') {
        normalized.push(sign as char);
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = &bytes[int_start..idx];

    let mut frac_digits: &[u8] = &[];
    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        idx = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    normalized.push_str(if int_digits.is_empty() {
        "0"
    } else {
        std::str::from_utf8(int_digits).ok()?
    });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(std::str::from_utf8(frac_digits).ok()?);
    }

    // Exponent only counts when at least one digit follows it.
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        let mut end = idx + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            normalized.push_str(std::str::from_utf8(&bytes[idx..end]).ok()?);
        }
    }

    normalized.parse::<f64>().ok()
}

fn integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if let Some(b'+' | b'-') = bytes.first() {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    match trimmed[..end].parse::<i64>() {
        Ok(value) => Some(value),
        // Overflow: keep the sign, saturate the magnitude.
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_parses_numeric_prefix() {
        assert_eq!(LooseNumber::from("48").as_float(), 48.0);
        assert_eq!(LooseNumber::from("  12.5in").as_float(), 12.5);
        assert_eq!(LooseNumber::from(".5").as_float(), 0.5);
        assert_eq!(LooseNumber::from("7.").as_float(), 7.0);
        assert_eq!(LooseNumber::from("-3").as_float(), -3.0);
        assert_eq!(LooseNumber::from("1e2").as_float(), 100.0);
        assert_eq!(LooseNumber::from("4e").as_float(), 4.0);
    }

    #[test]
    fn float_falls_back_to_zero() {
        assert_eq!(LooseNumber::from("").as_float(), 0.0);
        assert_eq!(LooseNumber::from("abc").as_float(), 0.0);
        assert_eq!(LooseNumber::from("-").as_float(), 0.0);
        assert_eq!(LooseNumber::from(".").as_float(), 0.0);
        assert_eq!(LooseNumber::Number(f64::NAN).as_float(), 0.0);
        assert_eq!(LooseNumber::Number(f64::INFINITY).as_float(), 0.0);
    }

    #[test]
    fn count_truncates_and_defaults() {
        assert_eq!(LooseNumber::from("3").as_count(), 3);
        assert_eq!(LooseNumber::from("2.9").as_count(), 2);
        assert_eq!(LooseNumber::from("4 pallets").as_count(), 4);
        assert_eq!(LooseNumber::Number(5.7).as_count(), 5);
        assert_eq!(LooseNumber::from("0").as_count(), 1);
        assert_eq!(LooseNumber::from("-2").as_count(), 1);
        assert_eq!(LooseNumber::from("many").as_count(), 1);
        assert_eq!(LooseNumber::default().as_count(), 1);
        assert_eq!(LooseNumber::Number(f64::NAN).as_count(), 1);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_number: LooseNumber = serde_json::from_value(serde_json::json!(42.5)).unwrap();
        let from_text: LooseNumber = serde_json::from_value(serde_json::json!("42.5")).unwrap();
        assert_eq!(from_number.as_float(), 42.5);
        assert_eq!(from_text.as_float(), 42.5);
        assert_eq!(from_text.to_string(), "42.5");
    }

    #[test]
    fn blank_detection() {
        assert!(LooseNumber::from("   ").is_blank());
        assert!(!LooseNumber::from("0").is_blank());
        assert!(!LooseNumber::Number(0.0).is_blank());
    }
}
