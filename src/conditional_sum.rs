// ➕ Conditional Sum - add up the even or the odd integers of a sequence
//
// Only integers have a parity, so strings, fractions and non-finite numbers
// are skipped no matter which condition is asked for.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// PARITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Exact, case-sensitive: only "even" and "odd" are conditions
    pub fn parse(condition: &str) -> Option<Parity> {
        match condition {
            "even" => Some(Parity::Even),
            "odd" => Some(Parity::Odd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }

    /// Remainder keeps the sign, so -3 % 2 == -1 and -3 is odd
    pub fn matches(&self, value: i64) -> bool {
        match self {
            Parity::Even => value % 2 == 0,
            Parity::Odd => value % 2 != 0,
        }
    }
}

// ============================================================================
// INTEGER TEST
// ============================================================================

/// Integer view of a JSON value, if it is one
///
/// Floats with no fractional part count (`4.0` → 4) as long as they fit in i64.
pub fn as_integer(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(number) => number,
        _ => return None,
    };

    if let Some(i) = number.as_i64() {
        return Some(i);
    }

    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

// ============================================================================
// SUM
// ============================================================================

/// Sum the integers in `values` that satisfy `parity`
pub fn sum_by_parity(values: &[Value], parity: Parity) -> i64 {
    values
        .iter()
        .filter_map(|value| {
            let integer = as_integer(value);
            if integer.is_none() {
                tracing::trace!(%value, "skipping non-integer");
            }
            integer
        })
        .filter(|i| parity.matches(*i))
        .fold(0i64, |acc, i| acc.wrapping_add(i))
}

/// Sum the integers matching `condition` ("even" or "odd")
///
/// Any other condition matches nothing and the sum is 0.
pub fn conditional_sum(values: &[Value], condition: &str) -> i64 {
    match Parity::parse(condition) {
        Some(parity) => sum_by_parity(values, parity),
        None => {
            tracing::debug!(condition, "unknown condition, nothing to sum");
            0
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
