// 🔁 Repeat Numbers
// [[1, 10], [56, 7]] → "1111111111, 56565656565656"

use serde::{Deserialize, Serialize};
use serde_json::Number;

// ============================================================================
// REPEAT PAIR
// ============================================================================

/// RepeatPair - (value, count), read from JSON as `[value, count]`
///
/// A `null` value is the absent value and renders as an empty token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatPair(pub Option<Number>, pub u64);

impl RepeatPair {
    pub fn new(value: impl Into<Number>, count: u64) -> Self {
        RepeatPair(Some(value.into()), count)
    }

    /// Pair with no value; contributes nothing but still takes a slot
    pub fn absent(count: u64) -> Self {
        RepeatPair(None, count)
    }

    pub fn value(&self) -> Option<&Number> {
        self.0.as_ref()
    }

    pub fn count(&self) -> u64 {
        self.1
    }

    /// The repeated text for this pair alone
    pub fn segment(&self) -> String {
        let text = self.value().map(number_text).unwrap_or_default();
        text.repeat(self.count() as usize)
    }
}

// ============================================================================
// TEXT CONVERSION
// ============================================================================

/// Default text for a number
///
/// Integral floats drop their fraction (`3.0` → `"3"`), everything else uses
/// the shortest round-trip form.
pub fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }

    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

// ============================================================================
// REPEAT
// ============================================================================

/// Expand every pair and join the segments with `", "`
///
/// Separators go between pair positions, so a zero-count pair still leaves
/// its (empty) slot: `[[1, 1], [2, 0], [3, 1]]` → `"1, , 3"`.
pub fn repeat_numbers(data: &[RepeatPair]) -> String {
    data.iter()
        .map(RepeatPair::segment)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pairs() {
        let data = vec![RepeatPair::new(1, 10), RepeatPair::new(56, 7)];
        assert_eq!(repeat_numbers(&data), "1111111111, 56565656565656");
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(repeat_numbers(&[RepeatPair::new(85, 2)]), "8585");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(repeat_numbers(&[]), "");
    }

    #[test]
    fn test_zero_count_keeps_separator() {
        let data = vec![
            RepeatPair::new(1, 1),
            RepeatPair::new(2, 0),
            RepeatPair::new(3, 1),
        ];
        assert_eq!(repeat_numbers(&data), "1, , 3");
    }

    #[test]
    fn test_absent_value_is_empty_token() {
        let data = vec![RepeatPair::absent(3), RepeatPair::new(7, 2)];
        assert_eq!(repeat_numbers(&data), ", 77");
    }

    #[test]
    fn test_segment_length() {
        let pair = RepeatPair::new(123, 4);
        assert_eq!(pair.segment().len(), 3 * 4);
    }

    #[test]
    fn test_number_text() {
        let float = Number::from_f64(1.5).unwrap();
        let integral = Number::from_f64(3.0).unwrap();
        let negative = Number::from(-42);

        assert_eq!(number_text(&float), "1.5");
        assert_eq!(number_text(&integral), "3");
        assert_eq!(number_text(&negative), "-42");
        assert_eq!(number_text(&Number::from(u64::MAX)), u64::MAX.to_string());
    }

    #[test]
    fn test_deserialize_from_json_pairs() {
        let data: Vec<RepeatPair> = serde_json::from_str("[[1, 10], [56, 7], [null, 2]]").unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data[1], RepeatPair::new(56, 7));
        assert_eq!(data[2], RepeatPair::absent(2));
        assert_eq!(repeat_numbers(&data), "1111111111, 56565656565656, ");
    }

    #[test]
    fn test_float_values() {
        let data = vec![RepeatPair(Number::from_f64(2.5), 2)];
        assert_eq!(repeat_numbers(&data), "2.52.5");
    }
}
