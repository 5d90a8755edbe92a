// 💵 Change Calculator - Greedy denomination breakdown
// Works in minor currency units (cents) end to end.
//
// The table is scanned top to bottom and the remainder is consumed after every
// step, so processing order decides the outcome:
//   twoDollar (100) is evaluated before oneDollar (100)
//   → oneDollar never receives a count

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

// ============================================================================
// DENOMINATION TABLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Denomination {
    /// Label used as the key in the change result
    pub name: &'static str,

    /// Value of one unit, in cents
    pub value: i64,
}

/// Fixed processing order, strictly by listed position (not by value)
pub const DENOMINATIONS: [Denomination; 9] = [
    Denomination { name: "twentyDollar", value: 2000 },
    Denomination { name: "tenDollar", value: 1000 },
    Denomination { name: "fiveDollar", value: 500 },
    Denomination { name: "twoDollar", value: 100 },
    Denomination { name: "oneDollar", value: 100 },
    Denomination { name: "quarter", value: 25 },
    Denomination { name: "dime", value: 10 },
    Denomination { name: "nickel", value: 5 },
    Denomination { name: "penny", value: 1 },
];

impl Denomination {
    /// Find a denomination in the table by its label
    pub fn lookup(name: &str) -> Option<&'static Denomination> {
        DENOMINATIONS.iter().find(|d| d.name == name)
    }
}

// ============================================================================
// CHANGE RESULT
// ============================================================================

/// Change - denomination name → count, in table scan order
///
/// Only denominations with a non-zero count are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    entries: Vec<(&'static Denomination, u64)>,
}

impl Change {
    /// Empty result (no change owed)
    pub fn new() -> Self {
        Change { entries: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count recorded for a denomination, if any
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(denom, _)| denom.name == name)
            .map(|(_, count)| *count)
    }

    /// Iterate (name, count) in scan order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().map(|(denom, count)| (denom.name, *count))
    }

    /// Reconstructed amount: Σ count × value
    pub fn total_value(&self) -> i64 {
        self.entries
            .iter()
            .map(|(denom, count)| denom.value.saturating_mul(*count as i64))
            .fold(0i64, |acc, v| acc.saturating_add(v))
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;
        for (i, (name, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, count)?;
        }
        write!(f, " }}")
    }
}

// Serialized as a JSON object; key order follows the scan
impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in self.iter() {
            map.serialize_entry(name, &count)?;
        }
        map.end()
    }
}

// ============================================================================
// CALCULATION
// ============================================================================

/// Break a raw amount (cents) into denominations
///
/// Non-positive amounts produce an empty result.
pub fn breakdown(amount: i64) -> Change {
    let mut change = Change::new();
    let mut remaining = amount;

    if remaining <= 0 {
        return change;
    }

    for denom in DENOMINATIONS.iter() {
        let count = remaining / denom.value;
        remaining %= denom.value;

        tracing::trace!(denomination = denom.name, count, remaining, "greedy step");

        if count > 0 {
            change.entries.push((denom, count as u64));
        }
    }

    change
}

/// Change owed for a purchase of `total` paid with `cash` (both in cents)
///
/// Exact payment or underpayment yields an empty result, not an error.
pub fn calculate_change(total: i64, cash: i64) -> Change {
    let owed = cash.saturating_sub(total);

    if owed <= 0 {
        tracing::debug!(total, cash, "no change owed");
        return Change::new();
    }

    let change = breakdown(owed);
    tracing::debug!(owed, denominations = change.len(), "change calculated");
    change
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_purchase() {
        let change = calculate_change(209, 1000);

        let entries: Vec<(&str, u64)> = change.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("fiveDollar", 1),
                ("twoDollar", 2),
                ("quarter", 3),
                ("dime", 1),
                ("nickel", 1),
                ("penny", 1),
            ]
        );
        assert_eq!(change.total_value(), 791);
    }

    #[test]
    fn test_one_dollar_is_starved() {
        // Whole dollars under $5 always go to twoDollar
        for owed in [100, 300, 1999] {
            let change = breakdown(owed);
            assert_eq!(change.get("oneDollar"), None);
            assert_eq!(change.total_value(), owed);
        }
        assert_eq!(breakdown(300).get("twoDollar"), Some(3));
    }

    #[test]
    fn test_no_change_when_exact_or_underpaid() {
        assert!(calculate_change(1000, 1000).is_empty());
        assert!(calculate_change(1000, 500).is_empty());
        assert!(calculate_change(0, 0).is_empty());
    }

    #[test]
    fn test_large_bills() {
        let change = calculate_change(0, 4000 + 1000 + 1);

        assert_eq!(change.get("twentyDollar"), Some(2));
        assert_eq!(change.get("tenDollar"), Some(1));
        assert_eq!(change.get("penny"), Some(1));
        assert_eq!(change.len(), 3);
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        assert!(calculate_change(i64::MAX, i64::MIN).is_empty());
        let change = calculate_change(i64::MIN, i64::MAX);
        assert!(!change.is_empty());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Change::new().to_string(), "{}");
        assert_eq!(
            calculate_change(0, 35).to_string(),
            "{ quarter: 1, dime: 1 }"
        );
    }

    #[test]
    fn test_serialize_keeps_scan_order() {
        let json = serde_json::to_string(&calculate_change(209, 1000)).unwrap();
        assert_eq!(
            json,
            r#"{"fiveDollar":1,"twoDollar":2,"quarter":3,"dime":1,"nickel":1,"penny":1}"#
        );
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(Denomination::lookup("dime").map(|d| d.value), Some(10));
        assert!(Denomination::lookup("halfDollar").is_none());
        assert_eq!(DENOMINATIONS.last().map(|d| d.value), Some(1));
    }

    proptest! {
        #[test]
        fn prop_breakdown_reconstructs_amount(amount in 0i64..10_000_000) {
            let change = breakdown(amount);
            prop_assert_eq!(change.total_value(), amount);
            prop_assert!(change.get("oneDollar").is_none());
            prop_assert!(change.iter().all(|(_, count)| count > 0));
        }

        #[test]
        fn prop_underpayment_is_empty(total in 0i64..100_000, short in 0i64..100_000) {
            prop_assert!(calculate_change(total, total - short).is_empty());
        }
    }
}
