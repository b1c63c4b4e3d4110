//! In-memory coupon table.
//!
//! Maps case-sensitive coupon codes to a discount percentage in
//! `[0, 100]`. Tables are built by the loader or collected from pairs;
//! once built they are read-only.

use std::collections::HashMap;

use tracing::debug;

/// Lowest discount a table entry can carry.
pub const MIN_DISCOUNT: i32 = 0;

/// Highest discount a table entry can carry.
pub const MAX_DISCOUNT: i32 = 100;

/// Result of converting a raw discount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountValue {
    /// Parsed and already inside `[0, 100]`.
    Exact(i32),
    /// Parsed but outside the range; holds the clamped value.
    Clamped(i32),
    /// Not an integer; coerced to 0.
    Coerced,
}

impl DiscountValue {
    /// The discount that ends up in the table.
    pub fn value(self) -> i32 {
        match self {
            Self::Exact(v) | Self::Clamped(v) => v,
            Self::Coerced => MIN_DISCOUNT,
        }
    }
}

/// Convert a raw discount field into a table value.
///
/// The field is parsed as a base-10 `i64` without trimming. Parse
/// failures become 0, negatives become 0, anything over 100 becomes 100.
pub fn clamp_discount(raw: &str) -> DiscountValue {
    match raw.parse::<i64>() {
        Ok(v) if v < MIN_DISCOUNT as i64 => DiscountValue::Clamped(MIN_DISCOUNT),
        Ok(v) if v > MAX_DISCOUNT as i64 => DiscountValue::Clamped(MAX_DISCOUNT),
        Ok(v) => DiscountValue::Exact(v as i32),
        Err(_) => DiscountValue::Coerced,
    }
}

/// Answer to a redemption query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redemption {
    pub valid: bool,
    pub discount_percentage: i32,
}

impl Redemption {
    /// The answer for a code that is not in the table.
    pub const INVALID: Self = Self {
        valid: false,
        discount_percentage: 0,
    };
}

impl From<Option<i32>> for Redemption {
    fn from(found: Option<i32>) -> Self {
        match found {
            Some(discount_percentage) => Self {
                valid: true,
                discount_percentage,
            },
            None => Self::INVALID,
        }
    }
}

/// Read-only mapping from coupon code to discount percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponTable {
    codes: HashMap<String, i32>,
}

impl CouponTable {
    /// An empty table. Every lookup against it misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or overwrite a code. Returns `true` if the code was
    /// already present.
    ///
    /// Values are clamped into `[0, 100]`.
    pub(crate) fn insert(&mut self, code: String, discount: i32) -> bool {
        let discount = discount.clamp(MIN_DISCOUNT, MAX_DISCOUNT);
        self.codes.insert(code, discount).is_some()
    }

    /// Look up a code. Exact, case-sensitive match.
    pub fn lookup(&self, code: &str) -> Option<i32> {
        self.codes.get(code).copied()
    }

    /// Validate a code and report its discount.
    ///
    /// This is a pure read: nothing is marked used, so asking twice
    /// gives the same answer.
    pub fn redeem(&self, code: &str) -> Redemption {
        let redemption = Redemption::from(self.lookup(code));
        debug!(
            code,
            valid = redemption.valid,
            discount = redemption.discount_percentage,
            "coupon lookup"
        );
        redemption
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All codes in the table, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }
}

impl FromIterator<(String, i32)> for CouponTable {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (code, discount) in iter {
            table.insert(code, discount);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CouponTable {
        [
            ("newsletter15".to_string(), 15),
            ("SPRING50".to_string(), 50),
            ("free".to_string(), 100),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn clamp_exact_values() {
        assert_eq!(clamp_discount("0"), DiscountValue::Exact(0));
        assert_eq!(clamp_discount("15"), DiscountValue::Exact(15));
        assert_eq!(clamp_discount("100"), DiscountValue::Exact(100));
        assert_eq!(clamp_discount("+20"), DiscountValue::Exact(20));
    }

    #[test]
    fn clamp_out_of_range() {
        assert_eq!(clamp_discount("-5"), DiscountValue::Clamped(0));
        assert_eq!(clamp_discount("101"), DiscountValue::Clamped(100));
        assert_eq!(clamp_discount("9999999999"), DiscountValue::Clamped(100));
        assert_eq!(clamp_discount("-9999999999"), DiscountValue::Clamped(0));
    }

    #[test]
    fn clamp_unparsable_coerces_to_zero() {
        for raw in ["", "abc", "15%", " 15", "1.5", "99999999999999999999"] {
            let value = clamp_discount(raw);
            assert_eq!(value, DiscountValue::Coerced, "raw = {raw:?}");
            assert_eq!(value.value(), 0);
        }
    }

    #[test]
    fn redeem_present_code() {
        let table = sample_table();
        assert_eq!(
            table.redeem("newsletter15"),
            Redemption {
                valid: true,
                discount_percentage: 15
            }
        );
    }

    #[test]
    fn redeem_absent_code() {
        let table = sample_table();
        assert_eq!(table.redeem("notindb"), Redemption::INVALID);
        assert_eq!(table.redeem(""), Redemption::INVALID);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = sample_table();
        assert_eq!(table.lookup("SPRING50"), Some(50));
        assert_eq!(table.lookup("spring50"), None);
    }

    #[test]
    fn redeem_is_idempotent() {
        let table = sample_table();
        let first = table.redeem("free");
        for _ in 0..5 {
            assert_eq!(table.redeem("free"), first);
        }
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn insert_reports_overwrite_and_clamps() {
        let mut table = CouponTable::empty();
        assert!(!table.insert("a".to_string(), 10));
        assert!(table.insert("a".to_string(), 250));
        assert_eq!(table.lookup("a"), Some(100));
        assert!(!table.insert("b".to_string(), -3));
        assert_eq!(table.lookup("b"), Some(0));
    }

    #[test]
    fn empty_table_misses_everything() {
        let table = CouponTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.codes().count(), 0);
        assert_eq!(table.redeem("newsletter15"), Redemption::INVALID);
    }
}
