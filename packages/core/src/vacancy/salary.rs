//! Salary normalization.
//!
//! Vacancies arrive with a salary range whose bounds may each be missing.
//! [`normalize`] turns such a range into the human-readable text shown to the
//! user and a [`ComparableSalary`] used for ordering and threshold queries.
//!
//! A range with both bounds is kept as a pair; every comparison against a
//! pair looks at its upper bound, so an applicant "fits" a range as long as
//! their expectation does not exceed the top of it.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vacancy::error::VacancyError;

/// Numeric salary value used for comparisons.
///
/// Serialized as a bare number (`Single`) or a two-element array (`Range`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparableSalary {
    Single(i64),
    Range(i64, i64),
}

/// Result of normalizing a raw salary range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSalary {
    pub text: String,
    pub comparable: ComparableSalary,
}

/// Normalize a raw `(from, to)` salary range.
///
/// Returns `None` when neither bound is present; such postings carry no
/// usable salary and must be skipped by the caller.
pub fn normalize(lower: Option<i64>, upper: Option<i64>) -> Option<NormalizedSalary> {
    match (lower, upper) {
        (None, None) => None,
        (Some(lower), Some(upper)) => Some(NormalizedSalary {
            text: format!("от {} до {} руб.", lower, upper),
            comparable: ComparableSalary::range(lower, upper),
        }),
        (Some(value), None) | (None, Some(value)) => Some(NormalizedSalary {
            text: format!("{} руб.", value),
            comparable: ComparableSalary::Single(value),
        }),
    }
}

impl ComparableSalary {
    /// Build a pair, ordering the bounds so that lower <= upper holds.
    pub fn range(a: i64, b: i64) -> Self {
        Self::Range(a.min(b), a.max(b))
    }

    /// The value threshold queries are tested against.
    pub fn upper(&self) -> i64 {
        match *self {
            Self::Single(value) => value,
            Self::Range(_, upper) => upper,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(..))
    }

    /// `true` when a minimum-salary `threshold` is satisfied by this value.
    pub fn fits(&self, threshold: i64) -> bool {
        threshold <= self.upper()
    }

    /// Compare two salaries of the same shape.
    ///
    /// Pairs are ordered by upper bound, then by lower bound. Mixing a single
    /// value with a pair is a data-model inconsistency and is reported as
    /// [`VacancyError::Comparison`].
    pub fn compare(&self, other: &ComparableSalary) -> Result<Ordering, VacancyError> {
        match (*self, *other) {
            (Self::Single(a), Self::Single(b)) => Ok(a.cmp(&b)),
            (Self::Range(a_low, a_high), Self::Range(b_low, b_high)) => {
                Ok(a_high.cmp(&b_high).then(a_low.cmp(&b_low)))
            }
            _ => Err(VacancyError::comparison(self.to_string(), other.to_string())),
        }
    }
}

impl fmt::Display for ComparableSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{}", value),
            Self::Range(lower, upper) => write!(f, "[{}, {}]", lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- normalize ----

    #[test]
    fn normalize_without_bounds_returns_none() {
        assert_eq!(normalize(None, None), None);
    }

    #[test]
    fn normalize_lower_only() {
        let salary = normalize(Some(100), None).unwrap();
        assert_eq!(salary.text, "100 руб.");
        assert_eq!(salary.comparable, ComparableSalary::Single(100));
    }

    #[test]
    fn normalize_upper_only() {
        let salary = normalize(None, Some(200)).unwrap();
        assert_eq!(salary.text, "200 руб.");
        assert_eq!(salary.comparable, ComparableSalary::Single(200));
    }

    #[test]
    fn normalize_full_range() {
        let salary = normalize(Some(100), Some(200)).unwrap();
        assert_eq!(salary.text, "от 100 до 200 руб.");
        assert_eq!(salary.comparable, ComparableSalary::Range(100, 200));
    }

    #[test]
    fn normalize_inverted_range_orders_pair_but_keeps_text() {
        let salary = normalize(Some(300), Some(200)).unwrap();
        assert_eq!(salary.text, "от 300 до 200 руб.");
        assert_eq!(salary.comparable, ComparableSalary::Range(200, 300));
    }

    // ---- fits ----

    #[test]
    fn fits_scalar_is_inclusive() {
        let salary = ComparableSalary::Single(100);
        assert!(salary.fits(100));
        assert!(salary.fits(99));
        assert!(!salary.fits(101));
    }

    #[test]
    fn fits_range_uses_upper_bound() {
        let salary = ComparableSalary::Range(50, 80);
        assert!(salary.fits(80));
        assert!(salary.fits(10));
        assert!(!salary.fits(90));
    }

    // ---- compare ----

    #[test]
    fn compare_scalars_numerically() {
        let a = ComparableSalary::Single(100);
        let b = ComparableSalary::Single(200);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert_eq!(b.compare(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.compare(&a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn compare_ranges_by_upper_then_lower() {
        let narrow = ComparableSalary::Range(150, 200);
        let wide = ComparableSalary::Range(100, 200);
        let high = ComparableSalary::Range(10, 300);
        assert_eq!(wide.compare(&narrow).unwrap(), Ordering::Less);
        assert_eq!(narrow.compare(&high).unwrap(), Ordering::Less);
    }

    #[test]
    fn compare_mismatched_shapes_is_an_error() {
        let single = ComparableSalary::Single(150);
        let range = ComparableSalary::Range(100, 200);
        let err = single.compare(&range).unwrap_err();
        assert!(matches!(err, VacancyError::Comparison { .. }));
        assert!(range.compare(&single).is_err());
    }

    // ---- serde ----

    #[test]
    fn serializes_as_number_or_array() {
        assert_eq!(serde_json::to_string(&ComparableSalary::Single(100)).unwrap(), "100");
        assert_eq!(
            serde_json::to_string(&ComparableSalary::Range(100, 200)).unwrap(),
            "[100,200]"
        );
        let parsed: ComparableSalary = serde_json::from_str("[50, 80]").unwrap();
        assert_eq!(parsed, ComparableSalary::Range(50, 80));
    }

    proptest! {
        #[test]
        fn normalized_range_is_ordered(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let salary = normalize(Some(a), Some(b)).unwrap();
            match salary.comparable {
                ComparableSalary::Range(lower, upper) => prop_assert!(lower <= upper),
                ComparableSalary::Single(_) => prop_assert!(false, "expected a range"),
            }
        }

        #[test]
        fn one_sided_bound_fits_its_own_value(v in 0i64..10_000_000, lower_side in any::<bool>()) {
            let salary = if lower_side { normalize(Some(v), None) } else { normalize(None, Some(v)) }.unwrap();
            prop_assert_eq!(salary.comparable, ComparableSalary::Single(v));
            prop_assert!(salary.comparable.fits(v));
            prop_assert!(!salary.comparable.fits(v + 1));
        }

        #[test]
        fn same_shape_comparison_is_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
            let x = ComparableSalary::Single(a as i64);
            let y = ComparableSalary::Single(b as i64);
            prop_assert_eq!(x.compare(&y).unwrap(), y.compare(&x).unwrap().reverse());
        }
    }
}
