//! This file defines some functions that checks some pre-conditions
//! E.g., range of the stopping purity

use crate::Datum;
use crate::tree::GrowParams;


/// Check whether the stopping purity is valid or not.
#[inline(always)]
pub(crate) fn check_stop_purity(purity: f64) {
    assert!(
        0f64 < purity && purity <= 1f64,
        "stopping purity must be in (0, 1]. got {purity}."
    );
}


/// Check whether the sentinel split value is valid or not.
#[inline(always)]
pub(crate) fn check_sentinel_value(sentinel: f64) {
    assert!(
        sentinel.is_finite() && sentinel > 0f64,
        "sentinel split value must be positive and finite. got {sentinel}."
    );
}


/// Check the parameters handed to a tree learner.
#[inline(always)]
pub(crate) fn check_grow_params(params: &GrowParams) {
    check_stop_purity(params.stop_purity);
    check_sentinel_value(params.sentinel);
}


/// Warn if a numeric feature reaches the sentinel.
/// Such a value can never be separated by a split.
pub(crate) fn check_sentinel(sample: &[&Datum], sentinel: f64) {
    let reached = sample.iter()
        .flat_map(|datum| datum.features())
        .filter_map(|value| value.as_numeric())
        .find(|x| x.abs() >= sentinel);

    if let Some(x) = reached {
        log::warn!(
            "feature value {x} reaches the sentinel split value {sentinel}"
        );
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_purity_of_one_is_valid() {
        check_stop_purity(1f64);
    }

    #[test]
    #[should_panic]
    fn stop_purity_of_zero_is_invalid() {
        check_stop_purity(0f64);
    }

    #[test]
    #[should_panic]
    fn stop_purity_above_one_is_invalid() {
        check_stop_purity(1.5f64);
    }

    #[test]
    #[should_panic]
    fn negative_sentinel_is_invalid() {
        check_sentinel_value(-1f64);
    }
}
