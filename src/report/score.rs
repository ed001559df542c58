//! Report scoring

use crate::checks::CheckStatus;

/// Contribution of a status to the score numerator
///
/// Every settled status counts once in the denominator; `pending` counts
/// in neither.
pub fn status_weight(status: CheckStatus) -> Option<f64> {
    match status {
        CheckStatus::Passed => Some(1.0),
        CheckStatus::Warning => Some(0.5),
        CheckStatus::Failed | CheckStatus::Error => Some(0.0),
        CheckStatus::Pending => None,
    }
}

/// Computes the 0-100 score over a set of check statuses
///
/// # Example
///
/// ```
/// use seo_audit::checks::CheckStatus;
/// use seo_audit::report::compute_score;
///
/// let score = compute_score([CheckStatus::Passed, CheckStatus::Warning]);
/// assert_eq!(score, 75);
/// ```
pub fn compute_score(statuses: impl IntoIterator<Item = CheckStatus>) -> u8 {
    let (earned, counted) = statuses
        .into_iter()
        .filter_map(status_weight)
        .fold((0.0_f64, 0_u32), |(earned, counted), weight| {
            (earned + weight, counted + 1)
        });

    if counted == 0 {
        return 0;
    }

    (100.0 * earned / f64::from(counted)).round() as u8
}
