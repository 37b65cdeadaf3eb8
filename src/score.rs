use crate::{SummaryError, aggregate::SubjectRecord};

/// Ratio of the subject's `baseline` result to its `variant` result.
///
/// Values are costs, so a score above 1.0 means the variant beat the
/// baseline. Both keys must be present and the variant result non-zero.
pub fn score(record: &SubjectRecord, variant: &str, baseline: &str) -> Result<f64, SummaryError> {
    let base = record
        .get(baseline)
        .ok_or_else(|| SummaryError::missing_baseline(record.name.as_str()))?;
    let value = record
        .get(variant)
        .ok_or_else(|| SummaryError::missing_variant(record.name.as_str(), variant))?;
    if value == 0.0 {
        return Err(SummaryError::zero_division(record.name.as_str(), variant));
    }
    Ok(base / value)
}
