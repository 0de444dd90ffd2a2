use spending_core::errors::RelevanceError;

/// A comparison amount must be finite and strictly positive.
pub fn validate_target(target_amount: f64) -> Result<(), RelevanceError> {
    if !target_amount.is_finite() {
        return Err(RelevanceError::invalid_input(format!(
            "target amount must be finite, got {target_amount}"
        )));
    }
    if target_amount <= 0.0 {
        return Err(RelevanceError::invalid_input(format!(
            "target amount must be positive, got {target_amount}"
        )));
    }
    Ok(())
}

/// Validate both sides of a comparison.
///
/// A non-finite story value comes from a bad inflation or rate lookup and is a
/// computation error; a zero or negative one has no relevance at all.
pub fn validate_inputs(story_value_usd: f64, target_amount: f64) -> Result<(), RelevanceError> {
    validate_target(target_amount)?;
    if !story_value_usd.is_finite() {
        return Err(RelevanceError::computation(format!(
            "story value is not finite: {story_value_usd}"
        )));
    }
    if story_value_usd <= 0.0 {
        return Err(RelevanceError::invalid_input(format!(
            "story value must be positive, got {story_value_usd}"
        )));
    }
    Ok(())
}

/// A ratio must be usable in log space.
pub fn check_ratio(ratio: f64) -> Result<f64, RelevanceError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(RelevanceError::computation(format!(
            "ratio out of representable range: {ratio}"
        )))
    }
}
