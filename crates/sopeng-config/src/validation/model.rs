//! Validation for the `[model]` and `[limits]` sections.

use crate::schema::ChatConfig;
use sopeng_common::defaults::MAX_HISTORY_LENGTH;

use super::helpers::{validate_min, validate_range, validate_range_f64};

/// Validate generation parameter ranges.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &ChatConfig) {
    let model = &config.model;
    if model.id.trim().is_empty() {
        errors.push("model.id must not be empty".into());
    }
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 200_000);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range_f64(errors, "model.top_p", model.top_p, 0.0, 1.0);
    validate_range_f64(
        errors,
        "model.frequency_penalty",
        model.frequency_penalty,
        -2.0,
        2.0,
    );
    validate_range_f64(
        errors,
        "model.presence_penalty",
        model.presence_penalty,
        -2.0,
        2.0,
    );
}

/// Validate rate limit and history retention.
pub(crate) fn validate_limits(errors: &mut Vec<String>, config: &ChatConfig) {
    validate_min(
        errors,
        "limits.max_messages_per_minute",
        u64::from(config.limits.max_messages_per_minute),
        1,
    );
    validate_range(
        errors,
        "limits.max_history_length",
        config.limits.max_history_length,
        1,
        MAX_HISTORY_LENGTH,
    );
}
