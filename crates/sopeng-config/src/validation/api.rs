//! Validation for the `[api]` section.

use crate::schema::ChatConfig;

/// Validate endpoint and identification fields.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ChatConfig) {
    if !has_http_scheme(&config.api.url) {
        errors.push(format!(
            "api.url = {:?} must start with http:// or https://",
            config.api.url
        ));
    }
    if !config.api.app_url.is_empty() && !has_http_scheme(&config.api.app_url) {
        errors.push(format!(
            "api.app_url = {:?} must start with http:// or https://",
            config.api.app_url
        ));
    }
    if config.api.app_name.trim().is_empty() {
        errors.push("api.app_name must not be empty".into());
    }
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
