//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Sopeng Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# url = "https://openrouter.ai/api/v1/chat/completions"
# Get a key at https://openrouter.ai/keys, or set OPENROUTER_API_KEY.
key = "YOUR_OPENROUTER_API_KEY_HERE"
# app_url = "http://localhost"     # sent as HTTP-Referer
# app_name = "Sopeng.ai"           # sent as X-Title

[model]
# id = "minimax/minimax-m2:free"
# display_name = "Sopeng v2.1"
# max_tokens = 2000          # 1-200000
# temperature = 0.7          # 0.0-2.0
# top_p = 1.0                # 0.0-1.0
# frequency_penalty = 0.0    # -2.0-2.0
# presence_penalty = 0.0     # -2.0-2.0

[prompt]
# system = "..."

[limits]
# max_messages_per_minute = 10
# max_history_length = 10       # 1-10000

[messages]
# not_configured = "..."
# busy = "..."
# network = "..."
# remote_service = "..."
# rate_limited = "..."
# empty_response = "..."
# invalid_credentials = "..."
# quota_exceeded = "..."
# unmapped_http = "Error {status}: {detail}"
# unknown_detail = "Unknown error"

[notices]
# history_cleared = "..."
# history_exported = "History saved to {path}"
# rate_limit_reset = "..."

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
