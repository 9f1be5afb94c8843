//! Token usage tracking across a session, broken down by model.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per model.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    /// Total usage across all models.
    total: TokenUsage,
    /// Usage broken down by the model name the server echoed.
    by_model: HashMap<String, TokenUsage>,
    /// Number of completions that reported usage.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one completion.
    pub fn record(&mut self, model: &str, usage: &TokenUsage) {
        accumulate(&mut self.total, usage);
        accumulate(self.by_model.entry(model.to_string()).or_default(), usage);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Usage per model, sorted by model name.
    pub fn per_model(&self) -> Vec<(String, TokenUsage)> {
        let mut models: Vec<_> = self
            .by_model
            .iter()
            .map(|(name, usage)| (name.clone(), *usage))
            .collect();
        models.sort_by(|a, b| a.0.cmp(&b.0));
        models
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

fn accumulate(into: &mut TokenUsage, usage: &TokenUsage) {
    into.prompt_tokens = into.prompt_tokens.saturating_add(usage.prompt_tokens);
    into.completion_tokens = into.completion_tokens.saturating_add(usage.completion_tokens);
    into.total_tokens = into.total_tokens.saturating_add(usage.total());
}
