//! Catalog of models offered in the model picker.

/// One selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub free: bool,
}

const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "minimax/minimax-m2:free",
        name: "Sopeng v2.1",
        free: true,
    },
    ModelInfo {
        id: "meta-llama/llama-3.2-3b-instruct:free",
        name: "Llama 3.2 3B",
        free: true,
    },
    ModelInfo {
        id: "google/gemini-flash-1.5-8b:free",
        name: "Gemini Flash 1.5",
        free: true,
    },
    ModelInfo {
        id: "microsoft/phi-3-mini-128k-instruct:free",
        name: "Phi-3 Mini",
        free: true,
    },
    ModelInfo {
        id: "openai/gpt-3.5-turbo",
        name: "GPT-3.5 Turbo",
        free: false,
    },
    ModelInfo {
        id: "anthropic/claude-3-haiku",
        name: "Claude 3 Haiku",
        free: false,
    },
];

pub fn available_models() -> &'static [ModelInfo] {
    MODELS
}

pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let models = available_models();
        for (i, a) in models.iter().enumerate() {
            assert!(models[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }

    #[test]
    fn default_model_is_listed_and_free() {
        let model = find_model("minimax/minimax-m2:free").unwrap();
        assert_eq!(model.name, "Sopeng v2.1");
        assert!(model.free);
        assert!(find_model("nope/unknown").is_none());
    }
}
