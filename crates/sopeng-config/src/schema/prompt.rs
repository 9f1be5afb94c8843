//! System prompt configuration.

use serde::{Deserialize, Serialize};

/// Preamble sent ahead of the history on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub system: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM_PROMPT.into(),
        }
    }
}

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
Kamu adalah Sopeng, asisten AI yang cerdas, ramah, dan membantu.
Kamu memiliki pengetahuan luas dan selalu memberikan jawaban yang:
- Akurat dan informatif
- Mudah dipahami
- Terstruktur dengan baik
- Sopan dan profesional

Kamu berbicara dalam bahasa Indonesia dengan gaya yang natural dan friendly.
Ketika menjawab pertanyaan teknis, berikan penjelasan yang detail namun tetap mudah dimengerti.
Jika tidak yakin tentang sesuatu, kamu akan mengakui keterbatasanmu dengan jujur.";
