//! User-facing message templates.
//!
//! Shared between the config schema (`[messages]` and `[notices]`
//! sections) and the chat client, which renders one of these for every
//! failure it reports.

use serde::{Deserialize, Serialize};

/// Localized text shown to the user, one entry per failure kind.
///
/// `unmapped_http` may contain the placeholders `{status}` and `{detail}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub not_configured: String,
    pub busy: String,
    pub network: String,
    pub remote_service: String,
    pub rate_limited: String,
    pub empty_response: String,
    pub invalid_credentials: String,
    pub quota_exceeded: String,
    pub unmapped_http: String,
    /// Substituted for `{detail}` when the server sent no error message.
    pub unknown_detail: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            not_configured:
                "⚠️ API Key belum diatur. Silakan tambahkan API key di file konfigurasi".into(),
            busy: "⏳ Tunggu pesan sebelumnya selesai diproses".into(),
            network: "❌ Terjadi kesalahan jaringan. Silakan cek koneksi internet Anda.".into(),
            remote_service: "❌ Terjadi kesalahan pada server. Silakan coba lagi.".into(),
            rate_limited: "⏳ Terlalu banyak permintaan. Silakan tunggu sebentar.".into(),
            empty_response: "❌ Tidak ada respons dari AI. Silakan coba lagi.".into(),
            invalid_credentials:
                "🔑 API Key tidak valid. Silakan periksa kembali API key Anda.".into(),
            quota_exceeded:
                "📊 Kuota API Anda telah habis. Silakan upgrade atau coba lagi nanti.".into(),
            unmapped_http: "❌ Error {status}: {detail}".into(),
            unknown_detail: "Unknown error".into(),
        }
    }
}

impl ErrorMessages {
    /// Render the message for a status code with no dedicated template.
    pub fn render_unmapped(&self, status: u16, detail: Option<&str>) -> String {
        let detail = match detail {
            Some(d) if !d.is_empty() => d,
            _ => self.unknown_detail.as_str(),
        };
        self.unmapped_http
            .replace("{status}", &status.to_string())
            .replace("{detail}", detail)
    }
}

/// Confirmations shown after a successful front-end action.
///
/// `history_exported` may contain the placeholder `{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeMessages {
    pub history_cleared: String,
    pub history_exported: String,
    pub rate_limit_reset: String,
}

impl Default for NoticeMessages {
    fn default() -> Self {
        Self {
            history_cleared: "🗑️ Chat berhasil dihapus".into(),
            history_exported: "💾 Riwayat chat tersimpan di {path}".into(),
            rate_limit_reset: "🔄 Batas pesan telah direset".into(),
        }
    }
}

impl NoticeMessages {
    pub fn render_exported(&self, path: &str) -> String {
        self.history_exported.replace("{path}", path)
    }
}
