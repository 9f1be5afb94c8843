//! Line-oriented interactive chat loop.

use std::path::PathBuf;

use sopeng_ai::{available_models, ChatSession};
use sopeng_common::NoticeMessages;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Slash commands understood by the REPL. Anything else is sent as a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Clear,
    Export(Option<PathBuf>),
    Stats,
    Models,
    ResetLimit,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        Some(match name {
            "clear" => Self::Clear,
            "export" => Self::Export(arg.map(PathBuf::from)),
            "stats" => Self::Stats,
            "models" => Self::Models,
            "reset" => Self::ResetLimit,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        })
    }
}

const HELP: &str = "\
/clear           forget the conversation
/export [path]   print history as JSON, or write it to a file
/stats           message and request counters
/models          list selectable models
/reset           reset the rate-limit counter
/quit            leave";

/// Run the chat loop until EOF or `/quit`.
pub async fn run(
    session: &ChatSession,
    display_name: &str,
    notices: &NoticeMessages,
) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !session.is_configured() {
        stdout
            .write_all(format!("{}\n", session.config().messages.not_configured).as_bytes())
            .await?;
    }
    stdout
        .write_all(format!("{display_name} ready. Type /help for commands.\n").as_bytes())
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match ReplCommand::parse(line) {
            Some(ReplCommand::Quit) => break,
            Some(command) => handle_command(session, notices, command).await,
            None => match session.send_message(line).await {
                Ok(reply) => format!("{display_name}: {}", reply.message),
                Err(e) => e.to_string(),
            },
        };
        stdout.write_all(format!("{output}\n").as_bytes()).await?;
    }

    Ok(())
}

async fn handle_command(
    session: &ChatSession,
    notices: &NoticeMessages,
    command: ReplCommand,
) -> String {
    match command {
        ReplCommand::Clear => {
            session.clear_history();
            notices.history_cleared.clone()
        }
        ReplCommand::Export(None) => session.export_history(),
        ReplCommand::Export(Some(path)) => {
            match tokio::fs::write(&path, session.export_history()).await {
                Ok(()) => {
                    info!("history exported to {}", path.display());
                    notices.render_exported(&path.display().to_string())
                }
                Err(e) => {
                    warn!("history export to {} failed: {e}", path.display());
                    format!("export failed: {e}")
                }
            }
        }
        ReplCommand::Stats => format_stats(session),
        ReplCommand::Models => format_models(&session.config().model),
        ReplCommand::ResetLimit => {
            session.reset_rate_limit();
            notices.rate_limit_reset.clone()
        }
        ReplCommand::Help => HELP.to_string(),
        ReplCommand::Unknown(name) => format!("unknown command /{name}; try /help"),
        ReplCommand::Quit => String::new(),
    }
}

fn format_stats(session: &ChatSession) -> String {
    let stats = session.stats();
    let last = stats
        .last_request_at
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut out = format!(
        "messages: {}/{}\nrequests this minute: {}/{}\nlast request: {last}\ntokens used: {} over {} completions",
        stats.message_count,
        session.config().history_len,
        stats.request_count,
        session.config().rate_limit,
        stats.usage.total(),
        stats.completions,
    );
    for (model, usage) in &stats.usage_by_model {
        out.push_str(&format!(
            "\n  {model}: {} prompt + {} completion",
            usage.prompt_tokens, usage.completion_tokens
        ));
    }
    out
}

pub fn format_models(active: &str) -> String {
    available_models()
        .iter()
        .map(|m| {
            let marker = if m.id == active { "*" } else { " " };
            let tier = if m.free { "free" } else { "paid" };
            format!("{marker} {:<42} {} ({tier})", m.id, m.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("hello there"), None);
        assert_eq!(ReplCommand::parse("what is 1/2?"), None);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(ReplCommand::parse("/clear"), Some(ReplCommand::Clear));
        assert_eq!(ReplCommand::parse("/stats"), Some(ReplCommand::Stats));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/reset"), Some(ReplCommand::ResetLimit));
        assert_eq!(
            ReplCommand::parse("/bogus arg"),
            Some(ReplCommand::Unknown("bogus".into()))
        );
    }

    #[test]
    fn export_takes_optional_path() {
        assert_eq!(ReplCommand::parse("/export"), Some(ReplCommand::Export(None)));
        assert_eq!(ReplCommand::parse("/export   "), Some(ReplCommand::Export(None)));
        assert_eq!(
            ReplCommand::parse("/export chat.json"),
            Some(ReplCommand::Export(Some(PathBuf::from("chat.json"))))
        );
    }

    #[test]
    fn models_listing_marks_active() {
        let listing = format_models("openai/gpt-3.5-turbo");
        let active: Vec<&str> = listing.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("GPT-3.5 Turbo"));
        assert!(active[0].contains("(paid)"));
    }

    fn offline_session() -> ChatSession {
        let transport = std::sync::Arc::new(sopeng_ai::ReqwestTransport::new().unwrap());
        ChatSession::new(sopeng_ai::SessionConfig::new(""), transport)
    }

    #[tokio::test]
    async fn confirmations_come_from_notices() {
        let session = offline_session();
        session.add_to_history(sopeng_ai::Role::User, "hello");
        let notices = NoticeMessages {
            history_cleared: "cleared!".into(),
            rate_limit_reset: "limit reset!".into(),
            ..NoticeMessages::default()
        };

        assert_eq!(handle_command(&session, &notices, ReplCommand::Clear).await, "cleared!");
        assert!(session.history().is_empty());
        assert_eq!(
            handle_command(&session, &notices, ReplCommand::ResetLimit).await,
            "limit reset!"
        );
    }

    #[tokio::test]
    async fn export_to_file_uses_notice_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        let session = offline_session();
        session.add_to_history(sopeng_ai::Role::User, "hello");
        let notices = NoticeMessages {
            history_exported: "saved {path}".into(),
            ..NoticeMessages::default()
        };

        let out = handle_command(&session, &notices, ReplCommand::Export(Some(path.clone()))).await;
        assert_eq!(out, format!("saved {}", path.display()));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(sopeng_ai::History::parse_export(&written).unwrap().len(), 1);
    }
}
