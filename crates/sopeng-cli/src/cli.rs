use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sopeng: a terminal chat client for OpenRouter-hosted models.
#[derive(Parser, Debug)]
#[command(name = "sopeng", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model id override (see `sopeng models`).
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Send one message and print the reply.
    Ask {
        /// Message text; words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Send a test message to verify the key and endpoint.
    Check,
    /// List the model catalog.
    Models,
    /// Write a commented default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_chat() {
        let args = Args::try_parse_from(["sopeng"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn ask_joins_words_and_takes_global_flags() {
        let args =
            Args::try_parse_from(["sopeng", "ask", "apa", "kabar?", "--model", "openai/gpt-3.5-turbo"])
                .unwrap();
        assert_eq!(args.model.as_deref(), Some("openai/gpt-3.5-turbo"));
        assert_eq!(
            args.command,
            Some(Command::Ask {
                text: vec!["apa".into(), "kabar?".into()]
            })
        );
    }

    #[test]
    fn ask_requires_text() {
        assert!(Args::try_parse_from(["sopeng", "ask"]).is_err());
    }

    #[test]
    fn init_config_force_flag() {
        let args = Args::try_parse_from(["sopeng", "init-config", "--force"]).unwrap();
        assert_eq!(args.command, Some(Command::InitConfig { force: true }));
    }
}
