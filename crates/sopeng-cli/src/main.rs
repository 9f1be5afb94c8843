mod cli;
mod repl;
mod setup;

use std::process::ExitCode;

use cli::Command;
use sopeng_config::LogLevel;
use tracing::{debug, error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| "sopeng=info".parse().unwrap()),
    )
}

/// Install the subscriber. The returned handle swaps the filter once the
/// config file has been read.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// `--log-level debug` becomes `sopeng=debug`; full directives pass through.
fn log_directive(arg: Option<&str>, configured: LogLevel) -> String {
    match arg {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("sopeng={level}"),
        None => configured.directive().to_string(),
    }
}

/// Directive to switch to after loading config, if it differs from the
/// one logging started with. `--log-level` always wins over the file.
fn configured_directive(arg: Option<&str>, configured: LogLevel) -> Option<String> {
    if arg.is_some() || configured == LogLevel::default() {
        return None;
    }
    Some(log_directive(None, configured))
}

fn init_config(path: Option<&std::path::Path>, force: bool) -> ExitCode {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match sopeng_config::default_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };
    if path.exists() && !force {
        eprintln!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
        return ExitCode::FAILURE;
    }
    match sopeng_config::create_default_config(&path) {
        Ok(()) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let command = args.command.clone().unwrap_or(Command::Chat);

    if let Command::InitConfig { force } = command {
        return init_config(args.config.as_deref(), force);
    }

    if command == Command::Models {
        println!("{}", repl::format_models(args.model.as_deref().unwrap_or_default()));
        return ExitCode::SUCCESS;
    }

    let log_level = args.log_level.as_deref();
    let filter = init_logging(&log_directive(log_level, LogLevel::default()));

    let config = match setup::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(directive) = configured_directive(log_level, config.logging.level) {
        match filter.reload(build_filter(&directive)) {
            Ok(()) => debug!("log filter set to {directive}"),
            Err(e) => warn!("could not apply configured log level: {e}"),
        }
    }

    let session = match setup::build_session(&config, args.model.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to initialize HTTP transport: {e}");
            return ExitCode::FAILURE;
        }
    };
    let display_name = setup::display_name(&config, &session.config().model);
    info!(
        model = %session.config().model,
        endpoint = %session.config().endpoint,
        configured = session.is_configured(),
        "session ready"
    );

    match command {
        Command::Ask { text } => match session.send_message(text.join(" ")).await {
            Ok(reply) => {
                println!("{}", reply.message);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Command::Check => {
            if session.test_connection().await {
                println!("✅ {display_name} is reachable");
                ExitCode::SUCCESS
            } else {
                eprintln!("❌ connection test failed");
                ExitCode::FAILURE
            }
        }
        _ => match repl::run(&session, &display_name, &config.notices).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("terminal I/O failed: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
