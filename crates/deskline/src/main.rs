//! deskline - CRM desk companion client entry point.

mod commands;
mod config;
mod dialog;
mod dispatch;
mod error;

use crate::commands::*;
use crate::config::Config;
use crate::dialog::TerminalDialog;
use crate::dispatch::BridgeDispatcher;
use crate::error::AppResult;
use anyhow::Context;
use session_registry::AppContext;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.shell.log_level);

    info!("Starting deskline...");

    // Session context: the dialog service is a hard requirement, so a
    // missing handle fails here rather than on first use.
    let ctx = AppContext::new().with_dialog(Arc::new(TerminalDialog));
    let registry = ctx.registry()?;

    if config.telephony.enabled {
        registry.set_call_dispatcher(Arc::new(BridgeDispatcher::new(
            config.telephony.line.clone(),
            config.telephony.dial_timeout,
        )));
        registry.set_telephony_enabled(true);
        info!(line = %config.telephony.line, "Telephony integration active");
    } else {
        info!("Telephony integration not configured");
    }

    // Create command handlers
    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(CallHandler::new(registry.clone())),
        Box::new(TelephonyHandler::new(registry.clone())),
        Box::new(StatusHandler::new(registry.clone())),
        Box::new(HelpHandler::new()),
    ];

    info!("Registered {} command handlers", handlers.len());
    println!("deskline ready - type `help` for commands");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = LinesStream::new(stdin.lines());

    // Main command loop
    loop {
        tokio::select! {
            Some(line) = lines.next() => {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }

                let (_, args) = split_command(line);
                match handlers.iter().find(|h| h.matches(line)) {
                    Some(handler) => match handler.execute(args).await {
                        Ok(reply) => println!("{reply}"),
                        Err(e) => {
                            error!("Handler error: {}", e);
                            println!("Sorry, something went wrong: {e}");
                        }
                    },
                    None => println!("Unknown command - type `help`"),
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
