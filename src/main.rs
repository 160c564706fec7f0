// ABOUTME: Main entry point for the tradein storefront with TUI and CLI support
//
// Binary: tradein
// Usage: tradein [COMMAND]
// - No command: launches TUI
// - serve: run the mock trade-in API
// - phones: list catalog listings
// - quote: request a price estimate

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use tradein::api::TradeInApiClient;
use tradein::app::{App, EventHandler};
use tradein::cli::{self, Commands};
use tradein::components::LayoutComponent;
use tradein::config::AppConfig;

/// Where tracing output goes
#[derive(Clone, Copy, PartialEq, Eq)]
enum LogTarget {
    /// JSON lines under ~/.tradein/logs; the terminal belongs to the TUI
    File,
    Stderr,
}

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let target = match args.command {
        Some(Commands::Tui) | None => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    setup_logging(target);
    setup_panic_handler();

    let mut config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    let result = match args.command {
        // CLI commands
        Some(Commands::Serve(serve_args)) => cli::serve::execute(serve_args, config.server).await,
        Some(Commands::Phones) => {
            let client = TradeInApiClient::new(&config.api)?;
            cli::phones::execute(&client, args.format).await
        }
        Some(Commands::Quote(quote_args)) => {
            let client = TradeInApiClient::new(&config.api)?;
            cli::quote::execute(&client, quote_args, args.format).await
        }

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let mut app = App::new(config)?;
            app.init().await;
            let mut layout = LayoutComponent::new();

            // Flush any pending terminal events to prevent stray keypresses
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            run_tui(&mut app, &mut layout).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() && target == LogTarget::File {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal).await;

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        // Fallback to basic cleanup
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    const STARTUP_GUARD_MS: u64 = 100;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    // Startup guard: ignore key events buffered before the first frame
    let startup_time = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &mut app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!(
                        "Ignoring key event {:?} during startup guard period",
                        key_event.code
                    );
                    continue;
                }

                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state)
                {
                    EventHandler::process_event(app_event, &mut app.state);
                    // Dispatch any request the event queued without waiting for the tick
                    if let Err(e) = app.tick().await {
                        tracing::error!("Error during immediate tick: {}", e);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if let Err(e) = app.tick().await {
                tracing::error!("Error during app tick: {}", e);
            }
            last_tick = Instant::now();
        }

        if app.needs_ui_refresh() {
            terminal.draw(|frame| {
                layout.render(frame, &mut app.state);
            })?;
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Directives used when `RUST_LOG` is unset. Request traces from the server's
/// `TraceLayer` are emitted by `tower_http` at debug level.
const fn default_filter(target: LogTarget) -> &'static str {
    match target {
        LogTarget::File => "tradein=info",
        LogTarget::Stderr => "tradein=info,tower_http=debug",
    }
}

fn setup_logging(target: LogTarget) {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(target).into());

    if target == LogTarget::Stderr {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
        return;
    }

    // Create log directory if it doesn't exist
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".tradein").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".tradein/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "tradein-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json() // Output in JSON Lines format
                        .with_target(true)
                        .with_writer(file)
                        .with_ansi(false),
                )
                .with(filter)
                .init();
        }
        Err(e) => {
            // Never write to the terminal the TUI is about to take over
            eprintln!("Logging disabled: cannot open {}: {}", log_file.display(), e);
        }
    }
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_logging_shows_request_traces() {
        assert!(default_filter(LogTarget::Stderr).contains("tower_http=debug"));
        assert_eq!(default_filter(LogTarget::File), "tradein=info");
    }
}
