//! `ArticleHub` - terminal client for a news aggregation backend
//!
//! Entry point for the application.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use articlehub::app::App;
use articlehub::cli::Args;
use articlehub::core::HttpGateway;
use articlehub::fs::{AppPaths, Config, load_config};
use articlehub::logging;
use articlehub::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let paths = AppPaths::from_cwd()?;
    let persisted = load_config(&paths.config_file())?;
    let config = Config::resolve(
        args.api_url.as_deref(),
        args.log_file.as_deref(),
        &persisted,
        &paths,
    );

    logging::init(&config.log_file)?;
    tracing::info!(api_url = %config.api_url, "starting articlehub");

    let gateway = HttpGateway::new(&config.api_url)
        .with_context(|| format!("Invalid API URL: {}", config.api_url))?;
    let app = App::new(Arc::new(gateway));

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, app);

    // Restore the terminal
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal I/O failed");
    }
    tracing::info!("exiting");
    result.map_err(Into::into)
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> std::io::Result<()> {
    // Must be created after `ratatui::init`, which resets terminal flags.
    let _event_guard = TerminalEventGuard::new();

    app.initialize();

    loop {
        // Layout is computed inside the draw closure so it matches the
        // exact area being rendered.
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => {
                    tracing::debug!(len = text.len(), "paste");
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        // Apply completed gateway calls
        app.process_events();

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
