//! Terminal front end for promo tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod clipboard;
mod host;
mod input;
mod relay;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use host::CliHost;
use promo_tictactoe::{Controller, HostSession, Notice, ThreadRandom};
use ratatui::{Terminal, backend::CrosstermBackend};
use relay::RelayNotifier;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Log to a file so output does not corrupt the terminal.
    let log_file = std::fs::File::create("promo_tictactoe_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    info!(relay_url = %cli.relay_url, "Starting promo tic-tac-toe TUI");

    let host = CliHost::new(cli.identity.clone());
    let session = HostSession::bootstrap(Some(&host));

    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let notifier = RelayNotifier::new(cli.relay_url.clone(), notice_tx);
    let controller = Controller::new(session.identity(), notifier, ThreadRandom::new());
    let app = App::new(controller, cli.opponent_delay());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &mut notice_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Promo tic-tac-toe TUI stopped");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<RelayNotifier, ThreadRandom>,
    notices: &mut mpsc::UnboundedReceiver<Notice>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(notice) = notices.try_recv() {
            app.show_notice(notice, Instant::now());
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}
