use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use spotify_deck::auth::{Authorizer, SpotifyAuth};
use spotify_deck::config::Credentials;
use spotify_deck::controller::{command_for_key, AppController};
use spotify_deck::logging;
use spotify_deck::model::MusicApi;
use spotify_deck::view::{describe, AppView};

const INPUT_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Spotify Deck Starting ===");

    let credentials = Credentials::load();
    tracing::debug!(credentials = ?credentials, "Credentials loaded");

    let controller = AppController::new(SpotifyAuth::new(credentials));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Spotify Deck shutting down");
    Ok(())
}

async fn run_app<A>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController<A>,
) -> io::Result<()>
where
    A: Authorizer,
    A::Client: MusicApi,
{
    loop {
        let view = describe(controller.state());
        terminal.draw(|f| AppView::render(f, &view))?;

        if controller.state().should_quit {
            break;
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Each command runs to completion before the next key is read.
                if let Some(command) = command_for_key(controller.state_mut(), key) {
                    controller.handle_command(command).await;
                }
            }
        }
    }

    Ok(())
}
