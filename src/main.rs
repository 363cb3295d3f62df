use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use npmx::app::{config::Config, handler::Services, logging, r#loop::run_loop, state::AppState};
use npmx::domain::expansions::ExpansionSource;
use npmx::infrastructure::{clipboard::Osc52Clipboard, http::HttpExpansions};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Config errors surface here, before the terminal goes into raw mode.
    let config = Config::load()?;
    if let Some(path) = config.log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("logging disabled: {e}");
        }
    }

    let source = Arc::new(HttpExpansions::new(config.base_url()?));
    let mut app_state = AppState::new(&config);
    app_state.base_url = source.base_url();
    tracing::info!(base_url = %app_state.base_url, "starting");

    let services = Services {
        source,
        clipboard: Arc::new(Osc52Clipboard::new(io::stdout())),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services, config.debounce_delay()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        println!("{:?}", err);
    }

    Ok(())
}
