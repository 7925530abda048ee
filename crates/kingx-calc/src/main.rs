//! KingX calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! kingx-calc                          # defaults, no logging
//! kingx-calc --config calc.yaml       # precision and logging from a file
//! kingx-calc --log-file calc.log --log-level kingx_calc=debug
//! ```

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kingx_calc::config::CalculatorConfig;
use kingx_calc::logging;
use kingx_calc::tui::{render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

/// Keypad calculator with left-to-right operator chaining
#[derive(Debug, Parser)]
#[command(name = "kingx-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (.yaml, .yml or .json)
    #[arg(short, long, env = "KINGX_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `kingx_calc=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Log file; overrides the configured one
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(&config.logging)?;
    tracing::info!(?config, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(&config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Loads the config file, then applies command-line overrides
fn build_config(cli: &Cli) -> Result<CalculatorConfig, Box<dyn Error>> {
    let mut config = CalculatorConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.as_str());
    }
    if let Some(file) = &cli.log_file {
        config = config.with_log_file(file);
    }
    config.validate()?;
    Ok(config)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn Error>> {
    let input_handler = InputHandler::new();
    let mut keypad_area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| keypad_area = render(&app, f).keypad)?;

        let action = match event::read()? {
            Event::Key(key) => input_handler.handle_key(key),
            Event::Mouse(mouse) => input_handler.handle_mouse(mouse),
            _ => KeyAction::None,
        };
        app.handle_action(action, keypad_area);
    }

    Ok(())
}
