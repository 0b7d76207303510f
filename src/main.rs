// stepcalc: terminal calculator with a left-to-right step evaluator

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepcalc::session::Session;
use stepcalc::ui::{App, Keymap};

/// A calculator that folds button presses strictly left to right
#[derive(Parser, Debug)]
#[command(name = "stepcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Replay keys without the TUI and print the final display, e.g. "7+4=*2="
    #[arg(short, long)]
    keys: Option<String>,

    /// Write log output to this file. The TUI owns the terminal, so without
    /// it nothing is logged in interactive mode.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if let Some(keys) = &cli.keys {
        let mut session = Session::new();
        Keymap::new().replay(&mut session, keys)?;
        println!("{}", session.display_text());
        return Ok(());
    }

    info!("starting interactive session");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::new());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("session ended with display {}", app.session.display_text());

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.verbose.log_level_filter());

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // stderr would draw over the alternate screen
        None if cli.keys.is_none() => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }

    builder.init();
    Ok(())
}
