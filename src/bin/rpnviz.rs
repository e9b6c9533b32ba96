// rpnviz: step through the translation and evaluation of an expression

use std::borrow::Cow;
use std::ffi::OsString;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rpncalc::constants::{DEFAULT_SNAPSHOT_LIMIT, EXIT_FAILURE, EXIT_USAGE};
use rpncalc::format_result;
use rpncalc::session::Session;
use rpncalc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<OsString> = std::env::args_os().collect();

    if args.len() < 2 {
        let program_name = args
            .first()
            .map(|s| s.to_string_lossy())
            .unwrap_or(Cow::Borrowed("rpnviz"));
        eprintln!("Error: No expression provided");
        eprintln!();
        eprintln!("Usage: {} <expression>", program_name);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} \"6/3+2*5\"", program_name);
        std::process::exit(EXIT_USAGE);
    }

    let Some(input) = args[1].to_str() else {
        eprintln!("Error: expression is not valid UTF-8");
        std::process::exit(EXIT_FAILURE);
    };

    let mut session = Session::new(input, DEFAULT_SNAPSHOT_LIMIT);

    eprintln!("Translating and evaluating {:?}...", session.input());
    match session.run() {
        Ok(result) => {
            eprintln!("Result: {}", format_result(result));
            eprintln!("Total snapshots: {}", session.total_snapshots());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Entering TUI with partial history...");
        }
    }

    if session.history_truncated() {
        eprintln!(
            "Warning: history full, only the first {} steps were recorded",
            session.total_snapshots()
        );
    }

    if let Err(e) = session.rewind_to_start() {
        eprintln!("Warning: Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
