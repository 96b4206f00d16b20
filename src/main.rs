// sortviz: terminal sorting algorithm visualizer

mod algorithms;
mod scheduler;
mod store;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algorithms::REGISTRY;
use scheduler::Scheduler;
use store::ArrayStore;
use ui::App;

/// Print the registry (index → display name) for usage errors
fn show_options() {
    eprintln!("Please select an algorithm to run");
    eprintln!("Index\t\tAlgorithm Name");
    eprintln!("   -1\t\t[Run the last algorithm]");
    for (i, entry) in REGISTRY.iter().enumerate() {
        eprintln!("{:5}\t\t{}", i, entry.name);
    }
}

/// Parse the single optional argument into a registry index.
///
/// `-1` selects the last entry; anything missing, non-numeric, or out of
/// range is a usage error.
fn parse_algorithm_index(args: &[String]) -> Option<usize> {
    let raw = args.get(1)?;
    let index: i64 = raw.parse().ok()?;
    if index == -1 {
        return Some(REGISTRY.len() - 1);
    }
    if index < 0 || REGISTRY.len() as i64 <= index {
        eprintln!("Valid range is <0; {})", REGISTRY.len());
        return None;
    }
    Some(index as usize)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let Some(index) = parse_algorithm_index(&args) else {
        show_options();
        std::process::exit(1);
    };

    eprintln!("Algorithm: \"{}\"", REGISTRY[index].name);

    // Build and shuffle the shared store before any algorithm runs
    let mut store = ArrayStore::from_canvas();
    store.shuffle(&mut rand::thread_rng());

    let mut scheduler = Scheduler::new(store);
    scheduler.start(index);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the driver loop; App stops the scheduler on exit
    let mut app = App::new(scheduler, REGISTRY[index].name);
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
