//! Roster - a terminal-based viewer for a sample person roster.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use roster::app::App;
use roster::data::Roster;
use roster::error::RosterError;
use roster::table::TableView;
use roster::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "A terminal-based viewer for a sample person roster", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Roster");
    }

    // Build the record store and write the full table to stdout before
    // touching the terminal state.
    let roster = Roster::sample();
    let table = TableView::new(roster.people());
    let mut stdout = io::stdout();
    table.write_to(&mut stdout)?;

    if args.log.is_some() {
        tracing::info!(records = roster.len(), "Printed roster table");
    }

    // The scatter view needs a real terminal to draw on.
    if !stdout.is_tty() {
        return Err(RosterError::terminal("no display surface (stdout is not a terminal)").into());
    }

    // Setup terminal
    enable_raw_mode().map_err(|e| RosterError::terminal(e.to_string()))?;
    execute!(stdout, EnterAlternateScreen).map_err(|e| RosterError::terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| RosterError::terminal(e.to_string()))?;

    // Run app
    let app = App::new(roster);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Roster exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Cycle view mode with Tab
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.cycle_view_mode();
                    },

                    // Table scrolling
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.scroll_up(1);
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.scroll_down(1);
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                        app.scroll_up(10);
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                        app.scroll_down(10);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        let rows = app.table.row_count();
                        app.scroll_down(rows);
                    },

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_table();
                    },

                    // Help
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status =
                            "Help: q=quit, Tab=view, j/k=scroll, T=theme, c=copy table".to_string();
                    },

                    _ => {},
                }
            }
        }
    }
}
