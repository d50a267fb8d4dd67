use std::io::{stdout, Stdout};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use tabvi::cli::Args;
use tabvi::tabs::{Outcome, TabController};
use tabvi::{logging, ui, Config};

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = args.validate() {
        eprintln!("{}", err);
        return ExitCode::from(1);
    }
    if let Err(err) = logging::init(args.log_file.as_deref(), args.log_level.into()) {
        eprintln!("{}", err);
        return ExitCode::from(1);
    }

    let config = args.config();
    let mut tabs = match TabController::open(&args.files, &config) {
        Ok(tabs) => tabs,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(1);
        }
    };

    match run(&mut tabs, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(tabs: &mut TabController, config: &Config) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout(), EnterAlternateScreen).context("enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("terminal init")
        .and_then(|mut terminal| event_loop(&mut terminal, tabs, config));

    let cleanup = execute!(stdout(), LeaveAlternateScreen)
        .context("leave alternate screen")
        .and_then(|_| disable_raw_mode().context("disable raw mode"));

    result.and(cleanup)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    tabs: &mut TabController,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, tabs, config)).context("draw")?;

        if let Event::Key(key) = event::read().context("read event")? {
            if key.kind == KeyEventKind::Press && tabs.handle_key(&key) == Outcome::Quit {
                log::info!("quit");
                return Ok(());
            }
        }
    }
}
