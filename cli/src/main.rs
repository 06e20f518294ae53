use anyhow::Context;
use clap::Parser;
use prospector_core::GameSession;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use input::Command;
use terminal::{TerminalDisplay, TerminalRenderer};

mod input;
mod settings;
mod terminal;

/// How many feed lines stay on screen
const FEED_LINES: usize = 12;

type Session = GameSession<TerminalRenderer, TerminalDisplay>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: settings::Overrides,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = settings::load(args.config.as_deref(), &args.overrides)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = GameSession::new(
        config,
        seed,
        TerminalRenderer::default(),
        TerminalDisplay::new(FEED_LINES),
    )
    .context("could not start the first game")?;

    let mut stdout = io::stdout().lock();
    draw(&session, &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        match Command::parse(&line) {
            Some(Command::Act(x, y)) => {
                let outcome = session.primary_action(x, y);
                log::trace!("({}, {}) -> {:?}", x, y, outcome);
                if !outcome.has_update() {
                    // board is unchanged, only the feed may have grown
                    draw_status(&session, &mut stdout)?;
                    continue;
                }
            }
            Some(Command::Toggle) => session.toggle_mode(),
            Some(Command::NewGame) => {
                if let Err(err) = session.new_game() {
                    writeln!(stdout, "Cannot start a new game: {}", err)?;
                }
            }
            Some(Command::Help) => {
                input::write_help(&mut stdout)?;
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                writeln!(stdout, "Unknown command {:?}, try `help`", line.trim())?;
                continue;
            }
        }
        draw(&session, &mut stdout)?;
    }

    log::debug!("Quit with {:?}", session.stats());
    Ok(())
}

fn draw(session: &Session, out: &mut impl Write) -> io::Result<()> {
    session.renderer().render(out)?;
    writeln!(out)?;
    draw_status(session, out)
}

fn draw_status(session: &Session, out: &mut impl Write) -> io::Result<()> {
    session.display().render(out)?;
    write!(out, "[{} Mode] > ", session.mode())?;
    out.flush()
}
