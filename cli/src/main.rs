use anyhow::Context;
use clap::Parser;
use pokegrid_core::{GameError, GridConfig, GridStatus};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod clock;
mod command;
mod logger;
mod render;
mod session;
mod storage;

use command::Command;
use render::{GlyphRenderer, SpriteRenderer, draw_board};
use session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Pokemon: Got 2 Find Them All!", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Cells per side of the square grid
    #[arg(short, long, default_value_t = GridConfig::default().grid_size)]
    grid_size: u8,

    /// How many pokemon to hide
    #[arg(short, long, default_value_t = GridConfig::default().num_pokemon)]
    pokemon: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from a saved game
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Show sprite names instead of plain glyphs
    #[arg(long)]
    sprites: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose.log_level_filter()).context("Error initializing logger")?;

    let config = grid_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = Session::new(config, seed)?;
    if let Some(path) = &args.load {
        session
            .load(path)
            .with_context(|| format!("Cannot load {}", path.display()))?;
    }

    println!("Pokemon: Got 2 Find Them All!");
    println!("{}", command::HELP);
    print_game(&session, args.sprites);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(command::ParseError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        match command {
            Command::Reveal(pos) => match session.reveal(pos) {
                Ok(outcome) if outcome.has_update() => print_game(&session, args.sprites),
                Ok(_) => println!("Nothing to reveal there"),
                Err(err) => println!("{err}"),
            },
            Command::Flag(pos) => match session.flag(pos) {
                Ok(outcome) if outcome.has_update() => print_game(&session, args.sprites),
                Ok(_) => println!("That cell is already revealed"),
                Err(GameError::NoBallsLeft) => println!("{}", GameError::NoBallsLeft),
                Err(err) => println!("{err}"),
            },
            Command::Save(path) => match session.save(path.as_deref()) {
                Ok(path) => println!("Saved to {}", path.display()),
                Err(err) => println!("{err}"),
            },
            Command::Load(path) => match session.load(&path) {
                Ok(()) => print_game(&session, args.sprites),
                Err(err) => {
                    log::warn!("Load of {} failed: {}", path.display(), err);
                    println!("Cannot load file: {err}");
                }
            },
            Command::Restart => {
                session.restart();
                print_game(&session, args.sprites);
            }
            Command::NewGame => {
                session.new_game(rand::random())?;
                print_game(&session, args.sprites);
            }
            Command::Help => println!("{}", command::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn grid_config(args: &Args) -> anyhow::Result<GridConfig> {
    GridConfig::new(args.grid_size, args.pokemon).context("Invalid grid size or pokemon count")
}

fn print_game(session: &Session, sprites: bool) {
    let grid = session.grid();
    if sprites {
        print!("{}", draw_board(grid, &SpriteRenderer));
    } else {
        print!("{}", draw_board(grid, &GlyphRenderer));
    }
    println!(
        "{} attempted catches | {} pokeballs left | {}",
        grid.attempted_catches(),
        grid.remaining_budget(),
        clock::format_elapsed(session.elapsed_secs())
    );

    match session.status() {
        GridStatus::InProgress => {}
        GridStatus::Won => println!("You win! Type 'new' to play again or 'quit' to leave."),
        GridStatus::Lost => println!("You lose! Type 'new' to play again or 'quit' to leave."),
    }
}
