//! Interactive chess front-end.
//!
//! Reads commands from stdin, drives the rule engine, and reports every
//! rejected move back to the player. The engine never panics on bad input;
//! each rejection leaves the game playable.

mod render;

use anyhow::Context;
use clap::Parser;
use gambit_core::{Color, Pos};
use gambit_rules::Game;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Interactive chess game for two players at one terminal.
#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "Play chess in the terminal")]
struct Args {
    /// Resume from a saved game file
    #[arg(long)]
    load: Option<PathBuf>,
}

/// A parsed input line.
enum Command {
    Move(Pos, Pos),
    Board,
    Save(PathBuf),
    Load(PathBuf),
    Value,
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [from, to] => match (Pos::from_algebraic(from), Pos::from_algebraic(to)) {
            (Some(from), Some(to)) => Command::Move(from, to),
            _ => Command::Unknown,
        },
        ["board"] => Command::Board,
        ["save", path] => Command::Save(PathBuf::from(path)),
        ["load", path] => Command::Load(PathBuf::from(path)),
        ["value"] => Command::Value,
        ["help"] => Command::Help,
        ["quit"] | ["q"] => Command::Quit,
        _ => Command::Unknown,
    }
}

fn print_help() {
    println!("commands:");
    println!("  <from> <to>   move a piece, e.g. e2 e4");
    println!("  board         reprint the board");
    println!("  save <file>   write the game to a file");
    println!("  load <file>   resume a game from a file");
    println!("  value         show material totals");
    println!("  quit          leave the game");
}

fn load_game(path: &Path) -> anyhow::Result<Game> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let game =
        Game::from_text(&text).with_context(|| format!("cannot load {}", path.display()))?;
    tracing::info!(path = %path.display(), "game loaded");
    Ok(game)
}

fn save_game(game: &Game, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, game.to_text())
        .with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

/// Reports the state of the side now to move. Returns true when the game
/// is over.
fn announce_state(game: &Game) -> bool {
    let side = game.side_to_move();
    if game.in_checkmate(side) {
        println!("{} is checkmated. {} wins.", side, side.opposite());
        return true;
    }
    if game.in_stalemate(side) {
        println!("{} has no legal move. Stalemate.", side);
        return true;
    }
    if game.in_check(side) {
        println!("{} is in check.", side);
    }
    false
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut game = match &args.load {
        Some(path) => load_game(path)?,
        None => Game::new(),
    };
    if !game.is_valid() {
        anyhow::bail!("loaded game does not have one king per side");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render::draw(&game, &mut stdout)?;

    loop {
        let side = game.side_to_move();
        print!("{} to move> ", side);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Move(from, to) => match game.make_move(from, to) {
                Ok(()) => {
                    tracing::debug!(%from, %to, "move accepted");
                    render::draw(&game, &mut stdout)?;
                    if announce_state(&game) {
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!(%from, %to, %err, "move rejected");
                    println!("illegal move: {}", err);
                }
            },
            Command::Board => render::draw(&game, &mut stdout)?,
            Command::Save(path) => {
                if let Err(err) = save_game(&game, &path) {
                    println!("{:#}", err);
                }
            }
            Command::Load(path) => match load_game(&path) {
                Ok(loaded) if loaded.is_valid() => {
                    game = loaded;
                    render::draw(&game, &mut stdout)?;
                }
                Ok(_) => println!("refusing load: not one king per side"),
                Err(err) => println!("{:#}", err),
            },
            Command::Value => {
                println!(
                    "material: White {}, Black {}",
                    game.material_value(Color::White),
                    game.material_value(Color::Black)
                );
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown => {
                println!("unrecognized input; try 'help'");
            }
        }
    }

    Ok(())
}
