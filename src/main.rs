//! Self-play driver: two engine players search against each other.
//!
//! Usage: `chess_tree [white_depth] [black_depth] [max_plies]`

use std::env;
use std::process::ExitCode;

use chess_tree::board::{Board, Color, LeafSign, SearchConfig};
use chess_tree::AiPlayer;
use log::info;

const DEFAULT_DEPTH: u32 = 3;
const DEFAULT_MAX_PLIES: u32 = 40;

fn parse_arg(args: &[String], index: usize, default: u32) -> Result<u32, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("expected a number, got '{raw}'")),
        None => Ok(default),
    }
}

fn player(color: Color, depth: u32) -> Result<AiPlayer, String> {
    let config = SearchConfig::with_depth(depth).leaf_sign(LeafSign::SideToMove);
    AiPlayer::new(Board::new(), color, config).map_err(|err| format!("{color}: {err}"))
}

fn run(args: &[String]) -> Result<(), String> {
    let white_depth = parse_arg(args, 1, DEFAULT_DEPTH)?;
    let black_depth = parse_arg(args, 2, DEFAULT_DEPTH)?;
    let max_plies = parse_arg(args, 3, DEFAULT_MAX_PLIES)?;

    let mut white = player(Color::White, white_depth)?;
    let mut black = player(Color::Black, black_depth)?;
    info!("self-play: white depth {white_depth}, black depth {black_depth}, {max_plies} plies");

    println!("{}", white.board());
    for ply in 0..max_plies {
        let board = white.board();
        if board.checkmate() {
            println!("Checkmate, {} wins", board.turn().opponent());
            return Ok(());
        }
        if board.is_stalemate() {
            println!("Stalemate");
            return Ok(());
        }

        let (mover, watcher) = match board.turn() {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };
        let Some(action) = mover.think_and_play() else {
            return Err(format!("{} found no move at ply {ply}", mover.color()));
        };
        if !watcher.play(&action) {
            return Err(format!("{} rejected {action}", watcher.color()));
        }

        println!("{}. {action}", ply / 2 + 1);
        println!("{}", white.board());
    }
    println!("Stopped after {max_plies} plies");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
