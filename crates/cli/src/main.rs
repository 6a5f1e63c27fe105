//! Interactive terminal chess.
//!
//! Humans enter four-character coordinate moves (`e2e4`); computer seats
//! are driven through the `Engine` trait. The core never touches stdin or
//! stdout; all I/O lives here.

mod config;
mod gamelog;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use arena_engine::ArenaEngine;
use chess_core::{
    AutoQueen, Color, Controller, Engine, GameSession, PieceKind, Pos, PromotionChooser,
    SearchLimits,
};
use random_engine::RandomEngine;

use config::{CliConfig, Seat};

/// Prompts on stdin for a promotion piece, repeating until the answer is
/// one of q, r, n, b.
struct StdinChooser;

impl PromotionChooser for StdinChooser {
    fn choose(&mut self, color: Color, at: Pos) -> PieceKind {
        let stdin = io::stdin();
        loop {
            print!(
                "{} pawn promotes on {}, choose piece (q/r/n/b): ",
                render::color_name(color),
                at
            );
            io::stdout().flush().ok();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                return PieceKind::Queen;
            }
            if let Some(kind) = line.trim().chars().next().and_then(PieceKind::from_promotion_char)
            {
                return kind;
            }
            println!("please answer q, r, n or b");
        }
    }
}

fn seat_controller(seat: Seat) -> Controller {
    match seat {
        Seat::Human => Controller::Human,
        Seat::Computer => Controller::Computer,
    }
}

fn build_engine(cfg: &CliConfig) -> Box<dyn Engine> {
    match cfg.engine.as_str() {
        "random" => Box::new(RandomEngine::new()),
        _ => Box::new(ArenaEngine::with_capacity(cfg.arena_capacity)),
    }
}

fn print_help() {
    println!("commands:");
    println!("  e2e4        play a move (file a-h, rank 1-8)");
    println!("  show        print the board");
    println!("  undo        take back one half-move");
    println!("  redo        replay a taken-back half-move");
    println!("  save PATH   write a JSON game record to PATH");
    println!("  help        this text");
    println!("  quit        leave the game");
}

fn computer_turn(session: &mut GameSession, engine: &mut dyn Engine, depth: u8) -> bool {
    let player = session.to_move();
    let result = engine.search(session.board(), player, SearchLimits::depth(depth));
    if result.arena_exhausted {
        eprintln!("note: search arena filled, move chosen from a partial tree");
    }
    let mv = match result.best_move {
        Some(mv) => mv,
        // No legal move should already have been reported as mate or
        // stalemate on the previous ply.
        None => return false,
    };
    let status = session
        .try_move(mv, &mut AutoQueen)
        .expect("engine chose an illegal move");
    println!(
        "{} ({}) plays {}  [{} nodes, value {}]",
        render::color_name(player),
        engine.name(),
        mv,
        result.nodes,
        result.value
    );
    println!("{}", render::render_board(session.board()));
    println!("status: {}", render::status_line(status));
    true
}

fn human_turn(session: &mut GameSession, line: &str) -> bool {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    match parts.next() {
        None => true,
        Some("quit") | Some("exit") => false,
        Some("help") => {
            print_help();
            true
        }
        Some("show") | Some("board") => {
            println!("{}", render::render_board(session.board()));
            true
        }
        Some("undo") => {
            if session.undo() {
                println!("{}", render::render_board(session.board()));
            } else {
                println!("nothing to undo");
            }
            true
        }
        Some("redo") => {
            if session.redo() {
                println!("{}", render::render_board(session.board()));
            } else {
                println!("nothing to redo");
            }
            true
        }
        Some("save") => {
            match parts.next() {
                Some(path) => {
                    let record = gamelog::GameRecord::from_session(session);
                    match record.save(Path::new(path)) {
                        Ok(()) => println!("saved game record to {}", path),
                        Err(e) => eprintln!("{}", e),
                    }
                }
                None => println!("usage: save PATH"),
            }
            true
        }
        Some(_) => {
            match session.try_move_text(trimmed, &mut StdinChooser) {
                Ok(status) => {
                    println!("{}", render::render_board(session.board()));
                    println!("status: {}", render::status_line(status));
                }
                Err(e) => println!("rejected: {}", e),
            }
            true
        }
    }
}

fn main() {
    let cfg = CliConfig::load(Path::new("termchess.toml")).unwrap_or_else(|e| {
        eprintln!("{}; using defaults", e);
        CliConfig::default()
    });

    let mut session = GameSession::new([
        seat_controller(cfg.white),
        seat_controller(cfg.black),
    ]);
    let mut engine = build_engine(&cfg);

    println!("termchess — {} vs {}", seat_name(cfg.white), seat_name(cfg.black));
    println!("type help for commands");
    println!("{}", render::render_board(session.board()));

    let stdin = io::stdin();
    let mut announced = false;
    loop {
        if session.game_over() && !announced {
            println!("game over: {}", render::status_line(session.board().check));
            if let Some(path) = &cfg.log_path {
                match gamelog::write_text_log(Path::new(path), &session) {
                    Ok(()) => println!("game log written to {}", path),
                    Err(e) => eprintln!("failed to write game log: {}", e),
                }
            }
            announced = true;
        }

        let to_move = session.to_move();
        if !session.game_over() && session.controller(to_move) == Controller::Computer {
            if !computer_turn(&mut session, engine.as_mut(), cfg.depth) {
                break;
            }
            announced = false;
            continue;
        }

        print!("{}> ", render::color_name(to_move));
        io::stdout().flush().ok();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let was_over = session.game_over();
        if !human_turn(&mut session, &line) {
            break;
        }
        // Undo after the end of the game reopens it.
        if was_over && !session.game_over() {
            announced = false;
        }
    }
}

fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Human => "human",
        Seat::Computer => "computer",
    }
}
