//! The Textual User Interface for the checkers engine.

use crate::board::logical_col;
use crate::constants::Piece;
use crate::game::Game;
use crate::r#move::Move;
use crossterm::style::{StyledContent, Stylize};
use std::io;

/// Runs the main hotseat game loop for the text-based UI.
pub fn run() {
    let mut game = Game::new();

    println!("--- Checkers in Rust ---");
    println!("Enter moves as <from> <to> (e.g. b3 a4). Type 'new' for a new game, 'exit' to quit.");

    loop {
        println!();
        print_board(&game);

        if !game.side_has_moves() {
            let winner = game.turn().opponent();
            println!(
                "{:?} wins with {} piece(s) left!",
                winner,
                game.board().count_side(winner)
            );
            break;
        }

        print!("{:?}'s move: ", game.turn());
        io::Write::flush(&mut io::stdout()).expect("flush failed!");

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        if input == "exit" {
            break;
        }
        if input == "new" {
            game = Game::new();
            continue;
        }

        let (from, to) = match parse_move_string(input) {
            Some(squares) => squares,
            None => {
                println!("Could not read that. Use two dark squares, e.g. b3 a4.");
                continue;
            }
        };

        match play_move(&mut game, from, to) {
            Ok(mv) => println!("Played {}", mv.to_notation()),
            Err(msg) => println!("{}", msg),
        }
    }
}

/// Issues the pair of clicks for one typed command. The from square
/// must hold a piece of the side to move before any click is sent;
/// otherwise a selection lingering from a rejected command could act
/// on a from square the player never selected.
fn play_move(
    game: &mut Game,
    from: (usize, usize),
    to: (usize, usize),
) -> Result<Move, &'static str> {
    let (from_row, from_col) = from;
    if game.piece_at(from_row, from_col).side() != Some(game.turn()) {
        return Err("No piece of yours on that square.");
    }
    game.handle_click(from_row, from_col);

    let (to_row, to_col) = to;
    game.handle_click(to_row, to_col)
        .ok_or("Illegal move. Please try again.")
}

/// Parses a move like "b3 a4" into two logical (row, col) coordinates.
/// Returns `None` for malformed input or light squares.
fn parse_move_string(move_str: &str) -> Option<((usize, usize), (usize, usize))> {
    let mut parts = move_str.split_whitespace();
    let from = parse_square(parts.next()?)?;
    let to = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

/// Parses visual notation (file a-h, rank 1-8) into a logical (row, col).
fn parse_square(sq_str: &str) -> Option<(usize, usize)> {
    let mut chars = sq_str.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let vis = (file as u8).checked_sub(b'a')? as usize;
    let rank = rank.to_digit(10)? as usize;
    if vis > 7 || rank < 1 || rank > 8 {
        return None;
    }

    let row = 8 - rank;
    let col = logical_col(row, vis)?;
    Some((row, col))
}

fn print_board(game: &Game) {
    println!("  +-----------------+");
    for row in 0..8 {
        print!("{} | ", 8 - row);
        for vis in 0..8 {
            match logical_col(row, vis) {
                Some(col) => print!("{} ", piece_glyph(game.piece_at(row, col))),
                None => print!("  "),
            }
        }
        println!("|");
    }
    println!("  +-----------------+");
    println!("    a b c d e f g h");
}

fn piece_glyph(piece: Piece) -> StyledContent<char> {
    match piece {
        Piece::WhiteMan => 'o'.white(),
        Piece::WhiteKing => 'O'.white().bold(),
        Piece::BlackMan => 'o'.dark_blue(),
        Piece::BlackKing => 'O'.dark_blue().bold(),
        Piece::Empty => '.'.dark_grey(),
    }
}
