use std::io::{self, BufRead, Write};

use sovereign_board::board;
use sovereign_board::core::coord::{Coord, BOARD_SIZE};
use sovereign_board::core::piece::Color;
use sovereign_board::core::square::Square;
use sovereign_board::fen;
use sovereign_board::snapshot::BoardSnapshot;
use sovereign_board::state::BoardState;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let start_fen = match args.len() {
        1 => "start".to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: play_board [<fen>]");
            std::process::exit(2);
        }
    };

    let mut state = BoardState::from_position(fen::read(&start_fen));
    print_board(&state);

    let stdin = io::stdin();
    loop {
        print!("{:?}> ", state.turn_player);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {e}");
                std::process::exit(1);
            }
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["q"] => return,
            ["fen"] => println!("{}", fen::write(&state.pieces)),
            ["snapshot"] => match BoardSnapshot::of(&state).to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("snapshot failed: {e}"),
            },
            ["move", orig, dest] => {
                let (Ok(orig), Ok(dest)) = (orig.parse::<Square>(), dest.parse::<Square>())
                else {
                    eprintln!("invalid square key (expected e.g. a1, pG)");
                    continue;
                };
                if board::user_move(&mut state, orig, dest) {
                    drain_events(&mut state);
                    print_board(&state);
                } else {
                    println!("illegal: {orig} -> {dest}");
                }
            }
            ["select", key] => {
                let Ok(key) = key.parse::<Square>() else {
                    eprintln!("invalid square key");
                    continue;
                };
                board::select_square(&mut state, key, false);
                drain_events(&mut state);
                match state.selected {
                    Some(sq) => println!("selected {sq}"),
                    None => println!("nothing selected"),
                }
            }
            _ => {
                eprintln!("commands: move <orig> <dest> | select <key> | fen | snapshot | quit");
            }
        }
    }
}

fn drain_events(state: &mut BoardState) {
    for event in state.events.drain() {
        println!("  event: {event:?}");
    }
}

fn print_board(state: &BoardState) {
    for rank in (0..BOARD_SIZE).rev() {
        let mut row = String::new();
        for file in 0..BOARD_SIZE {
            let sq = Square::from_coord(Coord::new(file, rank));
            match state.pieces.get(sq) {
                Some(p) => {
                    let letter = p.role.letter();
                    if p.color == Color::White {
                        row.push(letter.to_ascii_uppercase());
                    } else {
                        row.push(letter);
                    }
                }
                None => row.push('.'),
            }
            row.push(' ');
        }
        println!("{row}");
    }
}
