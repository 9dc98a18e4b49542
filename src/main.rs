use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use seabattle::{format_reference, init_logging, parse_reference, Game, Stage};

#[derive(Parser)]
#[command(author, version, about = "Single-player sea battle", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = match cli.seed {
        Some(seed) => Game::from_seed(seed),
        None => Game::new(),
    }
    .context("failed to generate the starting board")?;

    println!("Shoot cells by reference (e.g. B7). Commands: restart, quit.");
    loop {
        print_board(&game);
        print_statuses(&game);
        if game.stage() == Stage::Over {
            println!("\nAll ships down - you win!");
            println!("Type restart for a new game or quit to exit.");
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim().to_ascii_uppercase();
        match input.as_str() {
            "" => continue,
            "QUIT" | "Q" => break,
            "RESTART" => {
                game.restart().context("failed to regenerate the board")?;
                continue;
            }
            _ => {}
        }

        let (x, y) = match parse_reference(&input) {
            Ok(coord) => coord,
            Err(_) => {
                println!("Invalid reference: {}", input);
                continue;
            }
        };
        match game.shoot(x, y) {
            Ok(()) => {
                let struck = game
                    .board()
                    .cell(x, y)
                    .map(|cell| cell.ship.is_some())
                    .unwrap_or(false);
                let reference = format_reference(x, y)?;
                println!("{} -> {}", reference, if struck { "hit" } else { "miss" });
            }
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}

fn print_board(game: &Game) {
    let board = game.board();
    print!("   ");
    for x in 0..board.width() {
        let letter = (b'A' + x as u8) as char;
        print!(" {}", letter);
    }
    println!();
    for y in 0..board.height() {
        print!("{:2} ", y + 1);
        for x in 0..board.width() {
            let marker = match board.cell(x, y) {
                Some(cell) if cell.hit && cell.ship.is_some() => 'X',
                Some(cell) if cell.hit => 'o',
                _ => '.',
            };
            print!(" {}", marker);
        }
        println!();
    }
}

fn print_statuses(game: &Game) {
    for status in game.ship_statuses() {
        let state = if status.is_down { "down" } else { "afloat" };
        println!(
            "{:>2}. {:<10} length {}  hits {}  {}",
            status.id, status.name, status.length, status.hits, state
        );
    }
}
