use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::cli::{parse_coord, TextView};
use seabattle::{init_logging, GameConfig, GameError, Phase, Session, Side, BOARD_SIZE, MAX_SHIP_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Side of the square board")]
        size: usize,
        #[arg(long, default_value_t = MAX_SHIP_SIZE, help = "Length of the largest ship")]
        max_ship: usize,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            size,
            max_ship,
        } => {
            let config = GameConfig::new(size, max_ship)?;
            let rng = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            play(config, rng)
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  place     place (or re-place) both fleets");
    println!("  start     start the game once ships are placed");
    println!("  <coord>   fire at the opponent board, e.g. C5");
    println!("  help      show this message");
    println!("  quit      leave the game");
}

fn play(config: GameConfig, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    let mut view = TextView::new(config.board_size);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let result = match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            "place" => session.place_fleets(&mut rng, &mut view).map(|()| {
                println!("All ships are placed. Type 'start' to start the game.");
            }),
            "start" => session.start().map(|()| println!("Game started. Fire away!")),
            _ => match parse_coord(line, config.board_size) {
                Ok(coord) => session.fire(coord, &mut rng, &mut view).map(|_| ()),
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            },
        };

        match result {
            Ok(()) => {}
            Err(err @ GameError::WrongPhase { .. }) => println!("{}", err),
            Err(err @ GameError::FleetInfeasible { .. }) => {
                println!("{} -- try again!", err);
            }
            Err(err) => return Err(err.into()),
        }

        for msg in view.take_messages() {
            println!("{}", msg);
        }
        println!();
        print!(
            "{}",
            view.render(
                session.board(Side::Player).stats(),
                session.board(Side::Opponent).stats()
            )
        );
        if let Phase::Ended { .. } = session.phase() {
            break;
        }
    }
    Ok(())
}
