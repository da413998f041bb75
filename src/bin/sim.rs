use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, pick_target, GameConfig, NullView, Session, Side, Targeting, BOARD_SIZE,
    MAX_SHIP_SIZE,
};
use serde_json::json;

/// Play one session headless, with the targeting strategy also choosing the
/// player's shots, and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shared random source.
    seed: u64,
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = MAX_SHIP_SIZE)]
    max_ship: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = GameConfig::new(args.size, args.max_ship)?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut view = NullView;
    let mut session = Session::new(config)?;
    session.place_fleets(&mut rng, &mut view)?;
    session.start()?;

    let mut memory = Targeting::new();
    let mut player_shots = 0usize;
    let mut opponent_shots = 0usize;
    let mut turns = 0usize;
    let max_turns = config.board_size * config.board_size;

    while session.winner().is_none() {
        turns += 1;
        if turns > max_turns {
            anyhow::bail!("game did not finish within {} turns", max_turns);
        }
        let target = pick_target(session.board(Side::Opponent), &mut memory, &mut rng)
            .ok_or_else(|| anyhow::anyhow!("player found no cell to fire at"))?;
        let report = session.fire(target, &mut rng, &mut view)?;
        if let Some(outcome) = report.player_outcome() {
            memory.record(target, outcome);
        }
        player_shots += 1;
        opponent_shots += report.opponent_shots().len();
    }

    let result = json!({
        "winner": session.winner(),
        "player_shots": player_shots,
        "opponent_shots": opponent_shots,
        "turns": turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
