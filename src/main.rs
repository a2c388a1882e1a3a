#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minesweeper::{init_logging, CliPlayer, Difficulty, GameEngine};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Clear the minefield without revealing a mine", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Skip the menu and start at this level.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut player = CliPlayer::stdio();
    let difficulty = match cli.difficulty {
        Some(d) => d,
        None => match player
            .choose_difficulty()
            .context("failed to read difficulty")?
        {
            Some(d) => d,
            None => return Ok(()),
        },
    };

    log::info!("starting {} game", difficulty);
    let mut engine = GameEngine::new(difficulty, &mut rng);
    let status = engine.play(&mut player, &mut rng);
    log::info!("game finished: {:?} after {} moves", status, engine.moves());
    Ok(())
}
