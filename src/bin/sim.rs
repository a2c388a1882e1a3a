use minesweeper::{init_logging, Difficulty, GameEngine, RandomPlayer};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <seed> [1|2|3]", program);
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(2..=3).contains(&args.len()) {
        usage(&args[0]);
    }
    let Ok(seed) = args[1].parse::<u64>() else {
        usage(&args[0]);
    };
    let difficulty = match args.get(2) {
        Some(level) => level
            .parse()
            .ok()
            .and_then(Difficulty::from_menu)
            .unwrap_or_else(|| usage(&args[0])),
        None => Difficulty::Beginner,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(difficulty, &mut rng);
    let status = engine.play(&mut RandomPlayer::new(), &mut rng);
    let grid = engine.grid();
    let result = json!({
        "difficulty": difficulty,
        "seed": seed,
        "status": status,
        "moves": engine.moves(),
        "revealed": grid.total_revealed(),
        "mines": grid.total_mines(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
