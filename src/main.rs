use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use dice_duel::cli::{self, Options};
use dice_duel::core::DiceRng;
use dice_duel::store::Store;

#[derive(Parser)]
#[command(
    name = "dice-duel",
    about = "A two-player dice game: five scored rounds, sudden-death tie-break, persisted leaderboard"
)]
struct Args {
    /// Path to the JSON record store.
    #[arg(long, default_value = "dice-duel.json")]
    store: PathBuf,

    /// Seed the dice for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Total duration of one roll animation, in milliseconds (0 disables it).
    #[arg(long, default_value_t = 900)]
    roll_delay_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game (the default).
    Play,
    /// Print the leaderboard without playing.
    Top {
        /// Number of entries to show.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let store = Store::open(args.store);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let rng = match args.seed {
                Some(seed) => DiceRng::new(seed),
                None => DiceRng::from_entropy(),
            };
            cli::run(
                &store,
                rng,
                Options {
                    roll_delay_ms: args.roll_delay_ms,
                },
            )
        }
        Command::Top { count } => cli::print_top_scores(&store, count),
    }
}
