//! Interactive console orchestration.
//!
//! All terminal I/O lives here: the game core hands back reports and this
//! module renders them. Prompt-level failures (bad login, taken username)
//! are reported and re-prompted; store failures abort the session.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

use crate::auth::{self, SessionRoster};
use crate::core::{
    DiceRng, GameState, Phase, Player, RoundReport, Seat, TiebreakReport, TOTAL_ROUNDS,
};
use crate::error::Error;
use crate::store::Store;

/// Number of dots printed while a roll "spins".
const ANIMATION_DOTS: u64 = 9;

/// Presentation knobs for the game loop.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Total duration of one roll animation in milliseconds; 0 disables it.
    pub roll_delay_ms: u64,
}

/// Run a complete interactive session: signup, logins, game, results.
pub fn run(store: &Store, mut rng: DiceRng, opts: Options) -> Result<()> {
    println!("Welcome to Dice Duel");

    signup_loop(store)?;

    let mut roster = SessionRoster::new();
    println!("\n=== Player 1 Login ===");
    let player_one = login_prompt(store, &mut roster)?;
    println!("\n=== Player 2 Login ===");
    let player_two = login_prompt(store, &mut roster)?;

    let mut game = GameState::new(player_one, player_two);

    while game.phase() == Phase::InProgress {
        print_summary(&game);
        wait_for_enter()?;
        let report = game.play_round(&mut rng);
        print_round(&report, opts);
    }

    if game.phase() == Phase::Tiebreak {
        println!("\nScores are level after round {TOTAL_ROUNDS}: sudden death!");
        while game.phase() == Phase::Tiebreak {
            let report = game.play_tiebreak_round(&mut rng);
            print_tiebreak(&game, &report, opts);
        }
    }

    print_final(&game);

    if let Some(winner) = game.winner() {
        store.transaction(|doc| doc.record_score(winner.username(), winner.score()))?;
    }
    print_top_scores(store, 5)?;

    Ok(())
}

/// Print the top `count` scores, highest first.
pub fn print_top_scores(store: &Store, count: usize) -> Result<()> {
    let top = store.read(|doc| doc.top_scores(count))?;

    println!("\n=== Top Scores ===");
    if top.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }
    for entry in top {
        println!("{:<12}{}", entry.username, entry.score);
    }
    Ok(())
}

fn signup_loop(store: &Store) -> Result<()> {
    println!("\n=== Signup ===");
    while Confirm::new()
        .with_prompt("Do you want to sign up?")
        .default(false)
        .interact()?
    {
        let username: String = Input::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match auth::register(store, &username, &password) {
            Ok(()) => println!("Account created."),
            Err(Error::DuplicateUsername(name)) => {
                println!("Username `{name}` is already taken.");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn login_prompt(store: &Store, roster: &mut SessionRoster) -> Result<Player> {
    loop {
        let username: String = Input::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match auth::login(store, roster, &username, &password) {
            Ok(player) => {
                println!("Success");
                return Ok(player);
            }
            Err(
                err @ (Error::UnknownUsername(_)
                | Error::WrongPassword
                | Error::UsernameAlreadyActive(_)),
            ) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }
}

fn wait_for_enter() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("(Enter) Next round")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn print_summary(game: &GameState) {
    println!("\n=== Round Summary ===");
    println!("Round: {} of {}", game.round(), TOTAL_ROUNDS);
    println!(
        "Next turn: {}",
        game.player(game.current_seat()).username()
    );
    for seat in Seat::both() {
        let player = game.player(seat);
        println!("{}'s score: {}", player.username(), player.score());
    }
}

fn print_round(report: &RoundReport, opts: Options) {
    println!("\n=== Round {}: {} ===", report.round, report.seat);
    for (i, value) in report.rolls.values().iter().enumerate() {
        let label = match i {
            0 => "Roll 1",
            1 => "Roll 2",
            _ => {
                println!("Double!");
                "Bonus roll"
            }
        };
        roll_animation(opts.roll_delay_ms);
        println!("{label}: {value}");
    }
    println!("Round score: {}", report.score);
}

fn print_tiebreak(game: &GameState, report: &TiebreakReport, opts: Options) {
    println!("\n=== Tie-break Roll ===");
    for (seat, value) in Seat::both().into_iter().zip(report.rolls) {
        println!("{} rolling:", game.player(seat).username());
        roll_animation(opts.roll_delay_ms);
        println!("Rolled: {value}");
    }
    if !report.resolved {
        println!("Still level, rolling again.");
    }
}

fn print_final(game: &GameState) {
    println!("\n=== Results ===");
    for seat in Seat::both() {
        let player = game.player(seat);
        println!("{}'s score: {}", player.username(), player.score());
    }
    if let Some(winner) = game.winner() {
        println!("Winner: {} ({} points)", winner.username(), winner.score());
    }
}

fn roll_animation(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }
    let step = Duration::from_millis(delay_ms / ANIMATION_DOTS);
    print!("Rolling");
    for _ in 0..ANIMATION_DOTS {
        thread::sleep(step);
        print!(".");
        let _ = io::stdout().flush();
    }
    println!();
}
