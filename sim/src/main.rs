//! Monte-Carlo harness for the battle outcome engine
//!
//! Resolves many battles at a fixed level pairing and reports how the
//! observed results line up with the engine's stated win chance and health
//! bands, double-checking that every scripted log reconciles with its
//! outcome. Doubles as a native smoke test for the battle crate.

use clap::Parser;
use gochi_battle::outcome::{resolve_outcome, BattleOutcome};
use gochi_battle::rng::XorShiftRng;
use gochi_battle::script::script_battle;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "gochi-sim", about = "Monte-Carlo sweep of the battle outcome engine")]
struct Args {
    /// Player combatant level
    #[arg(long, default_value_t = 10)]
    player_level: u32,

    /// Opponent combatant level
    #[arg(long, default_value_t = 10)]
    opponent_level: u32,

    /// Number of battles to resolve
    #[arg(long, default_value_t = 100_000)]
    battles: u64,

    /// Base RNG seed; each battle derives its own stream from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tally {
    player_wins: u64,
    winner_health_70_plus: u64,
    winner_health_40_to_69: u64,
    winner_health_under_40: u64,
    reconciliation_failures: u64,
}

impl Tally {
    fn merge(mut self, other: Tally) -> Tally {
        self.player_wins += other.player_wins;
        self.winner_health_70_plus += other.winner_health_70_plus;
        self.winner_health_40_to_69 += other.winner_health_40_to_69;
        self.winner_health_under_40 += other.winner_health_under_40;
        self.reconciliation_failures += other.reconciliation_failures;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    player_level: u32,
    opponent_level: u32,
    battles: u64,
    stated_win_chance: u8,
    observed_win_rate: f64,
    tally: Tally,
}

fn scripts_reconcile(outcome: &BattleOutcome) -> bool {
    let steps = script_battle(outcome);
    let player_total: u32 = steps.iter().map(|s| s.player_damage as u32).sum();
    let opponent_total: u32 = steps.iter().map(|s| s.opponent_damage as u32).sum();
    player_total == 100 - outcome.player_health as u32
        && opponent_total == 100 - outcome.opponent_health as u32
}

fn simulate_one(player_level: u32, opponent_level: u32, seed: u64) -> Tally {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let outcome = resolve_outcome(player_level, opponent_level, &mut rng);

    let mut tally = Tally::default();
    if outcome.player_wins {
        tally.player_wins = 1;
    }
    let winner_health = if outcome.player_wins {
        outcome.player_health
    } else {
        outcome.opponent_health
    };
    match winner_health {
        70.. => tally.winner_health_70_plus = 1,
        40..=69 => tally.winner_health_40_to_69 = 1,
        _ => tally.winner_health_under_40 = 1,
    }
    if !scripts_reconcile(&outcome) {
        tally.reconciliation_failures = 1;
    }
    tally
}

fn main() {
    let args = Args::parse();

    let tally = (0..args.battles)
        .into_par_iter()
        .map(|i| {
            // Decorrelate the per-battle streams
            let seed = args.seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            simulate_one(args.player_level, args.opponent_level, seed)
        })
        .reduce(Tally::default, Tally::merge);

    let stated = resolve_outcome(
        args.player_level,
        args.opponent_level,
        &mut XorShiftRng::seed_from_u64(args.seed),
    )
    .win_chance;

    let report = Report {
        player_level: args.player_level,
        opponent_level: args.opponent_level,
        battles: args.battles,
        stated_win_chance: stated,
        observed_win_rate: tally.player_wins as f64 * 100.0 / args.battles.max(1) as f64,
        tally,
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        println!(
            "{} battles: level {} vs level {}",
            report.battles, report.player_level, report.opponent_level
        );
        println!("stated win chance:  {}%", report.stated_win_chance);
        println!("observed win rate:  {:.2}%", report.observed_win_rate);
        println!("winner health 70+:  {}", report.tally.winner_health_70_plus);
        println!("winner health 40s:  {}", report.tally.winner_health_40_to_69);
        println!("winner health <40:  {}", report.tally.winner_health_under_40);
    }

    if report.tally.reconciliation_failures > 0 {
        eprintln!(
            "{} script(s) failed to reconcile with their outcome",
            report.tally.reconciliation_failures
        );
        std::process::exit(1);
    }
}
