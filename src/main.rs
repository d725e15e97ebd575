//! Runs the reference fixture: two ten-player sides on a large, dry ground.
//!
//! Narration goes to stdout, logs to stderr. Set `RUST_LOG=debug` to log
//! every ball, `CRICKET_SEED` to change the match.

use std::io;

use anyhow::Result;
use cricket_sim::commentary::TextCommentary;
use cricket_sim::core::MatchConfig;
use cricket_sim::play::{EventSink, Match};
use cricket_sim::squad::{Field, FieldSize, PitchCondition, Player, Team};

/// (batting, bowling, fielding, running, experience)
const REFERENCE_SKILLS: [(f64, f64, f64, f64, f64); 10] = [
    (0.7, 0.1, 0.9, 0.7, 0.8),
    (0.6, 0.2, 0.85, 0.6, 0.7),
    (0.5, 0.3, 0.8, 0.5, 0.6),
    (0.4, 0.4, 0.75, 0.4, 0.5),
    (0.3, 0.5, 0.7, 0.3, 0.4),
    (0.6, 0.1, 0.85, 0.6, 0.7),
    (0.5, 0.2, 0.8, 0.5, 0.6),
    (0.4, 0.3, 0.75, 0.4, 0.5),
    (0.3, 0.4, 0.7, 0.3, 0.4),
    (0.2, 0.5, 0.65, 0.2, 0.3),
];

fn reference_roster() -> Result<Vec<Player>, cricket_sim::MatchError> {
    REFERENCE_SKILLS
        .iter()
        .enumerate()
        .map(|(i, &(batting, bowling, fielding, running, experience))| {
            let name = format!("Player {}", i + 1);
            Player::new(name, batting, bowling, fielding, running, experience)
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = MatchConfig::from_env();

    // Each side gets its own copy of the roster.
    let roster = reference_roster()?;
    let team1 = Team::new("Team A", roster.clone())?.with_roster_batting_order()?;
    let team2 = Team::new("Team B", roster)?.with_roster_batting_order()?;
    let field = Field::new(FieldSize::Large, 0.8, PitchCondition::Dry, 1.2)?;

    let mut game = Match::new(team1, team2, field, config)?;
    let mut commentary = TextCommentary::new(io::stdout().lock());

    // The second innings ends the match and carries the summary.
    commentary.on_events(&game.start_match()?)?;
    commentary.on_events(&game.simulate_innings()?)?;
    commentary.on_events(&game.simulate_innings()?)?;

    Ok(())
}
