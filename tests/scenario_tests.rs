//! Whole-match scenarios.
//!
//! These tests drive matches through the public API and check how innings
//! end, how runs are accounted and how the result is reported.

use cricket_sim::commentary::TextCommentary;
use cricket_sim::core::{BallRng, MatchConfig, MatchError, MatchRng, ScriptedRng, Side};
use cricket_sim::play::{
    BallReport, EventSink, InningsEndReason, Match, MatchEvent, MatchPhase, MatchResult,
};
use cricket_sim::rules::Outcome;
use cricket_sim::squad::{Field, FieldSize, PitchCondition, Player, Team};

// =============================================================================
// Helpers
// =============================================================================

fn uniform_roster(n: usize, batting: f64, bowling: f64) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(format!("Player {i}"), batting, bowling, 0.8, 0.5, 0.5).unwrap())
        .collect()
}

fn reference_roster() -> Vec<Player> {
    let skills = [
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
    skills
        .iter()
        .enumerate()
        .map(|(i, &(bat, bowl, field, run, exp))| {
            Player::new(format!("Player {}", i + 1), bat, bowl, field, run, exp).unwrap()
        })
        .collect()
}

fn team(name: &str, players: Vec<Player>) -> Team {
    Team::new(name, players).unwrap().with_roster_batting_order().unwrap()
}

fn field() -> Field {
    Field::new(FieldSize::Large, 0.8, PitchCondition::Dry, 1.2).unwrap()
}

fn build<R: BallRng>(players: Vec<Player>, config: MatchConfig, rng: R) -> Match<R> {
    Match::with_rng(
        team("Team A", players.clone()),
        team("Team B", players),
        field(),
        config,
        rng,
    )
    .unwrap()
}

/// Start and play both innings the way the driver does.
fn play_two_innings<R: BallRng>(game: &mut Match<R>) -> Vec<MatchEvent> {
    let mut events = game.start_match().unwrap();
    events.extend(game.simulate_innings().unwrap());
    events.extend(game.simulate_innings().unwrap());
    events
}

fn balls_for<'a>(
    events: &'a [MatchEvent],
    team: &'a str,
) -> impl Iterator<Item = &'a BallReport> {
    events.iter().filter_map(move |event| match event {
        MatchEvent::BallBowled(report) if report.batting_team == team => Some(report),
        _ => None,
    })
}

// =============================================================================
// Outcome extremes
// =============================================================================

/// A perfect batting skill against a zero bowling skill gives a skill of 1.0,
/// so every delivery takes a wicket.
#[test]
fn test_full_skill_always_out() {
    let draws = vec![0.0, 0.04, 0.05, 0.3, 0.7, 0.999];
    let rng = ScriptedRng::new(draws, vec![6]).unwrap();
    let mut game = build(uniform_roster(10, 1.0, 0.0), MatchConfig::default(), rng);

    let events = play_two_innings(&mut game);

    assert!(balls_for(&events, "Team A").all(|b| b.outcome == Outcome::Out));
    let summary = game.summary().unwrap();
    for innings in &summary.innings {
        assert_eq!(innings.reason, InningsEndReason::AllOut);
        assert_eq!(innings.wickets, 10);
        assert_eq!(innings.runs, 0);
        assert_eq!(innings.balls.balls(), 10);
    }
    assert_eq!(game.rng().runs_drawn(), 0);
}

#[test]
fn test_full_skill_always_out_seeded() {
    let mut game = build(uniform_roster(10, 1.0, 0.0), MatchConfig::default(), MatchRng::new(2024));

    let events = play_two_innings(&mut game);

    let outcomes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            MatchEvent::BallBowled(report) => Some(report.outcome),
            _ => None,
        })
        .collect();
    assert_eq!(outcomes.len(), 20);
    assert!(outcomes.iter().all(|&o| o == Outcome::Out));
}

/// A zero batting skill can never be dismissed.
#[test]
fn test_zero_skill_never_out() {
    let mut game = build(uniform_roster(10, 0.0, 0.3), MatchConfig::default(), MatchRng::new(7));

    let events = play_two_innings(&mut game);

    assert!(balls_for(&events, "Team A").all(|b| b.outcome == Outcome::Runs));
    assert!(balls_for(&events, "Team B").all(|b| b.outcome == Outcome::Runs));
    for innings in &game.summary().unwrap().innings {
        assert_eq!(innings.wickets, 0);
        assert_eq!(innings.reason, InningsEndReason::BattingOrderExhausted);
    }
}

/// A perfect bowler shuts out any batsman.
#[test]
fn test_perfect_bowler_never_concedes_wicket() {
    let mut game = build(uniform_roster(10, 0.9, 1.0), MatchConfig::default(), MatchRng::new(11));

    play_two_innings(&mut game);

    assert_eq!(game.team(Side::Team1).total_wickets(), 0);
    assert_eq!(game.team(Side::Team2).total_wickets(), 0);
}

// =============================================================================
// Innings termination
// =============================================================================

/// Two wickets fall, then the order runs out long before any cap.
#[test]
fn test_batting_order_exhaustion_ends_innings() {
    let draws = vec![0.1, 0.2, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9];
    let rng = ScriptedRng::new(draws, vec![3]).unwrap();
    let mut game = build(uniform_roster(10, 0.5, 0.0), MatchConfig::default(), rng);

    play_two_innings(&mut game);

    let first = &game.completed_innings()[0];
    assert_eq!(first.reason, InningsEndReason::BattingOrderExhausted);
    assert_eq!(first.wickets, 2);
    assert_eq!(first.balls.balls(), 10);
    assert_eq!(first.runs, 24);
    assert!(first.wickets < game.config().max_wickets);
    assert!(first.balls.balls() < game.config().balls_per_innings());
}

#[test]
fn test_overs_cap_ends_innings() {
    let config = MatchConfig::default().with_max_overs(2);
    let mut game = build(uniform_roster(15, 0.0, 0.0), config, MatchRng::new(5));

    play_two_innings(&mut game);

    for innings in game.completed_innings() {
        assert_eq!(innings.reason, InningsEndReason::OversExhausted);
        assert_eq!(innings.balls.balls(), 12);
        assert_eq!(innings.overs.to_string(), "2.0");
    }
}

#[test]
fn test_wicket_cap_ends_innings() {
    let config = MatchConfig::default().with_max_wickets(2);
    let mut game = build(uniform_roster(10, 1.0, 0.0), config, MatchRng::new(5));

    play_two_innings(&mut game);

    for innings in game.completed_innings() {
        assert_eq!(innings.reason, InningsEndReason::AllOut);
        assert_eq!(innings.wickets, 2);
        assert_eq!(innings.balls.balls(), 2);
    }
}

#[test]
fn test_single_batsman_order() {
    let players = uniform_roster(5, 0.0, 0.0);
    let team1 = Team::new("Team A", players.clone())
        .unwrap()
        .with_batting_order([cricket_sim::squad::PlayerId::new(4)])
        .unwrap();
    let team2 = team("Team B", players);
    let mut game =
        Match::with_rng(team1, team2, field(), MatchConfig::default(), MatchRng::new(1)).unwrap();

    let events = play_two_innings(&mut game);

    let team_a: Vec<_> = balls_for(&events, "Team A").collect();
    assert_eq!(team_a.len(), 1);
    assert_eq!(team_a[0].batsman, "Player 5");
}

// =============================================================================
// Accounting and lifecycle
// =============================================================================

#[test]
fn test_run_accounting_matches_totals() {
    for seed in 0..50 {
        let config = MatchConfig::default().with_seed(seed);
        let mut game = build(reference_roster(), config, MatchRng::new(seed));
        let events = play_two_innings(&mut game);

        for side in Side::BOTH {
            let team = game.team(side);
            let ball_runs: u32 = balls_for(&events, team.name()).map(|b| u32::from(b.runs)).sum();
            let ball_wickets = balls_for(&events, team.name())
                .filter(|b| b.outcome.is_wicket())
                .count();
            let innings = game.summary().unwrap().innings_of(side).unwrap();

            assert_eq!(ball_runs, team.total_runs(), "seed {seed}");
            assert_eq!(ball_runs, innings.runs, "seed {seed}");
            assert_eq!(ball_runs, innings.scorecard.total_runs(), "seed {seed}");
            assert_eq!(ball_wickets, usize::from(team.total_wickets()), "seed {seed}");
            assert_eq!(innings.wickets, team.total_wickets(), "seed {seed}");
            assert!(innings.wickets <= 10);
        }
    }
}

#[test]
fn test_match_finishes_after_two_innings() {
    for seed in 0..50 {
        let mut game = build(reference_roster(), MatchConfig::default(), MatchRng::new(seed));

        game.start_match().unwrap();
        game.simulate_innings().unwrap();
        assert_eq!(game.phase(), MatchPhase::InningsInProgress(cricket_sim::play::Innings::Second));
        game.simulate_innings().unwrap();
        assert_eq!(game.phase(), MatchPhase::Finished);
        assert!(game.simulate_innings().is_err());
    }
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let run = |seed| {
        let mut game = build(reference_roster(), MatchConfig::default(), MatchRng::new(seed));
        play_two_innings(&mut game)
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_match_new_seeds_from_config() {
    let config = MatchConfig::default().with_seed(31);
    let mut seeded = Match::new(
        team("Team A", reference_roster()),
        team("Team B", reference_roster()),
        field(),
        config.clone(),
    )
    .unwrap();
    let mut explicit = build(reference_roster(), config, MatchRng::new(31));

    assert_eq!(play_two_innings(&mut seeded), play_two_innings(&mut explicit));
    assert_eq!(seeded.rng().seed(), 31);
}

#[test]
fn test_step_function_matches_innings_loop() {
    let mut stepped = build(reference_roster(), MatchConfig::default(), MatchRng::new(8));
    let mut looped = build(reference_roster(), MatchConfig::default(), MatchRng::new(8));

    let mut step_events = stepped.start_match().unwrap();
    while stepped.phase() != MatchPhase::Finished {
        step_events.extend(stepped.simulate_ball().unwrap());
    }

    assert_eq!(step_events, play_two_innings(&mut looped));
}

// =============================================================================
// Results and narration
// =============================================================================

/// Identical rosters and identical draws in both innings produce a tie.
#[test]
fn test_identical_sides_tie() {
    let rng = ScriptedRng::constant(0.9, 4).unwrap();
    let mut game = build(uniform_roster(10, 0.5, 0.0), MatchConfig::default(), rng);
    let mut commentary = TextCommentary::new(Vec::new());

    let summary = game.play(&mut commentary).unwrap().clone();

    assert_eq!(summary.result, MatchResult::Tie);
    assert_eq!(game.team(Side::Team1).total_runs(), 40);
    assert_eq!(game.team(Side::Team2).total_runs(), 40);

    let text = String::from_utf8(commentary.into_inner()).unwrap();
    assert!(text.starts_with("Match between Team A and Team B has started!\n"));
    assert!(text.contains("Change of innings: Team B is now batting.\n"));
    assert!(text.contains("1.0 overs completed.\n"));
    assert!(text.contains("Team A scored 40 runs for 0 wickets in 1.4 overs.\n"));
    assert!(text.contains("Team B scored 40 runs for 0 wickets in 1.4 overs.\n"));
    assert!(text.ends_with("The match ended in a tie!\n"));
}

#[test]
fn test_win_reported_with_margin() {
    // Team A's innings draws 6 per ball, Team B's draws 2.
    let runs: Vec<u8> = [6; 10].into_iter().chain([2; 10]).collect();
    let rng = ScriptedRng::new(vec![0.9], runs).unwrap();
    let mut game = build(uniform_roster(10, 0.5, 0.0), MatchConfig::default(), rng);
    let mut events: Vec<MatchEvent> = Vec::new();

    let summary = game.play(&mut events).unwrap();

    assert_eq!(
        summary.result,
        MatchResult::Won {
            winner: Side::Team1,
            winner_name: "Team A".to_string(),
            margin: 40,
        }
    );
    let lines = cricket_sim::commentary::render(events.last().unwrap());
    assert_eq!(lines.last().unwrap(), "Team A wins by 40 runs!");
}

#[test]
fn test_end_match_replays_summary() {
    let mut game = build(reference_roster(), MatchConfig::default(), MatchRng::new(3));
    let events = play_two_innings(&mut game);

    let replay = game.end_match().unwrap();
    assert_eq!(replay.last(), events.last());

    let mut sink: Vec<MatchEvent> = Vec::new();
    sink.on_events(&replay).unwrap();
    assert_eq!(sink, game.end_match().unwrap());
}

// =============================================================================
// Rejected setups
// =============================================================================

/// An over count whose ball total overflows is refused before any ball.
#[test]
fn test_overflowing_overs_rejected() {
    let config = MatchConfig::default().with_max_overs(u32::MAX);
    let result = Match::new(
        team("Team A", reference_roster()),
        team("Team B", reference_roster()),
        field(),
        config,
    );

    assert!(matches!(result, Err(MatchError::InvalidConfig { .. })));
}

/// A stored team that names an unrostered batsman never reaches the ball
/// loop.
#[test]
fn test_stored_team_with_unknown_batsman_rejected() {
    let stored = serde_json::to_value(team("Team A", uniform_roster(2, 0.5, 0.5))).unwrap();

    let mut tampered = stored.clone();
    tampered["batting_order"] = serde_json::json!([7]);
    assert!(serde_json::from_value::<Team>(tampered).is_err());

    let restored: Team = serde_json::from_value(stored).unwrap();
    let mut game = Match::with_rng(
        restored,
        team("Team B", uniform_roster(2, 0.5, 0.5)),
        field(),
        MatchConfig::default(),
        MatchRng::new(4),
    )
    .unwrap();
    game.start_match().unwrap();
    assert!(game.simulate_ball().is_ok());
}
