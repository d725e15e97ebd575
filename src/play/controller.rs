//! The match controller.
//!
//! Drives the innings lifecycle: batsman and bowler selection, the ball
//! loop, end-of-innings detection, the innings change and the final result.
//!
//! ## Ball sequencing
//!
//! Each delivery runs in a fixed order:
//!
//! 1. the predictor decides the outcome (recording a wicket on `Out`)
//! 2. on `Runs`, a run value in `0..=max_runs_per_ball` is drawn and credited
//! 3. the ball count advances; every full over emits `OverCompleted`
//! 4. if the predictor reports the innings over, the innings ends
//! 5. otherwise the next batsman in the order takes strike, and running off
//!    the end of the order ends the innings
//!
//! Ending the first innings swaps sides. Ending the second finishes the match.

use tracing::{debug, info};

use super::events::{BallReport, EventSink, MatchEvent};
use super::phase::{Innings, MatchPhase};
use super::summary::{InningsEndReason, InningsSummary, MatchResult, MatchSummary, Scorecard};
use crate::core::{BallRng, MatchConfig, MatchError, MatchRng, Side, SideMap};
use crate::rules::{Outcome, OutcomePredictor};
use crate::squad::{Field, Player, PlayerId, Team};

/// A two-innings limited-overs match.
///
/// Generic over the random source so tests can inject scripted draws;
/// [`Match::new`] seeds a [`MatchRng`] from the configuration.
///
/// ```
/// use cricket_sim::core::MatchConfig;
/// use cricket_sim::play::{Match, MatchEvent};
/// use cricket_sim::squad::{Field, FieldSize, PitchCondition, Player, Team};
///
/// let roster = || vec![
///     Player::new("Opener", 0.6, 0.2, 0.8, 0.6, 0.7).unwrap(),
///     Player::new("Keeper", 0.4, 0.1, 0.9, 0.5, 0.6).unwrap(),
/// ];
/// let team1 = Team::new("Team A", roster()).unwrap().with_roster_batting_order().unwrap();
/// let team2 = Team::new("Team B", roster()).unwrap().with_roster_batting_order().unwrap();
/// let field = Field::new(FieldSize::Large, 0.8, PitchCondition::Dry, 1.2).unwrap();
///
/// let mut game = Match::new(team1, team2, field, MatchConfig::default()).unwrap();
/// let mut events: Vec<MatchEvent> = Vec::new();
/// let summary = game.play(&mut events).unwrap();
///
/// assert_eq!(summary.innings.len(), 2);
/// ```
#[derive(Debug)]
pub struct Match<R: BallRng = MatchRng> {
    teams: SideMap<Team>,
    field: Field,
    config: MatchConfig,
    predictor: OutcomePredictor,
    rng: R,

    phase: MatchPhase,
    batting: Side,
    scorecard: Scorecard,
    completed_innings: Vec<InningsSummary>,
    summary: Option<MatchSummary>,
}

impl Match<MatchRng> {
    /// Create a match seeded from `config.seed`.
    pub fn new(
        team1: Team,
        team2: Team,
        field: Field,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        let rng = MatchRng::new(config.seed);
        Self::with_rng(team1, team2, field, config, rng)
    }
}

impl<R: BallRng> Match<R> {
    /// Create a match drawing from the given random source.
    ///
    /// `team1` bats first.
    pub fn with_rng(
        team1: Team,
        team2: Team,
        field: Field,
        config: MatchConfig,
        rng: R,
    ) -> Result<Self, MatchError> {
        config.validate()?;

        if team1.name() == team2.name() {
            return Err(MatchError::DuplicateTeamName {
                name: team1.name().to_string(),
            });
        }
        for team in [&team1, &team2] {
            if team.batting_order().is_empty() {
                return Err(MatchError::EmptyBattingOrder {
                    team: team.name().to_string(),
                });
            }
        }

        Ok(Self {
            teams: SideMap::from_parts(team1, team2),
            field,
            predictor: OutcomePredictor::new(&config),
            config,
            rng,
            phase: MatchPhase::NotStarted,
            batting: Side::Team1,
            scorecard: Scorecard::new(),
            completed_innings: Vec::with_capacity(2),
            summary: None,
        })
    }

    // === Lifecycle ===

    /// Open the first innings with `team1` batting.
    pub fn start_match(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        match self.phase {
            MatchPhase::NotStarted => {}
            MatchPhase::InningsInProgress(_) => return Err(MatchError::MatchAlreadyStarted),
            MatchPhase::Finished => {
                return Err(MatchError::OperationAfterMatchFinished {
                    operation: "start match",
                })
            }
        }

        for side in Side::BOTH {
            self.teams[side].reset_for_match();
        }
        self.predictor.reset_innings();
        self.batting = Side::Team1;
        self.phase = MatchPhase::InningsInProgress(Innings::First);

        let team1 = self.teams[Side::Team1].name().to_string();
        let team2 = self.teams[Side::Team2].name().to_string();
        info!(%team1, %team2, seed = self.config.seed, "match started");

        Ok(vec![MatchEvent::MatchStarted { team1, team2 }])
    }

    /// Bowl one ball and apply whatever transition follows it.
    ///
    /// This is the resumable step function: calling it until the phase is
    /// `Finished` plays the whole match.
    pub fn simulate_ball(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        let innings = self.require_innings("simulate ball")?;

        let mut events = Vec::with_capacity(2);
        self.bowl_delivery(innings, &mut events)?;
        self.after_delivery(innings, &mut events);
        Ok(events)
    }

    /// Bowl until the current innings ends.
    pub fn simulate_innings(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        let innings = self.require_innings("simulate innings")?;

        let mut events = Vec::new();
        while self.phase == MatchPhase::InningsInProgress(innings) {
            self.bowl_delivery(innings, &mut events)?;
            self.after_delivery(innings, &mut events);
        }
        Ok(events)
    }

    /// Report the finished match again.
    ///
    /// The match ends on its own after the second innings; this only
    /// replays the `MatchEnded` event and may be called any number of times.
    pub fn end_match(&self) -> Result<Vec<MatchEvent>, MatchError> {
        self.summary
            .as_ref()
            .map(|summary| vec![MatchEvent::MatchEnded(summary.clone())])
            .ok_or(MatchError::MatchNotFinished)
    }

    /// Start (if needed) and play to the end, feeding every event to `sink`.
    pub fn play(&mut self, sink: &mut dyn EventSink) -> Result<&MatchSummary, MatchError> {
        if self.phase == MatchPhase::NotStarted {
            let events = self.start_match()?;
            sink.on_events(&events)?;
        }
        while !self.phase.is_finished() {
            let events = self.simulate_innings()?;
            sink.on_events(&events)?;
        }
        self.summary.as_ref().ok_or(MatchError::MatchNotFinished)
    }

    fn require_innings(&self, operation: &'static str) -> Result<Innings, MatchError> {
        match self.phase {
            MatchPhase::InningsInProgress(innings) => Ok(innings),
            MatchPhase::NotStarted => Err(MatchError::MatchNotStarted { operation }),
            MatchPhase::Finished => Err(MatchError::OperationAfterMatchFinished { operation }),
        }
    }

    // === Ball loop ===

    fn bowl_delivery(
        &mut self,
        innings: Innings,
        events: &mut Vec<MatchEvent>,
    ) -> Result<(), MatchError> {
        let batting = self.batting;
        let bowling = batting.opponent();

        let batting_team = &self.teams[batting];
        let bowling_team = &self.teams[bowling];
        let batsman_id = batting_team.current_batsman().ok_or_else(|| {
            MatchError::BattingOrderExhaustedWithoutTermination {
                team: batting_team.name().to_string(),
                index: batting_team.current_batsman_index(),
            }
        })?;
        let bowler_id = bowling_team.opening_bowler();
        let batsman = rostered(batting_team, batsman_id)?;
        let bowler = rostered(bowling_team, bowler_id)?;

        let outcome = self.predictor.predict_ball(batsman, bowler, batting, &mut self.rng);
        let runs = match outcome {
            Outcome::Runs => self.rng.next_runs(self.config.max_runs_per_ball),
            Outcome::Out => 0,
        };

        let batsman_name = batsman.name().to_string();
        let batting_name = batting_team.name().to_string();
        let bowler_name = bowler.name().to_string();
        let bowling_name = bowling_team.name().to_string();

        // The predictor already counted the wicket; only runs go back to it.
        self.predictor.record_runs(batting, u32::from(runs));
        let team = &mut self.teams[batting];
        team.add_runs(u32::from(runs));
        if outcome.is_wicket() {
            team.add_wicket();
        }
        self.scorecard.record_delivery(batsman_id, bowler_id, outcome, runs);
        let ball = self.predictor.record_ball();
        let overs = self.predictor.overs();
        let score = self.predictor.score(batting);
        let wickets = self.predictor.wickets(batting);

        debug!(
            %innings,
            batsman = %batsman_name,
            bowler = %bowler_name,
            ?outcome,
            runs,
            %overs,
            "ball bowled"
        );

        events.push(MatchEvent::BallBowled(BallReport {
            innings,
            ball,
            overs,
            batsman: batsman_name,
            batting_team: batting_name,
            bowler: bowler_name,
            bowling_team: bowling_name,
            outcome,
            runs,
            score,
            wickets,
        }));

        if ball.completes_over(self.config.balls_per_over) {
            debug!(%innings, %overs, score, wickets, "over completed");
            events.push(MatchEvent::OverCompleted {
                innings,
                overs,
                score,
                wickets,
            });
        }

        Ok(())
    }

    fn after_delivery(&mut self, innings: Innings, events: &mut Vec<MatchEvent>) {
        let batting = self.batting;

        let reason = if self.predictor.is_innings_over(batting) {
            if self.predictor.wickets(batting) >= self.config.max_wickets {
                Some(InningsEndReason::AllOut)
            } else {
                Some(InningsEndReason::OversExhausted)
            }
        } else if !self.teams[batting].advance_batsman() {
            Some(InningsEndReason::BattingOrderExhausted)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.end_innings(innings, reason, events);
        }
    }

    // === Transitions ===

    fn end_innings(
        &mut self,
        innings: Innings,
        reason: InningsEndReason,
        events: &mut Vec<MatchEvent>,
    ) {
        let batting = self.batting;
        let summary = InningsSummary {
            innings,
            side: batting,
            team: self.teams[batting].name().to_string(),
            runs: self.predictor.score(batting),
            wickets: self.predictor.wickets(batting),
            balls: self.predictor.balls(),
            overs: self.predictor.overs(),
            reason,
            scorecard: std::mem::take(&mut self.scorecard),
        };

        info!(
            %innings,
            team = %summary.team,
            runs = summary.runs,
            wickets = summary.wickets,
            overs = %summary.overs,
            ?reason,
            "innings ended"
        );

        self.completed_innings.push(summary.clone());
        events.push(MatchEvent::InningsEnded(summary));
        self.change_innings(innings, events);
    }

    /// Zero the per-innings counters, then hand the bat to the other side
    /// after the first innings or finish the match after the second.
    fn change_innings(&mut self, innings: Innings, events: &mut Vec<MatchEvent>) {
        self.predictor.reset_innings();
        self.teams[self.batting].reset_batsman();

        match innings {
            Innings::First => {
                self.batting = self.batting.opponent();
                self.teams[self.batting].reset_batsman();
                self.phase = MatchPhase::InningsInProgress(Innings::Second);

                let batting_team = self.teams[self.batting].name().to_string();
                info!(%batting_team, "change of innings");
                events.push(MatchEvent::InningsChanged {
                    innings: Innings::Second,
                    batting_team,
                });
            }
            Innings::Second => self.finish(events),
        }
    }

    fn finish(&mut self, events: &mut Vec<MatchEvent>) {
        let result = MatchResult::from_teams(&self.teams);
        let summary = MatchSummary {
            innings: self.completed_innings.clone(),
            result,
        };

        info!(result = ?summary.result, "match ended");

        self.phase = MatchPhase::Finished;
        self.summary = Some(summary.clone());
        events.push(MatchEvent::MatchEnded(summary));
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The innings in progress, if any.
    #[must_use]
    pub fn innings(&self) -> Option<Innings> {
        self.phase.innings()
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side]
    }

    /// The side currently batting (the side that batted last once finished).
    #[must_use]
    pub fn batting_side(&self) -> Side {
        self.batting
    }

    #[must_use]
    pub fn bowling_side(&self) -> Side {
        self.batting.opponent()
    }

    /// The batsman on strike while an innings is in progress.
    #[must_use]
    pub fn current_batsman(&self) -> Option<&Player> {
        self.phase.innings()?;
        let team = &self.teams[self.batting];
        team.current_batsman().and_then(|id| team.player(id))
    }

    /// The bowler while an innings is in progress.
    #[must_use]
    pub fn current_bowler(&self) -> Option<&Player> {
        self.phase.innings()?;
        let team = &self.teams[self.bowling_side()];
        team.player(team.opening_bowler())
    }

    /// Cursor into the batting side's order.
    #[must_use]
    pub fn current_batsman_index(&self) -> usize {
        self.teams[self.batting].current_batsman_index()
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Per-innings counters.
    #[must_use]
    pub fn predictor(&self) -> &OutcomePredictor {
        &self.predictor
    }

    /// Figures for the innings in progress.
    #[must_use]
    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// Innings completed so far.
    #[must_use]
    pub fn completed_innings(&self) -> &[InningsSummary] {
        &self.completed_innings
    }

    /// The final summary once the match is finished.
    #[must_use]
    pub fn summary(&self) -> Option<&MatchSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

fn rostered(team: &Team, id: PlayerId) -> Result<&Player, MatchError> {
    team.player(id).ok_or_else(|| MatchError::UnknownPlayer {
        team: team.name().to_string(),
        player: id.index(),
    })
}
