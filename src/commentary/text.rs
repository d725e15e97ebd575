//! Line-oriented narration of match events.

use std::io::Write;

use super::narrator::Narrator;
use crate::core::MatchError;
use crate::play::{EventSink, MatchEvent, MatchResult, MatchSummary};
use crate::rules::Outcome;

/// Render one event as display lines.
#[must_use]
pub fn render(event: &MatchEvent) -> Vec<String> {
    match event {
        MatchEvent::MatchStarted { team1, team2 } => {
            vec![format!("Match between {team1} and {team2} has started!")]
        }
        MatchEvent::BallBowled(ball) => {
            let mut lines = vec![format!(
                "{} ({}) facing {} ({}): {}",
                ball.batsman,
                ball.batting_team,
                ball.bowler,
                ball.bowling_team,
                Narrator::commentary(ball.outcome)
            )];
            if ball.outcome == Outcome::Runs {
                lines.push(format!("{} runs scored.", ball.runs));
            }
            lines
        }
        MatchEvent::OverCompleted { overs, .. } => vec![format!("{overs} overs completed.")],
        MatchEvent::InningsEnded(summary) => vec![format!(
            "{} innings closed at {}/{} in {} overs ({}).",
            summary.team,
            summary.runs,
            summary.wickets,
            summary.overs,
            Narrator::innings_close(summary.reason)
        )],
        MatchEvent::InningsChanged { batting_team, .. } => {
            vec![format!("Change of innings: {batting_team} is now batting.")]
        }
        MatchEvent::MatchEnded(summary) => render_summary(summary),
    }
}

fn render_summary(summary: &MatchSummary) -> Vec<String> {
    let mut lines = vec!["Match ended.".to_string()];

    for innings in &summary.innings {
        lines.push(format!(
            "{} scored {} runs for {} wickets in {} overs.",
            innings.team, innings.runs, innings.wickets, innings.overs
        ));
    }

    lines.push(match &summary.result {
        MatchResult::Won {
            winner_name,
            margin,
            ..
        } => format!("{winner_name} wins by {margin} runs!"),
        MatchResult::Tie => "The match ended in a tie!".to_string(),
    });

    lines
}

/// Writes narration lines to any writer.
///
/// ```
/// use cricket_sim::commentary::TextCommentary;
/// use cricket_sim::play::{EventSink, MatchEvent};
///
/// let mut commentary = TextCommentary::new(Vec::new());
/// commentary
///     .on_event(&MatchEvent::MatchStarted {
///         team1: "Team A".to_string(),
///         team2: "Team B".to_string(),
///     })
///     .unwrap();
///
/// let text = String::from_utf8(commentary.into_inner()).unwrap();
/// assert_eq!(text, "Match between Team A and Team B has started!\n");
/// ```
#[derive(Debug)]
pub struct TextCommentary<W: Write> {
    out: W,
}

impl<W: Write> TextCommentary<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for TextCommentary<W> {
    fn on_event(&mut self, event: &MatchEvent) -> Result<(), MatchError> {
        for line in render(event) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
