use std::fmt;

use serde::Serialize;

use crate::numeric::{float_or_zero, int_or_zero, round_half_up};
use crate::table::{AVG, Dataset, RUNS, Record, STRIKE_RATE, WICKETS};

const RUNS_WEIGHT: f64 = 0.4;
const AVG_WEIGHT: f64 = 10.0;
const STRIKE_RATE_WEIGHT: f64 = 0.2;
const WICKET_WEIGHT: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceEntry {
    pub player: String,
    pub score: i64,
}

/// 1-based position in the primary ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    Ranked(usize),
    Unranked,
}

impl Rank {
    pub fn position(self) -> Option<usize> {
        match self {
            Rank::Ranked(pos) => Some(pos),
            Rank::Unranked => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(pos) => write!(f, "#{pos}"),
            Rank::Unranked => f.write_str("#-"),
        }
    }
}

/// Primary performance index: runs, average, strike rate, plus wickets when
/// the player also bowls.
pub fn primary_score(bat: &Record, bowl: Option<&Record>) -> i64 {
    let raw = batting_terms(bat) + strike_rate_term(bat) + wicket_term(bowl);
    round_half_up(raw)
}

/// Spotlight variant. Same as `primary_score` without the strike rate term.
/// Kept separate on purpose; the two are not interchangeable.
pub fn spotlight_score(bat: &Record, bowl: Option<&Record>) -> i64 {
    let raw = batting_terms(bat) + wicket_term(bowl);
    round_half_up(raw)
}

/// Per-player primary index for the profile view. Either record may be
/// missing, so a bowler who never batted still scores on wickets.
pub fn player_score(bat: Option<&Record>, bowl: Option<&Record>) -> i64 {
    let mut raw = 0.0;
    if let Some(bat) = bat {
        raw += batting_terms(bat) + strike_rate_term(bat);
    }
    raw += wicket_term(bowl);
    round_half_up(raw)
}

/// Primary ranking: one entry per batting record, sorted by score descending.
/// Players who only bowl are not listed. Ties keep batting file order.
pub fn build_performance_table(batting: &Dataset, bowling: &Dataset) -> Vec<PerformanceEntry> {
    score_and_sort(batting, bowling, primary_score)
}

pub fn build_spotlight_table(batting: &Dataset, bowling: &Dataset) -> Vec<PerformanceEntry> {
    score_and_sort(batting, bowling, spotlight_score)
}

/// Rows without a PLAYER are listed under an empty name but never ranked by it.
pub fn rank_of(table: &[PerformanceEntry], player: &str) -> Rank {
    if player.is_empty() {
        return Rank::Unranked;
    }
    table
        .iter()
        .position(|e| e.player == player)
        .map_or(Rank::Unranked, |idx| Rank::Ranked(idx + 1))
}

/// Rank lookup that rebuilds the primary ranking from the datasets.
pub fn team_rank(batting: &Dataset, bowling: &Dataset, player: &str) -> Rank {
    rank_of(&build_performance_table(batting, bowling), player)
}

fn score_and_sort(
    batting: &Dataset,
    bowling: &Dataset,
    score: fn(&Record, Option<&Record>) -> i64,
) -> Vec<PerformanceEntry> {
    let mut out: Vec<PerformanceEntry> = batting
        .iter()
        .map(|bat| {
            let bowl = bat.player().and_then(|name| bowling.find_player(name));
            PerformanceEntry {
                player: bat.player().unwrap_or_default().to_string(),
                score: score(bat, bowl),
            }
        })
        .collect();
    // sort_by is stable.
    out.sort_by(|a, b| b.score.cmp(&a.score));
    out
}

fn batting_terms(bat: &Record) -> f64 {
    int_or_zero(bat.get(RUNS)) as f64 * RUNS_WEIGHT + float_or_zero(bat.get(AVG)) * AVG_WEIGHT
}

fn strike_rate_term(bat: &Record) -> f64 {
    float_or_zero(bat.get(STRIKE_RATE)) * STRIKE_RATE_WEIGHT
}

fn wicket_term(bowl: Option<&Record>) -> f64 {
    bowl.map_or(0.0, |b| int_or_zero(b.get(WICKETS)) as f64 * WICKET_WEIGHT)
}
