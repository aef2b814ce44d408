use serde::Serialize;

use crate::numeric::{parse_float, parse_int};
use crate::performance::build_performance_table;
use crate::table::{AVERAGE, AVG, Dataset, ECONOMY_RATE, PLAYER, RUNS, Record, STRIKE_RATE, WICKETS};

/// Batting record with the most runs.
pub fn top_scorer(batting: &Dataset) -> Option<&Record> {
    max_by_int_field(batting, RUNS)
}

/// Bowling record with the most wickets.
pub fn top_wicket_taker(bowling: &Dataset) -> Option<&Record> {
    max_by_int_field(bowling, WICKETS)
}

/// Left fold keeping the first maximum. Records whose field does not parse
/// rank below every numeric record; if none parse, the first record wins.
fn max_by_int_field<'a>(dataset: &'a Dataset, field: &str) -> Option<&'a Record> {
    let mut iter = dataset.iter();
    let first = iter.next()?;
    let mut best = (first, parse_int(first.get(field)));
    for rec in iter {
        let value = parse_int(rec.get(field));
        let better = match (value, best.1) {
            (Some(v), Some(b)) => v > b,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if better {
            best = (rec, value);
        }
    }
    Some(best.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlights {
    /// Raw RUNS text of the top scorer.
    pub top_runs: Option<String>,
    /// Raw WICKETS text of the top wicket-taker.
    pub top_wickets: Option<String>,
    /// Best primary index; only set when both datasets have rows.
    pub performance_leader: Option<i64>,
}

pub fn highlights(batting: &Dataset, bowling: &Dataset) -> Highlights {
    Highlights {
        top_runs: top_scorer(batting).map(|r| r.get(RUNS).unwrap_or_default().to_string()),
        top_wickets: top_wicket_taker(bowling)
            .map(|r| r.get(WICKETS).unwrap_or_default().to_string()),
        performance_leader: performance_leader(batting, bowling),
    }
}

pub fn performance_leader(batting: &Dataset, bowling: &Dataset) -> Option<i64> {
    if batting.is_empty() || bowling.is_empty() {
        return None;
    }
    let table = build_performance_table(batting, bowling);
    Some(table.first().map_or(0, |e| e.score))
}

/// Short sentences naming the leading run scorer and wicket-taker.
pub fn insights(batting: &Dataset, bowling: &Dataset) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(top) = top_scorer(batting) {
        out.push(format!(
            "{} leads with {} runs.",
            top.player().unwrap_or_default(),
            top.get(RUNS).unwrap_or_default()
        ));
    }
    if let Some(top) = top_wicket_taker(bowling) {
        out.push(format!(
            "{} leads with {} wickets.",
            top.player().unwrap_or_default(),
            top.get(WICKETS).unwrap_or_default()
        ));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattingRow {
    pub player: String,
    pub runs: String,
    pub avg: String,
    pub strike_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowlingRow {
    pub player: String,
    pub wickets: String,
    pub economy: String,
    pub average: String,
}

pub fn batting_rows(batting: &Dataset) -> Vec<BattingRow> {
    batting
        .iter()
        .map(|r| BattingRow {
            player: cell(r, PLAYER),
            runs: cell(r, RUNS),
            avg: cell(r, AVG),
            strike_rate: cell(r, STRIKE_RATE),
        })
        .collect()
}

pub fn bowling_rows(bowling: &Dataset) -> Vec<BowlingRow> {
    bowling
        .iter()
        .map(|r| BowlingRow {
            player: cell(r, PLAYER),
            wickets: cell(r, WICKETS),
            economy: cell(r, ECONOMY_RATE),
            average: cell(r, AVERAGE),
        })
        .collect()
}

fn cell(rec: &Record, field: &str) -> String {
    rec.get(field).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

pub fn runs_series(batting: &Dataset) -> BarSeries {
    int_series(batting, RUNS)
}

pub fn wickets_series(bowling: &Dataset) -> BarSeries {
    int_series(bowling, WICKETS)
}

/// Average on x, strike rate on y, one point per batting record.
pub fn average_vs_strike_rate(batting: &Dataset) -> Vec<ScatterPoint> {
    batting
        .iter()
        .map(|r| ScatterPoint {
            x: parse_float(r.get(AVG)),
            y: parse_float(r.get(STRIKE_RATE)),
        })
        .collect()
}

fn int_series(dataset: &Dataset, field: &str) -> BarSeries {
    BarSeries {
        labels: dataset
            .iter()
            .map(|r| r.player().unwrap_or_default().to_string())
            .collect(),
        values: dataset
            .iter()
            .map(|r| parse_int(r.get(field)).map(|v| v as f64))
            .collect(),
    }
}
