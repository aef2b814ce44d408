use serde::Serialize;

use crate::numeric::parse_int;
use crate::table::Dataset;

pub const DATE: &str = "DATE";
pub const OPPOSITION: &str = "OPPOSITION";
pub const RUNS_FOR: &str = "RUNS_FOR";
pub const RUNS_AGAINST: &str = "RUNS_AGAINST";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub runs_for: Option<i64>,
    pub runs_against: Option<i64>,
}

/// One point per match in file order. Non-numeric run totals stay `None`
/// so the chart shows a gap rather than a zero.
pub fn season_trend(matches: &Dataset) -> Vec<TrendPoint> {
    matches
        .iter()
        .map(|m| TrendPoint {
            label: format!(
                "{} - {}",
                m.get(DATE).unwrap_or_default(),
                m.get(OPPOSITION).unwrap_or_default()
            ),
            runs_for: parse_int(m.get(RUNS_FOR)),
            runs_against: parse_int(m.get(RUNS_AGAINST)),
        })
        .collect()
}
