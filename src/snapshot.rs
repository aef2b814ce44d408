use anyhow::{Context, Result};
use serde::Serialize;

use crate::metrics::{
    BarSeries, BattingRow, BowlingRow, Highlights, ScatterPoint, average_vs_strike_rate,
    batting_rows, bowling_rows, highlights, insights, runs_series, wickets_series,
};
use crate::rankings::{RankedEntry, Spotlight, spotlight, team_ranking};
use crate::state::{SeasonData, Selection};
use crate::trends::{TrendPoint, season_trend};

/// Everything the team page renders, derived fresh from the loaded datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub selection: Option<Selection>,
    pub batting_table: Vec<BattingRow>,
    pub bowling_table: Vec<BowlingRow>,
    pub highlights: Highlights,
    pub insights: Vec<String>,
    pub ranking: Vec<RankedEntry>,
    pub spotlight: Option<Spotlight>,
    pub runs_chart: BarSeries,
    pub wickets_chart: BarSeries,
    pub average_vs_strike_rate: Vec<ScatterPoint>,
    pub season_trend: Vec<TrendPoint>,
}

impl DashboardSnapshot {
    pub fn build(data: &SeasonData) -> Self {
        let (batting, bowling) = (&data.batting, &data.bowling);
        Self {
            selection: data.season_loaded_for.clone(),
            batting_table: batting_rows(batting),
            bowling_table: bowling_rows(bowling),
            highlights: highlights(batting, bowling),
            insights: insights(batting, bowling),
            ranking: team_ranking(batting, bowling),
            spotlight: spotlight(batting, bowling),
            runs_chart: runs_series(batting),
            wickets_chart: wickets_series(bowling),
            average_vs_strike_rate: average_vs_strike_rate(batting),
            season_trend: season_trend(&data.matches),
        }
    }
}

pub fn to_json(snapshot: &DashboardSnapshot) -> Result<String> {
    serde_json::to_string(snapshot).context("serialize dashboard snapshot")
}
