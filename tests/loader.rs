use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use club_insights::data_source::{DataSource, LocalSource};
use club_insights::loader::{Dashboard, LoadReport, load_into};
use club_insights::snapshot::{DashboardSnapshot, to_json};
use club_insights::state::{SeasonData, Selection};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[derive(Default)]
struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    fn with_season(mut self, season: &str, batting: bool, bowling: bool, trends: bool) -> Self {
        let dir = format!("data/NeathCC/{season}");
        if batting {
            self.files.insert(
                format!("{dir}/1xi_batting_stats.csv"),
                read_fixture("1xi_batting_stats.csv"),
            );
        }
        if bowling {
            self.files.insert(
                format!("{dir}/1xi_bowling_stats.csv"),
                read_fixture("1xi_bowling_stats.csv"),
            );
        }
        if trends {
            self.files.insert(
                format!("{dir}/1xi_match_trends.csv"),
                read_fixture("1xi_match_trends.csv"),
            );
        }
        self
    }
}

impl DataSource for MemorySource {
    fn fetch_text(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("missing {path}"))
    }
}

fn neath(season: &str) -> Selection {
    Selection {
        club_id: "NeathCC".to_string(),
        season: season.to_string(),
        team: "1xi".to_string(),
    }
}

#[test]
fn full_load_populates_both_branches() {
    let mut dash = Dashboard::new(Box::new(MemorySource::default().with_season("2025", true, true, true)));
    let report = dash.open_club("neath").expect("neath is registered");
    assert_eq!(
        report,
        LoadReport {
            season_loaded: true,
            trends_loaded: true
        }
    );
    assert_eq!(dash.data.batting.len(), 6);
    assert_eq!(dash.data.bowling.len(), 5);
    assert_eq!(dash.data.matches.len(), 3);
    assert_eq!(dash.selection, Some(neath("2025")));
}

#[test]
fn missing_bowling_file_keeps_previous_season() {
    let source = MemorySource::default()
        .with_season("2025", true, true, true)
        .with_season("2024", true, false, true);
    let mut dash = Dashboard::new(Box::new(source));
    dash.open_club("neath");

    let report = dash.change_season("neath", "2024").expect("neath is registered");
    assert!(!report.season_loaded);
    assert!(report.trends_loaded);
    // Season branch is stale, trend branch moved on.
    assert_eq!(dash.data.season_loaded_for, Some(neath("2025")));
    assert_eq!(dash.data.trends_loaded_for, Some(neath("2024")));
    assert_eq!(dash.data.batting.len(), 6);
    assert_eq!(dash.club("neath").map(|c| c.season.as_str()), Some("2024"));
}

#[test]
fn trend_failure_does_not_block_season() {
    let source = MemorySource::default().with_season("2025", true, true, false);
    let mut data = SeasonData::new();
    let report = load_into(&mut data, &source, &neath("2025"));
    assert!(report.season_loaded);
    assert!(!report.trends_loaded);
    assert!(data.has_season());
    assert!(data.matches.is_empty());
}

#[test]
fn unknown_club_is_ignored() {
    let mut dash = Dashboard::new(Box::new(MemorySource::default()));
    assert!(dash.open_club("swansea").is_none());
    assert!(dash.reload().is_none());
}

#[test]
fn loads_from_local_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let season_dir = dir.path().join("data").join("NeathCC").join("2025");
    fs::create_dir_all(&season_dir).expect("create season dir");
    for name in [
        "1xi_batting_stats.csv",
        "1xi_bowling_stats.csv",
        "1xi_match_trends.csv",
    ] {
        fs::write(season_dir.join(name), read_fixture(name)).expect("write fixture");
    }

    let mut dash = Dashboard::new(Box::new(LocalSource::new(dir.path())));
    let report = dash.open_club("neath").expect("neath is registered");
    assert!(report.season_loaded && report.trends_loaded);
    assert_eq!(dash.data.bowling.records[3].player(), Some("Carwyn Davies"));
}

#[test]
fn snapshot_serializes_render_outputs() {
    let mut dash = Dashboard::new(Box::new(MemorySource::default().with_season("2025", true, true, true)));
    dash.open_club("neath");

    let snapshot = DashboardSnapshot::build(&dash.data);
    assert_eq!(snapshot.ranking.len(), 6);
    assert_eq!(snapshot.insights[0], "Rhys Morgan leads with 512 runs.");

    let json = to_json(&snapshot).expect("snapshot should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["ranking"][0]["player"], "Gareth Hughes");
    assert_eq!(value["ranking"][0]["tier"], "Elite");
    assert_eq!(value["spotlight"]["role"], "StrikeBowler");
    assert_eq!(value["highlights"]["top_wickets"], "28");
    assert_eq!(value["season_trend"][2]["runs_for"], serde_json::Value::Null);
}
