use std::collections::HashMap;
use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::data_source::{DataSource, HttpSource, LocalSource};
use crate::state::{ClubConfig, SeasonData, Selection, default_clubs};
use crate::table::{Dataset, parse_table};

const DEFAULT_DATA_ROOT: &str = ".";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory, or base URL when it starts with http:// or https://.
    pub data_root: String,
    pub timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_root: DEFAULT_DATA_ROOT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("CLUB_DATA_ROOT").ok(),
            env::var("CLUB_FETCH_TIMEOUT_SECS").ok(),
        )
    }

    /// Raw variable values to config. Blank values count as unset.
    pub fn from_vars(data_root: Option<String>, timeout_secs: Option<String>) -> Self {
        let data_root = non_blank(data_root).unwrap_or_else(|| DEFAULT_DATA_ROOT.to_string());
        let timeout = Duration::from_secs(
            non_blank(timeout_secs)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS)
                .clamp(1, 120),
        );
        Self { data_root, timeout }
    }

    pub fn is_remote(&self) -> bool {
        let root = self.data_root.trim();
        root.starts_with("http://") || root.starts_with("https://")
    }

    pub fn build_source(&self) -> Box<dyn DataSource> {
        if self.is_remote() {
            Box::new(HttpSource::new(self.data_root.trim(), self.timeout))
        } else {
            Box::new(LocalSource::new(self.data_root.trim()))
        }
    }
}

fn non_blank(val: Option<String>) -> Option<String> {
    val.filter(|val| !val.trim().is_empty())
}

/// Outcome of one load cycle. A failed branch keeps its previous data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub season_loaded: bool,
    pub trends_loaded: bool,
}

/// Fetch batting and bowling concurrently and parse both. Nothing is
/// returned unless both blobs arrive.
pub fn fetch_season(source: &dyn DataSource, selection: &Selection) -> Result<(Dataset, Dataset)> {
    let (bat, bowl) = rayon::join(
        || fetch_table(source, &selection.batting_path()),
        || fetch_table(source, &selection.bowling_path()),
    );
    Ok((bat?, bowl?))
}

pub fn fetch_trends(source: &dyn DataSource, selection: &Selection) -> Result<Dataset> {
    fetch_table(source, &selection.trends_path())
}

fn fetch_table(source: &dyn DataSource, path: &str) -> Result<Dataset> {
    tracing::debug!(path, "fetching");
    let text = source.fetch_text(path)?;
    Ok(parse_table(&text))
}

/// Runs the season and trend branches side by side and applies whichever
/// succeeded. Failures are logged and leave the old state in place.
pub fn load_into(data: &mut SeasonData, source: &dyn DataSource, selection: &Selection) -> LoadReport {
    let (season, trends) = rayon::join(
        || fetch_season(source, selection),
        || fetch_trends(source, selection),
    );

    let mut report = LoadReport::default();
    match season {
        Ok((batting, bowling)) => {
            tracing::info!(
                club = %selection.club_id,
                season = %selection.season,
                team = %selection.team,
                batting = batting.len(),
                bowling = bowling.len(),
                "season data loaded"
            );
            data.replace_season(selection, batting, bowling);
            report.season_loaded = true;
        }
        Err(err) => {
            tracing::error!(
                club = %selection.club_id,
                season = %selection.season,
                error = %format!("{err:#}"),
                "season data load failed"
            );
        }
    }
    match trends {
        Ok(matches) => {
            tracing::info!(
                club = %selection.club_id,
                season = %selection.season,
                matches = matches.len(),
                "trend data loaded"
            );
            data.replace_trends(selection, matches);
            report.trends_loaded = true;
        }
        Err(err) => {
            tracing::error!(
                club = %selection.club_id,
                season = %selection.season,
                error = %format!("{err:#}"),
                "trend load failed"
            );
        }
    }
    report
}

/// Session object: club registry, current selection and loaded data.
pub struct Dashboard {
    pub clubs: HashMap<String, ClubConfig>,
    pub selection: Option<Selection>,
    pub data: SeasonData,
    source: Box<dyn DataSource>,
}

impl Dashboard {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            clubs: default_clubs(),
            selection: None,
            data: SeasonData::new(),
            source,
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.build_source())
    }

    pub fn club(&self, key: &str) -> Option<&ClubConfig> {
        self.clubs.get(key)
    }

    /// Select a club by registry key and load it. Unknown keys are ignored.
    pub fn open_club(&mut self, key: &str) -> Option<LoadReport> {
        let selection = self.clubs.get(key)?.selection();
        Some(self.load(selection))
    }

    /// Update the season for a registered club and reload the same club/team.
    pub fn change_season(&mut self, key: &str, season: &str) -> Option<LoadReport> {
        let club = self.clubs.get_mut(key)?;
        club.season = season.to_string();
        let selection = club.selection();
        Some(self.load(selection))
    }

    pub fn load(&mut self, selection: Selection) -> LoadReport {
        let report = load_into(&mut self.data, self.source.as_ref(), &selection);
        self.selection = Some(selection);
        report
    }

    pub fn reload(&mut self) -> Option<LoadReport> {
        let selection = self.selection.clone()?;
        Some(self.load(selection))
    }
}
