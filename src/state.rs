use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::table::Dataset;

pub const TRENDS_FILE: &str = "1xi_match_trends.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    pub id: String,
    pub name: String,
    pub season: String,
    pub team: String,
    pub logo: String,
}

impl ClubConfig {
    pub fn selection(&self) -> Selection {
        Selection {
            club_id: self.id.clone(),
            season: self.season.clone(),
            team: self.team.clone(),
        }
    }
}

pub fn default_clubs() -> HashMap<String, ClubConfig> {
    HashMap::from([(
        "neath".to_string(),
        ClubConfig {
            id: "NeathCC".to_string(),
            name: "Neath Cricket Club".to_string(),
            season: "2025".to_string(),
            team: "1xi".to_string(),
            logo: "images/clubbadges/neathccbadge.jpg".to_string(),
        },
    )])
}

/// Club/season/team triple that keys every data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub club_id: String,
    pub season: String,
    pub team: String,
}

impl Selection {
    pub fn season_dir(&self) -> String {
        format!("data/{}/{}", self.club_id, self.season)
    }

    pub fn prefix(&self) -> String {
        format!("{}/{}", self.season_dir(), self.team)
    }

    pub fn batting_path(&self) -> String {
        format!("{}_batting_stats.csv", self.prefix())
    }

    pub fn bowling_path(&self) -> String {
        format!("{}_bowling_stats.csv", self.prefix())
    }

    pub fn trends_path(&self) -> String {
        format!("{}/{}", self.season_dir(), TRENDS_FILE)
    }
}

/// In-memory datasets for the current selection. Each load replaces a
/// whole branch; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct SeasonData {
    pub batting: Dataset,
    pub bowling: Dataset,
    pub matches: Dataset,
    pub season_loaded_for: Option<Selection>,
    pub trends_loaded_for: Option<Selection>,
}

impl SeasonData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_season(&mut self, selection: &Selection, batting: Dataset, bowling: Dataset) {
        self.batting = batting;
        self.bowling = bowling;
        self.season_loaded_for = Some(selection.clone());
    }

    pub fn replace_trends(&mut self, selection: &Selection, matches: Dataset) {
        self.matches = matches;
        self.trends_loaded_for = Some(selection.clone());
    }

    pub fn has_season(&self) -> bool {
        self.season_loaded_for.is_some()
    }
}
