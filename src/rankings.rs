use serde::Serialize;

use crate::numeric::{float_or_zero, int_or_zero};
use crate::performance::{
    Rank, build_performance_table, build_spotlight_table, player_score, rank_of,
};
use crate::roles::{Role, classify, detect_player_role};
use crate::table::{AVG, Dataset, ECONOMY_RATE, RUNS, Record, STRIKE_RATE, WICKETS};

const ELITE_MIN: i64 = 800;
const STRONG_MIN: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Elite,
    Strong,
    Contributor,
}

impl Tier {
    pub fn from_score(score: i64) -> Self {
        if score >= ELITE_MIN {
            Tier::Elite
        } else if score >= STRONG_MIN {
            Tier::Strong
        } else {
            Tier::Contributor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Elite => "Elite",
            Tier::Strong => "Strong",
            Tier::Contributor => "Contributor",
        }
    }

    pub fn display_class(self) -> &'static str {
        match self {
            Tier::Elite => "tier-elite",
            Tier::Strong => "tier-strong",
            Tier::Contributor => "tier-support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub player: String,
    pub score: i64,
    pub role: Role,
    pub tier: Tier,
}

/// Primary ranking with role and tier attached, in ranking order.
pub fn team_ranking(batting: &Dataset, bowling: &Dataset) -> Vec<RankedEntry> {
    build_performance_table(batting, bowling)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| RankedEntry {
            rank: idx + 1,
            role: detect_player_role(batting, bowling, &entry.player),
            tier: Tier::from_score(entry.score),
            player: entry.player,
            score: entry.score,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spotlight {
    pub player: String,
    pub role: Role,
    /// Raw RUNS text, "0" without a batting record.
    pub runs: String,
    /// Raw WICKETS text, "0" without a bowling record.
    pub wickets: String,
    pub score: i64,
}

/// Top of the spotlight ranking (no strike rate term). `None` with no batting rows.
pub fn spotlight(batting: &Dataset, bowling: &Dataset) -> Option<Spotlight> {
    let top = build_spotlight_table(batting, bowling).into_iter().next()?;
    let bat = batting.find_player(&top.player);
    let bowl = bowling.find_player(&top.player);
    Some(Spotlight {
        role: classify(bat, bowl),
        runs: raw_or_zero(bat, RUNS),
        wickets: raw_or_zero(bowl, WICKETS),
        player: top.player,
        score: top.score,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingProfile {
    pub runs: String,
    pub avg: String,
    pub strike_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingProfile {
    pub wickets: String,
    pub economy: String,
}

/// Numbers behind the two profile bar charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCharts {
    /// Runs, average, strike rate.
    pub batting: [f64; 3],
    /// Wickets, economy.
    pub bowling: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player: String,
    pub role: Role,
    pub batting: BattingProfile,
    pub bowling: BowlingProfile,
    pub score: i64,
    pub rank: Rank,
    pub charts: ProfileCharts,
}

pub fn player_profile(batting: &Dataset, bowling: &Dataset, name: &str) -> PlayerProfile {
    let bat = batting.find_player(name);
    let bowl = bowling.find_player(name);
    let table = build_performance_table(batting, bowling);

    PlayerProfile {
        player: name.to_string(),
        role: classify(bat, bowl),
        batting: BattingProfile {
            runs: raw_or_zero(bat, RUNS),
            avg: raw_or_zero(bat, AVG),
            strike_rate: raw_or_zero(bat, STRIKE_RATE),
        },
        bowling: BowlingProfile {
            wickets: raw_or_zero(bowl, WICKETS),
            economy: raw_or_zero(bowl, ECONOMY_RATE),
        },
        score: player_score(bat, bowl),
        rank: rank_of(&table, name),
        charts: ProfileCharts {
            batting: bat.map_or([0.0; 3], |b| {
                [
                    int_or_zero(b.get(RUNS)) as f64,
                    float_or_zero(b.get(AVG)),
                    float_or_zero(b.get(STRIKE_RATE)),
                ]
            }),
            bowling: bowl.map_or([0.0; 2], |b| {
                [
                    int_or_zero(b.get(WICKETS)) as f64,
                    float_or_zero(b.get(ECONOMY_RATE)),
                ]
            }),
        },
    }
}

fn raw_or_zero(rec: Option<&Record>, field: &str) -> String {
    match rec {
        Some(r) => r.get(field).unwrap_or_default().to_string(),
        None => "0".to_string(),
    }
}
