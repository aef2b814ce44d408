use serde::Serialize;

use crate::numeric::{float_or_zero_if_absent, int_or_zero_if_absent};
use crate::table::{AVG, Dataset, ECONOMY_RATE, OVERS, RUNS, Record, STRIKE_RATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    TopOrderEngine,
    Anchor,
    PowerHitter,
    Finisher,
    StrikeBowler,
    EconomyController,
    Workhorse,
    SquadPlayer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::TopOrderEngine => "Top Order Engine",
            Role::Anchor => "Anchor",
            Role::PowerHitter => "Power Hitter",
            Role::Finisher => "Finisher",
            Role::StrikeBowler => "Strike Bowler",
            Role::EconomyController => "Economy Controller",
            Role::Workhorse => "Workhorse",
            Role::SquadPlayer => "Squad Player",
        }
    }

    /// Badge class for the presentation layer. Squad Player has none.
    pub fn display_class(self) -> &'static str {
        match self {
            Role::TopOrderEngine => "role-engine",
            Role::Anchor => "role-anchor",
            Role::PowerHitter => "role-power",
            Role::Finisher => "role-finisher",
            Role::StrikeBowler => "role-strike",
            Role::EconomyController => "role-economy",
            Role::Workhorse => "role-workhorse",
            Role::SquadPlayer => "",
        }
    }
}

/// Classify a player by name. Batting rules run first; the first rule that
/// matches wins.
pub fn detect_player_role(batting: &Dataset, bowling: &Dataset, name: &str) -> Role {
    classify(batting.find_player(name), bowling.find_player(name))
}

pub fn classify(bat: Option<&Record>, bowl: Option<&Record>) -> Role {
    if let Some(role) = bat.and_then(batting_role) {
        return role;
    }
    if let Some(role) = bowl.and_then(bowling_role) {
        return role;
    }
    Role::SquadPlayer
}

// Stats that are present but non-numeric ("-" for a batter never out or a
// bowler without a wicket) are `None` and fail every threshold.
fn batting_role(bat: &Record) -> Option<Role> {
    let runs = int_or_zero_if_absent(bat.get(RUNS));
    let avg = float_or_zero_if_absent(bat.get(AVG));
    let sr = float_or_zero_if_absent(bat.get(STRIKE_RATE));

    if runs.is_some_and(|r| r >= 400) {
        Some(Role::TopOrderEngine)
    } else if at_least(avg, 30.0) && below(sr, 80.0) {
        Some(Role::Anchor)
    } else if above(sr, 95.0) {
        Some(Role::PowerHitter)
    } else if above(sr, 85.0) && below(avg, 25.0) {
        Some(Role::Finisher)
    } else {
        None
    }
}

fn bowling_role(bowl: &Record) -> Option<Role> {
    let economy = float_or_zero_if_absent(bowl.get(ECONOMY_RATE));
    // Balls per wicket, not the batting column of the same name.
    let strike = float_or_zero_if_absent(bowl.get(STRIKE_RATE));
    let overs = float_or_zero_if_absent(bowl.get(OVERS));

    if below(strike, 25.0) {
        Some(Role::StrikeBowler)
    } else if below(economy, 4.0) {
        Some(Role::EconomyController)
    } else if at_least(overs, 100.0) {
        Some(Role::Workhorse)
    } else {
        None
    }
}

fn below(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v < limit)
}

fn above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v > limit)
}

fn at_least(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v >= limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::WICKETS;

    fn bat(runs: &str, avg: &str, sr: &str) -> Record {
        Record::new()
            .with(RUNS, runs)
            .with(AVG, avg)
            .with(STRIKE_RATE, sr)
    }

    fn bowl(sr: &str, eco: &str, overs: &str) -> Record {
        Record::new()
            .with(STRIKE_RATE, sr)
            .with(ECONOMY_RATE, eco)
            .with(OVERS, overs)
    }

    #[test]
    fn batting_thresholds() {
        assert_eq!(classify(Some(&bat("400", "10", "50")), None), Role::TopOrderEngine);
        assert_eq!(classify(Some(&bat("399", "30", "79.9")), None), Role::Anchor);
        assert_eq!(classify(Some(&bat("100", "30", "80")), None), Role::SquadPlayer);
        assert_eq!(classify(Some(&bat("100", "40", "95.1")), None), Role::PowerHitter);
        assert_eq!(classify(Some(&bat("100", "40", "95")), None), Role::SquadPlayer);
        assert_eq!(classify(Some(&bat("100", "24.9", "86")), None), Role::Finisher);
        assert_eq!(classify(Some(&bat("100", "25", "86")), None), Role::SquadPlayer);
    }

    #[test]
    fn bowling_thresholds() {
        assert_eq!(classify(None, Some(&bowl("24.9", "6", "10"))), Role::StrikeBowler);
        assert_eq!(classify(None, Some(&bowl("25", "3.9", "10"))), Role::EconomyController);
        assert_eq!(classify(None, Some(&bowl("25", "4", "100"))), Role::Workhorse);
        assert_eq!(classify(None, Some(&bowl("25", "4", "99.5"))), Role::SquadPlayer);
    }

    #[test]
    fn missing_bowling_fields_default_to_zero() {
        // Zero strike rate is below 25.
        assert_eq!(classify(None, Some(&Record::new())), Role::StrikeBowler);
    }

    #[test]
    fn dash_bowling_strike_rate_is_not_a_strike_bowler() {
        let w = Record::new()
            .with(WICKETS, "0")
            .with(STRIKE_RATE, "-")
            .with(ECONOMY_RATE, "6.5")
            .with(OVERS, "8");
        assert_eq!(classify(None, Some(&w)), Role::SquadPlayer);
        // Strike rate unknown, economy still counts.
        assert_eq!(classify(None, Some(&bowl("-", "3.2", "20"))), Role::EconomyController);
    }

    #[test]
    fn dash_average_fails_average_rules() {
        assert_eq!(classify(Some(&bat("60", "-", "90")), None), Role::SquadPlayer);
        assert_eq!(classify(Some(&bat("60", "-", "70")), None), Role::SquadPlayer);
        // Strike rate rule does not look at the average.
        assert_eq!(classify(Some(&bat("60", "-", "120")), None), Role::PowerHitter);
        assert_eq!(classify(Some(&bat("DNB", "-", "-")), None), Role::SquadPlayer);
    }

    #[test]
    fn blank_stats_count_as_zero() {
        assert_eq!(classify(None, Some(&bowl("", "7", "12"))), Role::StrikeBowler);
        assert_eq!(classify(Some(&bat("", "", "")), None), Role::SquadPlayer);
    }

    #[test]
    fn bowling_rules_apply_when_batting_rules_miss() {
        let b = bat("120", "20", "70");
        let w = bowl("30", "3.5", "40");
        assert_eq!(classify(Some(&b), Some(&w)), Role::EconomyController);
    }

    #[test]
    fn squad_player_has_no_class() {
        assert_eq!(classify(None, None), Role::SquadPlayer);
        assert_eq!(Role::SquadPlayer.display_class(), "");
    }
}
