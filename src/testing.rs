//! Testing helpers.

use assert_float_eq::*;

use crate::match_data::{MatchRecord, Team, TeamEvent, TeamStatistics};

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn goal(minute: i32, player: &str) -> TeamEvent {
    TeamEvent {
        type_of_event: "goal".into(),
        time: Some(minute),
        player: player.into(),
        position: "in".into(),
    }
}

/// New Zealand v Norway, opening match of the 2023 tournament.
pub fn sample_record() -> MatchRecord {
    MatchRecord {
        id: 0,
        venue: "Eden Park".into(),
        location: "Auckland".into(),
        stage_name: "First Stage".into(),
        datetime: "2023-07-20T07:00:00Z".into(),
        home_team: Team {
            goals: 1,
            code: "NZL".into(),
            name: "New Zealand".into(),
            penalties: None,
        },
        away_team: Team {
            goals: 0,
            code: "NOR".into(),
            name: "Norway".into(),
            penalties: None,
        },
        home_team_statistics: TeamStatistics {
            ball_possession: 43.0,
            num_passes: 334.0,
            attempts_on_goal: 7.0,
            distance_walking: 35_000.0,
            distance_jogging: 45_000.0,
            distance_speedrunning: 12_000.0,
            distance_speedsprinting: 8_000.0,
            distance_covered: 0.0,
        },
        away_team_statistics: TeamStatistics {
            ball_possession: 57.0,
            num_passes: 471.0,
            attempts_on_goal: 13.0,
            distance_walking: 36_000.0,
            distance_jogging: 46_000.0,
            distance_speedrunning: 11_000.0,
            distance_speedsprinting: 7_000.0,
            distance_covered: 0.0,
        },
        home_team_events: vec![goal(48, "Hannah WILKINSON")],
        away_team_events: vec![],
    }
}

/// A match with nothing recorded beyond the teams.
pub fn blank_record() -> MatchRecord {
    MatchRecord {
        id: 99,
        datetime: "2023-08-20T10:00:00Z".into(),
        home_team: Team {
            code: "ESP".into(),
            name: "Spain".into(),
            ..Team::default()
        },
        away_team: Team {
            code: "ENG".into(),
            name: "England".into(),
            ..Team::default()
        },
        ..MatchRecord::default()
    }
}
