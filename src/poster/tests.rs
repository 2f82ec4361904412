use super::*;
use crate::config::{ColorOverrides, DEFAULT_BACKGROUND};
use crate::grid::PlacementOverride;
use crate::testing::{assert_slice_f64_near, blank_record, goal, sample_record};

fn offsets(bar: &GradientBar) -> Vec<f64> {
    bar.stops.iter().map(|stop| stop.offset).collect()
}

#[test]
fn derive_sample() {
    let ir = derive(&sample_record(), &PosterConfig::default()).unwrap();
    assert_eq!("New Zealand x Norway", ir.title);
    assert_eq!("0_NZLxNOR", ir.file_stem());
    assert_eq!(Score { home: 1, away: 0 }, ir.score);
    assert_eq!(1, ir.timeline.len());
    assert_eq!("WILKINSON", ir.timeline[0].player);
    assert_eq!(vec![GoalGridPosition::from_quadrant(8)], ir.placements);
    assert_eq!("JUL 20, 2023", ir.text.formatted_date);

    assert_eq!(Palette::Blue.primary(), ir.colors.home);
    assert_eq!(Palette::Orange.secondary(), ir.colors.away);
    assert_eq!(DEFAULT_BACKGROUND, ir.colors.background);
    assert_eq!(DEFAULT_BACKGROUND.inverse(), ir.colors.foreground);

    let metrics = ir.bars.iter().map(|bar| bar.metric).collect::<Vec<_>>();
    assert_eq!(
        vec![Metric::BallPossession, Metric::Attempts, Metric::Passes, Metric::Distance],
        metrics
    );
    let inverted = ir.bars.iter().map(|bar| bar.inverted).collect::<Vec<_>>();
    assert_eq!(vec![false, true, false, true], inverted);

    // possession 43/57: away larger, default mix
    assert_slice_f64_near(&[0.0, 0.43, 0.83, 1.0], &offsets(&ir.bars[0]), 2);
    assert_eq!(ir.colors.home, ir.bars[0].stops[0].color);
    assert_eq!(ir.colors.away, ir.bars[1].stops[0].color);
}

#[test]
fn derive_without_inversion() {
    let config = PosterConfig {
        invert_gradients: false,
        ..PosterConfig::default()
    };
    let ir = derive(&sample_record(), &config).unwrap();
    assert!(ir.bars.iter().all(|bar| !bar.inverted));
    assert!(ir.bars.iter().all(|bar| bar.stops[0].color == ir.colors.home));
}

#[test]
fn derive_all_zero_statistics() {
    let ir = derive(&blank_record(), &PosterConfig::default()).unwrap();
    assert_eq!(Score { home: 0, away: 0 }, ir.score);
    assert!(ir.score.is_draw());
    assert!(ir.timeline.is_empty());
    assert!(ir.placements.is_empty());
    for bar in &ir.bars {
        assert!(ir.stats.get(bar.metric).is_even_split());
        for stop in &bar.stops {
            assert!(stop.offset.is_finite());
            assert!((0.0..=1.0).contains(&stop.offset));
        }
    }
    assert_eq!("AUG 20, 2023", ir.text.formatted_date);
    assert_eq!("", ir.text.upper_venue);
}

#[test]
fn derive_goals_with_collisions_and_overrides() {
    let mut record = blank_record();
    record.id = 33;
    record.home_team.goals = 3;
    record.away_team.goals = 1;
    record.home_team_events = vec![goal(23, "A ONE"), goal(24, "A TWO"), goal(67, "A THREE")];
    record.away_team_events = vec![goal(10, "B ONE")];

    let ir = derive(&record, &PosterConfig::default()).unwrap();
    let quadrants = ir.placements.iter().map(|position| position.quadrant).collect::<Vec<_>>();
    assert_eq!(vec![1, 4, 5, 11], quadrants);

    let config = PosterConfig {
        placement_overrides: vec![PlacementOverride {
            match_id: 33,
            event_index: 1,
            row: 4,
            column: 3,
        }],
        ..PosterConfig::default()
    };
    let ir = derive(&record, &config).unwrap();
    let quadrants = ir.placements.iter().map(|position| position.quadrant).collect::<Vec<_>>();
    assert_eq!(vec![1, 14, 4, 11], quadrants);

    let sides = ir.goals().map(|(event, _)| event.side).collect::<Vec<_>>();
    assert_eq!(vec![Side::Away, Side::Home, Side::Home, Side::Home], sides);
}

#[test]
fn derive_unknown_team_code() {
    let mut record = sample_record();
    record.away_team.code = "XYZ".into();
    let err = derive(&record, &PosterConfig::default()).unwrap_err();
    assert_eq!("no palette for team code 'XYZ' and no colour override", err.to_string());

    let config = PosterConfig {
        color_overrides: ColorOverrides {
            home: None,
            away: Some(Rgb::new(1, 2, 3)),
        },
        ..PosterConfig::default()
    };
    let ir = derive(&record, &config).unwrap();
    assert_eq!(Rgb::new(1, 2, 3), ir.colors.away);
}

#[test]
fn derive_bad_datetime() {
    let mut record = sample_record();
    record.datetime = "TBC".into();
    assert!(matches!(
        derive(&record, &PosterConfig::default()),
        Err(PosterError::InvalidDatetime(datetime)) if datetime == "TBC"
    ));
}

#[test]
fn derive_negative_counter() {
    let mut record = sample_record();
    record.away_team_statistics.num_passes = -4.0;
    assert!(matches!(
        derive(&record, &PosterConfig::default()),
        Err(PosterError::InvalidCounter(_))
    ));
}

#[test]
fn derive_invalid_mix() {
    let config = PosterConfig {
        gradient_mix: 2.0,
        ..PosterConfig::default()
    };
    assert!(matches!(
        derive(&sample_record(), &config),
        Err(PosterError::InvalidMetric(InvalidMetric::MixOutOfRange(_)))
    ));
}
