use super::*;

#[test]
fn intervals_16() {
    let intervals = intervals(MATCH_MINUTES, 16);
    assert_eq!(16, intervals.len());
    assert_eq!(0.0..5.625, intervals[0]);
    assert_eq!(39.375..45.0, intervals[7]);
    assert_eq!(84.375..90.0, intervals[15]);
    for pair in intervals.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn position_from_quadrant() {
    assert_eq!(
        GoalGridPosition {
            quadrant: 0,
            row: 1,
            column: 1
        },
        GoalGridPosition::from_quadrant(0)
    );
    assert_eq!(
        GoalGridPosition {
            quadrant: 7,
            row: 2,
            column: 4
        },
        GoalGridPosition::from_quadrant(7)
    );
    assert_eq!(
        GoalGridPosition {
            quadrant: 14,
            row: 4,
            column: 3
        },
        GoalGridPosition::from_quadrant(14)
    );
    for quadrant in 0..QUADRANTS {
        let position = GoalGridPosition::from_quadrant(quadrant);
        assert_eq!(position, GoalGridPosition::from_cell(position.row, position.column).unwrap());
    }
}

#[test]
fn position_from_invalid_cell() {
    assert_eq!(InvalidCell { row: 0, column: 1 }, GoalGridPosition::from_cell(0, 1).unwrap_err());
    assert_eq!(InvalidCell { row: 4, column: 5 }, GoalGridPosition::from_cell(4, 5).unwrap_err());
    assert_eq!(
        "cell (5, 1) outside the 4x4 grid",
        GoalGridPosition::from_cell(5, 1).unwrap_err().to_string()
    );
}

#[test]
fn next_wraps_rows() {
    assert_eq!(GoalGridPosition::from_cell(1, 2).ok(), GoalGridPosition::from_quadrant(0).next());
    assert_eq!(GoalGridPosition::from_cell(3, 1).ok(), GoalGridPosition::from_cell(2, 4).unwrap().next());
    assert_eq!(None, GoalGridPosition::last().next());
}

#[test]
fn place_minutes() {
    assert_eq!(0, place(0).quadrant);
    assert_eq!(0, place(5).quadrant);
    assert_eq!(1, place(6).quadrant);
    assert_eq!(7, place(44).quadrant);
    assert_eq!(8, place(45).quadrant);
    assert_eq!(15, place(89).quadrant);
    assert_eq!(15, place(90).quadrant);
    assert_eq!(15, place(120).quadrant);
    assert_eq!(15, place(i32::MAX).quadrant);
    assert_eq!(0, place(-3).quadrant);
}

#[test]
fn place_is_row_major() {
    let position = place(44);
    assert_eq!((2, 4), (position.row, position.column));
    let position = place(50);
    assert_eq!((3, 1), (position.row, position.column));
}

#[test]
fn grid_shifts_on_collision() {
    let mut grid = GoalGrid::default();
    let first = grid.place(place(10));
    assert_eq!(Collision::None, first.collision);
    assert_eq!(1, first.position.quadrant);

    let second = grid.place(place(11));
    assert_eq!(Collision::Shifted, second.collision);
    assert_eq!(2, second.position.quadrant);
    assert!(grid.is_occupied(&GoalGridPosition::from_quadrant(2)));
}

#[test]
fn grid_shift_wraps_to_next_row() {
    let mut grid = GoalGrid::default();
    grid.place(place(20));
    let shifted = grid.place(place(21));
    assert_eq!(Collision::Shifted, shifted.collision);
    assert_eq!((2, 1), (shifted.position.row, shifted.position.column));
}

#[test]
fn grid_leaves_double_collision_unresolved() {
    let mut grid = GoalGrid::default();
    grid.place(place(1));
    grid.place(place(6));
    let third = grid.place(place(2));
    assert_eq!(Collision::Unresolved, third.collision);
    assert_eq!(1, third.position.quadrant);
}

#[test]
fn grid_leaves_last_cell_collision_unresolved() {
    let mut grid = GoalGrid::default();
    grid.place(place(90));
    let stoppage = grid.place(place(93));
    assert_eq!(Collision::Unresolved, stoppage.collision);
    assert_eq!(GoalGridPosition::last(), stoppage.position);
}

#[test]
fn place_timeline_without_overrides() {
    let positions = place_timeline(1, [10, 23, 23, 67], &Overrides::default());
    let quadrants = positions.iter().map(|position| position.quadrant).collect::<Vec<_>>();
    assert_eq!(vec![1, 4, 5, 11], quadrants);
}

#[test]
fn place_timeline_with_overrides() {
    let overrides = Overrides::try_from(
        &[PlacementOverride {
            match_id: 33,
            event_index: 1,
            row: 4,
            column: 3,
        }][..],
    )
    .unwrap();
    assert_eq!(1, overrides.len());
    assert!(!overrides.is_empty());

    let positions = place_timeline(33, [12, 30, 85], &overrides);
    let quadrants = positions.iter().map(|position| position.quadrant).collect::<Vec<_>>();
    assert_eq!(vec![2, 14, 15], quadrants);

    let positions = place_timeline(34, [12, 30], &overrides);
    let quadrants = positions.iter().map(|position| position.quadrant).collect::<Vec<_>>();
    assert_eq!(vec![2, 5], quadrants);
}

#[test]
fn overrides_reject_invalid_cells() {
    let result = Overrides::try_from(
        &[PlacementOverride {
            match_id: 1,
            event_index: 0,
            row: 5,
            column: 1,
        }][..],
    );
    assert_eq!(InvalidCell { row: 5, column: 1 }, result.unwrap_err());
}
