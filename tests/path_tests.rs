//! Path model integration tests.
//!
//! These tests walk the reference board geometry: closure of every group's
//! path, progress from spawn to finish, and overflow behavior.

use parques::board::{BoardGeometry, PathSegment, StepOutcome};
use parques::core::{Group, LudoError, Point, TokenId};
use proptest::prelude::*;

fn geometry() -> &'static BoardGeometry {
    BoardGeometry::reference()
}

/// Every point a group visits from one spawn origin to its finish.
fn route(group: Group) -> Vec<Point> {
    let mut points = vec![geometry().spawn_points(group)[0]];
    let finish = geometry().finish(group);
    while *points.last().unwrap() != finish {
        let next = geometry().step(*points.last().unwrap(), group).point().unwrap();
        points.push(next);
        assert!(points.len() < 100, "{group} never reaches its finish");
    }
    points
}

fn any_group() -> impl Strategy<Value = Group> {
    (0u8..4).prop_map(|i| Group::from_index(i).unwrap())
}

// =============================================================================
// Geometry
// =============================================================================

/// Test that every group needs exactly 57 single steps from spawn to finish.
#[test]
fn test_route_length() {
    for group in Group::ALL {
        let route = route(group);
        assert_eq!(route.len() - 1, 57, "{group}");
        assert_eq!(route[1], geometry().spawn_exit(group));
    }
}

/// Test that the four routes share the main track and nothing else.
#[test]
fn test_routes_share_only_the_track() {
    let track = geometry().track();
    for group in Group::ALL {
        for other in Group::ALL.into_iter().filter(|&g| g != group) {
            for point in geometry().home_stretch(other).iter().skip(1) {
                assert!(!geometry().is_reachable(*point, group), "{point} leaks into {group}");
            }
            for point in geometry().spawn_points(other) {
                assert!(!geometry().is_reachable(*point, group));
            }
        }
        for point in track {
            assert!(geometry().is_reachable(*point, group));
        }
    }
}

/// Test that each group diverts into its home stretch at its own turn-off.
#[test]
fn test_turn_off_cells() {
    let expected = [
        (Group::Green, Point::new(7, 0), Point::new(7, 1)),
        (Group::Red, Point::new(0, 7), Point::new(1, 7)),
        (Group::Blue, Point::new(7, 14), Point::new(7, 13)),
        (Group::Yellow, Point::new(14, 7), Point::new(13, 7)),
    ];
    for (group, from, next) in expected {
        assert_eq!(geometry().central(group).from, from);
        assert_eq!(geometry().step(from, group), StepOutcome::Advanced(next));
        for other in Group::ALL.into_iter().filter(|&g| g != group) {
            assert_ne!(geometry().step(from, other), StepOutcome::Advanced(next));
        }
    }
}

/// Test the spawn exit example: token 0 at (2, 2).
#[test]
fn test_spawn_exit_example() {
    let origin = geometry().spawn_point(TokenId::new(0).unwrap());
    assert_eq!(origin, Point::new(2, 2));
    assert_eq!(geometry().segment_of(origin, Group::Green), Some(PathSegment::Spawn));
    assert_eq!(geometry().advance(origin, Group::Green, 1), Ok(Point::new(6, 1)));
}

/// Test that advancing from a cell off the group's path is rejected.
#[test]
fn test_not_on_path() {
    assert_eq!(
        geometry().advance(Point::new(7, 7), Group::Red, 1),
        Err(LudoError::NotOnPath {
            point: Point::new(7, 7),
            group: Group::Red
        })
    );
    assert_eq!(
        geometry().advance(Point::new(2, 2), Group::Red, 1),
        Err(LudoError::NotOnPath {
            point: Point::new(2, 2),
            group: Group::Red
        })
    );
}

// =============================================================================
// Overflow
// =============================================================================

/// Test that stepping past the finish re-enters the home stretch and stops.
#[test]
fn test_overflow_stops_the_move() {
    let finish = geometry().finish(Group::Red);
    let path = geometry().path(finish, Group::Red, 6).unwrap();
    assert_eq!(path, vec![finish, Point::new(1, 7)]);
    assert_eq!(geometry().step(finish, Group::Red), StepOutcome::Overflowed(Point::new(1, 7)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every point on any path stays inside the group's spawn, the main
    /// track or the group's own home stretch.
    #[test]
    fn prop_closure(group in any_group(), start in 0usize..58, steps in 0i32..30) {
        let route = route(group);
        let origin = route[start.min(route.len() - 1)];
        let path = geometry().path(origin, group, steps).unwrap();
        prop_assert!(path.len() <= steps as usize + 1);
        for point in path {
            let allowed = geometry().is_spawn(point, group)
                || geometry().track().contains(&point)
                || geometry().home_stretch(group).contains(&point);
            prop_assert!(allowed, "{} escaped the path of {}", point, group);
        }
    }

    /// Reaching the finish exactly does not depend on how the distance is
    /// split into rolls.
    #[test]
    fn prop_split_rolls_reach_finish(
        group in any_group(),
        start in 1usize..57,
        rolls in prop::collection::vec(1i32..=6, 1..60),
    ) {
        let route = route(group);
        let finish = geometry().finish(group);
        let mut remaining = (route.len() - 1 - start) as i32;
        let mut point = route[start];
        for roll in rolls {
            if remaining == 0 {
                break;
            }
            let steps = roll.min(remaining);
            point = geometry().advance(point, group, steps).unwrap();
            remaining -= steps;
        }
        if remaining > 0 {
            point = geometry().advance(point, group, remaining).unwrap();
        }
        prop_assert_eq!(point, finish);
    }

    /// Stepping one cell at a time from any route position reaches the
    /// finish within 60 steps.
    #[test]
    fn prop_progress(group in any_group(), start in 0usize..58) {
        let route = route(group);
        let finish = geometry().finish(group);
        let mut point = route[start.min(route.len() - 1)];
        let mut steps = 0;
        while point != finish {
            point = geometry().step(point, group).point().unwrap();
            steps += 1;
            prop_assert!(steps <= 60);
        }
    }
}
