//! Path model: single-step and multi-step advancement.
//!
//! One step forward from a point depends on which segment it sits on for
//! the moving group:
//! - central path: one cell towards the finish; from the finish itself the
//!   token overflows back to the first cell after the turn-off
//! - main track: next cell around the loop (a group's own turn-off cell is
//!   classified as central, so it diverts there and nowhere else)
//! - spawn: the spawn exit
//!
//! Multi-step advancement stops at the first overflow and never consumes the
//! remaining steps.

use serde::{Deserialize, Serialize};

use super::geometry::{BoardGeometry, Location};
use crate::core::{Group, LudoError, Point, Result};

/// Which segment of the board a point is on, for one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Spawn,
    /// Shared loop, with the quarter (`0..4`) the cell belongs to.
    MainTrack(u8),
    Central,
}

/// Result of advancing a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(Point),
    /// Stepped past the finish and re-entered the home stretch here.
    Overflowed(Point),
    /// The point is not on this group's path.
    Invalid,
}

impl StepOutcome {
    /// Destination of the step, if any.
    #[must_use]
    pub fn point(self) -> Option<Point> {
        match self {
            StepOutcome::Advanced(point) | StepOutcome::Overflowed(point) => Some(point),
            StepOutcome::Invalid => None,
        }
    }
}

impl BoardGeometry {
    /// Segment a point belongs to for `group`, or `None` if unreachable.
    #[must_use]
    pub fn segment_of(&self, point: Point, group: Group) -> Option<PathSegment> {
        self.locate(point, group).map(|location| match location {
            Location::Spawn => PathSegment::Spawn,
            Location::Track(i) => PathSegment::MainTrack(self.quarter_of(i)),
            Location::Home(_) => PathSegment::Central,
        })
    }

    /// Whether a token of `group` may ever stand on `point`.
    #[must_use]
    pub fn is_reachable(&self, point: Point, group: Group) -> bool {
        self.locate(point, group).is_some()
    }

    /// Advance one step.
    #[must_use]
    pub fn step(&self, point: Point, group: Group) -> StepOutcome {
        match self.locate(point, group) {
            Some(Location::Home(i)) => {
                let home = self.home_stretch(group);
                if i + 1 < home.len() {
                    StepOutcome::Advanced(home[i + 1])
                } else {
                    StepOutcome::Overflowed(home[1])
                }
            }
            Some(Location::Track(i)) => {
                let track = self.track();
                StepOutcome::Advanced(track[(i + 1) % track.len()])
            }
            Some(Location::Spawn) => StepOutcome::Advanced(self.spawn_exit(group)),
            None => StepOutcome::Invalid,
        }
    }

    /// Every point visited moving `steps` cells from `origin`, origin first.
    ///
    /// The path ends early at an overflow, so it holds at most `steps + 1`
    /// points.
    pub fn path(&self, origin: Point, group: Group, steps: i32) -> Result<Vec<Point>> {
        if steps < 0 {
            return Err(LudoError::NegativeSteps { steps });
        }
        if !self.is_reachable(origin, group) {
            return Err(LudoError::NotOnPath { point: origin, group });
        }

        let mut path = Vec::with_capacity((steps as usize).min(64) + 1);
        path.push(origin);
        let mut current = origin;
        for _ in 0..steps {
            match self.step(current, group) {
                StepOutcome::Advanced(next) => {
                    path.push(next);
                    current = next;
                }
                StepOutcome::Overflowed(next) => {
                    path.push(next);
                    break;
                }
                StepOutcome::Invalid => {
                    return Err(LudoError::NotOnPath { point: current, group });
                }
            }
        }
        Ok(path)
    }

    /// Point reached after `steps` cells, ignoring other tokens.
    ///
    /// ```
    /// use parques::board::BoardGeometry;
    /// use parques::core::{Group, Point};
    ///
    /// let board = BoardGeometry::reference();
    /// let origin = Point::new(2, 2);
    /// assert_eq!(board.advance(origin, Group::Green, 1).unwrap(), Point::new(6, 1));
    /// assert_eq!(board.advance(origin, Group::Green, 6).unwrap(), Point::new(5, 6));
    /// ```
    pub fn advance(&self, origin: Point, group: Group, steps: i32) -> Result<Point> {
        let path = self.path(origin, group, steps)?;
        Ok(*path.last().unwrap_or(&origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> &'static BoardGeometry {
        BoardGeometry::reference()
    }

    #[test]
    fn test_spawn_steps_to_exit() {
        assert_eq!(
            geometry().step(Point::new(3, 3), Group::Green),
            StepOutcome::Advanced(Point::new(6, 1))
        );
        assert_eq!(
            geometry().step(Point::new(12, 12), Group::Blue),
            StepOutcome::Advanced(Point::new(8, 13))
        );
    }

    #[test]
    fn test_track_corner() {
        assert_eq!(
            geometry().step(Point::new(8, 0), Group::Red),
            StepOutcome::Advanced(Point::new(7, 0))
        );
        assert_eq!(
            geometry().step(Point::new(7, 0), Group::Red),
            StepOutcome::Advanced(Point::new(6, 0))
        );
    }

    #[test]
    fn test_quarter_wraparound() {
        assert_eq!(
            geometry().step(Point::new(6, 5), Group::Green),
            StepOutcome::Advanced(Point::new(5, 6))
        );
        assert_eq!(
            geometry().step(Point::new(9, 6), Group::Blue),
            StepOutcome::Advanced(Point::new(8, 5))
        );
    }

    #[test]
    fn test_turn_off_into_central() {
        assert_eq!(
            geometry().step(Point::new(7, 0), Group::Green),
            StepOutcome::Advanced(Point::new(7, 1))
        );
        assert_eq!(
            geometry().step(Point::new(0, 7), Group::Red),
            StepOutcome::Advanced(Point::new(1, 7))
        );
    }

    #[test]
    fn test_finish_overflows_to_home_start() {
        assert_eq!(
            geometry().step(Point::new(7, 6), Group::Green),
            StepOutcome::Overflowed(Point::new(7, 1))
        );
    }

    #[test]
    fn test_other_groups_central_is_invalid() {
        assert_eq!(geometry().step(Point::new(1, 7), Group::Green), StepOutcome::Invalid);
        assert_eq!(geometry().step(Point::new(7, 7), Group::Green), StepOutcome::Invalid);
        assert_eq!(geometry().step(Point::new(2, 11), Group::Green), StepOutcome::Invalid);
    }

    #[test]
    fn test_segment_of() {
        let g = geometry();
        assert_eq!(g.segment_of(Point::new(2, 2), Group::Green), Some(PathSegment::Spawn));
        assert_eq!(g.segment_of(Point::new(6, 1), Group::Green), Some(PathSegment::MainTrack(0)));
        assert_eq!(g.segment_of(Point::new(0, 7), Group::Green), Some(PathSegment::MainTrack(1)));
        assert_eq!(g.segment_of(Point::new(0, 7), Group::Red), Some(PathSegment::Central));
        assert_eq!(g.segment_of(Point::new(1, 7), Group::Green), None);
    }

    #[test]
    fn test_path_stops_at_overflow() {
        let path = geometry().path(Point::new(7, 4), Group::Green, 5).unwrap();
        assert_eq!(
            path,
            vec![Point::new(7, 4), Point::new(7, 5), Point::new(7, 6), Point::new(7, 1)]
        );
    }

    #[test]
    fn test_path_errors() {
        assert_eq!(
            geometry().path(Point::new(2, 2), Group::Green, -1),
            Err(LudoError::NegativeSteps { steps: -1 })
        );
        assert_eq!(
            geometry().path(Point::new(1, 7), Group::Green, 2),
            Err(LudoError::NotOnPath {
                point: Point::new(1, 7),
                group: Group::Green
            })
        );
    }

    #[test]
    fn test_advance_zero_steps() {
        assert_eq!(
            geometry().advance(Point::new(5, 6), Group::Red, 0),
            Ok(Point::new(5, 6))
        );
    }

    #[test]
    fn test_advance_along_track() {
        // Exit plus ten cells: up column 6, across the top, down column 8.
        assert_eq!(
            geometry().advance(Point::new(5, 6), Group::Green, 10),
            Ok(Point::new(3, 8))
        );
    }
}
