use crate::grid::MazeGrid;
use grid_util::point::Point;

/// A directional movement intent. `Up` decreases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Point),
    /// The target was outside the grid or an obstacle; the player did not move.
    Rejected,
}

/// Returns the new position if stepping by `delta` from `current` lands on a passable cell.
pub fn try_move(grid: &MazeGrid, current: Point, delta: (i32, i32)) -> Option<Point> {
    let candidate = Point::new(current.x + delta.0, current.y + delta.1);
    grid.is_passable_point(candidate).then_some(candidate)
}

pub fn at_goal(player: Point, goal: Point) -> bool {
    player == goal
}

/// Result of a confirm intent, with the text a dialog shows for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalStatus {
    Reached,
    NotYetReached,
}

impl GoalStatus {
    pub fn evaluate(player: Point, goal: Point) -> GoalStatus {
        if at_goal(player, goal) {
            GoalStatus::Reached
        } else {
            GoalStatus::NotYetReached
        }
    }
    pub fn is_reached(self) -> bool {
        self == GoalStatus::Reached
    }
    pub fn title(self) -> &'static str {
        match self {
            GoalStatus::Reached => "You Win",
            GoalStatus::NotYetReached => "Not Reached",
        }
    }
    pub fn message(self) -> &'static str {
        match self {
            GoalStatus::Reached => "reached goal",
            GoalStatus::NotYetReached => "not yet reached",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_equality() {
        assert!(at_goal(Point::new(9, 9), Point::new(9, 9)));
        assert!(!at_goal(Point::new(0, 0), Point::new(9, 9)));
        assert_eq!(
            GoalStatus::evaluate(Point::new(0, 0), Point::new(9, 9)).message(),
            "not yet reached"
        );
        assert_eq!(
            GoalStatus::evaluate(Point::new(9, 9), Point::new(9, 9)).message(),
            "reached goal"
        );
    }

    #[test]
    fn moves_stay_on_passable_cells() {
        let mut grid = MazeGrid::new(2, 2).unwrap();
        grid.set_obstacle(1, 0, true).unwrap();
        let start = Point::new(0, 0);
        assert_eq!(try_move(&grid, start, Direction::Right.delta()), None);
        assert_eq!(try_move(&grid, start, Direction::Up.delta()), None);
        assert_eq!(try_move(&grid, start, Direction::Left.delta()), None);
        assert_eq!(
            try_move(&grid, start, Direction::Down.delta()),
            Some(Point::new(0, 1))
        );
    }

    #[test]
    fn directions_are_unit_orthogonal() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
