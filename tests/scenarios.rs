use grid_maze::solver::compute;
use grid_maze::{at_goal, reconstruct, MazeGrid};
use grid_util::point::Point;

fn solved(grid: &mut MazeGrid) {
    compute(grid, Point::new(0, 0)).unwrap();
}

// |S  |
// |   |
// |  G|
#[test]
fn open_three_by_three() {
    let mut grid = MazeGrid::new(3, 3).unwrap();
    solved(&mut grid);
    let goal = grid.cell(Point::new(2, 2)).unwrap();
    assert_eq!(goal.distance(), Some(2));
    assert_eq!(goal.predecessor(), Some(Point::new(1, 1)));
    assert_eq!(
        reconstruct(&grid, Point::new(2, 2)),
        vec![Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)]
    );
}

// |S  |
// | # |
// |  G|
#[test]
fn centre_blocked() {
    let mut grid = MazeGrid::new(3, 3).unwrap();
    grid.set_obstacle(1, 1, true).unwrap();
    solved(&mut grid);
    // Every cell next to the goal is two steps out, so the goal is three. The column neighbour
    // (0, 1) is scanned before (1, 0) and relaxes (1, 2) first.
    let goal = grid.cell(Point::new(2, 2)).unwrap();
    assert_eq!(goal.distance(), Some(3));
    assert_eq!(goal.predecessor(), Some(Point::new(1, 2)));
    assert_eq!(
        reconstruct(&grid, Point::new(2, 2)),
        vec![
            Point::new(2, 2),
            Point::new(1, 2),
            Point::new(0, 1),
            Point::new(0, 0)
        ]
    );
}

// |S    |
// |     |
// |  ###|
// |  #G#|
// |  ###|
#[test]
fn walled_off_goal() {
    let mut grid = MazeGrid::new(5, 5).unwrap();
    let goal = Point::new(3, 3);
    for (dx, dy) in grid_maze::grid::moore_offsets() {
        grid.set_obstacle(goal.x + dx, goal.y + dy, true).unwrap();
    }
    solved(&mut grid);
    let cell = grid.cell(goal).unwrap();
    assert!(!cell.is_visited());
    assert_eq!(cell.distance(), None);
    assert_eq!(reconstruct(&grid, goal), vec![goal]);
    assert!(grid.cell(Point::new(4, 4)).unwrap().distance().is_none());
    assert_eq!(grid.cell(Point::new(4, 1)).unwrap().distance(), Some(4));
}

#[test]
fn goal_evaluator() {
    assert!(at_goal(Point::new(9, 9), Point::new(9, 9)));
    assert!(!at_goal(Point::new(0, 0), Point::new(9, 9)));
}

// |S# |
// |#  |
// |  G|
#[test]
fn diagonal_squeeze_between_obstacles() {
    let mut grid = MazeGrid::new(3, 3).unwrap();
    grid.set_obstacle(1, 0, true).unwrap();
    grid.set_obstacle(0, 1, true).unwrap();
    solved(&mut grid);
    assert_eq!(grid.cell(Point::new(1, 1)).unwrap().distance(), Some(1));
    assert_eq!(grid.cell(Point::new(2, 2)).unwrap().distance(), Some(2));
}
