use crate::grid::MazeGrid;
use grid_util::point::Point;
use itertools::Itertools;
use std::iter;

/// Walks the predecessor links from `point` back to the origin and returns the visited cells
/// in that order, `point` first and the origin last. A cell the search never reached yields
/// just itself, a position outside the grid yields nothing.
pub fn reconstruct(grid: &MazeGrid, point: Point) -> Vec<Point> {
    let Some(cell) = grid.cell(point) else {
        return Vec::new();
    };
    // Predecessor distances strictly decrease, so the chain is at most distance + 1 long
    let limit = cell.distance().map_or(1, |d| d as usize + 1);
    let path = iter::successors(Some(point), |p| {
        grid.cell(*p).and_then(|c| c.predecessor())
    })
    .take(limit)
    .collect::<Vec<Point>>();
    debug_assert!(path
        .last()
        .and_then(|p| grid.cell(*p))
        .is_some_and(|c| c.predecessor().is_none()));
    path
}

/// The line segments a renderer draws for the path of [reconstruct]: each cell paired with
/// its predecessor.
pub fn path_segments(grid: &MazeGrid, point: Point) -> Vec<(Point, Point)> {
    reconstruct(grid, point).into_iter().tuple_windows().collect()
}
