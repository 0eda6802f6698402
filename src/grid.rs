use crate::error::GridError;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Sentinel distance of a cell the search has not reached.
pub const INFINITE: u32 = u32::MAX;

/// One position of the maze together with the search state the engine leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    pub(crate) obstacle: bool,
    pub(crate) visited: bool,
    pub(crate) distance: u32,
    pub(crate) predecessor: Option<Point>,
}

impl Cell {
    fn new(x: i32, y: i32) -> Cell {
        Cell {
            x,
            y,
            obstacle: false,
            visited: false,
            distance: INFINITE,
            predecessor: None,
        }
    }
    pub fn x(&self) -> i32 {
        self.x
    }
    pub fn y(&self) -> i32 {
        self.y
    }
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }
    /// True once the search has settled this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    /// Shortest number of unit steps from the origin, [None] while unreached.
    pub fn distance(&self) -> Option<u32> {
        (self.distance != INFINITE).then_some(self.distance)
    }
    /// Handle of the cell the shortest known path arrives from.
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }
    fn reset_search(&mut self) {
        self.visited = false;
        self.distance = INFINITE;
        self.predecessor = None;
    }
}

/// Offsets of the Moore neighbourhood in scan order: dx outer, dy inner, both running -1..=1.
pub fn moore_offsets() -> impl Iterator<Item = (i32, i32)> {
    iproduct!(-1..=1, -1..=1).filter(|&(dx, dy)| dx != 0 || dy != 0)
}

/// [MazeGrid] owns every [Cell] of the maze in row-major order. Next to the cells it maintains a
/// [UnionFind] over the passable cells so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// Creates an obstacle-free grid. Both dimensions have to be positive.
    pub fn new(rows: usize, cols: usize) -> Result<MazeGrid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let cells = iproduct!(0..rows as i32, 0..cols as i32)
            .map(|(y, x)| Cell::new(x, y))
            .collect();
        let mut grid = MazeGrid {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }
    /// Row-major index of an in-bounds position.
    pub fn compute_ix(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y));
        y as usize * self.cols + x as usize
    }
    pub fn get_ix_point(&self, point: &Point) -> usize {
        self.compute_ix(point.x, point.y)
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.point_in_bounds(point) {
            Some(&self.cells[self.get_ix_point(&point)])
        } else {
            None
        }
    }
    pub(crate) fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        if self.point_in_bounds(point) {
            let ix = self.get_ix_point(&point);
            Some(&mut self.cells[ix])
        } else {
            None
        }
    }
    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.compute_ix(x, y)].obstacle
    }
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.cells[self.compute_ix(x, y)].obstacle
    }
    pub fn is_passable_point(&self, point: Point) -> bool {
        self.is_passable(point.x, point.y)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn check_bounds(&self, point: Point) -> Result<(), GridError> {
        if self.point_in_bounds(point) {
            Ok(())
        } else {
            Err(self.out_of_bounds(point.x, point.y))
        }
    }

    /// Updates the obstacle flag of a single cell. Joins newly connected components and flags
    /// the components as dirty if components are (potentially) broken apart into multiple.
    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let ix = self.compute_ix(x, y);
        if blocked {
            if !self.cells[ix].obstacle {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(Point::new(x, y)) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.cells[ix].obstacle = blocked;
        Ok(())
    }

    /// Passable Moore neighbours of a position, in the order the search scans them.
    pub fn neighbours(&self, point: Point) -> SmallVec<[Point; 8]> {
        moore_offsets()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.is_passable_point(*p))
            .collect()
    }

    /// Forgets everything a previous search wrote into the cells.
    pub fn reset_search(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_search);
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Obstacles are never reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_passable_point(*start) && self.is_passable_point(*goal) {
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable Moore neighbours. Looking
    /// only forward (east column and the cell below) visits every adjacent pair once.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..self.rows as i32, 0..self.cols as i32) {
            if !self.is_passable(x, y) {
                continue;
            }
            let parent_ix = self.compute_ix(x, y);
            [(1, -1), (1, 0), (1, 1), (0, 1)]
                .into_iter()
                .filter(|&(dx, dy)| self.is_passable(x + dx, y + dy))
                .map(|(dx, dy)| self.compute_ix(x + dx, y + dy))
                .collect::<SmallVec<[usize; 4]>>()
                .into_iter()
                .for_each(|ix| {
                    self.components.union(parent_ix, ix);
                });
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.chunks(self.cols) {
            let values = row
                .iter()
                .map(|c| c.obstacle as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
