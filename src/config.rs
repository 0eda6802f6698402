use crate::error::GridError;
use crate::{DEFAULT_COLS, DEFAULT_ROWS, OBSTACLE_PROBABILITY};
use grid_util::point::Point;

/// Settings for a [GameSession](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub obstacle_probability: f64,
    pub origin: Point,
    /// Defaults to the corner opposite the origin corner when [None].
    pub goal: Option<Point>,
    /// Keeps origin and goal free of obstacles. Turning this off reproduces the raw draw, which
    /// can wall in the goal or put an obstacle under the player's start.
    pub keep_endpoints_clear: bool,
    /// Seed of the maze's random source; drawn from entropy when [None].
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            obstacle_probability: OBSTACLE_PROBABILITY,
            origin: Point::new(0, 0),
            goal: None,
            keep_endpoints_clear: true,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> MazeConfig {
        self.rows = rows;
        self.cols = cols;
        self
    }
    pub fn with_obstacle_probability(mut self, obstacle_probability: f64) -> MazeConfig {
        self.obstacle_probability = obstacle_probability;
        self
    }
    pub fn with_origin(mut self, origin: Point) -> MazeConfig {
        self.origin = origin;
        self
    }
    pub fn with_goal(mut self, goal: Point) -> MazeConfig {
        self.goal = Some(goal);
        self
    }
    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }
    pub fn with_endpoints_clear(mut self, keep_endpoints_clear: bool) -> MazeConfig {
        self.keep_endpoints_clear = keep_endpoints_clear;
        self
    }

    pub fn goal(&self) -> Point {
        self.goal
            .unwrap_or_else(|| Point::new(self.cols as i32 - 1, self.rows as i32 - 1))
    }

    /// Checks dimensions, probability and that origin and goal lie on the grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(GridError::InvalidProbability(self.obstacle_probability));
        }
        for p in [self.origin, self.goal()] {
            let inside =
                p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows;
            if !inside {
                return Err(GridError::OutOfBounds {
                    x: p.x,
                    y: p.y,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }
}
