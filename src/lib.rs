//! # grid_maze
//!
//! Core of a small grid maze game. A maze of randomly placed obstacles is generated, a
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) search from the start cell
//! records the shortest number of steps to every reachable cell together with a predecessor
//! link, and the player walks the maze while the path from the player's cell back to the start
//! is read off those links for drawing. Movement in the search is 8-directional with every step,
//! diagonal or not, costing the same.
//!
//! The search runs once per game; the maze never changes afterwards.
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod navigation;
pub mod path;
pub mod render;
pub mod search;
pub mod session;
pub mod solver;

pub use config::MazeConfig;
pub use error::GridError;
pub use grid::{Cell, MazeGrid, INFINITE};
pub use navigation::{at_goal, Direction, GoalStatus, MoveOutcome};
pub use path::reconstruct;
pub use session::{GameSession, IntentHandler};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
/// Chance of a cell becoming an obstacle.
pub const OBSTACLE_PROBABILITY: f64 = 1.0 / 3.0;
/// Side of a drawn cell in pixels.
pub const CELL_SIZE: i32 = 30;

pub(crate) const N_SMALLVEC_SIZE: usize = 8;
