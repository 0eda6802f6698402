use crate::config::MazeConfig;
use crate::error::GridError;
use crate::grid::MazeGrid;
use crate::maze::{generate, generate_with_clearance};
use crate::navigation::{try_move, Direction, GoalStatus, MoveOutcome};
use crate::path::reconstruct;
use crate::search::SearchStats;
use crate::solver::compute;
use grid_util::point::Point;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two kinds of intent a front end forwards to the game.
pub trait IntentHandler {
    fn handle_move(&mut self, direction: Direction) -> MoveOutcome;
    fn handle_confirm(&self) -> GoalStatus;
}

/// One game: the maze, its precomputed shortest paths and the player walking it. The grid is
/// searched once on construction and only read afterwards.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: MazeGrid,
    origin: Point,
    goal: Point,
    player: Point,
    stats: SearchStats,
    moves: usize,
}

impl GameSession {
    /// Builds a random maze from the configuration, seeding the random source once.
    pub fn new(config: &MazeConfig) -> Result<GameSession, GridError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameSession::with_rng(config, &mut rng)
    }

    /// Builds a random maze drawing from the given random source.
    pub fn with_rng<R: Rng>(config: &MazeConfig, rng: &mut R) -> Result<GameSession, GridError> {
        config.validate()?;
        let mut grid = MazeGrid::new(config.rows, config.cols)?;
        let goal = config.goal();
        if config.keep_endpoints_clear {
            generate_with_clearance(
                &mut grid,
                config.obstacle_probability,
                &[config.origin, goal],
                rng,
            )?;
        } else {
            generate(&mut grid, config.obstacle_probability, rng)?;
        }
        GameSession::from_grid(grid, config.origin, goal)
    }

    /// Wraps an already laid out grid, runs the search from `origin` and puts the player there.
    pub fn from_grid(
        mut grid: MazeGrid,
        origin: Point,
        goal: Point,
    ) -> Result<GameSession, GridError> {
        grid.check_bounds(goal)?;
        let stats = compute(&mut grid, origin)?;
        grid.update();
        if grid.is_obstacle(origin.x, origin.y) {
            warn!("Origin {} is an obstacle", origin);
        }
        if grid.unreachable(&origin, &goal) {
            warn!("Goal {} is not reachable from {}", goal, origin);
        } else {
            info!("Goal {} is reachable from {}", goal, origin);
        }
        Ok(GameSession {
            grid,
            origin,
            goal,
            player: origin,
            stats,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }
    pub fn origin(&self) -> Point {
        self.origin
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn player(&self) -> Point {
        self.player
    }
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
    /// Number of accepted moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }
    /// Shortest path from the player's cell back to the origin.
    pub fn current_path(&self) -> Vec<Point> {
        reconstruct(&self.grid, self.player)
    }
    /// Length in steps of the shortest path from the origin to the goal, if there is one.
    pub fn shortest_goal_distance(&self) -> Option<u32> {
        self.grid.cell(self.goal).and_then(|c| c.distance())
    }
}

impl IntentHandler for GameSession {
    fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        match try_move(&self.grid, self.player, direction.delta()) {
            Some(next) => {
                self.player = next;
                self.moves += 1;
                MoveOutcome::Moved(next)
            }
            None => {
                debug!("Rejected move {:?} from {}", direction, self.player);
                MoveOutcome::Rejected
            }
        }
    }

    fn handle_confirm(&self) -> GoalStatus {
        let status = GoalStatus::evaluate(self.player, self.goal);
        info!("Confirm at {}: {}", self.player, status.message());
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> GameSession {
        // S . #
        // # . G
        let mut grid = MazeGrid::new(2, 3).unwrap();
        grid.set_obstacle(2, 0, true).unwrap();
        grid.set_obstacle(0, 1, true).unwrap();
        GameSession::from_grid(grid, Point::new(0, 0), Point::new(2, 1)).unwrap()
    }

    #[test]
    fn player_starts_at_origin() {
        let session = corridor();
        assert_eq!(session.player(), Point::new(0, 0));
        assert_eq!(session.current_path(), vec![Point::new(0, 0)]);
        assert_eq!(session.shortest_goal_distance(), Some(2));
        assert_eq!(session.handle_confirm(), GoalStatus::NotYetReached);
    }

    #[test]
    fn walking_to_the_goal() {
        let mut session = corridor();
        assert_eq!(session.handle_move(Direction::Down), MoveOutcome::Rejected);
        assert_eq!(
            session.handle_move(Direction::Right),
            MoveOutcome::Moved(Point::new(1, 0))
        );
        assert_eq!(
            session.handle_move(Direction::Down),
            MoveOutcome::Moved(Point::new(1, 1))
        );
        assert_eq!(
            session.handle_move(Direction::Right),
            MoveOutcome::Moved(Point::new(2, 1))
        );
        assert_eq!(session.moves(), 3);
        assert_eq!(session.handle_confirm(), GoalStatus::Reached);
        assert_eq!(
            session.current_path(),
            vec![Point::new(2, 1), Point::new(1, 0), Point::new(0, 0)]
        );
    }

    #[test]
    fn intents_through_trait_object() {
        let mut session = corridor();
        let handler: &mut dyn IntentHandler = &mut session;
        assert_eq!(handler.handle_move(Direction::Up), MoveOutcome::Rejected);
        assert!(!handler.handle_confirm().is_reached());
    }

    #[test]
    fn goal_outside_the_grid_fails() {
        let grid = MazeGrid::new(2, 2).unwrap();
        assert!(GameSession::from_grid(grid, Point::new(0, 0), Point::new(2, 2)).is_err());
    }

    #[test]
    fn seeded_sessions_repeat() {
        let config = MazeConfig::default().with_seed(42);
        let a = GameSession::new(&config).unwrap();
        let b = GameSession::new(&config).unwrap();
        assert_eq!(a.grid().to_string(), b.grid().to_string());
        assert_eq!(a.stats(), b.stats());
    }
}
