use crate::error::GridError;
use crate::grid::{moore_offsets, MazeGrid};
use crate::search::{dijkstra, SearchSpace, SearchStats};
use crate::N_SMALLVEC_SIZE;
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;

/// Every move, diagonal or straight, costs a single step.
pub const STEP_COST: u32 = 1;

impl SearchSpace for MazeGrid {
    type Node = Point;
    type Cost = u32;
    type Successors = SmallVec<[(Point, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, node: &Point) -> Self::Successors {
        moore_offsets()
            .map(|(dx, dy)| Point::new(node.x + dx, node.y + dy))
            .filter(|p| self.is_passable_point(*p))
            .map(|p| (p, STEP_COST))
            .collect()
    }
    fn cost(&self, node: &Point) -> Option<u32> {
        self.cell(*node).and_then(|c| c.distance())
    }
    fn is_settled(&self, node: &Point) -> bool {
        self.cell(*node).is_some_and(|c| c.visited)
    }
    fn settle(&mut self, node: &Point) {
        if let Some(cell) = self.cell_mut(*node) {
            cell.visited = true;
        }
    }
    fn record(&mut self, node: &Point, cost: u32, parent: Option<Point>) {
        if let Some(cell) = self.cell_mut(*node) {
            debug_assert!(!cell.visited);
            cell.distance = cost;
            cell.predecessor = parent;
        }
    }
}

/// Computes the shortest number of steps from `origin` to every cell reachable over the
/// 8-neighbourhood, writing distance, visited flag and predecessor into the cells. Any state
/// left by an earlier run is cleared first. An obstacle at the origin is still expanded.
pub fn compute(grid: &mut MazeGrid, origin: Point) -> Result<SearchStats, GridError> {
    grid.check_bounds(origin)?;
    grid.reset_search();
    let stats = dijkstra(grid, origin);
    debug!(
        "Search from {} settled {} cells ({} pushed, {} stale)",
        origin, stats.settled, stats.pushed, stats.stale
    );
    Ok(stats)
}
