use crate::error::GridError;
use crate::grid::MazeGrid;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use rand::Rng;

fn check_probability(obstacle_probability: f64) -> Result<(), GridError> {
    if (0.0..=1.0).contains(&obstacle_probability) {
        Ok(())
    } else {
        Err(GridError::InvalidProbability(obstacle_probability))
    }
}

/// Marks every cell of the grid as an obstacle independently with probability
/// `obstacle_probability`, drawing once per cell in row-major order.
pub fn generate<R: Rng>(
    grid: &mut MazeGrid,
    obstacle_probability: f64,
    rng: &mut R,
) -> Result<(), GridError> {
    generate_with_clearance(grid, obstacle_probability, &[], rng)
}

/// Like [generate], but forces the cells in `keep_clear` to stay passable. Those cells still
/// consume their draw, so the rest of the layout matches [generate] for the same random state.
pub fn generate_with_clearance<R: Rng>(
    grid: &mut MazeGrid,
    obstacle_probability: f64,
    keep_clear: &[Point],
    rng: &mut R,
) -> Result<(), GridError> {
    check_probability(obstacle_probability)?;
    for p in keep_clear {
        grid.check_bounds(*p)?;
    }
    for (y, x) in iproduct!(0..grid.rows() as i32, 0..grid.cols() as i32) {
        let blocked = rng.gen_bool(obstacle_probability);
        let cleared = keep_clear.contains(&Point::new(x, y));
        grid.set_obstacle(x, y, blocked && !cleared)?;
    }
    grid.generate_components();
    let obstacles = grid.cells().filter(|c| c.is_obstacle()).count();
    info!(
        "Generated {}x{} maze with {} obstacles",
        grid.cols(),
        grid.rows(),
        obstacles
    );
    Ok(())
}
