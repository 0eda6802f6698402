//! Read-only views of a [GameSession] for whatever draws it. Nothing in here mutates the game.
use crate::grid::MazeGrid;
use crate::path::path_segments;
use crate::session::GameSession;
use crate::CELL_SIZE;
use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;

/// Occupancy class of a cell, the three background colours of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Obstacle,
    /// Settled by the search.
    Explored,
    Unexplored,
}

impl Tile {
    pub fn of(grid: &MazeGrid, point: Point) -> Option<Tile> {
        grid.cell(point).map(|cell| {
            if cell.is_obstacle() {
                Tile::Obstacle
            } else if cell.is_visited() {
                Tile::Explored
            } else {
                Tile::Unexplored
            }
        })
    }
}

/// Pixel centre of a cell drawn with square cells of side `cell_size`.
pub fn cell_center(point: Point, cell_size: i32) -> (i32, i32) {
    (
        point.x * cell_size + cell_size / 2,
        point.y * cell_size + cell_size / 2,
    )
}

/// Everything one redraw needs: tiles row by row, the markers and the player's path.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub rows: usize,
    pub cols: usize,
    pub tiles: Vec<Tile>,
    pub origin: Point,
    pub player: Point,
    pub goal: Point,
    /// Each cell of the player's path paired with its predecessor, player end first.
    pub segments: Vec<(Point, Point)>,
}

impl Overlay {
    pub fn capture(session: &GameSession) -> Overlay {
        let grid = session.grid();
        let tiles = grid
            .cells()
            .map(|cell| Tile::of(grid, cell.point()).unwrap_or(Tile::Unexplored))
            .collect();
        Overlay {
            rows: grid.rows(),
            cols: grid.cols(),
            tiles,
            origin: session.origin(),
            player: session.player(),
            goal: session.goal(),
            segments: path_segments(grid, session.player()),
        }
    }

    pub fn tile(&self, point: Point) -> Option<Tile> {
        let inside = point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols
            && (point.y as usize) < self.rows;
        inside.then(|| self.tiles[point.y as usize * self.cols + point.x as usize])
    }

    /// Cells touched by the path segments.
    pub fn path_cells(&self) -> FxHashSet<Point> {
        self.segments
            .iter()
            .flat_map(|&(from, to)| [from, to])
            .collect()
    }

    /// Path segments in pixel coordinates, from cell centre to cell centre.
    pub fn pixel_segments(&self, cell_size: i32) -> Vec<((i32, i32), (i32, i32))> {
        self.segments
            .iter()
            .map(|&(from, to)| (cell_center(from, cell_size), cell_center(to, cell_size)))
            .collect()
    }

    /// Pixel size of the whole board at the default cell size.
    pub fn board_size(&self) -> (i32, i32) {
        (
            self.cols as i32 * CELL_SIZE,
            self.rows as i32 * CELL_SIZE,
        )
    }
}

/// Text rendering of the overlay: `#` obstacle, `.` explored, blank unexplored, `*` path,
/// `S` origin, `G` goal and `@` player, later markers winning over earlier ones.
pub fn render_ascii(session: &GameSession) -> String {
    let overlay = Overlay::capture(session);
    let path = overlay.path_cells();
    (0..overlay.rows as i32)
        .map(|y| {
            (0..overlay.cols as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == overlay.player {
                        '@'
                    } else if p == overlay.goal {
                        'G'
                    } else if p == overlay.origin {
                        'S'
                    } else if path.contains(&p) {
                        '*'
                    } else {
                        match overlay.tile(p) {
                            Some(Tile::Obstacle) => '#',
                            Some(Tile::Explored) => '.',
                            _ => ' ',
                        }
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Direction;
    use crate::session::IntentHandler;

    fn session() -> GameSession {
        // . . .
        // . # .
        // . . #
        //     (3,3) walled corner below
        let mut grid = MazeGrid::new(3, 4).unwrap();
        grid.set_obstacle(1, 1, true).unwrap();
        grid.set_obstacle(2, 2, true).unwrap();
        grid.set_obstacle(2, 1, true).unwrap();
        grid.set_obstacle(2, 0, true).unwrap();
        GameSession::from_grid(grid, Point::new(0, 0), Point::new(3, 2)).unwrap()
    }

    #[test]
    fn tiles_reflect_search_state() {
        let overlay = Overlay::capture(&session());
        assert_eq!(overlay.tile(Point::new(0, 0)), Some(Tile::Explored));
        assert_eq!(overlay.tile(Point::new(1, 1)), Some(Tile::Obstacle));
        assert_eq!(overlay.tile(Point::new(3, 0)), Some(Tile::Unexplored));
        assert_eq!(overlay.tile(Point::new(4, 0)), None);
        assert!(overlay.segments.is_empty());
        assert_eq!(overlay.board_size(), (4 * CELL_SIZE, 3 * CELL_SIZE));
    }

    #[test]
    fn ascii_marks_path_and_markers() {
        let mut session = session();
        session.handle_move(Direction::Down);
        session.handle_move(Direction::Down);
        session.handle_move(Direction::Right);
        assert_eq!(session.player(), Point::new(1, 2));
        assert_eq!(render_ascii(&session), "S.# \n*## \n.@#G");
    }

    #[test]
    fn pixel_segments_join_cell_centres() {
        let mut session = session();
        session.handle_move(Direction::Right);
        let overlay = Overlay::capture(&session);
        assert_eq!(overlay.pixel_segments(30), vec![((45, 15), (15, 15))]);
        assert_eq!(cell_center(Point::new(2, 1), 30), (75, 45));
    }
}
