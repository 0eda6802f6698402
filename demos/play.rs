use grid_maze::render::render_ascii;
use grid_maze::{Direction, GameSession, IntentHandler, MazeConfig, MoveOutcome};
use std::error::Error;
use std::io::{self, BufRead, Write};

// Terminal version of the maze. Walk with w/a/s/d (one command per line), confirm with an
// empty line or c, quit with q. The starred cells are the shortest path back to S.
//
// S start, G goal, @ player, # obstacle, . explored by the search
fn main() -> Result<(), Box<dyn Error>> {
    let mut session = GameSession::new(&MazeConfig::default())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}\n", render_ascii(&session));
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let direction = match line.trim() {
            "w" => Some(Direction::Up),
            "s" => Some(Direction::Down),
            "a" => Some(Direction::Left),
            "d" => Some(Direction::Right),
            "" | "c" => {
                let status = session.handle_confirm();
                println!("{}: {}", status.title(), status.message());
                None
            }
            "q" => break,
            other => {
                println!("Unknown command {other:?}");
                None
            }
        };
        if let Some(direction) = direction {
            if session.handle_move(direction) == MoveOutcome::Rejected {
                println!("Blocked");
            }
        }
        println!("{}\n", render_ascii(&session));
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
