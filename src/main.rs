mod food;
mod game;
mod geometry;
mod snake;
mod term;

pub type GridInt = i16;

/// Grid coordinate in (y, x) order, matching terminal row/column addressing.
/// Signed so a candidate head one step past the top or left edge is
/// representable before the bounds check rejects it.
pub type Point = (GridInt, GridInt);

fn main() {
    let mut game = game::Game::new();
    game.initialize();

    if game.show_splash() {
        game.play();
    }

    game.shutdown();
}
