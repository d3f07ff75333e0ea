use std::{fmt, thread::sleep, time::Duration};

use crate::food::place_food;
use crate::snake::{Collision, Direction, Snake};
use crate::term::{InputEvent, TermManager};
use crate::{geometry, GridInt, Point};

use rand::Rng;

const GAME_OVER_PAUSE: Duration = Duration::from_secs(3);

/// Why the session ended. Set exactly once, shown on the game-over screen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameOverReason {
    OutOfBounds,
    SelfCollision,
    Quit,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameOverReason::OutOfBounds => "Your snake went out of bounds!",
            GameOverReason::SelfCollision => "Your snake ate itself!",
            GameOverReason::Quit => "Why did you quit? You were doing quite well!",
        };
        f.write_str(msg)
    }
}

impl From<Collision> for GameOverReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::OutOfBounds => GameOverReason::OutOfBounds,
            Collision::SelfCollision => GameOverReason::SelfCollision,
        }
    }
}

/// What a tick decided to do with its (possibly absent) input.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Step {
    Advance(Direction),
    Reject,
    Quit,
}

/// No input means the snake keeps crawling in its current direction; a
/// request for the exact opposite direction is rejected without moving.
fn resolve_step(input: Option<InputEvent>, current: Direction) -> Step {
    match input {
        Some(InputEvent::Quit) => Step::Quit,
        Some(InputEvent::Dir(dir)) if dir.is_opposite(current) => Step::Reject,
        Some(InputEvent::Dir(dir)) => Step::Advance(dir),
        None => Step::Advance(current),
    }
}

/// Applies the eaten-food rule after a successful move: the food respawns
/// and the score rises by one exactly when the head landed on it.
fn settle_food<R: Rng>(
    rng: &mut R,
    snake: &Snake,
    food: Point,
    score: u32,
    height: GridInt,
    width: GridInt,
) -> (Point, u32) {
    if snake.head() == food {
        (place_food(rng, true, food, snake, height, width), score + 1)
    } else {
        (food, score)
    }
}

/// Delay between automatic moves. Higher levels are meant to shrink the
/// delay, but difficulty scaling is still a stub: every level maps to the
/// same 200 ms.
// TODO: derive the delay from the level once difficulty selection exists.
fn tick_delay(_level: u32) -> Duration {
    Duration::from_millis(200)
}

pub struct Game {
    term: TermManager,
    snake: Snake,
    food: Point,
    direction: Direction,
    score: u32,
    read_input: bool,
}

impl Game {
    pub fn new() -> Self {
        Game {
            term: TermManager::new(),
            snake: Snake::new(0, 0),
            food: (0, 0),
            direction: Direction::Right,
            score: 0,
            read_input: true,
        }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    /// Shows the instructions and waits for a key. Returns false when the
    /// player quits straight from the splash screen.
    pub fn show_splash(&mut self) -> bool {
        self.term.show_splash();
        self.term.wait_for_key() != Some(InputEvent::Quit)
    }

    pub fn play(&mut self) {
        self.reset_board();
        let reason = self.run_ticks();
        self.game_over(reason);
    }

    pub fn shutdown(&mut self) {
        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn run_ticks(&mut self) -> GameOverReason {
        loop {
            let (height, width) = self.term.grid_size();

            // The terminal may have shrunk underneath us; start over in
            // the middle of whatever is left.
            let (head_y, head_x) = self.snake.head();
            if !geometry::is_in_bounds(head_y, head_x, height, width) {
                self.reset_board();
                continue;
            }

            self.term.draw_food(self.food);

            let input = if self.read_input {
                self.term.read_input_timeout(tick_delay(0))
            } else {
                None
            };
            self.read_input = true;

            match resolve_step(input, self.direction) {
                Step::Quit => return GameOverReason::Quit,
                Step::Reject => {
                    // Don't reprocess the stale event next tick; fall back
                    // to the current direction instead.
                    self.read_input = false;
                }
                Step::Advance(dir) => {
                    let (dy, dx) = dir.delta();
                    if let Err(collision) = self.snake.attempt_move(dy, dx, height, width) {
                        return collision.into();
                    }
                    self.direction = dir;

                    self.term.clear();
                    self.draw_snake();

                    let (food, score) = settle_food(
                        &mut rand::thread_rng(),
                        &self.snake,
                        self.food,
                        self.score,
                        height,
                        width,
                    );
                    self.food = food;
                    self.score = score;
                    self.term.draw_food(self.food);
                }
            }
        }
    }

    fn reset_board(&mut self) {
        let (height, width) = self.term.grid_size();
        self.snake.reset(height, width);
        self.food = place_food(
            &mut rand::thread_rng(),
            true,
            self.food,
            &self.snake,
            height,
            width,
        );
        self.direction = Direction::Right;
        self.read_input = true;

        self.term.clear();
        self.draw_snake();
        self.term.draw_food(self.food);
    }

    fn game_over(&mut self, reason: GameOverReason) {
        self.term.flush_input();
        self.term.show_game_over(&reason.to_string(), self.score);
        sleep(GAME_OVER_PAUSE);

        self.term.show_exit_prompt();
        self.term.flush_input();
        let _ = self.term.wait_for_key();
    }

    fn draw_snake(&mut self) {
        for (i, pos) in self.snake.segments().iter().enumerate() {
            if i == 0 {
                self.term.draw_head(*pos);
            } else {
                self.term.draw_segment(*pos);
            }
        }
        self.term.flush();
    }
}
