use crate::{geometry, GridInt, Point};
use Direction::*;

/// The body never grows; eating only raises the score.
pub const SNAKE_LEN: usize = 20;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }
}

/// Why a move could not be completed. Either one ends the game.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Collision {
    OutOfBounds,
    SelfCollision,
}

/// Ordered body segments, head at index 0, each following index the
/// next segment toward the tail.
pub struct Snake {
    segments: Vec<Point>,
}

impl Snake {
    pub fn new(height: GridInt, width: GridInt) -> Self {
        let mut snake = Snake {
            segments: Vec::with_capacity(SNAKE_LEN),
        };
        snake.reset(height, width);
        snake
    }

    /// Places the head at the grid center with the body extending backward
    /// along the row, facing right. Used at game start and whenever a
    /// terminal resize invalidates the current positions.
    pub fn reset(&mut self, height: GridInt, width: GridInt) {
        let head = (height / 2, width / 2);
        self.segments.clear();
        self.segments
            .extend((0..SNAKE_LEN as GridInt).map(|i| (head.0, head.1 - i)));
    }

    pub fn head(&self) -> Point {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Point] {
        &self.segments
    }

    /// Linear scan; the body is a small constant length.
    pub fn is_occupied(&self, point: Point) -> bool {
        self.segments.contains(&point)
    }

    /// Tries to translate the whole body one step along (dy, dx).
    ///
    /// On success every segment takes the position its predecessor held
    /// before the move and the head takes the candidate cell, as one rigid
    /// translation. On failure the body is left untouched. The candidate is
    /// checked against every current segment, tail included, so stepping
    /// into the cell the tail is about to vacate still counts as a
    /// self-collision.
    pub fn attempt_move(
        &mut self,
        dy: GridInt,
        dx: GridInt,
        height: GridInt,
        width: GridInt,
    ) -> Result<(), Collision> {
        let (head_y, head_x) = self.head();
        let candidate = (head_y + dy, head_x + dx);

        if !geometry::is_in_bounds(candidate.0, candidate.1, height, width) {
            return Err(Collision::OutOfBounds);
        }

        if self.is_occupied(candidate) {
            return Err(Collision::SelfCollision);
        }

        self.segments.rotate_right(1);
        self.segments[0] = candidate;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Point>) -> Self {
        Snake { segments }
    }
}
