use rand::seq::SliceRandom;
use rand::Rng;

use crate::snake::Snake;
use crate::{GridInt, Point};

/// Random placements tried before falling back to scanning every cell.
const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Returns where the food lives after this tick.
///
/// `prev` is returned untouched unless the food was just eaten, so redrawing
/// an uneaten food is idempotent. A fresh cell never overlaps the snake:
/// rejection sampling handles the common sparse board, and a dense board
/// falls back to choosing uniformly among the enumerated free cells. When no
/// free cell exists at all the previous location is kept; the head is
/// already sitting on it, so it cannot be eaten again on the next tick.
pub fn place_food<R: Rng>(
    rng: &mut R,
    eaten: bool,
    prev: Point,
    snake: &Snake,
    height: GridInt,
    width: GridInt,
) -> Point {
    if !eaten {
        return prev;
    }

    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let candidate = (rng.gen_range(0..height), rng.gen_range(0..width));
        if !snake.is_occupied(candidate) {
            return candidate;
        }
    }

    let free: Vec<Point> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (y, x)))
        .filter(|point| !snake.is_occupied(*point))
        .collect();

    free.choose(rng).copied().unwrap_or(prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uneaten_food_stays_where_it_was() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![(5, 5), (5, 4)]);

        assert_eq!(place_food(&mut rng, false, (2, 3), &snake, 10, 10), (2, 3));
    }

    #[test]
    fn fresh_food_never_lands_on_the_snake() {
        let snake = Snake::from_segments(vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let food = place_food(&mut rng, true, (0, 0), &snake, 3, 3);
            assert!(!snake.is_occupied(food), "food landed on snake: {:?}", food);
        }
    }

    #[test]
    fn fresh_food_is_always_in_bounds() {
        let snake = Snake::from_segments(vec![(1, 1)]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (y, x) = place_food(&mut rng, true, (0, 0), &snake, 4, 6);
            assert!(y >= 0 && y < 4 && x >= 0 && x < 6);
        }
    }

    #[test]
    fn nearly_full_grid_finds_the_only_free_cell() {
        // 2x2 grid with a single free cell; the scan fallback must find it
        // regardless of how unlucky the sampling is.
        let snake = Snake::from_segments(vec![(0, 0), (0, 1), (1, 0)]);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(place_food(&mut rng, true, (0, 0), &snake, 2, 2), (1, 1));
        }
    }

    #[test]
    fn completely_full_grid_keeps_the_previous_food() {
        let snake = Snake::from_segments(vec![(0, 0)]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(&mut rng, true, (0, 0), &snake, 1, 1), (0, 0));
    }
}
