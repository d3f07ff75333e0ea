use crate::GridInt;

/// True iff (y, x) lies inside a grid of the given dimensions.
/// Callers re-query the terminal for the dimensions on every use, since
/// the terminal may have been resized since the previous tick.
pub fn is_in_bounds(y: GridInt, x: GridInt, height: GridInt, width: GridInt) -> bool {
    y >= 0 && y < height && x >= 0 && x < width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_the_grid_are_in_bounds() {
        assert!(is_in_bounds(0, 0, 10, 10));
        assert!(is_in_bounds(9, 9, 10, 10));
        assert!(is_in_bounds(0, 9, 10, 10));
        assert!(is_in_bounds(9, 0, 10, 10));
    }

    #[test]
    fn cells_past_any_edge_are_out_of_bounds() {
        assert!(!is_in_bounds(-1, 5, 10, 10));
        assert!(!is_in_bounds(5, -1, 10, 10));
        assert!(!is_in_bounds(10, 5, 10, 10));
        assert!(!is_in_bounds(5, 10, 10, 10));
    }

    #[test]
    fn empty_grid_contains_nothing() {
        assert!(!is_in_bounds(0, 0, 0, 0));
    }
}
