use ndarray::Array2;

use crate::core::processing::gradient::GradientMap;
use crate::types::CropWindow;

/// Summed-area table over a gradient map. `table[[r, c]]` holds the sum of
/// every value above and to the left of (r, c), exclusive, so any rectangular
/// region sum is four lookups.
pub struct SummedAreaTable {
    table: Array2<f64>,
}

impl SummedAreaTable {
    pub fn new(map: &GradientMap) -> Self {
        let (rows, cols) = map.dim();
        let mut table = Array2::<f64>::zeros((rows + 1, cols + 1));

        for r in 0..rows {
            let mut row_sum = 0.0f64;
            for c in 0..cols {
                row_sum += map[[r, c]] as f64;
                table[[r + 1, c + 1]] = table[[r, c + 1]] + row_sum;
            }
        }

        Self { table }
    }

    /// Sum of the `width` x `height` window with top-left corner at (x, y).
    pub fn window_sum(&self, x: usize, y: usize, width: usize, height: usize) -> f64 {
        self.table[[y + height, x + width]] - self.table[[y, x + width]]
            - self.table[[y + height, x]]
            + self.table[[y, x]]
    }
}

/// Find the window position maximising cumulative gradient energy.
///
/// Every valid top-left offset is evaluated in row-major order; ties keep the
/// first maximum encountered, which makes the result deterministic. The
/// window size must not exceed the map (validated upstream), so the search
/// space is never empty.
pub fn find_best_window(map: &GradientMap, width: u32, height: u32) -> CropWindow {
    let (rows, cols) = map.dim();
    let w = width as usize;
    let h = height as usize;
    let table = SummedAreaTable::new(map);

    let mut best_x = 0usize;
    let mut best_y = 0usize;
    let mut best_sum = f64::NEG_INFINITY;

    for y in 0..=(rows - h) {
        for x in 0..=(cols - w) {
            let sum = table.window_sum(x, y, w, h);
            if sum > best_sum {
                best_sum = sum;
                best_x = x;
                best_y = y;
            }
        }
    }

    CropWindow {
        x: best_x as u32,
        y: best_y as u32,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random map for equivalence checks.
    fn pattern_map(rows: usize, cols: usize) -> GradientMap {
        Array2::from_shape_fn((rows, cols), |(r, c)| ((r * 31 + c * 17) % 13) as f32)
    }

    fn brute_force_sum(map: &GradientMap, x: usize, y: usize, w: usize, h: usize) -> f64 {
        let mut sum = 0.0f64;
        for r in y..y + h {
            for c in x..x + w {
                sum += map[[r, c]] as f64;
            }
        }
        sum
    }

    fn brute_force_best(map: &GradientMap, w: usize, h: usize) -> (usize, usize) {
        let (rows, cols) = map.dim();
        let mut best = (0, 0);
        let mut best_sum = f64::NEG_INFINITY;
        for y in 0..=(rows - h) {
            for x in 0..=(cols - w) {
                let sum = brute_force_sum(map, x, y, w, h);
                if sum > best_sum {
                    best_sum = sum;
                    best = (x, y);
                }
            }
        }
        best
    }

    #[test]
    fn window_sums_match_brute_force() {
        let map = pattern_map(13, 9);
        let table = SummedAreaTable::new(&map);
        for y in 0..=10 {
            for x in 0..=5 {
                assert_eq!(
                    table.window_sum(x, y, 4, 3),
                    brute_force_sum(&map, x, y, 4, 3),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn search_agrees_with_brute_force() {
        let map = pattern_map(21, 17);
        for &(w, h) in &[(1usize, 1usize), (4, 3), (17, 21), (5, 20)] {
            let window = find_best_window(&map, w as u32, h as u32);
            let expected = brute_force_best(&map, w, h);
            assert_eq!((window.x as usize, window.y as usize), expected);
        }
    }

    #[test]
    fn result_is_always_in_bounds() {
        let map = pattern_map(15, 10);
        for &(w, h) in &[(1u32, 1u32), (3, 7), (10, 15), (10, 1)] {
            let window = find_best_window(&map, w, h);
            assert!(window.x + window.width <= 10);
            assert!(window.y + window.height <= 15);
        }
    }

    #[test]
    fn uniform_map_ties_break_to_origin() {
        let map = Array2::from_elem((12, 12), 1.0f32);
        let window = find_best_window(&map, 5, 5);
        assert_eq!((window.x, window.y), (0, 0));
    }

    #[test]
    fn equal_peaks_keep_the_first_in_row_major_order() {
        // Two identical peaks; the one earlier in scan order must win.
        let mut map = Array2::zeros((10, 10));
        map[[2, 7]] = 5.0;
        map[[6, 1]] = 5.0;
        let window = find_best_window(&map, 2, 2);
        assert_eq!((window.x, window.y), (6, 1));
    }

    #[test]
    fn search_is_deterministic() {
        let map = pattern_map(19, 23);
        let first = find_best_window(&map, 6, 4);
        let second = find_best_window(&map, 6, 4);
        assert_eq!(first, second);
    }
}
