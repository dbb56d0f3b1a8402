//! Array-based backtracking oracle.
//!
//! Keeps one column index per row and checks every earlier row directly,
//! without bitmasks or symmetry. Slow, but independent of the solver.

/// Returns true if no two queens share a column or a diagonal.
///
/// `placement[row]` is the column of the queen in `row`.
///
/// # Example
///
/// ```
/// use bitqueens_test::is_valid_placement;
///
/// assert!(is_valid_placement(&[1, 3, 0, 2]));
/// assert!(!is_valid_placement(&[0, 1, 2, 3]));
/// ```
pub fn is_valid_placement(placement: &[usize]) -> bool {
    for (row, &col) in placement.iter().enumerate() {
        for (other_row, &other_col) in placement.iter().enumerate().take(row) {
            if !compatible(other_row, other_col, row, col) {
                return false;
            }
        }
    }
    true
}

/// Reflects a placement left to right.
pub fn mirror(placement: &[usize]) -> Vec<usize> {
    let width = placement.len();
    placement.iter().map(|&col| width - 1 - col).collect()
}

/// Counts all solutions for `width`.
pub fn brute_force_count(width: usize) -> u64 {
    let mut placement = Vec::with_capacity(width);
    extend(&mut placement, width)
}

/// Counts the solutions whose row-0 queen stands on `column`.
///
/// # Panics
///
/// Panics if `column >= width`.
pub fn brute_force_start_column_count(width: usize, column: usize) -> u64 {
    assert!(column < width, "column {column} outside width {width}");
    let mut placement = Vec::with_capacity(width);
    placement.push(column);
    extend(&mut placement, width)
}

/// Lists every solution for `width`, in lexicographic order.
///
/// # Example
///
/// ```
/// use bitqueens_test::brute_force_solutions;
///
/// assert_eq!(brute_force_solutions(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// ```
pub fn brute_force_solutions(width: usize) -> Vec<Vec<usize>> {
    let mut placement = Vec::with_capacity(width);
    let mut solutions = Vec::new();
    collect(&mut placement, width, &mut solutions);
    solutions
}

fn compatible(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
    col_a != col_b && row_a.abs_diff(row_b) != col_a.abs_diff(col_b)
}

fn fits(placement: &[usize], col: usize) -> bool {
    let row = placement.len();
    placement
        .iter()
        .enumerate()
        .all(|(other_row, &other_col)| compatible(other_row, other_col, row, col))
}

fn collect(placement: &mut Vec<usize>, width: usize, solutions: &mut Vec<Vec<usize>>) {
    if placement.len() == width {
        solutions.push(placement.clone());
        return;
    }

    for col in 0..width {
        if fits(placement, col) {
            placement.push(col);
            collect(placement, width, solutions);
            placement.pop();
        }
    }
}

fn extend(placement: &mut Vec<usize>, width: usize) -> u64 {
    let row = placement.len();
    if row == width {
        return 1;
    }

    let mut count = 0;
    for col in 0..width {
        if fits(placement, col) {
            placement.push(col);
            count += extend(placement, width);
            placement.pop();
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::known::known_count;

    #[test]
    fn test_brute_force_matches_known_counts() {
        for width in 1..=8 {
            assert_eq!(
                Some(brute_force_count(width)),
                known_count(width as u32),
                "width {width}"
            );
        }
    }

    #[test]
    fn test_start_columns_sum_to_total() {
        let width = 6;
        let total: u64 = (0..width)
            .map(|col| brute_force_start_column_count(width, col))
            .sum();
        assert_eq!(total, brute_force_count(width));
    }

    #[test]
    fn test_mirror_keeps_validity() {
        let placement = [1, 3, 0, 2];
        assert_eq!(mirror(&placement), vec![2, 0, 3, 1]);
        assert!(is_valid_placement(&mirror(&placement)));
    }

    #[test]
    fn test_invalid_diagonal() {
        assert!(!is_valid_placement(&[0, 2, 4, 1, 3, 5]));
        assert!(!is_valid_placement(&[2, 1]));
    }

    #[test]
    fn test_solutions_agree_with_count() {
        for width in 1..=7 {
            let solutions = brute_force_solutions(width);
            assert_eq!(solutions.len() as u64, brute_force_count(width));
            assert!(solutions.iter().all(|s| is_valid_placement(s)));
        }
    }

    #[test]
    fn test_zero_width_has_empty_solution() {
        assert_eq!(brute_force_count(0), 1);
    }
}
