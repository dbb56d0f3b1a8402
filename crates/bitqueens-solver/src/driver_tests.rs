//! Tests for the symmetry driver.

use super::*;
use crate::kernel::StackedKernel;
use bitqueens_test::{
    brute_force_count, brute_force_solutions, brute_force_start_column_count, is_valid_placement,
    known_count, mirror,
};

#[test]
fn test_known_counts_up_to_ten() {
    let expected = [1, 0, 0, 2, 10, 4, 40, 92, 352, 724];
    for (i, &count) in expected.iter().enumerate() {
        let width = i as u32 + 1;
        assert_eq!(solve(width), Ok(count), "width {width}");
    }
}

#[test]
fn test_width_twelve() {
    assert_eq!(solve(12), Ok(14_200));
}

#[test]
fn test_zero_width_rejected() {
    assert_eq!(solve(0), Err(QueensError::InvalidWidth { width: 0, max: 64 }));
}

#[test]
fn test_width_beyond_mask_rejected() {
    assert_eq!(
        solve(65),
        Err(QueensError::InvalidWidth { width: 65, max: 64 })
    );

    let mut kernel = RecursiveKernel::new();
    let result: Result<u64> = solve_with::<u8, u64, _>(&mut kernel, 9);
    assert_eq!(result, Err(QueensError::InvalidWidth { width: 9, max: 8 }));
    assert_eq!(Kernel::<u8>::nodes_explored(&kernel), 0);
}

#[test]
fn test_full_mask_width() {
    let mut kernel = RecursiveKernel::new();
    let count: u64 = solve_with::<u8, u64, _>(&mut kernel, 8).unwrap();
    assert_eq!(count, 92);

    let mut kernel = StackedKernel::<u8>::new();
    let count: u64 = solve_with(&mut kernel, 8).unwrap();
    assert_eq!(count, 92);
}

#[test]
fn test_small_count_type() {
    let mut kernel = RecursiveKernel::new();
    let count: u8 = solve_with::<u16, u8, _>(&mut kernel, 8).unwrap();
    assert_eq!(count, 92);
}

#[test]
fn test_solve_many_in_order() {
    assert_eq!(solve_many(&[4, 8]), Ok(vec![2, 92]));
    assert_eq!(solve_many(&[8, 4]), Ok(vec![92, 2]));
    assert_eq!(solve_many(&[]), Ok(vec![]));
}

#[test]
fn test_solve_many_stops_at_invalid_width() {
    assert_eq!(
        solve_many(&[4, 0, 8]),
        Err(QueensError::InvalidWidth { width: 0, max: 64 })
    );
}

#[test]
fn test_mirror_half_is_half_of_total() {
    for width in (2..=12u32).step_by(2) {
        let mut kernel = RecursiveKernel::new();
        let half: u64 = (0..width / 2)
            .map(|col| start_column_count::<u64, u64, _>(&mut kernel, width, col).unwrap())
            .sum();
        assert_eq!(half * 2, solve(width).unwrap(), "width {width}");
    }
}

#[test]
fn test_odd_width_center_added_once() {
    let width = 5;
    let mut kernel = RecursiveKernel::new();
    let left: u64 = (0..2)
        .map(|col| start_column_count::<u32, u64, _>(&mut kernel, width, col).unwrap())
        .sum();
    let center: u64 = start_column_count::<u32, u64, _>(&mut kernel, width, 2).unwrap();
    assert_eq!(2 * left + center, 10);
}

#[test]
fn test_start_column_matches_oracle() {
    for width in 1..=7u32 {
        let mut kernel = StackedKernel::<u32>::new();
        for col in 0..width {
            let count: u64 = start_column_count(&mut kernel, width, col).unwrap();
            assert_eq!(
                count,
                brute_force_start_column_count(width as usize, col as usize),
                "width {width} column {col}"
            );
        }
    }
}

fn assert_kernels_agree_on<M: ColumnMask>() {
    let mut recursive = RecursiveKernel::new();
    let mut stacked = StackedKernel::<M>::new();

    for width in 1..=12u32 {
        let a: u64 = solve_with::<M, u64, _>(&mut recursive, width).unwrap();
        let b: u64 = solve_with(&mut stacked, width).unwrap();
        assert_eq!(a, b, "{} bits, width {width}", M::bit_width());
        assert_eq!(Some(a), known_count(width), "{} bits, width {width}", M::bit_width());
    }

    assert_eq!(
        Kernel::<M>::nodes_explored(&recursive),
        stacked.nodes_explored(),
        "{} bits",
        M::bit_width()
    );
}

#[test]
fn test_kernels_agree_across_masks() {
    assert_kernels_agree_on::<u16>();
    assert_kernels_agree_on::<u32>();
    assert_kernels_agree_on::<u64>();
    assert_kernels_agree_on::<u128>();
}

#[test]
fn test_mirrored_solutions_match_start_columns() {
    for width in 1..=7u32 {
        let solutions = brute_force_solutions(width as usize);
        let mut kernel = RecursiveKernel::new();

        for solution in &solutions {
            let reflected = mirror(solution);
            assert!(is_valid_placement(&reflected), "{solution:?}");
            assert!(solutions.contains(&reflected), "{solution:?}");
        }

        for col in 0..width {
            let here: u64 = start_column_count::<u32, u64, _>(&mut kernel, width, col).unwrap();
            let mirrored: u64 =
                start_column_count::<u32, u64, _>(&mut kernel, width, width - 1 - col).unwrap();
            let starting_here = solutions.iter().filter(|s| s[0] == col as usize).count();

            assert_eq!(here, mirrored, "width {width} column {col}");
            assert_eq!(here, starting_here as u64, "width {width} column {col}");
        }
    }
}

#[test]
fn test_start_column_out_of_range() {
    let mut kernel = RecursiveKernel::new();
    let result: Result<u64> = start_column_count::<u64, u64, _>(&mut kernel, 4, 4);
    assert_eq!(result, Err(QueensError::InvalidColumn { column: 4, width: 4 }));
}

#[test]
fn test_matches_brute_force() {
    for width in 1..=8u32 {
        assert_eq!(solve(width).unwrap(), brute_force_count(width as usize));
    }
}

#[test]
fn test_wide_mask_and_count() {
    let mut kernel = StackedKernel::<u128>::new();
    let count: u128 = solve_with(&mut kernel, 11).unwrap();
    assert_eq!(Some(count as u64), known_count(11));
}

#[test]
fn test_repeated_calls_agree() {
    let first = solve(9);
    for _ in 0..3 {
        assert_eq!(solve(9), first);
    }
}

#[test]
fn test_pruning_explores_far_fewer_nodes_than_permutations() {
    let mut kernel = RecursiveKernel::new();
    let count: u64 = solve_with::<u64, u64, _>(&mut kernel, 12).unwrap();
    assert_eq!(count, 14_200);

    let permutations: u64 = (1..=12).product();
    let nodes = Kernel::<u64>::nodes_explored(&kernel);
    assert!(nodes * 100 < permutations, "{nodes} nodes explored");
}
