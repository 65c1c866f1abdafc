use plate::grid::*;
use plate::par_slice;
use plate::partition::*;
use plate::solver::*;
use plate::stencil::standard_stencils::laplace_2d;

use float_cmp::assert_approx_eq;
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).unwrap();
    for i in 0..grid.height() {
        for j in 0..grid.width() {
            grid.set(i, j, rng.gen_range(-100.0..100.0));
        }
    }
    grid
}

fn partitions(rows: usize) -> Vec<RowPartition> {
    let mut irregular = Vec::new();
    let mut remaining = rows;
    let mut h = 1;
    while remaining > 0 {
        let take = h.min(remaining);
        irregular.push(take);
        remaining -= take;
        h = h % 3 + 1;
    }
    vec![
        RowPartition::Single,
        RowPartition::Equal(4),
        RowPartition::Equal(rows + 3),
        RowPartition::Chunked(5),
        RowPartition::Explicit(irregular),
    ]
}

#[test]
fn parallel_matches_serial() {
    for (rows, cols, seed) in [(1, 1, 1), (4, 4, 2), (17, 5, 3), (9, 31, 4)] {
        let previous = random_grid(rows, cols, seed);
        let mut serial_output = previous.clone();
        let serial_delta = serial_step(&previous, &mut serial_output);

        for partition in partitions(rows) {
            let blocks = partition.blocks(rows, cols).unwrap();
            let mut output = previous.clone();
            let partials =
                relax_blocks(&laplace_2d(), &previous, &mut output, &blocks);
            assert_eq!(partials.len(), blocks.len());
            assert_eq!(par_slice::max_of(&partials), serial_delta);
            for i in 0..output.height() {
                for j in 0..output.width() {
                    assert_approx_eq!(
                        f64,
                        output.get(i, j),
                        serial_output.get(i, j),
                        ulps = 1
                    );
                }
            }
        }
    }
}

#[test]
fn delta_is_one_pass_max() {
    let rows = 23;
    let cols = 14;
    let previous = random_grid(rows, cols, 11);
    let blocks = RowPartition::Single.blocks(rows, cols).unwrap();
    let mut output = previous.clone();
    let partials = relax_blocks(&laplace_2d(), &previous, &mut output, &blocks);
    assert_eq!(partials.len(), 1);
    assert_eq!(partials[0], output.max_interior_diff(&previous));
    assert!(partials[0] >= 0.0);
}

#[test]
fn partial_maxima_combine_in_any_order() {
    let rows = 40;
    let cols = 12;
    let previous = random_grid(rows, cols, 5);
    let whole = {
        let mut output = previous.clone();
        serial_step(&previous, &mut output)
    };

    let mut rng = StdRng::seed_from_u64(99);
    for partition in partitions(rows) {
        let blocks = partition.blocks(rows, cols).unwrap();
        let mut output = previous.clone();
        let mut partials =
            relax_blocks(&laplace_2d(), &previous, &mut output, &blocks);

        let forward = partials.iter().copied().fold(0.0, f64::max);
        let backward = partials.iter().rev().copied().fold(0.0, f64::max);
        assert_eq!(forward, whole);
        assert_eq!(backward, whole);
        for _ in 0..5 {
            partials.shuffle(&mut rng);
            assert_eq!(par_slice::max_of(&partials), whole);
        }

        // dropping the block holding the max changes the answer,
        // so every block has to be counted
        let (argmax, _) = partials
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .unwrap();
        if partials.iter().filter(|p| **p == whole).count() == 1 {
            let mut dropped = partials.clone();
            dropped.remove(argmax);
            assert!(par_slice::max_of(&dropped) < whole);
        }
    }
}

#[test]
fn solver_partitions_agree() {
    let rows = 19;
    let cols = 13;
    let parameters = SolverParameters {
        max_iterations: 1000,
        chunk_size: 4,
        ..Default::default()
    };
    let mut reference = JacobiSolver::hot_corner(rows, cols, parameters).unwrap();
    let mut solvers: Vec<_> = partitions(rows)
        .into_iter()
        .map(|p| {
            (
                p,
                JacobiSolver::hot_corner(rows, cols, parameters).unwrap(),
            )
        })
        .collect();

    for _ in 0..50 {
        let expected = reference.step();
        for (partition, solver) in solvers.iter_mut() {
            let delta = solver.step_with(partition).unwrap();
            assert_eq!(delta, expected);
            assert_eq!(solver.grid(), reference.grid());
            assert_eq!(solver.iterations(), reference.iterations());
        }
    }
}

#[test]
fn thread_count_does_not_matter() {
    let run_with = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        pool.install(|| {
            let parameters = SolverParameters {
                max_iterations: 5000,
                chunk_size: 2,
                ..Default::default()
            };
            let mut solver =
                JacobiSolver::hot_corner(16, 16, parameters).unwrap();
            let report = solver.run();
            (report, solver.grid().clone())
        })
    };

    let (single_report, single_grid) = run_with(1);
    for threads in [2, 3, 8] {
        let (report, grid) = run_with(threads);
        assert_eq!(report, single_report);
        assert_eq!(grid, single_grid);
    }
    assert!(single_report.converged());
}

#[test]
fn delta_is_non_negative() {
    for seed in 0..20 {
        let rows = 1 + (seed as usize * 7) % 13;
        let cols = 1 + (seed as usize * 5) % 11;
        let previous = random_grid(rows, cols, seed);
        let mut output = previous.clone();
        let delta = serial_step(&previous, &mut output);
        assert!(delta >= 0.0);

        let blocks = RowPartition::Equal(3).blocks(rows, cols).unwrap();
        let mut output = previous.clone();
        for p in relax_blocks(&laplace_2d(), &previous, &mut output, &blocks) {
            assert!(p >= 0.0);
        }
    }
}
