use plate::boundary::*;
use plate::grid::*;
use plate::solver::*;
use plate::util::*;

use float_cmp::assert_approx_eq;

fn parameters(max_iterations: usize, chunk_size: usize) -> SolverParameters {
    SolverParameters {
        max_iterations,
        chunk_size,
        ..Default::default()
    }
}

#[test]
fn hot_corner_4x4_first_steps() {
    let mut solver = JacobiSolver::hot_corner(4, 4, parameters(100, 1)).unwrap();

    // right edge ramps down the rows, bottom edge ramps along the columns
    for i in 1..=4 {
        assert_approx_eq!(f64, solver.grid().get(i, 5), 25.0 * i as f64);
        assert_approx_eq!(f64, solver.grid().get(5, i), 25.0 * i as f64);
        assert_eq!(solver.grid().get(0, i), 0.0);
        assert_eq!(solver.grid().get(i, 0), 0.0);
    }

    let delta = solver.step();
    assert_approx_eq!(f64, delta, 50.0, epsilon = 1e-9);

    let expected = [
        [0.0, 0.0, 0.0, 6.25],
        [0.0, 0.0, 0.0, 12.5],
        [0.0, 0.0, 0.0, 18.75],
        [6.25, 12.5, 18.75, 50.0],
    ];
    for i in 1..=4 {
        for j in 1..=4 {
            assert_approx_eq!(
                f64,
                solver.grid().get(i, j),
                expected[i - 1][j - 1],
                epsilon = 1e-9
            );
        }
    }

    let delta = solver.step();
    assert_approx_eq!(f64, delta, 15.625, epsilon = 1e-9);
    assert_approx_eq!(f64, solver.grid().get(4, 4), 59.375, epsilon = 1e-9);
    assert_approx_eq!(f64, solver.grid().get(3, 4), 34.375, epsilon = 1e-9);
    assert_approx_eq!(f64, solver.grid().get(4, 3), 34.375, epsilon = 1e-9);
    assert_approx_eq!(f64, solver.grid().get(3, 3), 9.375, epsilon = 1e-9);
    assert_approx_eq!(f64, solver.grid().get(1, 1), 0.0, epsilon = 1e-9);
}

#[test]
fn hot_corner_10x10_converges() {
    let mut solver =
        JacobiSolver::hot_corner(10, 10, parameters(5000, 3)).unwrap();
    let report = solver.run();
    assert_eq!(report.termination, Termination::Converged);
    assert!(report.delta <= MAX_TEMP_ERROR);
    assert!(report.iterations < 5000);
    assert_eq!(report.iterations, solver.iterations());

    // bounded by the boundary extremes, warmest next to the hot corner
    let grid = solver.grid();
    for c in grid.interior().coord_iter() {
        let v = grid.view(&c);
        assert!((0.0..=100.0).contains(&v));
    }
    assert!(grid.get(10, 10) > grid.get(1, 1));
}

#[test]
fn boundary_never_changes() {
    let mut solver =
        JacobiSolver::hot_corner(7, 9, parameters(250, 2)).unwrap();
    let initial = solver.grid().clone();
    for _ in 0..37 {
        solver.step();
        for grid in [solver.previous(), solver.current()] {
            let aabb = *grid.aabb();
            for c in aabb.coord_iter().filter(|c| aabb.on_border(c)) {
                assert_eq!(grid.view(&c), initial.view(&c));
            }
        }
    }
}

#[test]
fn delta_never_increases_from_zero_start() {
    let mut solver =
        JacobiSolver::hot_corner(12, 8, parameters(400, 5)).unwrap();
    let mut last = f64::INFINITY;
    for _ in 0..200 {
        let delta = solver.step();
        assert!(delta >= 0.0);
        assert!(delta <= last + 1e-12);
        last = delta;
    }
}

#[test]
fn converged_and_exhausted_are_distinguished() {
    let mut short = JacobiSolver::hot_corner(10, 10, parameters(10, 4)).unwrap();
    let report = short.run();
    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(report.iterations, 10);
    assert!(report.delta > MAX_TEMP_ERROR);

    let mut long = JacobiSolver::hot_corner(10, 10, parameters(5000, 4)).unwrap();
    let converged = long.run();
    assert_eq!(converged.termination, Termination::Converged);

    // a cap equal to the convergence iteration still reports convergence
    let mut exact = JacobiSolver::hot_corner(
        10,
        10,
        parameters(converged.iterations, 4),
    )
    .unwrap();
    let report = exact.run();
    assert_eq!(report, converged);
}

#[test]
fn looser_threshold_stops_earlier() {
    let run = |threshold: f64| {
        let p = SolverParameters {
            max_iterations: 5000,
            threshold,
            chunk_size: 4,
        };
        JacobiSolver::hot_corner(10, 10, p).unwrap().run()
    };
    let loose = run(1.0);
    let tight = run(0.001);
    assert!(loose.converged());
    assert!(tight.converged());
    assert!(loose.iterations < tight.iterations);
}

#[test]
fn harmonic_plate_is_a_fixed_point() {
    // i + j satisfies the discrete Laplace equation everywhere
    let harmonic = |c: &Coord<2>, _rows: usize, _cols: usize| (c[0] + c[1]) as f64;
    let mut solver =
        JacobiSolver::new(6, 5, harmonic, parameters(100, 2)).unwrap();
    solver.set_interior(|c| (c[0] + c[1]) as f64);
    let before = solver.grid().clone();

    let delta = solver.step();
    assert_eq!(delta, 0.0);
    assert_eq!(solver.grid(), &before);
    assert_eq!(solver.current(), &before);

    let report = solver.run();
    assert_eq!(report.iterations, 1);
    assert_eq!(report.termination, Termination::Converged);
}

#[test]
fn uniform_plate_is_a_fixed_point() {
    let profile = BoundaryProfile {
        top: EdgeProfile::Constant(42.0),
        bottom: EdgeProfile::Constant(42.0),
        left: EdgeProfile::Constant(42.0),
        right: EdgeProfile::Constant(42.0),
    };
    let mut solver = JacobiSolver::new(3, 11, profile, parameters(10, 1)).unwrap();
    solver.set_interior(|_| 42.0);
    assert_eq!(solver.step(), 0.0);
    for c in solver.grid().aabb().coord_iter() {
        assert_eq!(solver.grid().view(&c), 42.0);
    }
}

#[test]
fn single_cell_plate() {
    let mut solver = JacobiSolver::hot_corner(1, 1, parameters(5000, 1)).unwrap();
    // only (1, 2) = 100 and (2, 1) = 100 are hot neighbors
    let delta = solver.step();
    assert_approx_eq!(f64, delta, 50.0);
    assert_approx_eq!(f64, solver.grid().get(1, 1), 50.0);
    let report = solver.run();
    assert_eq!(report.iterations, 2);
    assert_eq!(report.delta, 0.0);
    assert!(report.converged());
}

#[test]
fn grid_reads_match_stepping() {
    let mut solver = JacobiSolver::hot_corner(5, 3, parameters(10, 2)).unwrap();
    let mut previous = solver.grid().clone();
    let mut current = Grid::new(5, 3).unwrap();
    current.copy_border_from(&previous);
    for _ in 0..10 {
        let expected = serial_step(&previous, &mut current);
        std::mem::swap(&mut previous, &mut current);
        assert_eq!(solver.step(), expected);
        assert_eq!(solver.grid(), &previous);
    }
}
