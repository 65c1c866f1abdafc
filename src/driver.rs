use crate::build_info;
use crate::error::*;
use crate::progress::*;
use crate::solver::*;
use clap::Parser;

/// plate: Jacobi relaxation of a heated plate
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interior rows of the plate.
    #[arg(short, long, default_value = "1000")]
    pub rows: usize,

    /// Interior columns of the plate.
    #[arg(short, long, default_value = "1000")]
    pub cols: usize,

    /// Stop after this many iterations.
    #[arg(short, long, default_value = "100")]
    pub max_iterations: usize,

    /// Largest permitted change in temperature for convergence.
    #[arg(long, default_value_t = MAX_TEMP_ERROR)]
    pub threshold: f64,

    /// Interior rows per parallel task.
    #[arg(long, default_value = "64")]
    pub chunk_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Log the bottom-right diagonal every this many iterations, 0 disables.
    #[arg(long, default_value = "100")]
    pub report_every: usize,

    /// Diagonal cells to log with each progress report.
    #[arg(long, default_value_t = DiagonalTracker::DEFAULT_LENGTH)]
    pub diagonal_length: usize,

    /// Extra cell to log with each progress report.
    #[arg(long, requires("probe_col"))]
    pub probe_row: Option<usize>,

    #[arg(long, requires("probe_row"))]
    pub probe_col: Option<usize>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn solver_parameters(&self) -> SolverParameters {
        SolverParameters {
            max_iterations: self.max_iterations,
            threshold: self.threshold,
            chunk_size: self.chunk_size,
        }
    }

    pub fn tracker(&self) -> DiagonalTracker {
        let tracker = DiagonalTracker::new(self.report_every)
            .with_length(self.diagonal_length);
        match (self.probe_row, self.probe_col) {
            (Some(row), Some(col)) => tracker.with_probe(row, col),
            _ => tracker,
        }
    }

    /// Parse arguments and configure the global thread pool.
    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()?;

        log::info!(
            "{} ({}): {} x {} plate, {} threads",
            name,
            build_info::git_describe(),
            args.rows,
            args.cols,
            args.threads
        );
        Ok(args)
    }
}

/// Build a hot corner solver from the command line and run it to completion.
pub fn run(args: &Args) -> Result<SolveReport> {
    let mut solver =
        JacobiSolver::hot_corner(args.rows, args.cols, args.solver_parameters())?;
    let mut tracker = args.tracker();
    Ok(solver.run_with_observer(&mut tracker))
}
