use anyhow::Context;
use plate::driver::*;

#[cfg(feature = "profile-with-puffin")]
fn start_profiler() -> anyhow::Result<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    log::info!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_micros()
    .init();

    let args = Args::cli_setup("plate")?;

    #[cfg(feature = "profile-with-puffin")]
    let _server = start_profiler()?;

    let report = run(&args).with_context(|| {
        format!("Failed to build a {} x {} plate", args.rows, args.cols)
    })?;
    profiling::finish_frame!();

    log::info!(
        "Max error at iteration {} was {:.6}",
        report.iterations,
        report.delta
    );
    if !report.converged() {
        log::warn!(
            "Stopped at the iteration cap before reaching {}",
            args.threshold
        );
    }
    Ok(())
}
