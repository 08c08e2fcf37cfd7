use greedy_chess::config::GameConfig;
use greedy_chess::frontend::text_frontend::run_stdio_loop;

fn main() -> std::io::Result<()> {
    let config = GameConfig::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    tracing::info!(
        "greedy_chess v{} starting, engine {:?}, seed {:?}",
        env!("CARGO_PKG_VERSION"),
        config.engine,
        config.engine_seed
    );

    run_stdio_loop(&config)
}
