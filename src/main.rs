use std::sync::Arc;

use staticd::config::{AppState, Config};
use staticd::logger;
use staticd::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path (without extension).
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let addr = cfg.socket_addr()?;
    // Bind failure (port in use, insufficient permission) is fatal and
    // propagates out of main with a non-zero exit status.
    let listener = server::bind_listener(addr)?;

    let state = Arc::new(AppState::new(cfg)?);
    logger::log_startup(&addr, &state);

    server::start_signal_handler(Arc::clone(&state.shutdown));

    server::serve(listener, state).await?;
    Ok(())
}
