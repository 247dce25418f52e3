use std::net::{IpAddr, SocketAddr};

use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use profit::{
    AppState, Error, build_router,
    config::{ServeConfig, StoreConfig},
    graceful_shutdown, serve, setup_logging,
};

/// The REST API server for Profit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    serve: ServeConfig,

    /// The address to listen on.
    #[arg(long, env = "PROFIT_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    setup_logging(LevelFilter::INFO, &args.serve.log_path)?;

    let store = args.store.connect()?;
    let router = build_router(AppState::new(store), Some(&args.serve.static_dir));
    let addr = SocketAddr::new(args.host, args.serve.port);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    serve(addr, router, handle).await
}
