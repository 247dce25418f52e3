//! Runs the API on a background thread and shows the frontend in a native window.
//!
//! If no window or web view can be created, the frontend is opened in the
//! default browser instead and the process keeps serving until it is stopped.

use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
    panic::{self, UnwindSafe},
    path::PathBuf,
    thread,
};

use axum_server::Handle;
use clap::Parser;
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use tracing_subscriber::filter::LevelFilter;
use wry::WebViewBuilder;

use profit::{
    AppState, Error, build_router,
    config::{ServeConfig, StoreConfig},
    serve, setup_logging,
    store::SupabaseStore,
};

const WINDOW_TITLE: &str = "Profit";
const WINDOW_WIDTH: f64 = 1200.0;
const WINDOW_HEIGHT: f64 = 800.0;

/// The desktop app for Profit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    serve: ServeConfig,

    /// The address to listen on and point the window at.
    #[arg(long, env = "PROFIT_HOST", default_value = "127.0.0.1")]
    host: IpAddr,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    setup_logging(LevelFilter::ERROR, &args.serve.log_path)?;

    let store = args.store.connect()?;
    let addr = SocketAddr::new(args.host, args.serve.port);
    let url = format!("http://{addr}");

    let static_dir = args.serve.static_dir;
    let server = thread::Builder::new()
        .name("api-server".to_owned())
        .spawn(move || run_server(addr, store, static_dir))
        .map_err(|error| Error::Server(format!("could not start the server thread: {error}")))?;

    let error = window_failure(|| open_window(&url));
    tracing::error!("Could not open the app window, falling back to the browser: {error}");

    if let Err(error) = webbrowser::open(&url) {
        tracing::error!("Could not open {url} in the browser: {error}");
    }

    server
        .join()
        .map_err(|_| Error::Server("the server thread panicked".to_owned()))?
}

/// Run `open` and turn both an error and a panic into the reason the window
/// could not be shown. GTK panics instead of returning an error when it cannot
/// initialise, e.g. without a display.
fn window_failure<F>(open: F) -> Box<dyn std::error::Error>
where
    F: FnOnce() -> Result<Infallible, Box<dyn std::error::Error>> + UnwindSafe,
{
    match panic::catch_unwind(open) {
        Ok(Err(error)) => error,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|reason| reason.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_owned());

            format!("the window system panicked: {reason}").into()
        }
    }
}

/// Serve the API from a runtime owned by the calling thread.
fn run_server(addr: SocketAddr, store: SupabaseStore, static_dir: PathBuf) -> Result<(), Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| Error::Server(format!("could not start the async runtime: {error}")))?;

    let router = build_router(AppState::new(store), Some(&static_dir));

    let result = runtime.block_on(serve(addr, router, Handle::new()));

    if let Err(error) = &result {
        tracing::error!("{error}");
    }

    result
}

/// Show `url` in a native window. Only returns if the window cannot be created,
/// closing the window exits the process.
fn open_window(url: &str) -> Result<Infallible, Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    let builder = WebViewBuilder::new().with_url(url);

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;

        let container = window
            .default_vbox()
            .ok_or("the window has no GTK container")?;
        builder.build_gtk(container)?
    };

    event_loop.run(move |event, _, control_flow| {
        // The web view is destroyed when dropped, so the event loop owns it.
        let _ = &webview;
        *control_flow = ControlFlow::Wait;

        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            *control_flow = ControlFlow::Exit;
        }
    })
}
