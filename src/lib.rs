pub mod annotate;
pub mod byte_source;
pub mod cli;
pub mod error;
pub mod file_loader;
pub mod pager;
pub mod request;
pub mod session;
pub mod stream_loader;

/// Send `tracing` output to stderr so it never interleaves with paged text on stdout.
///
/// The level comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
