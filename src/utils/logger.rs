use tracing::Level;

/// Initializes the global tracing subscriber
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (trace, debug, info, warn, error) and defaults to `info`. Calling this
/// more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn setup_logger() {
    let level = match std::env::var("LOGLEVEL")
        .unwrap_or_else(|_| String::from("info"))
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
