use std::sync::Arc;

/// Alias to a scalar floating type used for coordinates and distances.
pub type Float = f64;

/// A logger type which is called with various information regarding the work done by the caller.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which writes messages to standard output.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| ())
}
