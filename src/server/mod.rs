// Server module entry point
// Listener setup, accept loop, connection handling, and shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the accept-loop module keeps its file name but
// gets a different module name.
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::bind_listener;
pub use server_loop::serve;
pub use signal::start_signal_handler;
