// Server assembly: logging setup, router construction, listener, shutdown.

pub mod logging;
pub mod server;
