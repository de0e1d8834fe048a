// Library root for the hello-web static page server

pub mod config;
pub mod core;
pub mod features;
pub mod middlewares;
pub mod shared;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
