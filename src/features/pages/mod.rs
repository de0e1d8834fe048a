// Start of file: /src/features/pages/mod.rs

pub mod handler;
pub mod routes;

// End of file: /src/features/pages/mod.rs
