// Start of file: /src/shared/mod.rs

/*
    * Re-exports for all cross-cutting (shared) modules like error handling
    * and utilities.
*/

pub mod error_handler;
pub mod utils;

// End of file: /src/shared/mod.rs
