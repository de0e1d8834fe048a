// Start of file: /src/middlewares/mod.rs

/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - access_log
*/

pub mod access_log;

// End of file: /src/middlewares/mod.rs
