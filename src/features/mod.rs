// Start of file: /src/features/mod.rs

/*
    * Feature modules. Each feature folder holds its routes and handler logic.
*/

pub mod pages;

// End of file: /src/features/mod.rs
