// Start of file: /src/features/pages/routes.rs

/*
    * This file defines the route(s) for the static pages.
    * Both `/` and `/hello.html` map to the same `hello_page` handler.
*/

use axum::{routing::get, Router};

use crate::features::pages::handler::hello_page;
use crate::config::state::AppState;

pub fn pages_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello_page))
        .route("/hello.html", get(hello_page))
}

// End of file: /src/features/pages/routes.rs
