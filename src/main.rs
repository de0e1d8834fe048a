// Start of file: /src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use hello_web::config::state::AppState;
use hello_web::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // * Set up logging first so configuration loading can emit warnings
    logging::init_tracing();

    let app: Router = server::create_app();
    let listener: TcpListener = server::setup_listener().await?;

    let protocol: &str = &AppState::instance().environment.protocol;
    println!("Server listening on: {}://{}", protocol, listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: /src/main.rs
