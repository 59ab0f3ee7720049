#[macro_use]
extern crate tracing;

mod engine;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
mod utils;

use crate::utils::shutdown_signal;
use error::{Error, Result};
pub use state::*;
use tokio::net::TcpListener;

pub fn app<S: StateTrait>(state: S) -> axum::Router {
    let routes = handlers::routes::<S>();
    middlewares::middlewares(state, routes)
}

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!(
        "listening on port {}",
        listener.local_addr().unwrap().port()
    );

    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
