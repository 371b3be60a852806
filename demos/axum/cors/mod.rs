use std::sync::Arc;

use broadcast_cors_rs::{Cors, CorsOptions};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CorsOptions::new()
        .allowed_origins(["http://app.example.com"])
        .allowed_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .allowed_methods(["GET", "POST"])
        .allow_credentials(true);

    AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Axum CORS example!",
    }
}

pub mod middleware;
