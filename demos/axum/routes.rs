use axum::extract::State;

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> &'static str {
    state.greeting
}
