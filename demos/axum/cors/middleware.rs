use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use broadcast_cors_rs::CorsError;

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let mut cors_headers = HeaderMap::new();
    let flow = match cors.apply_http(request.method(), &mut cors_headers) {
        Ok(flow) => flow,
        Err(err) => return middleware_error_response(err),
    };

    if let Some(status) = flow.status_code() {
        return (status, cors_headers).into_response();
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(cors_headers);
    response
}

fn middleware_error_response(err: CorsError) -> Response {
    tracing::error!(error = %err, "failed to write CORS headers");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("CORS configuration error: {err}"),
    )
        .into_response()
}
