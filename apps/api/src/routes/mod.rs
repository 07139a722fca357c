pub mod health;

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::coaching::{handlers, use_cases};
use crate::state::AppState;

/// Permissive CORS: any origin, the header allow-list browser clients send.
/// Also answers every OPTIONS preflight with an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// `CorsLayer` only lists allowed headers on preflight; this adds the same
/// list to every other response.
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(health::health_handler));

    for use_case in use_cases::ALL {
        router = router.route(
            &format!("/functions/v1/{}", use_case.slug),
            post(move |state: State<AppState>, body: Result<Bytes, BytesRejection>| {
                handlers::handle_use_case(state, use_case, body)
            }),
        );
    }

    router
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .with_state(state)
}
