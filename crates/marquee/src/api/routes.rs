//! API route definitions.

use axum::http::{HeaderValue, Method, header};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::guard::{GuardConfig, protect};

use super::handlers;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Public routes (no authentication)
    let public_routes = Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/auth/validate", post(handlers::validate))
        .route("/auth/logout", post(handlers::logout))
        .route("/movies", get(handlers::list_movies))
        .route("/movies/rankings", get(handlers::hot_rankings))
        .route("/movies/{movie_id}", get(handlers::get_movie))
        .route("/cinemas", get(handlers::list_cinemas))
        .route("/cinemas/{cinema_id}", get(handlers::get_cinema))
        .route(
            "/cinemas/{cinema_id}/showtimes",
            get(handlers::list_showtimes),
        )
        .route("/showtimes/{showtime_id}/seats", get(handlers::seat_map))
        .with_state(state.clone());

    // Routes for logged-in users, behind the access guard.
    let account_routes = protect(
        Router::new()
            .route("/me", get(handlers::me))
            .route("/account/orders", get(handlers::list_orders))
            .route("/account/coupons", get(handlers::list_coupons))
            .route("/account/favorites", get(handlers::list_favorites))
            .with_state(state.clone()),
        state.clone(),
        GuardConfig::authenticated(),
    );

    // Admin routes, behind the guard with the elevated role required.
    let admin_routes = protect(
        Router::new()
            .route("/admin/overview", get(handlers::admin_overview))
            .with_state(state.clone()),
        state.clone(),
        GuardConfig::admin(),
    );

    Router::new()
        .route("/health", get(handlers::health))
        .nest(
            "/api",
            public_routes.merge(account_routes).merge(admin_routes),
        )
        .layer(cors)
        .layer(trace_layer)
}

/// Build the CORS layer based on configuration.
///
/// With no configured origins, all cross-origin requests are denied.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let headers = [
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        header::ORIGIN,
        header::COOKIE,
    ];

    let origins: Vec<HeaderValue> = state
        .auth
        .allowed_origins()
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("CORS: Invalid origin in config: {}", origin);
                None
            })
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, denying all cross-origin requests");
        CorsLayer::new().allow_origin(AllowOrigin::exact(HeaderValue::from_static("null")))
    } else {
        tracing::info!("CORS: Allowing {} origin(s)", origins.len());
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true)
    }
}
