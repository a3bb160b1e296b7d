//! API request handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::auth::{AdminType, Claims, DemoUser};
use crate::catalog::{
    Cinema, HotRanking, Movie, MovieStatus, SeatMap, Showtime,
};
use crate::guard::extract_token;

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Auth Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Public view of a user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub admin_type: AdminType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cinema_id: Option<u64>,
}

impl From<&DemoUser> for UserInfo {
    fn from(user: &DemoUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            admin_type: user.admin_type,
            managed_cinema_id: user.managed_cinema_id,
        }
    }
}

impl From<&Claims> for UserInfo {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub.clone(),
            name: claims.display_name().to_string(),
            email: claims.email.clone().unwrap_or_default(),
            admin_type: claims.admin_type,
            managed_cinema_id: claims.managed_cinema_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Session cookie carrying the token, HTTP-only. Lifetime matches the token's.
fn auth_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "auth_token={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        token,
        max_age_secs.max(0)
    )
}

/// Login endpoint.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .auth
        .verify_credentials(&request.username, &request.password)
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    let token = state.auth.issue_token(&user)?;
    let user_info = UserInfo::from(&user);

    info!(user_id = %user_info.id, "User logged in successfully");

    Ok((
        AppendHeaders([(SET_COOKIE, auth_cookie(&token, state.auth.token_ttl_secs()))]),
        Json(LoginResponse {
            token,
            user: user_info,
        }),
    ))
}

/// Register endpoint. New accounts are logged in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.auth.register(
        &request.username,
        &request.password,
        &request.name,
        &request.email,
    )?;

    let token = state.auth.issue_token(&user)?;
    let user_info = UserInfo::from(&user);

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, auth_cookie(&token, state.auth.token_ttl_secs()))]),
        Json(LoginResponse {
            token,
            user: user_info,
        }),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Token validation endpoint.
///
/// The token comes from the request body, the `Authorization` header or the
/// session cookie, in that order of preference for the body.
pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<ValidateRequest>>,
) -> ApiResult<Json<ValidateResponse>> {
    let token = body
        .and_then(|Json(request)| request.token)
        .or_else(|| extract_token(&headers));

    let Some(token) = token else {
        return Ok(Json(ValidateResponse {
            success: false,
            user: None,
        }));
    };

    let success = state.auth.validate_token(&token)?;
    let user = success
        .then(|| state.auth.decode_claims(&token))
        .transpose()?
        .map(|claims| UserInfo::from(&claims));

    Ok(Json(ValidateResponse { success, user }))
}

/// Logout endpoint (ends the session and clears the auth cookie).
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = extract_token(&headers) {
        state.auth.logout(&token);
    }

    let cookie = "auth_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";
    (
        AppendHeaders([(SET_COOKIE, cookie.to_string())]),
        StatusCode::NO_CONTENT,
    )
}

/// Claims for the request behind the guard.
///
/// Guarded routes only see requests whose token already passed validation, so
/// a missing or undecodable token here is a hard error.
fn request_claims(state: &AppState, headers: &HeaderMap) -> ApiResult<Claims> {
    let token = extract_token(headers)
        .ok_or_else(|| ApiError::unauthorized("Missing or invalid authorization"))?;
    Ok(state.auth.decode_claims(&token)?)
}

// ============================================================================
// Account Handlers
// ============================================================================

/// Current user profile.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<crate::account::UserProfile>> {
    let claims = request_claims(&state, &headers)?;
    Ok(Json(state.account.profile(&claims).await))
}

/// Order history for the current user.
pub async fn list_orders(
    State(state): State<AppState>,
) -> Json<Vec<crate::account::Order>> {
    Json(state.account.orders().await)
}

/// Coupons for the current user.
pub async fn list_coupons(
    State(state): State<AppState>,
) -> Json<Vec<crate::account::Coupon>> {
    Json(state.account.coupons().await)
}

/// Favorited films for the current user.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Json<Vec<crate::account::Favorite>> {
    Json(state.account.favorites().await)
}

// ============================================================================
// Catalog Handlers
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MoviesQuery {
    pub status: Option<String>,
}

/// List films, optionally filtered by release status.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MoviesQuery>,
) -> ApiResult<Json<Vec<Movie>>> {
    let status = query
        .status
        .map(|s| s.parse::<MovieStatus>())
        .transpose()
        .map_err(ApiError::bad_request)?;

    Ok(Json(state.catalog.list_movies(status).await))
}

/// A single film.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> ApiResult<Json<Movie>> {
    state
        .catalog
        .movie(movie_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Movie not found: {}", movie_id)))
}

/// Box-office rankings.
pub async fn hot_rankings(State(state): State<AppState>) -> Json<Vec<HotRanking>> {
    Json(state.catalog.hot_rankings().await)
}

/// List cinemas.
pub async fn list_cinemas(State(state): State<AppState>) -> Json<Vec<Cinema>> {
    Json(state.catalog.list_cinemas().await)
}

/// A single cinema.
pub async fn get_cinema(
    State(state): State<AppState>,
    Path(cinema_id): Path<u64>,
) -> ApiResult<Json<Cinema>> {
    state
        .catalog
        .cinema(cinema_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Cinema not found: {}", cinema_id)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimesQuery {
    pub movie_id: Option<u64>,
}

/// Screenings at a cinema.
pub async fn list_showtimes(
    State(state): State<AppState>,
    Path(cinema_id): Path<u64>,
    Query(query): Query<ShowtimesQuery>,
) -> ApiResult<Json<Vec<Showtime>>> {
    if state.catalog.cinema(cinema_id).await.is_none() {
        return Err(ApiError::not_found(format!(
            "Cinema not found: {}",
            cinema_id
        )));
    }

    Ok(Json(state.catalog.showtimes(cinema_id, query.movie_id).await))
}

/// Seat map for a screening.
pub async fn seat_map(
    State(state): State<AppState>,
    Path(showtime_id): Path<u64>,
) -> Json<SeatMap> {
    Json(state.catalog.seat_map(showtime_id).await)
}

// ============================================================================
// Admin Handlers
// ============================================================================

/// Operational overview for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub active_sessions: usize,
    pub registered_users: usize,
    pub movie_count: usize,
    pub now_playing: usize,
    pub cinema_count: usize,
    pub viewer: UserInfo,
}

/// Admin overview (admin only, enforced by the route guard).
#[instrument(skip(state, headers))]
pub async fn admin_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<AdminOverview>> {
    let claims = request_claims(&state, &headers)?;

    let movies = state.catalog.list_movies(None).await;
    let now_playing = movies
        .iter()
        .filter(|m| m.status == MovieStatus::NowPlaying)
        .count();
    let cinemas = state.catalog.list_cinemas().await;

    info!(viewer = %claims.sub, "Admin viewed overview");

    Ok(Json(AdminOverview {
        active_sessions: state.auth.sessions().len(),
        registered_users: state.auth.user_count(),
        movie_count: movies.len(),
        now_playing,
        cinema_count: cinemas.len(),
        viewer: UserInfo::from(&claims),
    }))
}
