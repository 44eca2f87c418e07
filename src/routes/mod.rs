use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    middleware::{identify_middleware, require_admin, require_auth, require_staff},
    template::Template,
};

mod assets;
mod bookings;
mod health;
mod hotels;
mod index;
mod legal;
mod login;
mod register;
mod users;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_command: akkor_user::Command,
    pub user_query: akkor_user::Query,
    pub hotel_command: akkor_hotel::Command,
    pub hotel_query: akkor_hotel::Query,
    pub booking_command: akkor_booking::Command,
    pub booking_query: akkor_booking::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Config, state: akkor_shared::State) -> Self {
        Self {
            config,
            user_command: akkor_user::Command::new(state.clone()),
            user_query: akkor_user::Query::new(state.clone()),
            hotel_command: akkor_hotel::Command::new(state.clone()),
            hotel_query: akkor_hotel::Query::new(state.clone()),
            booking_command: akkor_booking::Command::new(state.clone()),
            booking_query: akkor_booking::Query::new(state.clone()),
            pool: state.read_db,
        }
    }
}

pub async fn fallback(template: Template) -> Response {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    let admin = Router::new()
        .route("/hotels", post(hotels::create_action))
        .route("/hotels/create", get(hotels::create_page))
        .route(
            "/hotels/{id}",
            axum::routing::put(hotels::update_action)
                .post(hotels::update_action)
                .delete(hotels::delete_action),
        )
        .route("/hotels/{id}/edit", get(hotels::edit_page))
        .route("/hotels/{id}/delete", post(hotels::delete_action))
        .route_layer(from_fn(require_admin));

    let staff = Router::new()
        .route("/users", get(users::index))
        .route_layer(from_fn(require_staff));

    let authenticated = Router::new()
        .route("/logout", post(login::logout))
        .route(
            "/bookings",
            get(bookings::index).post(bookings::create_action),
        )
        .route("/bookings/create", get(bookings::create_page))
        .route(
            "/bookings/{id}",
            axum::routing::put(bookings::update_action)
                .post(bookings::update_action)
                .delete(bookings::delete_action),
        )
        .route("/bookings/{id}/edit", get(bookings::edit_page))
        .route("/bookings/{id}/delete", post(bookings::delete_action))
        .route(
            "/users/{id}",
            get(users::show)
                .put(users::update_action)
                .post(users::update_action)
                .delete(users::delete_action),
        )
        .route("/users/{id}/edit", get(users::edit_page))
        .route("/users/{id}/delete", post(users::delete_action))
        .route_layer(from_fn(require_auth));

    Router::new()
        // Probes answer without touching the session
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/login", get(login::page).post(login::action))
        .route("/register", get(register::page).post(register::action))
        .route("/hotels", get(hotels::index))
        .route("/hotels/{id}", get(hotels::show))
        .route("/legal/privacy", get(legal::privacy))
        .route("/legal/terms", get(legal::terms))
        .merge(admin)
        .merge(staff)
        .merge(authenticated)
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .layer(from_fn_with_state(app_state.clone(), identify_middleware))
        .with_state(app_state)
}

/// Parses an `{id}` path segment. Anything that is not a positive integer
/// cannot name a row, so callers answer 404.
pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|id| *id > 0)
}

/// The `selected` attribute of an `<option>`, or nothing.
pub(crate) fn selected(is_selected: bool) -> &'static str {
    if is_selected { "selected" } else { "" }
}
