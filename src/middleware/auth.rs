use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    auth::{AUTH_COOKIE_NAME, CurrentUser, verify_token},
    routes::AppState,
};

/// Resolves the auth cookie into a [`CurrentUser`] extension.
///
/// Runs on every request. The user is reloaded from the database each time
/// so that deleted accounts and role changes apply immediately. Missing or
/// invalid tokens leave the request anonymous.
pub async fn identify_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    if req.uri().path().starts_with("/static/") {
        return next.run(req).await;
    }

    let Some(token) = jar.get(AUTH_COOKIE_NAME).map(|cookie| cookie.value()) else {
        return next.run(req).await;
    };

    let user_id = match verify_token(&state.config.jwt, token) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid auth token");
            return next.run(req).await;
        }
    };

    match state.user_query.find(user_id).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser(user));
        }
        Ok(None) => {
            tracing::warn!(user_id, "Auth token refers to a missing user");
        }
        Err(e) => {
            tracing::error!(error = %e, user_id, "Failed to load authenticated user");
        }
    }

    next.run(req).await
}

/// Route guard: anonymous requests are sent to the login page.
pub async fn require_auth(req: Request, next: Next) -> Response {
    if req.extensions().get::<CurrentUser>().is_none() {
        return Redirect::to("/login").into_response();
    }

    next.run(req).await
}
