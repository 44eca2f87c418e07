use std::time::{SystemTime, UNIX_EPOCH};

use akkor_shared::user::Actor;
use akkor_user::UserView;
use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    /// User id
    sub: String,
}

pub fn generate_token(config: &JwtConfig, user_id: i64) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let lifetime = config.expiration_days.max(0) as u64 * 24 * 60 * 60;
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + lifetime,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: user_id.to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the user id carried by a valid token. Signature, expiry, issuer
/// and audience are all checked.
pub fn verify_token(config: &JwtConfig, token: &str) -> anyhow::Result<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims.sub.parse()?)
}

pub fn build_cookie<'a>(config: &JwtConfig, user_id: i64) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, user_id)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

/// Cookie to hand to `CookieJar::remove` on logout.
pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

/// The user resolved from the auth cookie, inserted into request
/// extensions by the identify middleware.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserView);

/// Extractor for handlers that need a signed-in user. Redirects to the
/// login page otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserView);

impl AuthUser {
    pub fn actor(&self) -> Actor {
        self.0.actor()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .map(|current| AuthUser(current.0.clone()))
            .ok_or_else(|| Redirect::to("/login"))
    }
}
