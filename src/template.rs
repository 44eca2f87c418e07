use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use akkor_user::UserView;
use std::convert::Infallible;

use crate::auth::CurrentUser;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Page renderer carrying the signed-in user so every page can draw its
/// navigation.
pub struct Template {
    user: Option<UserView>,
}

impl Template {
    pub fn new(user: Option<UserView>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<UserView> {
        self.user.clone()
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        self.render_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate { user: self.user() },
        )
    }

    pub fn forbidden(&self) -> Response {
        self.render_status(
            StatusCode::FORBIDDEN,
            ForbiddenTemplate { user: self.user() },
        )
    }

    pub fn server_error(&self) -> Response {
        self.render_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            ServerTemplate {
                user: self.user(),
                message: SERVER_ERROR_MESSAGE.to_owned(),
            },
        )
    }

    /// Maps a domain error to its page. Input errors raised outside of a
    /// form get a bare 422 page; unexpected errors are logged.
    pub fn error(&self, err: akkor_shared::Error) -> Response {
        match err {
            akkor_shared::Error::NotFound(_) => self.not_found(),
            akkor_shared::Error::Forbidden => self.forbidden(),
            err if err.is_input() => self.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                InvalidTemplate {
                    user: self.user(),
                    message: err.to_string(),
                },
            ),
            err => {
                tracing::error!(error = %err, "Request failed");

                self.server_error()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .map(|current| current.0.clone());

        Ok(Template { user })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub user: Option<UserView>,
}

#[derive(askama::Template)]
#[template(path = "403.html")]
pub struct ForbiddenTemplate {
    pub user: Option<UserView>,
}

#[derive(askama::Template)]
#[template(path = "422.html")]
pub struct InvalidTemplate {
    pub user: Option<UserView>,
    pub message: String,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub user: Option<UserView>,
    pub message: String,
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => return $template.error(err),
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result.await {
            Ok(Some(r)) => r,
            Ok(_) => return $template.not_found(),
            Err(err) => return $template.error(err),
        }
    };
}
