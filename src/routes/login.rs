use akkor_user::{LoginInput, UserView};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;

use crate::{
    auth::{AuthUser, build_cookie, removal_cookie},
    routes::AppState,
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub user: Option<UserView>,
    pub email: String,
    pub error_message: Option<String>,
}

pub async fn page(template: Template) -> Response {
    if template.user().is_some() {
        return Redirect::to("/hotels").into_response();
    }

    template.render(LoginTemplate {
        user: None,
        email: String::new(),
        error_message: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> Response {
    let user = match app
        .user_command
        .verify_credentials(LoginInput {
            email: input.email.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(user) => user,
        Err(err) if err.is_input() => {
            return template.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                LoginTemplate {
                    user: None,
                    email: input.email,
                    error_message: Some(err.to_string()),
                },
            );
        }
        Err(err) => return template.error(err),
    };

    let cookie = match build_cookie(&app.config.jwt, user.id) {
        Ok(cookie) => cookie,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build auth cookie");
            return template.server_error();
        }
    };

    tracing::info!(user_id = user.id, "User logged in");

    (jar.add(cookie), Redirect::to("/hotels")).into_response()
}

pub async fn logout(user: AuthUser, jar: CookieJar) -> impl IntoResponse {
    tracing::info!(user_id = user.0.id, "User logged out");

    (jar.remove(removal_cookie()), Redirect::to("/login"))
}
