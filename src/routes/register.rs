use akkor_user::{RegisterInput, UserView};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;

use crate::{auth::build_cookie, routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub user: Option<UserView>,
    pub pseudo: String,
    pub email: String,
    pub error_message: Option<String>,
}

pub async fn page(template: Template) -> Response {
    if template.user().is_some() {
        return Redirect::to("/hotels").into_response();
    }

    template.render(RegisterTemplate {
        user: None,
        pseudo: String::new(),
        email: String::new(),
        error_message: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub pseudo: String,
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
    let id = match app
        .user_command
        .register(RegisterInput {
            pseudo: input.pseudo.to_owned(),
            email: input.email.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(id) => id,
        Err(err) if err.is_input() => {
            return template.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                RegisterTemplate {
                    user: None,
                    pseudo: input.pseudo,
                    email: input.email,
                    error_message: Some(err.to_string()),
                },
            );
        }
        Err(err) => return template.error(err),
    };

    let cookie = match build_cookie(&app.config.jwt, id) {
        Ok(cookie) => cookie,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build auth cookie");
            return template.server_error();
        }
    };

    (jar.add(cookie), Redirect::to("/hotels")).into_response()
}
