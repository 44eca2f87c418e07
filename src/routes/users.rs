use akkor_booking::BookingView;
use akkor_user::{UpdateInput, UserView};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;

use crate::{
    auth::{AuthUser, removal_cookie},
    routes::{AppState, parse_id},
    template::Template,
};

const RECENT_BOOKINGS: u64 = 5;

#[derive(askama::Template)]
#[template(path = "users/index.html")]
pub struct IndexTemplate {
    pub user: Option<UserView>,
    pub users: Vec<UserView>,
}

pub async fn index(template: Template, user: AuthUser, State(app): State<AppState>) -> Response {
    let users = crate::try_page_response!(app.user_query.list(&user.actor()), template);

    template.render(IndexTemplate {
        user: template.user(),
        users,
    })
}

#[derive(askama::Template)]
#[template(path = "users/show.html")]
pub struct ShowTemplate {
    pub user: Option<UserView>,
    pub profile: UserView,
    pub bookings: Vec<BookingView>,
    pub total_bookings: u64,
    pub can_edit: bool,
}

pub async fn show(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let actor = user.actor();
    let profile = crate::try_page_response!(app.user_query.show(&actor, id), template);
    let bookings = crate::try_page_response!(
        app.booking_query.recent_for_user(profile.id, RECENT_BOOKINGS),
        template
    );
    let total_bookings =
        crate::try_page_response!(app.booking_query.count_for_user(profile.id), template);

    template.render(ShowTemplate {
        user: template.user(),
        can_edit: actor.can_manage_user(profile.id),
        profile,
        bookings,
        total_bookings,
    })
}

#[derive(askama::Template)]
#[template(path = "users/form.html")]
pub struct FormTemplate {
    pub user: Option<UserView>,
    pub profile_id: i64,
    pub pseudo: String,
    pub email: String,
    pub error_message: Option<String>,
}

impl FormTemplate {
    fn new(user: Option<UserView>, profile: &UserView) -> Self {
        Self {
            user,
            profile_id: profile.id,
            pseudo: profile.pseudo.to_owned(),
            email: profile.email.to_owned(),
            error_message: None,
        }
    }
}

pub async fn edit_page(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    if !user.actor().can_manage_user(id) {
        return template.forbidden();
    }

    let profile = crate::try_page_response!(opt: app.user_query.find(id), template);

    template.render(FormTemplate::new(template.user(), &profile))
}

#[derive(Deserialize, Default)]
pub struct UserForm {
    pub pseudo: Option<String>,
    pub email: Option<String>,
    /// Left blank to keep the current password.
    pub password: Option<String>,
}

pub async fn update_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<UserForm>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let result = app
        .user_command
        .update(
            &user.actor(),
            id,
            UpdateInput {
                pseudo: input.pseudo.clone(),
                email: input.email.clone(),
                password: input.password.clone().filter(|p| !p.is_empty()),
            },
        )
        .await;

    match result {
        Ok(_) => Redirect::to(&format!("/users/{id}")).into_response(),
        Err(err) if err.is_input() => {
            let profile = crate::try_page_response!(opt: app.user_query.find(id), template);
            let mut form = FormTemplate::new(template.user(), &profile);
            form.pseudo = input.pseudo.unwrap_or(form.pseudo);
            form.email = input.email.unwrap_or(form.email);
            form.error_message = Some(err.to_string());

            template.render_status(StatusCode::UNPROCESSABLE_ENTITY, form)
        }
        Err(err) => template.error(err),
    }
}

pub async fn delete_action(
    template: Template,
    user: AuthUser,
    jar: CookieJar,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    crate::try_page_response!(app.user_command.delete(&user.actor(), id), template);

    if id == user.0.id {
        return (jar.remove(removal_cookie()), Redirect::to("/login")).into_response();
    }

    Redirect::to("/users").into_response()
}
