use std::str::FromStr;

use akkor_booking::{BookingView, CreateInput, ListQuery, UpdateInput};
use akkor_hotel::HotelOption;
use akkor_shared::{booking::BookingStatus, page::Page, page::PageRequest};
use akkor_user::UserView;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    auth::AuthUser,
    routes::{AppState, parse_id, selected},
    template::Template,
};

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "bookings/index.html")]
pub struct IndexTemplate {
    pub user: Option<UserView>,
    pub page: Page<BookingView>,
    pub search: String,
    pub is_admin: bool,
}

impl IndexTemplate {
    pub fn page_url(&self, page: u64) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }

        query
            .append_pair("page", &page.to_string())
            .append_pair("limit", &self.page.meta.per_page.to_string());

        format!("/bookings?{}", query.finish())
    }
}

pub async fn index(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Query(input): Query<IndexQuery>,
) -> Response {
    let actor = user.actor();
    let page = crate::try_page_response!(
        app.booking_query.list(
            &actor,
            ListQuery {
                search: input.search.to_owned(),
                page: PageRequest::new(input.page.as_deref(), input.limit.as_deref()),
            },
        ),
        template
    );

    template.render(IndexTemplate {
        user: template.user(),
        page,
        search: input.search.unwrap_or_default().trim().to_owned(),
        is_admin: actor.is_admin(),
    })
}

#[derive(askama::Template)]
#[template(path = "bookings/form.html")]
pub struct FormTemplate {
    pub user: Option<UserView>,
    pub action: String,
    pub heading: String,
    /// Hotels to choose from on creation, empty when editing.
    pub hotels: Vec<HotelOption>,
    pub hotel_id: Option<i64>,
    pub hotel_name: String,
    pub check_in: String,
    pub check_out: String,
    pub status: Option<BookingStatus>,
    pub min_date: String,
    pub error_message: Option<String>,
}

impl FormTemplate {
    fn create(user: Option<UserView>, hotels: Vec<HotelOption>, hotel_id: Option<i64>) -> Self {
        Self {
            user,
            action: "/bookings".to_owned(),
            heading: "New booking".to_owned(),
            hotels,
            hotel_id,
            hotel_name: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            status: None,
            min_date: akkor_shared::format_date(akkor_shared::today()),
            error_message: None,
        }
    }

    fn edit(user: Option<UserView>, booking: &BookingView) -> Self {
        Self {
            user,
            action: format!("/bookings/{}", booking.id),
            heading: format!("Booking #{}", booking.id),
            hotels: vec![],
            hotel_id: Some(booking.hotel_id),
            hotel_name: booking.hotel_name.to_owned(),
            check_in: booking.check_in.to_owned(),
            check_out: booking.check_out.to_owned(),
            status: Some(booking.status()),
            min_date: akkor_shared::format_date(akkor_shared::today()),
            error_message: None,
        }
    }

    fn with_input(self, input: BookingForm, error_message: String) -> Self {
        Self {
            hotel_id: input.hotel_id.as_deref().and_then(parse_id).or(self.hotel_id),
            check_in: input.check_in.unwrap_or(self.check_in),
            check_out: input.check_out.unwrap_or(self.check_out),
            status: input
                .status
                .as_deref()
                .and_then(|s| BookingStatus::from_str(s).ok())
                .or(self.status),
            error_message: Some(error_message),
            ..self
        }
    }

    pub fn is_selected(&self, hotel: &HotelOption) -> bool {
        self.hotel_id == Some(hotel.id)
    }

    /// Every status with the `selected` attribute for the current one.
    pub fn statuses(&self) -> Vec<(BookingStatus, &'static str)> {
        BookingStatus::VARIANTS
            .iter()
            .map(|status| (*status, selected(self.status == Some(*status))))
            .collect()
    }
}

#[derive(Deserialize, Default)]
pub struct CreateQuery {
    pub hotel_id: Option<String>,
}

pub async fn create_page(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<CreateQuery>,
) -> Response {
    let hotels = crate::try_page_response!(app.hotel_query.all_by_name(), template);
    let hotel_id = input
        .hotel_id
        .as_deref()
        .and_then(parse_id)
        .filter(|id| hotels.iter().any(|h| h.id == *id));

    template.render(FormTemplate::create(template.user(), hotels, hotel_id))
}

#[derive(Deserialize, Default)]
pub struct BookingForm {
    pub hotel_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: Option<String>,
}

fn changed<'a>(value: &'a Option<String>, stored: &str) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != stored)
}

impl BookingForm {
    fn to_create_input(&self) -> akkor_shared::Result<CreateInput> {
        let Some(hotel_id) = self.hotel_id.as_deref().and_then(parse_id) else {
            akkor_shared::user!("Please choose a hotel");
        };

        Ok(CreateInput {
            hotel_id,
            check_in: akkor_shared::parse_date(self.check_in.as_deref().unwrap_or_default())?,
            check_out: akkor_shared::parse_date(self.check_out.as_deref().unwrap_or_default())?,
        })
    }

    /// Dates resubmitted unchanged are left out so that the status of a
    /// stay already started can still be edited.
    fn to_update_input(&self, current: &BookingView) -> akkor_shared::Result<UpdateInput> {
        let status = match self.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(status) => match BookingStatus::from_str(status) {
                Ok(status) => Some(status),
                Err(_) => akkor_shared::user!("Invalid status '{}'", status),
            },
            None => None,
        };

        Ok(UpdateInput {
            check_in: akkor_shared::parse_optional_date(changed(&self.check_in, &current.check_in))?,
            check_out: akkor_shared::parse_optional_date(changed(&self.check_out, &current.check_out))?,
            status,
        })
    }
}

pub async fn create_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Form(input): Form<BookingForm>,
) -> Response {
    let result = match input.to_create_input() {
        Ok(create) => app.booking_command.create(&user.actor(), create).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/bookings").into_response(),
        Err(err) if err.is_input() => {
            let hotels = crate::try_page_response!(app.hotel_query.all_by_name(), template);

            template.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                FormTemplate::create(template.user(), hotels, None)
                    .with_input(input, err.to_string()),
            )
        }
        Err(err) => template.error(err),
    }
}

/// Loads a booking the actor may manage, or the page to answer with.
async fn find_managed(
    template: &Template,
    app: &AppState,
    user: &AuthUser,
    id: &str,
) -> Result<BookingView, Response> {
    let Some(id) = parse_id(id) else {
        return Err(template.not_found());
    };

    let booking = match app.booking_query.find(id).await {
        Ok(Some(booking)) => booking,
        Ok(None) => return Err(template.not_found()),
        Err(err) => return Err(template.error(err)),
    };

    if !akkor_booking::can_manage(&user.actor(), booking.user_id) {
        return Err(template.forbidden());
    }

    Ok(booking)
}

pub async fn edit_page(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let booking = match find_managed(&template, &app, &user, &id).await {
        Ok(booking) => booking,
        Err(response) => return response,
    };

    template.render(FormTemplate::edit(template.user(), &booking))
}

pub async fn update_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<BookingForm>,
) -> Response {
    let booking = match find_managed(&template, &app, &user, &id).await {
        Ok(booking) => booking,
        Err(response) => return response,
    };

    let result = match input.to_update_input(&booking) {
        Ok(update) => {
            app.booking_command
                .update(&user.actor(), booking.id, update)
                .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Redirect::to("/bookings").into_response(),
        Err(err) if err.is_input() => template.render_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            FormTemplate::edit(template.user(), &booking).with_input(input, err.to_string()),
        ),
        Err(err) => template.error(err),
    }
}

pub async fn delete_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    crate::try_page_response!(app.booking_command.delete(&user.actor(), id), template);

    Redirect::to("/bookings").into_response()
}
