use akkor_hotel::{CreateInput, FilterQuery, HotelView, SortBy, SortOrder, UpdateInput};
use akkor_shared::page::{Page, PageRequest};
use akkor_user::UserView;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    routes::{AppState, parse_id, selected},
    template::Template,
};

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "hotels/index.html")]
pub struct IndexTemplate {
    pub user: Option<UserView>,
    pub page: Page<HotelView>,
    pub search: String,
    pub sort: SortBy,
    pub order: SortOrder,
    pub can_manage: bool,
}

impl IndexTemplate {
    /// Link to another page keeping the current search and sort.
    pub fn page_url(&self, page: u64) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }

        query
            .append_pair("sort", self.sort.as_ref())
            .append_pair("order", self.order.as_ref())
            .append_pair("page", &page.to_string())
            .append_pair("limit", &self.page.meta.per_page.to_string());

        format!("/hotels?{}", query.finish())
    }

    pub fn sort_options(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        [
            ("created_at", "Newest"),
            ("name", "Name"),
            ("location", "Location"),
        ]
        .into_iter()
        .map(|(value, label)| (value, label, selected(self.sort.as_ref() == value)))
        .collect()
    }

    pub fn is_asc(&self) -> bool {
        self.order == SortOrder::Asc
    }
}

pub async fn index(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<IndexQuery>,
) -> Response {
    let filter = FilterQuery {
        search: input.search.to_owned(),
        sort: SortBy::parse(input.sort.as_deref()),
        order: SortOrder::parse(input.order.as_deref()),
        page: PageRequest::new(input.page.as_deref(), input.limit.as_deref()),
    };
    let sort = filter.sort;
    let order = filter.order;

    let page = crate::try_page_response!(app.hotel_query.filter(filter), template);
    let user = template.user();

    template.render(IndexTemplate {
        can_manage: user.as_ref().is_some_and(|u| u.role().is_admin()),
        user,
        page,
        search: input.search.unwrap_or_default().trim().to_owned(),
        sort,
        order,
    })
}

#[derive(askama::Template)]
#[template(path = "hotels/show.html")]
pub struct ShowTemplate {
    pub user: Option<UserView>,
    pub hotel: HotelView,
    pub can_manage: bool,
    pub can_book: bool,
}

pub async fn show(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let hotel = crate::try_page_response!(opt: app.hotel_query.find(id), template);
    let user = template.user();

    template.render(ShowTemplate {
        can_manage: user.as_ref().is_some_and(|u| u.role().is_admin()),
        can_book: user.is_some(),
        user,
        hotel,
    })
}

#[derive(Deserialize, Default)]
pub struct HotelForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// One URL per line.
    pub picture_list: Option<String>,
}

fn split_pictures(value: &str) -> Vec<String> {
    value.lines().map(str::to_owned).collect()
}

#[derive(askama::Template)]
#[template(path = "hotels/form.html")]
pub struct FormTemplate {
    pub user: Option<UserView>,
    pub action: String,
    pub heading: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: String,
    pub error_message: Option<String>,
}

impl FormTemplate {
    fn create(user: Option<UserView>) -> Self {
        Self {
            user,
            action: "/hotels".to_owned(),
            heading: "New hotel".to_owned(),
            name: String::new(),
            location: String::new(),
            description: String::new(),
            picture_list: String::new(),
            error_message: None,
        }
    }

    fn edit(user: Option<UserView>, hotel: &HotelView) -> Self {
        Self {
            user,
            action: format!("/hotels/{}", hotel.id),
            heading: format!("Edit {}", hotel.name),
            name: hotel.name.to_owned(),
            location: hotel.location.to_owned(),
            description: hotel.description.to_owned(),
            picture_list: hotel.pictures_text(),
            error_message: None,
        }
    }

    fn with_input(self, input: HotelForm, error_message: String) -> Self {
        Self {
            name: input.name.unwrap_or(self.name),
            location: input.location.unwrap_or(self.location),
            description: input.description.unwrap_or(self.description),
            picture_list: input.picture_list.unwrap_or(self.picture_list),
            error_message: Some(error_message),
            ..self
        }
    }
}

pub async fn create_page(template: Template) -> Response {
    template.render(FormTemplate::create(template.user()))
}

pub async fn create_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Form(input): Form<HotelForm>,
) -> Response {
    let result = app
        .hotel_command
        .create(
            &user.actor(),
            CreateInput {
                name: input.name.clone().unwrap_or_default(),
                location: input.location.clone().unwrap_or_default(),
                description: input.description.clone().unwrap_or_default(),
                picture_list: split_pictures(input.picture_list.as_deref().unwrap_or_default()),
            },
        )
        .await;

    match result {
        Ok(_) => Redirect::to("/hotels").into_response(),
        Err(err) if err.is_input() => template.render_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            FormTemplate::create(template.user()).with_input(input, err.to_string()),
        ),
        Err(err) => template.error(err),
    }
}

pub async fn edit_page(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let hotel = crate::try_page_response!(opt: app.hotel_query.find(id), template);

    template.render(FormTemplate::edit(template.user(), &hotel))
}

pub async fn update_action(
    template: Template,
    user: AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<HotelForm>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let result = app
        .hotel_command
        .update(
            &user.actor(),
            id,
            UpdateInput {
                name: input.name.clone(),
                location: input.location.clone(),
                description: input.description.clone(),
                picture_list: input.picture_list.as_deref().map(split_pictures),
            },
        )
        .await;

    match result {
        Ok(_) => Redirect::to(&format!("/hotels/{id}")).into_response(),
        Err(err) if err.is_input() => {
            let hotel = crate::try_page_response!(opt: app.hotel_query.find(id), template);

            template.render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                FormTemplate::edit(template.user(), &hotel).with_input(input, err.to_string()),
            )
        }
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

    crate::try_page_response!(app.hotel_command.delete(&user.actor(), id), template);

    Redirect::to("/hotels").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictures_split_per_line() {
        assert_eq!(
            split_pictures("https://a.test/1.jpg\r\nhttps://a.test/2.jpg\n"),
            vec!["https://a.test/1.jpg", "https://a.test/2.jpg"]
        );
        assert!(split_pictures("").is_empty());
    }
}
