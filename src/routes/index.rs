use akkor_hotel::{FilterQuery, HotelView};
use akkor_shared::page::PageRequest;
use akkor_user::UserView;
use axum::{extract::State, response::Response};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: Option<UserView>,
    pub hotels: Vec<HotelView>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> Response {
    let latest = crate::try_page_response!(
        app.hotel_query.filter(FilterQuery {
            page: PageRequest {
                page: 1,
                per_page: 3,
            },
            ..Default::default()
        }),
        template
    );

    template.render(IndexTemplate {
        user: template.user(),
        hotels: latest.data,
    })
}
