use akkor_user::UserView;
use axum::response::Response;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "legal/privacy.html")]
pub struct PrivacyTemplate {
    pub user: Option<UserView>,
}

#[derive(askama::Template)]
#[template(path = "legal/terms.html")]
pub struct TermsTemplate {
    pub user: Option<UserView>,
}

pub async fn privacy(template: Template) -> Response {
    template.render(PrivacyTemplate {
        user: template.user(),
    })
}

pub async fn terms(template: Template) -> Response {
    template.render(TermsTemplate {
        user: template.user(),
    })
}
