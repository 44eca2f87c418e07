use akkor_shared::user::Role;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{auth::CurrentUser, template::Template};

async fn require_role(req: Request, next: Next, allowed: fn(Role) -> bool) -> Response {
    let Some(current) = req.extensions().get::<CurrentUser>().cloned() else {
        return Redirect::to("/login").into_response();
    };

    let role = current.0.role();

    if !allowed(role) {
        tracing::warn!(
            user_id = current.0.id,
            role = %role,
            path = %req.uri().path(),
            "Insufficient role"
        );

        return Template::new(Some(current.0)).forbidden();
    }

    next.run(req).await
}

/// Route guard for admin-only pages.
pub async fn require_admin(req: Request, next: Next) -> Response {
    require_role(req, next, |role| role.is_admin()).await
}

/// Route guard for pages open to admins and employees.
pub async fn require_staff(req: Request, next: Next) -> Response {
    require_role(req, next, |role| role.is_staff()).await
}
