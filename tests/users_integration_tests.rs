mod helpers;

use akkor_shared::user::Role;
use axum::http::StatusCode;
use helpers::{body_string, create_test_app, location, set_cookie};

#[tokio::test]
async fn test_user_list_requires_staff() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let john = app.create_user("john", Role::User).await?;
    let employee = app.create_user("employee", Role::Employee).await?;
    let admin = app.create_user("admin", Role::Admin).await?;

    let response = app.get("/users", Some(&app.cookie(john)?)).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.get("/users", Some(&app.cookie(employee)?)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("john@akkor.localhost"));

    let response = app.get("/users", Some(&app.cookie(admin)?)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_show_profile() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let admin = app.create_user("admin", Role::Admin).await?;
    let employee = app.create_user("employee", Role::Employee).await?;
    let john = app.create_user("john", Role::User).await?;
    let jane = app.create_user("jane", Role::User).await?;
    let hotel = app.create_hotel(admin, "Seaside Resort").await?;
    app.create_booking(john, Role::User, hotel, 1, 2).await?;

    let response = app.get(&format!("/users/{john}"), Some(&app.cookie(john)?)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("Seaside Resort"));

    let response = app.get(&format!("/users/{john}"), Some(&app.cookie(jane)?)).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .get(&format!("/users/{john}"), Some(&app.cookie(employee)?))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/users/999", Some(&app.cookie(admin)?)).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_edit_profile_is_owner_or_admin() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let admin = app.create_user("admin", Role::Admin).await?;
    let employee = app.create_user("employee", Role::Employee).await?;
    let john = app.create_user("john", Role::User).await?;
    let uri = format!("/users/{john}/edit");

    let response = app.get(&uri, Some(&app.cookie(employee)?)).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.get(&uri, Some(&app.cookie(john)?)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get(&uri, Some(&app.cookie(admin)?)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_update_profile() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let john = app.create_user("john", Role::User).await?;
    let uri = format!("/users/{john}");

    let response = app
        .send_form(
            "PUT",
            &uri,
            Some(&app.cookie(john)?),
            &[
                ("pseudo", "johnny"),
                ("email", "johnny@akkor.localhost"),
                ("password", ""),
            ],
        )
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some(uri.as_str()));

    let response = app
        .post(
            "/login",
            None,
            &[("email", "johnny@akkor.localhost"), ("password", "my_password")],
        )
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
async fn test_update_profile_taken_email() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let john = app.create_user("john", Role::User).await?;
    app.create_user("jane", Role::User).await?;

    let response = app
        .post(
            &format!("/users/{john}"),
            Some(&app.cookie(john)?),
            &[("email", "jane@akkor.localhost")],
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_string(response).await?.contains("Email already taken"));

    Ok(())
}

#[tokio::test]
async fn test_delete_self_signs_out() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let admin = app.create_user("admin", Role::Admin).await?;
    let john = app.create_user("john", Role::User).await?;
    let hotel = app.create_hotel(admin, "Seaside Resort").await?;
    let booking = app.create_booking(john, Role::User, hotel, 1, 2).await?;

    let response = app
        .send_form("DELETE", &format!("/users/{john}"), Some(&app.cookie(john)?), &[])
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response).is_some_and(|c| c.starts_with("auth_token=;")));

    let view = akkor_booking::Query::new(app.state.clone()).find(booking).await?;
    assert!(view.is_none());

    Ok(())
}

#[tokio::test]
async fn test_admin_deletes_user() -> anyhow::Result<()> {
    let app = create_test_app().await?;
    let admin = app.create_user("admin", Role::Admin).await?;
    let john = app.create_user("john", Role::User).await?;
    let jane = app.create_user("jane", Role::User).await?;

    let response = app
        .post(&format!("/users/{john}/delete"), Some(&app.cookie(jane)?), &[])
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post(&format!("/users/{john}/delete"), Some(&app.cookie(admin)?), &[])
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/users"));

    let user = akkor_user::Query::new(app.state.clone()).find(john).await?;
    assert!(user.is_none());

    Ok(())
}
