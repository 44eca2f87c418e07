#![allow(dead_code)]

use akkor::config::{
    Config, DatabaseConfig, JwtConfig, ObservabilityConfig, RootConfig, ServerConfig,
};
use akkor_shared::user::Role;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use time::{Date, Duration};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: akkor_shared::State,
    pub config: Config,
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "test-secret-key-32-bytes-long!!!".to_owned(),
            issuer: "akkor".to_owned(),
            audience: "akkor-web".to_owned(),
            expiration_days: 1,
        },
        root: RootConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_string_lossy());
    let config = test_config(url.to_owned());

    let state = akkor::db::create_state(&url, config.database.max_connections).await?;
    akkor::db::migrate(&state.write_db).await?;

    Ok(TestApp {
        router: akkor::create_app(config.clone(), state.clone()),
        state,
        config,
        _dir: dir,
    })
}

pub fn in_days(days: i64) -> Date {
    akkor_shared::today() + Duration::days(days)
}

pub fn date(days: i64) -> String {
    akkor_shared::format_date(in_days(days))
}

impl TestApp {
    pub async fn create_user(&self, name: &str, role: Role) -> anyhow::Result<i64> {
        let id = akkor_user::Command::new(self.state.clone())
            .create(
                akkor_user::RegisterInput {
                    pseudo: name.to_owned(),
                    email: format!("{name}@akkor.localhost"),
                    password: "my_password".to_owned(),
                },
                role,
            )
            .await?;

        Ok(id)
    }

    /// `Cookie` header value for a signed-in user.
    pub fn cookie(&self, user_id: i64) -> anyhow::Result<String> {
        let token = akkor::auth::generate_token(&self.config.jwt, user_id)?;

        Ok(format!("{}={token}", akkor::auth::AUTH_COOKIE_NAME))
    }

    pub async fn create_hotel(&self, admin_id: i64, name: &str) -> anyhow::Result<i64> {
        let id = akkor_hotel::Command::new(self.state.clone())
            .create(
                &akkor_shared::user::Actor::new(admin_id, Role::Admin),
                akkor_hotel::CreateInput {
                    name: name.to_owned(),
                    location: "Paris, France".to_owned(),
                    description: format!("{name} description"),
                    picture_list: vec!["https://img.akkor.localhost/1.jpg".to_owned()],
                },
            )
            .await?;

        Ok(id)
    }

    pub async fn create_booking(
        &self,
        user_id: i64,
        role: Role,
        hotel_id: i64,
        from: i64,
        to: i64,
    ) -> anyhow::Result<i64> {
        let id = akkor_booking::Command::new(self.state.clone())
            .create(
                &akkor_shared::user::Actor::new(user_id, role),
                akkor_booking::CreateInput {
                    hotel_id,
                    check_in: in_days(from),
                    check_out: in_days(to),
                },
            )
            .await?;

        Ok(id)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut request = Request::builder().method("GET").uri(uri);

        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        Ok(self.router.clone().oneshot(request.body(Body::empty())?).await?)
    }

    pub async fn send_form(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        form: &[(&str, &str)],
    ) -> anyhow::Result<Response<Body>> {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let body = serde_urlencoded::to_string(form)?;

        Ok(self.router.clone().oneshot(request.body(Body::from(body))?).await?)
    }

    pub async fn post(
        &self,
        uri: &str,
        cookie: Option<&str>,
        form: &[(&str, &str)],
    ) -> anyhow::Result<Response<Body>> {
        self.send_form("POST", uri, cookie, form).await
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookie(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
}
