use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::{Ready, ready},
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves files embedded from `static/` at build time. Meant to be mounted
/// with `nest_service`, which strips the mount prefix from the path.
#[derive(Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

fn asset_response(path: &str) -> Response {
    let Some(content) = Assets::get(path) else {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mut response = Body::from(content.data).into_response();

    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    response
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        ready(Ok(asset_response(req.uri().path())))
    }
}
