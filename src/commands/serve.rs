use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::controllers;
use crate::models::{NewPaste, Paste};
use crate::types::api::UploadPaste;
use crate::App;

/// Usage page served at the root.
const USAGE: &str = include_str!("../../assets/usage.txt");

pub async fn run(app: App) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], app.config.port));

    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(router(app).into_make_service())
        .await?;

    Ok(())
}

pub fn router(app: App) -> Router {
    let max_upload_size = app.config.limits.max_upload_size;

    Router::new()
        .route("/", get(index).post(upload_paste))
        .route("/:id", get(get_paste_raw))
        .route("/api/pastes", get(list_pastes))
        .route("/api/pastes/:id", get(get_paste))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_size))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn index() -> &'static str {
    USAGE
}

async fn get_paste_raw(
    State(app): State<App>,
    Path(name): Path<String>,
) -> crate::ApiResult<impl IntoResponse> {
    let paste = controllers::paste::fetch(&app, &name).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        paste.content,
    ))
}

async fn get_paste(
    State(app): State<App>,
    Path(name): Path<String>,
) -> crate::ApiResult<Json<Paste>> {
    Ok(Json(controllers::paste::fetch(&app, &name).await?))
}

async fn list_pastes(State(app): State<App>) -> crate::ApiResult<Json<Vec<Paste>>> {
    Ok(Json(controllers::paste::list_public(&app).await?))
}

async fn upload_paste(
    State(app): State<App>,
    mut multipart: Multipart,
) -> crate::ApiResult<impl IntoResponse> {
    let mut new_paste = NewPaste::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;

        match field_name.as_str() {
            "title" => new_paste.title = value,
            "content" => new_paste.content = value,
            "hl" => new_paste.highlight_alias = Some(value),
            "private" => new_paste.is_private = parse_flag(&value),
            other => debug!("ignoring unknown form field '{other}'"),
        }
    }

    let paste = controllers::paste::submit(&app, new_paste).await?;

    let path = format!("/{}", paste.name);
    let url = format!("{}{path}", app.config.base_url.trim_end_matches('/'));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, path)],
        Json(UploadPaste {
            id: paste.name,
            url,
        }),
    ))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1"
    )
}
