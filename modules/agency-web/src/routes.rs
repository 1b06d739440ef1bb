use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use agency_common::{is_slug, ClientDirectory};

use crate::components::{
    render_client_detail, render_client_not_found, render_clients_list, render_home,
    render_not_found, SiteSettings, ASSETS_PREFIX,
};

const PAGE_CACHE_CONTROL: &str = "public, max-age=300";
const MISS_CACHE_CONTROL: &str = "no-store";

// --- App State ---

pub struct AppState {
    pub directory: ClientDirectory,
    pub site: SiteSettings,
}

pub fn build_router(state: Arc<AppState>, assets_dir: &FsPath) -> Router {
    // Trailing-slash forms match the directory layout the static export writes.
    let pages = Router::new()
        .route("/", get(home_page))
        .route("/clients", get(clients_page))
        .route("/clients/", get(clients_page))
        .route("/clients/{slug}", get(client_detail_page))
        .route("/clients/{slug}/", get(client_detail_page))
        // Misses set their own no-store header first.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(PAGE_CACHE_CONTROL),
        ));

    Router::new()
        .merge(pages)
        .route("/api/clients/paths", get(api_client_paths))
        .route("/health", get(|| async { "ok" }))
        .nest_service(ASSETS_PREFIX, ServeDir::new(assets_dir))
        .fallback(not_found_page)
        .with_state(state)
        .layer(CompressionLayer::new())
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Handlers ---

async fn home_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(render_home(&state.site, &state.directory))
}

async fn clients_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(render_clients_list(&state.site, &state.directory))
}

async fn client_detail_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    // Anything not in normalized form can never match a record.
    let record = if is_slug(&slug) {
        state.directory.resolve(&slug)
    } else {
        None
    };

    match record {
        Some(record) => Html(render_client_detail(&state.site, record)).into_response(),
        None => {
            info!(slug = %slug, "Client not found");
            let path = format!("/clients/{slug}");
            (
                StatusCode::NOT_FOUND,
                [(header::CACHE_CONTROL, MISS_CACHE_CONTROL)],
                Html(render_client_not_found(&state.site, &path)),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
struct ClientPaths {
    paths: Vec<String>,
}

/// Every valid detail route, for pre-rendering. Mirrors the dataset order.
async fn api_client_paths(State(state): State<Arc<AppState>>) -> Json<ClientPaths> {
    let paths = state
        .directory
        .enumerate_slugs()
        .into_iter()
        .map(|slug| format!("/clients/{slug}"))
        .collect();
    Json(ClientPaths { paths })
}

async fn not_found_page(State(state): State<Arc<AppState>>, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, MISS_CACHE_CONTROL)],
        Html(render_not_found(&state.site, uri.path())),
    )
}
