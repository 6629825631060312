//! HTTP route handlers.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Form, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::actions::{self, ActionForm, Flash};
use crate::clock::{FixedClock, SharedClock, SystemClock};
use crate::config::Config;
use crate::store::{StoreError, TaskStore};
use crate::task::{TaskStats, TaskView};

use super::flash;
use super::types::{HealthResponse, ListQuery, TaskPage};
use super::view;

/// Shared application state.
pub struct AppState {
    /// Task persistence
    pub store: TaskStore,
    /// Source of "today" for statuses, statistics and completion stamps
    pub clock: SharedClock,
}

/// Build the router around an already constructed state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/tasks", get(list_tasks))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = TaskStore::open(&config.database_path).with_context(|| {
        format!("Failed to open task database {}", config.database_path.display())
    })?;

    let clock: SharedClock = match config.today_override {
        Some(today) => {
            tracing::info!("Pinning today to {}", today);
            Arc::new(FixedClock(today))
        }
        None => Arc::new(SystemClock),
    };

    let state = Arc::new(AppState {
        store,
        clock,
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Read path shared by the HTML page and the JSON listing: filter the list,
/// classify each task, and compute statistics over the whole store.
fn load_page(state: &AppState, query: &ListQuery) -> Result<TaskPage, StoreError> {
    let today = state.clock.today();
    let all = state.store.list()?;
    let stats = TaskStats::compute(&all, today, query.stat_scope());
    let tasks = query
        .filter()
        .apply(all)
        .into_iter()
        .map(|t| TaskView::new(t, today))
        .collect();
    Ok(TaskPage {
        today,
        tasks,
        stats,
    })
}

fn internal_error(e: StoreError) -> (StatusCode, String) {
    tracing::error!("Failed to load tasks: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// GET / - the task page.
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let page = load_page(&state, &query).map_err(internal_error)?;
    let flash = flash::take(&headers);
    let html = Html(view::render_page(&page, &query, flash.as_ref()));

    if flash.is_some() {
        Ok(([(header::SET_COOKIE, flash::clear_cookie())], html).into_response())
    } else {
        Ok(html.into_response())
    }
}

/// POST / - apply a task action, then redirect back to the page. An
/// unreadable body is reported through the flash like any other bad input.
async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Response {
    let flash = match form {
        Ok(Form(form)) => actions::handle_form(&state.store, state.clock.today(), form),
        Err(rejection) => {
            tracing::warn!("Rejected task form: {}", rejection);
            Some(Flash::danger("Invalid form submission"))
        }
    };
    match flash {
        Some(f) => ([(header::SET_COOKIE, flash::set_cookie(&f))], Redirect::to("/")).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// GET /api/tasks - the task page as JSON.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TaskPage>, (StatusCode, String)> {
    load_page(&state, &query).map(Json).map_err(internal_error)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
