//! Development server
//!
//! Serves the exported public directory and accepts contact-form
//! submissions on a JSON endpoint backed by the content store.

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;

use crate::contact;
use crate::store::{ContentStore, NewSubmission};
use crate::Site;

/// Server state shared across handlers
struct ServerState {
    store: Mutex<ContentStore>,
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        store: Mutex::new(ContentStore::seeded()),
    });

    let app = router(site, state);

    // handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(site: &Site, state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/contact", post(contact_handler))
        .fallback_service(
            ServeDir::new(&site.public_dir).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Validate a submission; persist it on success
async fn contact_handler(
    State(state): State<Arc<ServerState>>,
    Json(form): Json<NewSubmission>,
) -> Response {
    if let Err(errors) = contact::validate(&form) {
        tracing::debug!("Rejected contact submission: {} invalid fields", errors.0.len());
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "errors": errors })),
        )
            .into_response();
    }

    let submission = state.store.lock().await.create_submission(form);
    tracing::info!("Stored contact submission {}", submission.id);
    (StatusCode::CREATED, Json(submission)).into_response()
}
