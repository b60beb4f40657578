use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info, warn};

use crate::foundation::core::AvatarSize;
use crate::serve::config::ServeConfig;
use crate::serve::query::{AvatarQuery, AvatarResponse, RequestError, respond};

pub const HASH_HEADER: HeaderName = HeaderName::from_static("x-avatar-hash");
pub const TIME_KEY_HEADER: HeaderName = HeaderName::from_static("x-avatar-time-key");

#[derive(Debug)]
struct AppState {
    default_size: AvatarSize,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl IntoResponse for AvatarResponse {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, "image/png".to_owned()),
                (HASH_HEADER, self.hash),
                (TIME_KEY_HEADER, self.time_key.to_string()),
            ],
            self.png,
        )
            .into_response()
    }
}

pub fn router(config: &ServeConfig) -> Router {
    let state = Arc::new(AppState {
        default_size: config.default_size,
    });
    Router::new()
        .route(&config.route, get(avatar_handler))
        .with_state(state)
}

async fn avatar_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvatarQuery>,
) -> Response {
    let request = match query.validate(state.default_size) {
        Ok(request) => request,
        Err(err) => {
            warn!(%err, "rejected avatar request");
            return err.into_response();
        }
    };

    let size = request.size;
    match tokio::task::spawn_blocking(move || respond(&request)).await {
        Ok(Ok(response)) => {
            info!(%size, hash = %response.hash, time_key = %response.time_key, "avatar rendered");
            response.into_response()
        }
        Ok(Err(err)) => {
            error!(%err, "avatar request failed");
            err.into_response()
        }
        Err(join) => {
            error!(%join, "render task panicked");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Binds `config.listen` and serves until Ctrl-C.
pub async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    config.validate()?;
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("bind {}", config.listen))?;
    info!(
        "avatar service listening on {} (route {}, default size {})",
        config.listen, config.route, config.default_size
    );
    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
