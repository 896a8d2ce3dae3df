use crate::http::response::Response;
use crate::http::Server;
use common::workflow::NotificationRequest;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::{self, Json, WithStatus};
use warp::Rejection;

pub async fn handle(
    server: Arc<Server>,
    request: NotificationRequest,
) -> Result<WithStatus<Json>, Rejection> {
    match server.notifier.notify(&request).await {
        Ok(()) => Ok(reply::with_status(
            reply::json(&Response::success()),
            StatusCode::OK,
        )),
        Err(e) => {
            error!(error = %e, interaction_id = ?request.interaction_id, "Failed to deliver message");

            Ok(reply::with_status(
                reply::json(&Response::error(&e.to_string())),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}
