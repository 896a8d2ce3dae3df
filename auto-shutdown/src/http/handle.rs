use crate::alarm::SnsEvent;
use crate::http::response::Response;
use crate::http::Server;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{self, Json, WithStatus};
use warp::Rejection;

pub async fn handle(server: Arc<Server>, event: SnsEvent) -> Result<WithStatus<Json>, Rejection> {
    // Record failures are already logged by the reactor
    match server.reactor.handle(&event).await {
        Ok(()) => Ok(reply::with_status(
            reply::json(&Response::success()),
            StatusCode::OK,
        )),
        Err(e) => Ok(reply::with_status(
            reply::json(&Response::error(&e.to_string())),
            StatusCode::INTERNAL_SERVER_ERROR,
        )),
    }
}
