use crate::http::response::Response;
use crate::{Config, Error, Reactor};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::MethodNotAllowed;
use warp::reply::{self, Json, WithStatus};
use warp::{Filter, Rejection};

pub struct Server {
    pub config: Config,
    pub reactor: Reactor,
}

impl Server {
    pub fn new(config: Config, reactor: Reactor) -> Server {
        Server { config, reactor }
    }

    pub async fn start(self) -> Result<(), Error> {
        let address: SocketAddr = self.config.server_addr.parse()?;

        let filter = Arc::new(self).filter_handle();

        info!(%address, "Starting server");
        warp::serve(filter).run(address).await;

        Ok(())
    }

    pub fn filter_handle(
        self: Arc<Self>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        warp::post()
            .and(warp::path("alarm"))
            .and(warp::path::end())
            .and(warp::any().map(move || self.clone()))
            .and(warp::body::json())
            .and_then(super::handle)
            .recover(handle_rejection)
            .with(warp::log("auto_shutdown"))
    }
}

async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, message) = if let Some(e) = err.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_owned())
    } else if err.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_owned())
    } else {
        (StatusCode::BAD_REQUEST, "Bad request".to_owned())
    };

    Ok(reply::with_status(
        reply::json(&Response::error(&message)),
        status,
    ))
}
