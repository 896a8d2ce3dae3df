use crate::http::{DispatchResponse, Server};
use crate::SignedRequest;
use std::sync::Arc;
use warp::http::HeaderMap;
use warp::hyper::body::Bytes;
use warp::Rejection;

pub async fn handle(
    server: Arc<Server>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<DispatchResponse, Rejection> {
    // Read as raw values: a header that is not valid text is a bad signature, not a bad request
    let request = SignedRequest {
        signature: headers.get("x-signature-ed25519").cloned(),
        timestamp: headers.get("x-signature-timestamp").cloned(),
        body,
    };

    Ok(server.dispatcher.dispatch(request).await)
}
