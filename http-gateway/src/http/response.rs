use serde::Serialize;
use warp::http::header::{HeaderValue, CONTENT_TYPE};
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::hyper::Body;
use warp::reply::{Reply, Response};

/// The complete HTTP answer to an interaction, kept as plain data so it can be inspected before
/// being turned into a warp response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: Bytes,
}

impl DispatchResponse {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, serde_json::Error> {
        Ok(DispatchResponse {
            status,
            content_type: Some("application/json"),
            body: Bytes::from(serde_json::to_vec(value)?),
        })
    }

    pub fn text(status: StatusCode, body: &'static str) -> Self {
        DispatchResponse {
            status,
            content_type: Some("text/plain"),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    /// Acknowledges the interaction without a body; the result is delivered out of band.
    pub fn accepted() -> Self {
        DispatchResponse {
            status: StatusCode::ACCEPTED,
            content_type: None,
            body: Bytes::new(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::text(StatusCode::UNAUTHORIZED, "Invalid request signature")
    }

    pub fn bad_request() -> Self {
        Self::text(StatusCode::BAD_REQUEST, "wut?")
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body[..]).unwrap_or_default()
    }
}

impl Reply for DispatchResponse {
    fn into_response(self) -> Response {
        let mut res = Response::new(Body::from(self.body));
        *res.status_mut() = self.status;

        if let Some(content_type) = self.content_type {
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        res
    }
}
