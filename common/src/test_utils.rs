//! In-process stand-in for the Discord REST API, served by warp on an ephemeral port. Every
//! request is recorded and answered with a fixed status and body.

use ed25519_dalek::{Keypair, PublicKey, SecretKey, Signer};
use std::sync::{Arc, Mutex};
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::Filter;

use crate::secrets::SecretBundle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body[..]).expect("request body was not json")
    }
}

pub struct FakeDiscord {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeDiscord {
    pub async fn start(status: u16, response_body: &'static str) -> FakeDiscord {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let status = StatusCode::from_u16(status).expect("invalid status code");

        let route = warp::method()
            .and(warp::path::full())
            .and(warp::header::optional::<String>("authorization"))
            .and(warp::body::bytes())
            .map(
                move |method: Method, path: FullPath, authorization: Option<String>, body: Bytes| {
                    recorded
                        .lock()
                        .expect("fake discord lock poisoned")
                        .push(RecordedRequest {
                            method: method.to_string(),
                            path: path.as_str().to_owned(),
                            authorization,
                            body,
                        });

                    warp::reply::with_status(
                        warp::reply::with_header(response_body, "content-type", "application/json"),
                        status,
                    )
                },
            );

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        FakeDiscord {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("fake discord lock poisoned")
            .clone()
    }
}

pub const TEST_SECRET_KEY: [u8; 32] = [7u8; 32];

pub fn keypair() -> Keypair {
    let secret = SecretKey::from_bytes(&TEST_SECRET_KEY).expect("invalid secret key");
    let public: PublicKey = (&secret).into();

    Keypair { secret, public }
}

/// Hex signature Discord would send for `timestamp || body`.
pub fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);

    hex::encode(keypair().sign(&message).to_bytes())
}

pub fn secret_json() -> String {
    format!(
        r#"{{"PublicKey":"{}","AppId":"1000","GuildId":"2000","BotToken":"bot-token","Authorization":"Bearer abc"}}"#,
        hex::encode(keypair().public.as_bytes())
    )
}

pub fn secret_bundle() -> SecretBundle {
    SecretBundle::from_json(&secret_json()).expect("invalid test secret bundle")
}
