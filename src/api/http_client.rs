use std::sync::Arc;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use crate::session::Session;

/// Response envelope used by every backend endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Rejected("response carried no data".to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticated JSON client for the backend.
///
/// Wraps `reqwest::Client`. Every call reads the bearer token from the
/// [`Session`]; a missing token or a 401 response invalidates the session
/// (clears the token and redirects to login) and yields
/// [`ApiError::Unauthorized`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, session: Arc<Session>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_http_client(http, base_url, session))
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Appends `segments` to the base URL, percent-encoding each one, so an
    /// id containing `/`, `?` or `#` stays a single path segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` the endpoint at `segments` and unwrap the envelope's `data`.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments)?;
        let Some(token) = self.session.token() else {
            warn!("No session token; redirecting to login");
            self.session.invalidate();
            return Err(ApiError::Unauthorized);
        };

        debug!("Sending request");
        let response = self.http.get(url).bearer_auth(token).send().await?;
        self.unwrap_response(response).await
    }

    async fn unwrap_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected session token");
            self.session.invalidate();
            return Err(ApiError::Unauthorized);
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)?;
        envelope.into_result()
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one HTTP response on an ephemeral port. The task
    /// resolves to the raw request text it received.
    pub async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), task)
    }
}
