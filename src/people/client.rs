//! HTTP source for the people list.

use std::fmt;
use std::future::Future;

use tracing::{debug, info};

use super::Person;

/// Endpoint used when neither the CLI nor `picker.conf` names one.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Errors from fetching the people list.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, I/O).
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status { status: u16, url: String },
    /// The body was not a JSON array of people.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Status { status, url } => write!(f, "{url} returned HTTP {status}"),
            Self::Decode(msg) => write!(f, "invalid people payload: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Something that can produce the full list of people in one call.
pub trait PeopleSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Person>, FetchError>> + Send;
}

/// `GET <endpoint>` returning a JSON array of people.
#[derive(Clone, Debug)]
pub struct HttpPeopleSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPeopleSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPeopleSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl PeopleSource for HttpPeopleSource {
    async fn fetch(&self) -> Result<Vec<Person>, FetchError> {
        info!(endpoint = %self.endpoint, "fetching people");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let people: Vec<Person> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(count = people.len(), "decoded people");
        Ok(people)
    }
}
