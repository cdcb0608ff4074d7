//! Thin HTTP wrapper over the API's read routes.

use std::time::Duration;

use serde_json::Value;

/// Per-request timeout; a hung API must not stall the poll loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{url} did not return a JSON array")]
    NotAList { url: String },
}

/// The record kinds the poller samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Planet,
    Person,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Planet, Kind::Person];

    /// Collection route, used to size the id range.
    pub fn list_path(self) -> &'static str {
        match self {
            Kind::Planet => "/planets",
            Kind::Person => "/people",
        }
    }

    /// Single-record route for `id`.
    pub fn detail_path(self, id: i64) -> String {
        match self {
            Kind::Planet => format!("/planet/{id}"),
            Kind::Person => format!("/people/{id}"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::Planet => "planet",
            Kind::Person => "person",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Number of records currently listed for `kind`.
    pub async fn count(&self, kind: Kind) -> Result<usize, ClientError> {
        let url = format!("{}{}", self.base_url, kind.list_path());
        let body = self.get_json(&url).await?;
        body.as_array()
            .map(Vec::len)
            .ok_or(ClientError::NotAList { url })
    }

    /// Fetch one record of `kind`.
    pub async fn fetch(&self, kind: Kind, id: i64) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, kind.detail_path(id));
        self.get_json(&url).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, ClientError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.json().await?)
    }
}
