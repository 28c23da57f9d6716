/*!
 * Client for the remote subtitle-database service
 *
 * The service exposes a small authenticated REST surface: login/logout for
 * session management, a search call returning result rows and a download
 * call returning raw subtitle text. Errors are propagated untranslated and
 * never retried here.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

/// Search criteria sent to the remote service
///
/// Absent criteria are omitted from the request body entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchCriteria {
    /// Free-text query: series name for episodes, title for movies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Season number, episodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,

    /// Episode number, episodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,

    /// Provider content hash of the local file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moviehash: Option<String>,

    /// Size of the local file in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moviebytesize: Option<u64>,

    /// IMDB identifier in `tt` form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    /// Base filename of the local video, used for exact-match bonuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Comma-separated three-letter language codes
    pub languages: String,
}

/// One result row from a search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtitleRow {
    /// Three-letter language code of the subtitle
    pub language: String,

    /// Hearing-impaired flag
    #[serde(default)]
    pub hearing_impaired: bool,

    /// Remote file identifier
    pub file_id: u64,

    /// Movie name; `"<series>" <episode title>` for episodes
    #[serde(default)]
    pub movie_name: String,

    /// Release name the subtitle was cut for
    #[serde(default)]
    pub release: String,

    /// Release year
    #[serde(default)]
    pub year: Option<i32>,

    /// Numeric IMDB identifier, without the `tt` prefix
    #[serde(default)]
    pub imdb_id: Option<u64>,

    /// Season number, episodes only
    #[serde(default)]
    pub season_number: Option<u32>,

    /// Episode number, episodes only
    #[serde(default)]
    pub episode_number: Option<u32>,

    /// Content hash of the video the subtitle was cut for
    #[serde(default)]
    pub moviehash: Option<String>,

    /// How the service found this row, e.g. "tag" or "moviehash";
    /// not reported on the plain search path
    #[serde(default)]
    pub matched_by: Option<String>,

    /// Original subtitle filename; not reported on the plain search path
    #[serde(default)]
    pub filename: Option<String>,
}

/// Search response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Result rows, possibly empty
    #[serde(default)]
    pub data: Vec<SubtitleRow>,
}

/// Error body returned by the service on failed calls
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Contract of the remote subtitle service
///
/// The provider consumes this as a black box; tests substitute a mock.
#[async_trait]
pub trait SubtitleApi: Send + Sync {
    /// Establish an authenticated session
    async fn login(&self, username: &str, password: &str) -> Result<(), ProviderError>;

    /// Close the authenticated session
    async fn logout(&self, username: &str, password: &str) -> Result<(), ProviderError>;

    /// Search for subtitles matching the criteria
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse, ProviderError>;

    /// Download raw subtitle text by remote file identifier
    async fn download(&self, file_id: u64) -> Result<String, ProviderError>;
}

/// Default public endpoint of the service
pub const DEFAULT_ENDPOINT: &str = "https://api.opensubdb.org/v1";

/// reqwest-backed client for the remote service
pub struct OpenSubDbClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Service endpoint base URL
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl OpenSubDbClient {
    /// Create a new client
    ///
    /// `app_name` identifies the calling application in the outbound
    /// user-agent; an empty `endpoint` selects the public API.
    pub fn new(
        api_key: impl Into<String>,
        app_name: &str,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let user_agent = if app_name.is_empty() {
            format!("subseeker v{}", env!("CARGO_PKG_VERSION"))
        } else {
            format!("{} (subseeker v{})", app_name, env!("CARGO_PKG_VERSION"))
        };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(user_agent)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/{}", base, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) if !body.message.is_empty() => body.message,
                _ => status.to_string(),
            };
            error!("Subtitle service error ({}): {}", status, message);
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(ProviderError::Authentication(message));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SubtitleApi for OpenSubDbClient {
    async fn login(&self, username: &str, password: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(self.api_url("login"))
            .header("Api-Key", &self.api_key)
            .json(&SessionRequest { username, password })
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn logout(&self, username: &str, password: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(self.api_url("logout"))
            .header("Api-Key", &self.api_key)
            .json(&SessionRequest { username, password })
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse, ProviderError> {
        let response = self
            .client
            .post(self.api_url("search"))
            .header("Api-Key", &self.api_key)
            .json(criteria)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json::<SearchResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    async fn download(&self, file_id: u64) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(self.api_url(&format!("download/{}", file_id)))
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}
