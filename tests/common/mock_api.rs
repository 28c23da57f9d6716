/*!
 * Mock implementation of the remote subtitle service
 *
 * Implements the SubtitleApi trait with canned responses and records every
 * call, so provider tests never touch the network.
 */

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use subseeker::api::{SearchCriteria, SearchResponse, SubtitleApi};
use subseeker::errors::ProviderError;

/// Tracks calls made against the mock service
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Names of the calls made, in order
    pub calls: Vec<String>,
    /// Criteria of the last search call
    pub last_criteria: Option<SearchCriteria>,
    /// Credentials of the last login call
    pub last_login: Option<(String, String)>,
}

/// Mock service client with configurable behavior
pub struct MockSubtitleApi {
    /// Canned search response
    pub response: SearchResponse,
    /// Canned download text
    pub download_text: String,
    /// Fail login with an authentication error
    pub fail_login: bool,
    /// Fail search with a transport error
    pub fail_search: bool,
    /// Call recorder, shared with the test
    pub tracker: Arc<Mutex<ApiCallTracker>>,
}

impl MockSubtitleApi {
    /// A working mock returning the given search rows
    pub fn with_response(response: SearchResponse) -> Self {
        Self {
            response,
            download_text: "1\n00:00:01,000 --> 00:00:02,000\nHello\n".to_string(),
            fail_login: false,
            fail_search: false,
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
        }
    }

    /// A working mock returning zero search results
    pub fn empty() -> Self {
        Self::with_response(SearchResponse::default())
    }

    /// Handle to the call recorder, kept by the test before the mock moves
    /// into the provider
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        Arc::clone(&self.tracker)
    }

    fn record(&self, call: &str) {
        self.tracker.lock().unwrap().calls.push(call.to_string());
    }
}

#[async_trait]
impl SubtitleApi for MockSubtitleApi {
    async fn login(&self, username: &str, password: &str) -> Result<(), ProviderError> {
        self.record("login");
        self.tracker.lock().unwrap().last_login =
            Some((username.to_string(), password.to_string()));

        if self.fail_login {
            return Err(ProviderError::Authentication("invalid credentials".to_string()));
        }
        Ok(())
    }

    async fn logout(&self, _username: &str, _password: &str) -> Result<(), ProviderError> {
        self.record("logout");
        Ok(())
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse, ProviderError> {
        self.record("search");
        self.tracker.lock().unwrap().last_criteria = Some(criteria.clone());

        if self.fail_search {
            return Err(ProviderError::RequestFailed("connection reset".to_string()));
        }
        Ok(self.response.clone())
    }

    async fn download(&self, _file_id: u64) -> Result<String, ProviderError> {
        self.record("download");
        Ok(self.download_text.clone())
    }
}
