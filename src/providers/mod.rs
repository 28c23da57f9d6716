/*!
 * Provider implementations for subtitle-database services.
 *
 * This module contains the plugin seam for subtitle providers and the
 * OpenSubDB implementation. A provider owns one authenticated session,
 * translates local search requests into the remote query vocabulary and
 * maps result rows into candidate subtitles.
 */

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::video::Video;

/// Common trait for all subtitle providers
///
/// Calls are blocking round-trips to the remote service with no internal
/// concurrency; the calling orchestrator parallelizes across providers and
/// enforces timeouts. The one authenticated session a provider holds must
/// not be shared between callers without external synchronization.
#[async_trait]
pub trait SubtitleProvider: Send + Sync {
    /// The candidate-subtitle type this provider produces
    type Subtitle: Send + Sync;

    /// Stable provider name, used to key video hashes
    fn name(&self) -> &'static str;

    /// Two-letter codes of the languages this provider supports
    fn languages(&self) -> Vec<String>;

    /// Establish the authenticated session with the remote service
    async fn initialize(&mut self) -> Result<(), ProviderError>;

    /// Close the authenticated session
    async fn terminate(&mut self) -> Result<(), ProviderError>;

    /// Search the remote service for candidate subtitles matching the video
    ///
    /// Returns an empty list, not an error, when the service reports zero
    /// results.
    async fn list_subtitles(
        &self,
        video: &Video,
        languages: &[String],
    ) -> Result<Vec<Self::Subtitle>, ProviderError>;

    /// Download the subtitle content and store it on the candidate
    async fn download_subtitle(&self, subtitle: &mut Self::Subtitle) -> Result<(), ProviderError>;
}

pub mod opensubdb;
