/*!
 * # subseeker
 *
 * A Rust library for finding subtitles for local video files through a
 * remote subtitle-database service, with relevance scoring of each
 * candidate against the local video.
 *
 * ## Features
 *
 * - Query the OpenSubDB service by series/title, season/episode, file hash,
 *   file size, IMDB id and filename tag
 * - Map heterogeneous result rows into uniform candidate-subtitle records
 * - Score each candidate against the local video, producing a set of
 *   matched attribute tags for a downstream ranking step
 * - Download subtitle content with line-ending normalization
 * - ISO 639-1 / 639-2 language code conversion for the remote vocabulary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `video`: Local video model (movie or episode)
 * - `matches`: Match-tag vocabulary and the generic field-equality matcher
 * - `release_guess`: Heuristic release-name/filename guesser
 * - `subtitle`: Generic subtitle base behavior
 * - `api`: Remote service contract and reqwest client
 * - `providers`: Subtitle-provider trait and the OpenSubDB implementation
 * - `language_utils`: Language code conversion utilities
 * - `file_utils`: Video discovery and content hashing
 * - `app_controller`: CLI orchestrator
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod api;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod matches;
pub mod providers;
pub mod release_guess;
pub mod subtitle;
pub mod video;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError, LanguageError, ProviderError, SubtitleError};
pub use matches::{GuessedFields, MatchTag, guess_matches};
pub use providers::SubtitleProvider;
pub use providers::opensubdb::{OpenSubDbProvider, OpenSubDbSubtitle, PROVIDER_NAME};
pub use subtitle::MovieKind;
pub use video::{Episode, Movie, Video};
