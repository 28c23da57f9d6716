/*!
 * OpenSubDB provider
 *
 * Maps the remote service's result rows into candidate subtitles and scores
 * each candidate's relevance against a local video. Remote metadata is
 * noisy, so the scoring policy requires independent weak signals to agree
 * before trusting a strong tag like the content hash, while cheap structural
 * matches (season and episode numbers, year) are accepted directly.
 */

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::{OpenSubDbClient, SearchCriteria, SubtitleApi, SubtitleRow};
use crate::app_config::ProviderSettings;
use crate::errors::{ProviderError, SubtitleError};
use crate::language_utils;
use crate::matches::{GuessedFields, MatchTag, guess_matches};
use crate::providers::SubtitleProvider;
use crate::release_guess;
use crate::subtitle::{MovieKind, fix_line_ending};
use crate::video::Video;

/// Provider name, keys the video hash map
pub const PROVIDER_NAME: &str = "opensubdb";

// Episode movie names follow the pattern `"<series name>" <episode title>`
static SERIES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(?P<series_name>.*)" (?P<series_title>.*)$"#).unwrap());

/// One candidate subtitle, mapped from a remote search-result row
///
/// Immutable once created, except for the content which is set exactly once
/// by a successful download.
#[derive(Clone)]
pub struct OpenSubDbSubtitle {
    id: u64,
    language: String,
    hearing_impaired: bool,
    movie_kind: Option<MovieKind>,
    hash: Option<String>,
    movie_name: String,
    movie_release_name: String,
    movie_year: Option<i32>,
    movie_imdb_id: Option<String>,
    series_season: Option<u32>,
    series_episode: Option<u32>,
    filename: Option<String>,
    matched_by: Option<String>,
    content: Option<String>,
}

impl OpenSubDbSubtitle {
    /// Map a search-result row into a candidate
    ///
    /// The row's three-letter language code is converted to the local
    /// two-letter representation; an unknown code is a lookup error.
    /// `movie_kind`, `matched_by` and `filename` come straight from the row
    /// and stay unset when the service omits them, which the plain search
    /// path does.
    pub fn from_row(row: &SubtitleRow) -> Result<Self, ProviderError> {
        let language = language_utils::remote_code_to_part1(&row.language)?;

        Ok(Self {
            id: row.file_id,
            language,
            hearing_impaired: row.hearing_impaired,
            movie_kind: None,
            hash: row.moviehash.clone(),
            movie_name: row.movie_name.clone(),
            movie_release_name: row.release.clone(),
            movie_year: row.year,
            movie_imdb_id: row.imdb_id.map(|id| format!("tt{}", id)),
            series_season: row.season_number,
            series_episode: row.episode_number,
            filename: row.filename.clone(),
            matched_by: row.matched_by.clone(),
            content: None,
        })
    }

    /// Set the movie kind, for callers that know what they searched for
    pub fn with_movie_kind(mut self, kind: MovieKind) -> Self {
        self.movie_kind = Some(kind);
        self
    }

    /// Set the matched-by tag reported by the service
    pub fn with_matched_by(mut self, matched_by: impl Into<String>) -> Self {
        self.matched_by = Some(matched_by.into());
        self
    }

    /// Set the original subtitle filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Remote file identifier, primary key of the candidate
    pub fn id(&self) -> String {
        self.id.to_string()
    }

    /// Two-letter language code of the subtitle
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Hearing-impaired flag from remote metadata
    pub fn hearing_impaired(&self) -> bool {
        self.hearing_impaired
    }

    /// Declared video kind, unset on the plain search path
    pub fn movie_kind(&self) -> Option<MovieKind> {
        self.movie_kind
    }

    /// Content hash of the video this subtitle was cut for
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Movie name as reported by the service
    pub fn movie_name(&self) -> &str {
        &self.movie_name
    }

    /// Release name as reported by the service
    pub fn movie_release_name(&self) -> &str {
        &self.movie_release_name
    }

    /// IMDB identifier in `tt` form, when reported
    pub fn movie_imdb_id(&self) -> Option<&str> {
        self.movie_imdb_id.as_deref()
    }

    /// Downloaded subtitle text, absent until downloaded
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Human-readable description of the candidate
    pub fn info(&self) -> String {
        let filename = self.filename.as_deref().unwrap_or("");
        if filename.is_empty() && self.movie_release_name.is_empty() {
            return self.id();
        }
        if self.movie_release_name.len() > filename.len() {
            return self.movie_release_name.clone();
        }
        filename.to_string()
    }

    /// Parsed series name and episode title of an episode candidate
    ///
    /// Fails when `movie_name` does not match the `"<series>" <title>`
    /// pattern, rather than silently returning empty strings.
    pub fn series_info(&self) -> Result<(String, String), SubtitleError> {
        let captures = SERIES_REGEX
            .captures(&self.movie_name)
            .ok_or_else(|| SubtitleError::MalformedMovieName(self.movie_name.clone()))?;

        Ok((
            captures["series_name"].to_string(),
            captures["series_title"].to_string(),
        ))
    }

    /// Parsed series name of an episode candidate
    pub fn series_name(&self) -> Result<String, SubtitleError> {
        self.series_info().map(|(name, _)| name)
    }

    /// Parsed episode title of an episode candidate
    pub fn series_title(&self) -> Result<String, SubtitleError> {
        self.series_info().map(|(_, title)| title)
    }

    /// Store downloaded content; set exactly once
    pub fn set_content(&mut self, content: String) -> Result<(), SubtitleError> {
        if self.content.is_some() {
            return Err(SubtitleError::ContentAlreadySet(self.id()));
        }
        self.content = Some(content);
        Ok(())
    }

    /// Score this candidate's relevance against a local video
    ///
    /// Produces the set of attribute tags that can be trusted to correspond
    /// to the video. A candidate whose declared kind does not agree with the
    /// video's type earns no tags, except the IMDB tag which is evaluated
    /// regardless of the kind gate.
    pub fn get_matches(&self, video: &Video) -> Result<HashSet<MatchTag>, SubtitleError> {
        let mut matches = HashSet::new();

        let imdb_agrees = match (video.imdb_id(), self.movie_imdb_id.as_deref()) {
            (Some(local), Some(remote)) => local == remote,
            _ => false,
        };

        // kind gate: no partial credit for a candidate of the wrong kind
        let kind = match (self.movie_kind, video) {
            (Some(MovieKind::Episode), Video::Episode(_)) => MovieKind::Episode,
            (Some(MovieKind::Movie), Video::Movie(_)) => MovieKind::Movie,
            (kind, _) => {
                debug!("{:?} is not a valid movie kind for {:?}", kind, video.path());
                if imdb_agrees {
                    matches.insert(MatchTag::ImdbId);
                }
                return Ok(matches);
            }
        };

        // direct comparison of the candidate's own fields
        let own_fields = match kind {
            MovieKind::Episode => {
                let (series_name, series_title) = self.series_info()?;
                GuessedFields {
                    title: Some(series_name),
                    episode_title: Some(series_title),
                    year: self.movie_year,
                    season: self.series_season,
                    episode: self.series_episode,
                }
            }
            MovieKind::Movie => GuessedFields {
                title: Some(self.movie_name.clone()),
                year: self.movie_year,
                ..GuessedFields::default()
            },
        };
        matches.extend(guess_matches(video, &own_fields));

        // credit the service's own exact-match signal
        if self.matched_by.as_deref() == Some("tag")
            && (video.imdb_id().is_none() || imdb_agrees)
        {
            match kind {
                MovieKind::Episode => matches.extend([
                    MatchTag::Series,
                    MatchTag::Year,
                    MatchTag::Season,
                    MatchTag::Episode,
                ]),
                MovieKind::Movie => matches.extend([MatchTag::Title, MatchTag::Year]),
            }
        }

        // heuristic re-parse of the free-text names
        matches.extend(guess_matches(
            video,
            &release_guess::guess(&self.movie_release_name, Some(kind)),
        ));
        if let Some(filename) = &self.filename {
            matches.extend(guess_matches(video, &release_guess::guess(filename, Some(kind))));
        }

        // a bare hash match with no corroborating metadata is not trusted
        if let (Some(local), Some(remote)) = (video.provider_hash(PROVIDER_NAME), self.hash())
        {
            if local == remote {
                let corroborated = match kind {
                    MovieKind::Movie => matches.contains(&MatchTag::Title),
                    MovieKind::Episode => {
                        matches.contains(&MatchTag::Series)
                            && matches.contains(&MatchTag::Season)
                            && matches.contains(&MatchTag::Episode)
                    }
                };
                if corroborated {
                    matches.insert(MatchTag::Hash);
                } else {
                    debug!("Match on hash discarded for subtitle {}", self.id);
                }
            }
        }

        if imdb_agrees {
            matches.insert(MatchTag::ImdbId);
        }

        Ok(matches)
    }
}

impl fmt::Debug for OpenSubDbSubtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSubDbSubtitle")
            .field("id", &self.id)
            .field("language", &self.language)
            .field("movie_kind", &self.movie_kind)
            .field("movie_name", &self.movie_name)
            .field("release", &self.movie_release_name)
            .finish()
    }
}

/// OpenSubDB provider: session lifecycle, query translation, result mapping
pub struct OpenSubDbProvider<A: SubtitleApi = OpenSubDbClient> {
    api: A,
    username: String,
    password: String,
}

impl OpenSubDbProvider<OpenSubDbClient> {
    /// Create a provider backed by the live service client
    ///
    /// Fails with a configuration error when credentials are only partially
    /// specified.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let api = OpenSubDbClient::new(
            &settings.api_key,
            &settings.app_name,
            &settings.endpoint,
            settings.timeout_secs,
        );
        Self::with_api(api, settings)
    }
}

impl<A: SubtitleApi> OpenSubDbProvider<A> {
    /// Create a provider over an arbitrary service client
    pub fn with_api(api: A, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        settings.validate_credentials()?;

        Ok(Self {
            api,
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    /// Search the remote service and map each result row into a candidate
    ///
    /// Wanted languages are converted to the remote three-letter vocabulary,
    /// deduplicated and sorted. Zero results yield an empty list.
    pub async fn query(
        &self,
        wanted_languages: &[String],
        mut criteria: SearchCriteria,
    ) -> Result<Vec<OpenSubDbSubtitle>, ProviderError> {
        criteria.languages = language_utils::convert_wanted_languages(wanted_languages)?.join(",");

        info!("Searching subtitles");
        let response = self.api.search(&criteria).await?;

        if response.data.is_empty() {
            debug!("No subtitles found");
            return Ok(Vec::new());
        }

        let mut subtitles = Vec::with_capacity(response.data.len());
        for row in &response.data {
            let subtitle = OpenSubDbSubtitle::from_row(row)?;
            debug!("Found subtitle {:?}", subtitle);
            subtitles.push(subtitle);
        }

        Ok(subtitles)
    }
}

#[async_trait]
impl<A: SubtitleApi> SubtitleProvider for OpenSubDbProvider<A> {
    type Subtitle = OpenSubDbSubtitle;

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn languages(&self) -> Vec<String> {
        language_utils::supported_languages()
    }

    async fn initialize(&mut self) -> Result<(), ProviderError> {
        info!("Logging in");
        self.api.login(&self.username, &self.password).await?;
        debug!("Logged in");
        Ok(())
    }

    async fn terminate(&mut self) -> Result<(), ProviderError> {
        info!("Logging out");
        self.api.logout(&self.username, &self.password).await?;
        debug!("Logged out");
        Ok(())
    }

    async fn list_subtitles(
        &self,
        video: &Video,
        languages: &[String],
    ) -> Result<Vec<Self::Subtitle>, ProviderError> {
        let mut criteria = SearchCriteria {
            moviehash: video.provider_hash(PROVIDER_NAME).map(str::to_string),
            moviebytesize: video.size(),
            imdb_id: video.imdb_id().map(str::to_string),
            tag: Some(video.file_name()),
            ..SearchCriteria::default()
        };

        match video {
            Video::Episode(episode) => {
                criteria.query = Some(episode.series.clone());
                criteria.season_number = Some(episode.season);
                criteria.episode_number = Some(episode.episode);
            }
            Video::Movie(movie) => {
                criteria.query = Some(movie.title.clone());
            }
        }

        self.query(languages, criteria).await
    }

    async fn download_subtitle(&self, subtitle: &mut Self::Subtitle) -> Result<(), ProviderError> {
        info!("Downloading subtitle {:?}", subtitle);
        let text = self.api.download(subtitle.id).await?;
        subtitle.set_content(fix_line_ending(&text))?;
        Ok(())
    }
}
