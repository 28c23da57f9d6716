/*!
 * Match-tag vocabulary and the generic field-equality matcher
 *
 * A match tag names one attribute of a candidate subtitle that was found to
 * agree with the local video. The set of tags produced for a candidate is
 * consumed by the ranking step elsewhere in the system.
 */

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::video::Video;

/// One matched attribute of a candidate subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTag {
    /// Movie title
    Title,
    /// Release year
    Year,
    /// Season number
    Season,
    /// Episode number
    Episode,
    /// Series name
    Series,
    /// Episode title
    EpisodeTitle,
    /// Provider content hash
    Hash,
    /// IMDB identifier
    ImdbId,
}

impl fmt::Display for MatchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::Series => "series",
            Self::EpisodeTitle => "episode_title",
            Self::Hash => "hash",
            Self::ImdbId => "imdb_id",
        };
        write!(f, "{}", name)
    }
}

/// Structured fields extracted from free text or carried by a candidate,
/// compared field-by-field against the video
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessedFields {
    /// Title: the series name for an episode video, the movie title otherwise
    pub title: Option<String>,
    /// Episode title, only meaningful against episode videos
    pub episode_title: Option<String>,
    /// Release year
    pub year: Option<i32>,
    /// Season number
    pub season: Option<u32>,
    /// Episode number
    pub episode: Option<u32>,
}

/// Case-insensitive comparison on trimmed text; empty strings never match
fn titles_equal(left: &str, right: &str) -> bool {
    let left = left.trim();
    let right = right.trim();
    !left.is_empty() && left.eq_ignore_ascii_case(right)
}

/// Compare a video's known fields against guessed fields
///
/// Pure equality matcher: each agreeing, non-empty pair contributes its tag.
/// For an episode video the `title` field is compared against the series
/// name; for a movie against the movie title.
pub fn guess_matches(video: &Video, guess: &GuessedFields) -> HashSet<MatchTag> {
    let mut matches = HashSet::new();

    match video {
        Video::Episode(episode) => {
            if let Some(title) = &guess.title {
                if titles_equal(title, &episode.series) {
                    matches.insert(MatchTag::Series);
                }
            }
            if let (Some(guessed), Some(known)) = (&guess.episode_title, &episode.title) {
                if titles_equal(guessed, known) {
                    matches.insert(MatchTag::EpisodeTitle);
                }
            }
            if let (Some(guessed), Some(known)) = (guess.year, episode.year) {
                if guessed == known {
                    matches.insert(MatchTag::Year);
                }
            }
            if guess.season == Some(episode.season) {
                matches.insert(MatchTag::Season);
            }
            if guess.episode == Some(episode.episode) {
                matches.insert(MatchTag::Episode);
            }
        }
        Video::Movie(movie) => {
            if let Some(title) = &guess.title {
                if titles_equal(title, &movie.title) {
                    matches.insert(MatchTag::Title);
                }
            }
            if let (Some(guessed), Some(known)) = (guess.year, movie.year) {
                if guessed == known {
                    matches.insert(MatchTag::Year);
                }
            }
        }
    }

    matches
}
