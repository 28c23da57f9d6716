/*!
 * Heuristic release-name and filename guesser
 *
 * Extracts structured hints (title, year, season, episode) from the free
 * text of a release name or subtitle filename. Used by the match scorer as
 * a fallback when a candidate carries no reliable structured metadata.
 * Guessing never errors; text it cannot interpret yields empty fields.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matches::GuessedFields;
use crate::subtitle::MovieKind;

// SxxEyy and NxNN season/episode markers
static SEASON_EPISODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bs(\d{1,2})[ ._-]?e(\d{1,3})\b|\b(\d{1,2})x(\d{2,3})\b").unwrap()
});

// Four-digit release years
static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

// Technical tokens that end the title or episode-title portion of a name
static NOISE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(480p|576p|720p|1080p|2160p|4k|bluray|blu-ray|brrip|bdrip|webrip|web-dl|webdl|web|dvdrip|hdtv|hdrip|x264|x265|h264|h265|hevc|xvid|aac|ac3|dts|10bit|proper|repack|extended|unrated|remastered|internal|limited)\b",
    )
    .unwrap()
});

/// Collapse separators and trim dangling punctuation from a name fragment
fn clean_fragment(fragment: &str) -> String {
    fragment
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '-' || c == ' ')
        .to_string()
}

/// Cut a fragment at the first technical token or year marker
fn cut_at_noise(fragment: &str) -> &str {
    let mut end = fragment.len();
    if let Some(noise) = NOISE_REGEX.find(fragment) {
        end = end.min(noise.start());
    }
    if let Some(year) = YEAR_REGEX.find(fragment) {
        end = end.min(year.start());
    }
    &fragment[..end]
}

/// Extract structured hints from a release name or filename
///
/// The kind hint biases interpretation: a movie hint ignores accidental
/// season/episode markers, an episode hint keeps them.
pub fn guess(text: &str, hint: Option<MovieKind>) -> GuessedFields {
    let mut fields = GuessedFields::default();
    if text.trim().is_empty() {
        return fields;
    }

    let normalized = text.replace(['.', '_'], " ");

    let season_episode = if hint == Some(MovieKind::Movie) {
        None
    } else {
        SEASON_EPISODE_REGEX.captures(&normalized)
    };

    if let Some(year_match) = YEAR_REGEX.find_iter(&normalized).last() {
        fields.year = year_match.as_str().parse().ok();
    }

    match season_episode {
        Some(captures) => {
            let season = captures.get(1).or_else(|| captures.get(3));
            let episode = captures.get(2).or_else(|| captures.get(4));
            fields.season = season.and_then(|m| m.as_str().parse().ok());
            fields.episode = episode.and_then(|m| m.as_str().parse().ok());

            let marker = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
            let title = clean_fragment(cut_at_noise(&normalized[..marker.start]));
            if !title.is_empty() {
                fields.title = Some(title);
            }
            let episode_title = clean_fragment(cut_at_noise(&normalized[marker.end..]));
            if !episode_title.is_empty() {
                fields.episode_title = Some(episode_title);
            }
        }
        None => {
            let title = clean_fragment(cut_at_noise(&normalized));
            if !title.is_empty() {
                fields.title = Some(title);
            }
        }
    }

    fields
}
