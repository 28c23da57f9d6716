/*!
 * Tests for the heuristic release-name guesser
 */

use subseeker::release_guess::guess;
use subseeker::subtitle::MovieKind;

/// Standard SxxEyy episode release names decompose fully
#[test]
fn test_guess_withEpisodeReleaseName_shouldExtractAllFields() {
    let fields = guess("Show.Name.S02E05.Episode.Title.720p.HDTV.x264", None);

    assert_eq!(fields.title.as_deref(), Some("Show Name"));
    assert_eq!(fields.season, Some(2));
    assert_eq!(fields.episode, Some(5));
    assert_eq!(fields.episode_title.as_deref(), Some("Episode Title"));
    assert_eq!(fields.year, None);
}

/// The NxNN marker form is understood as well
#[test]
fn test_guess_withCrossNotation_shouldExtractSeasonEpisode() {
    let fields = guess("Show Name 3x07 Something", None);

    assert_eq!(fields.title.as_deref(), Some("Show Name"));
    assert_eq!(fields.season, Some(3));
    assert_eq!(fields.episode, Some(7));
}

/// Movie release names yield a title and year
#[test]
fn test_guess_withMovieReleaseName_shouldExtractTitleAndYear() {
    let fields = guess("Correct.Movie.1999.1080p.BluRay.x264", None);

    assert_eq!(fields.title.as_deref(), Some("Correct Movie"));
    assert_eq!(fields.year, Some(1999));
    assert_eq!(fields.season, None);
    assert_eq!(fields.episode, None);
}

/// A movie hint suppresses accidental season/episode markers
#[test]
fn test_guess_withMovieHint_shouldIgnoreEpisodeMarkers() {
    let fields = guess("Some.Movie.S01E01.2005.720p", Some(MovieKind::Movie));

    assert_eq!(fields.season, None);
    assert_eq!(fields.episode, None);
    assert_eq!(fields.year, Some(2005));
}

/// An episode hint keeps the markers
#[test]
fn test_guess_withEpisodeHint_shouldKeepEpisodeMarkers() {
    let fields = guess("Show.S02E05.2020.HDTV", Some(MovieKind::Episode));

    assert_eq!(fields.season, Some(2));
    assert_eq!(fields.episode, Some(5));
    assert_eq!(fields.year, Some(2020));
}

/// Underscore separators normalize like dots
#[test]
fn test_guess_withUnderscoreSeparators_shouldNormalize() {
    let fields = guess("Show_Name_S01E01_Pilot_HDTV", None);

    assert_eq!(fields.title.as_deref(), Some("Show Name"));
    assert_eq!(fields.episode_title.as_deref(), Some("Pilot"));
}

/// Unintelligible or empty text yields empty fields, never an error
#[test]
fn test_guess_withEmptyText_shouldYieldEmptyFields() {
    let fields = guess("", None);
    assert_eq!(fields.title, None);
    assert_eq!(fields.year, None);
    assert_eq!(fields.season, None);
    assert_eq!(fields.episode, None);
    assert_eq!(fields.episode_title, None);

    assert_eq!(guess("   ", None).title, None);
}

/// Technical tokens never leak into the title
#[test]
fn test_guess_withLeadingNoiseTokens_shouldCutTitleBeforeThem() {
    let fields = guess("Correct.Movie.720p.WEB.x265", None);
    assert_eq!(fields.title.as_deref(), Some("Correct Movie"));
}
