/*!
 * Tests for the generic field-equality matcher
 */

use std::collections::HashSet;

use subseeker::matches::{GuessedFields, MatchTag, guess_matches};

use crate::common::{episode_video, movie_video};

/// All agreeing fields of an episode contribute their tags
#[test]
fn test_guess_matches_withAgreeingEpisodeFields_shouldCollectAllTags() {
    let guess = GuessedFields {
        title: Some("Show".to_string()),
        episode_title: Some("Episode Title".to_string()),
        year: Some(2020),
        season: Some(2),
        episode: Some(5),
    };

    let matches = guess_matches(&episode_video(), &guess);
    let expected: HashSet<MatchTag> = [
        MatchTag::Series,
        MatchTag::EpisodeTitle,
        MatchTag::Year,
        MatchTag::Season,
        MatchTag::Episode,
    ]
    .into_iter()
    .collect();
    assert_eq!(matches, expected);
}

/// Movie fields map to the movie vocabulary
#[test]
fn test_guess_matches_withAgreeingMovieFields_shouldCollectTitleAndYear() {
    let guess = GuessedFields {
        title: Some("Correct Movie".to_string()),
        year: Some(1999),
        ..GuessedFields::default()
    };

    let matches = guess_matches(&movie_video(), &guess);
    let expected: HashSet<MatchTag> = [MatchTag::Title, MatchTag::Year].into_iter().collect();
    assert_eq!(matches, expected);
}

/// Title comparison ignores case and surrounding whitespace
#[test]
fn test_guess_matches_withDifferentTitleCase_shouldStillMatch() {
    let guess = GuessedFields {
        title: Some("  CORRECT movie ".to_string()),
        ..GuessedFields::default()
    };

    let matches = guess_matches(&movie_video(), &guess);
    assert!(matches.contains(&MatchTag::Title));
}

/// Absent and empty fields never contribute tags
#[test]
fn test_guess_matches_withEmptyFields_shouldMatchNothing() {
    let matches = guess_matches(&episode_video(), &GuessedFields::default());
    assert!(matches.is_empty());

    let empty_title = GuessedFields {
        title: Some("   ".to_string()),
        ..GuessedFields::default()
    };
    assert!(guess_matches(&movie_video(), &empty_title).is_empty());
}

/// Disagreeing values contribute nothing, agreement is per-field
#[test]
fn test_guess_matches_withPartialAgreement_shouldCollectOnlyAgreeingTags() {
    let guess = GuessedFields {
        title: Some("Other Show".to_string()),
        episode_title: None,
        year: Some(2020),
        season: Some(2),
        episode: Some(9),
    };

    let matches = guess_matches(&episode_video(), &guess);
    let expected: HashSet<MatchTag> = [MatchTag::Year, MatchTag::Season].into_iter().collect();
    assert_eq!(matches, expected);
}

/// Season and episode numbers never match against a movie video
#[test]
fn test_guess_matches_withEpisodeFieldsAgainstMovie_shouldIgnoreThem() {
    let guess = GuessedFields {
        season: Some(2),
        episode: Some(5),
        episode_title: Some("Episode Title".to_string()),
        ..GuessedFields::default()
    };

    assert!(guess_matches(&movie_video(), &guess).is_empty());
}
