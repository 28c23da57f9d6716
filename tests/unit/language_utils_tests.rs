/*!
 * Tests for language conversion utilities
 */

use subseeker::errors::LanguageError;
use subseeker::language_utils::{
    SUPPORTED_REMOTE_CODES, convert_wanted_languages, part1_to_remote_code, remote_code_name,
    remote_code_to_part1, supported_languages,
};

/// Remote three-letter codes convert to their two-letter equivalents
#[test]
fn test_remote_code_to_part1_withValidCodes_shouldConvert() {
    assert_eq!(remote_code_to_part1("eng").unwrap(), "en");
    assert_eq!(remote_code_to_part1("spa").unwrap(), "es");
    assert_eq!(remote_code_to_part1("jpn").unwrap(), "ja");

    // bibliographic forms
    assert_eq!(remote_code_to_part1("ger").unwrap(), "de");
    assert_eq!(remote_code_to_part1("fre").unwrap(), "fr");
    assert_eq!(remote_code_to_part1("dut").unwrap(), "nl");
    assert_eq!(remote_code_to_part1("chi").unwrap(), "zh");

    // case and whitespace normalization
    assert_eq!(remote_code_to_part1(" ENG ").unwrap(), "en");
}

/// Unknown codes fail with a lookup error instead of a silent default
#[test]
fn test_remote_code_to_part1_withUnknownCode_shouldFail() {
    assert!(matches!(
        remote_code_to_part1("xyz"),
        Err(LanguageError::UnknownCode(_))
    ));
    assert!(remote_code_to_part1("").is_err());
    assert!(remote_code_to_part1("123").is_err());
}

/// Valid codes without a two-letter equivalent fail with a distinct error
#[test]
fn test_remote_code_to_part1_withNoTwoLetterEquivalent_shouldFail() {
    // Filipino has a 639-3 code but no 639-1 code
    assert!(matches!(
        remote_code_to_part1("fil"),
        Err(LanguageError::NoTwoLetterCode(_))
    ));
}

/// Two-letter codes convert back into the bibliographic remote vocabulary
#[test]
fn test_part1_to_remote_code_withValidCodes_shouldConvert() {
    assert_eq!(part1_to_remote_code("en").unwrap(), "eng");
    assert_eq!(part1_to_remote_code("de").unwrap(), "ger");
    assert_eq!(part1_to_remote_code("fr").unwrap(), "fre");
    assert_eq!(part1_to_remote_code("cs").unwrap(), "cze");

    assert!(part1_to_remote_code("xx").is_err());
}

/// Round-trip through the registries preserves the semantic language
#[test]
fn test_language_conversion_roundTrip_shouldPreserveLanguage() {
    for code in SUPPORTED_REMOTE_CODES {
        let part1 = match remote_code_to_part1(code) {
            Ok(part1) => part1,
            // codes without a two-letter form cannot round-trip
            Err(LanguageError::NoTwoLetterCode(_)) => continue,
            Err(e) => panic!("unexpected error for {}: {}", code, e),
        };
        let back = part1_to_remote_code(&part1).unwrap();
        assert_eq!(&back, code, "round-trip changed {} into {}", code, back);
    }
}

/// Wanted languages are converted, deduplicated and sorted
#[test]
fn test_convert_wanted_languages_withDuplicates_shouldDedupAndSort() {
    let wanted = vec!["fr".to_string(), "en".to_string(), "en".to_string()];
    let remote = convert_wanted_languages(&wanted).unwrap();
    assert_eq!(remote, vec!["eng".to_string(), "fre".to_string()]);
}

/// An unknown wanted language propagates the lookup error
#[test]
fn test_convert_wanted_languages_withUnknownCode_shouldFail() {
    let wanted = vec!["en".to_string(), "xx".to_string()];
    assert!(convert_wanted_languages(&wanted).is_err());
}

/// The advertised language set is two-letter, non-empty and deduplicated
#[test]
fn test_supported_languages_shouldBeTwoLetterAndUnique() {
    let languages = supported_languages();
    assert!(!languages.is_empty());
    assert!(languages.contains(&"en".to_string()));
    assert!(languages.iter().all(|code| code.len() == 2));

    let mut deduped = languages.clone();
    deduped.dedup();
    assert_eq!(languages, deduped);
}

/// Language names resolve through the registry
#[test]
fn test_remote_code_name_withValidCodes_shouldReturnName() {
    assert_eq!(remote_code_name("eng").unwrap(), "English");
    assert_eq!(remote_code_name("fre").unwrap(), "French");
    assert!(remote_code_name("xyz").is_err());
}
