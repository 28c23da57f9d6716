/*!
 * Language utilities for the remote subtitle service
 *
 * The remote service speaks three-letter codes in their bibliographic
 * (ISO 639-2/B) form where that differs from the terminological form;
 * the local language model uses ISO 639-1 two-letter codes. These helpers
 * convert between the two through the isolang registry.
 */

use isolang::Language;

use crate::errors::LanguageError;

/// Three-letter codes the remote service accepts in search requests.
pub const SUPPORTED_REMOTE_CODES: &[&str] = &[
    "alb", "ara", "arm", "baq", "bul", "chi", "cze", "dan", "dut", "eng",
    "est", "fin", "fre", "geo", "ger", "glg", "gre", "heb", "hin", "hrv",
    "hun", "ice", "ind", "ita", "jpn", "kor", "lav", "lit", "mac", "may",
    "nor", "per", "pol", "por", "rum", "rus", "slo", "slv", "spa", "srp",
    "swe", "tha", "tur", "ukr", "vie",
];

// ISO 639-2/B codes that differ from their 639-2/T equivalent
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("alb", "sqi"), // Albanian
    ("arm", "hye"), // Armenian
    ("baq", "eus"), // Basque
    ("bur", "mya"), // Burmese
    ("chi", "zho"), // Chinese
    ("cze", "ces"), // Czech
    ("dut", "nld"), // Dutch
    ("fre", "fra"), // French
    ("geo", "kat"), // Georgian
    ("ger", "deu"), // German
    ("gre", "ell"), // Greek
    ("ice", "isl"), // Icelandic
    ("mac", "mkd"), // Macedonian
    ("may", "msa"), // Malay
    ("per", "fas"), // Persian
    ("rum", "ron"), // Romanian
    ("slo", "slk"), // Slovak
    ("wel", "cym"), // Welsh
];

/// Resolve a bibliographic code to its terminological form, pass-through otherwise
fn bibliographic_to_terminological(code: &str) -> &str {
    BIBLIOGRAPHIC_CODES
        .iter()
        .find(|(bib, _)| *bib == code)
        .map_or(code, |(_, term)| *term)
}

/// Resolve a terminological code to the bibliographic form the service expects
fn terminological_to_bibliographic(code: &str) -> &str {
    BIBLIOGRAPHIC_CODES
        .iter()
        .find(|(_, term)| *term == code)
        .map_or(code, |(bib, _)| *bib)
}

/// Convert a three-letter remote code to its ISO 639-1 two-letter equivalent
///
/// Fails with a lookup error when the code is not in the registry, or when
/// the language has no two-letter code at all.
pub fn remote_code_to_part1(code: &str) -> Result<String, LanguageError> {
    let normalized = code.trim().to_lowercase();
    let terminological = bibliographic_to_terminological(&normalized);

    let language = Language::from_639_3(terminological)
        .ok_or_else(|| LanguageError::UnknownCode(code.to_string()))?;

    language
        .to_639_1()
        .map(|part1| part1.to_string())
        .ok_or_else(|| LanguageError::NoTwoLetterCode(code.to_string()))
}

/// Convert an ISO 639-1 two-letter code to the three-letter code the remote service expects
pub fn part1_to_remote_code(code: &str) -> Result<String, LanguageError> {
    let normalized = code.trim().to_lowercase();

    let language = Language::from_639_1(&normalized)
        .ok_or_else(|| LanguageError::UnknownCode(code.to_string()))?;

    Ok(terminological_to_bibliographic(language.to_639_3()).to_string())
}

/// Convert a set of wanted two-letter codes into the remote vocabulary,
/// deduplicated and sorted for deterministic request shaping
pub fn convert_wanted_languages(codes: &[String]) -> Result<Vec<String>, LanguageError> {
    let mut remote = codes
        .iter()
        .map(|code| part1_to_remote_code(code))
        .collect::<Result<Vec<_>, _>>()?;

    remote.sort();
    remote.dedup();

    Ok(remote)
}

/// The set of two-letter codes the provider advertises as supported,
/// derived from the remote service vocabulary
pub fn supported_languages() -> Vec<String> {
    let mut languages = SUPPORTED_REMOTE_CODES
        .iter()
        .filter_map(|code| remote_code_to_part1(code).ok())
        .collect::<Vec<_>>();

    languages.sort();
    languages.dedup();

    languages
}

/// Get the English language name for a remote three-letter code
pub fn remote_code_name(code: &str) -> Result<String, LanguageError> {
    let normalized = code.trim().to_lowercase();
    let terminological = bibliographic_to_terminological(&normalized);

    let language = Language::from_639_3(terminological)
        .ok_or_else(|| LanguageError::UnknownCode(code.to_string()))?;

    Ok(language.to_name().to_string())
}
