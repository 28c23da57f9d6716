/*!
 * Generic subtitle base behavior shared by providers
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of video a candidate subtitle was cut for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieKind {
    /// Feature film
    Movie,
    /// TV series episode
    Episode,
}

impl fmt::Display for MovieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Episode => write!(f, "episode"),
        }
    }
}

impl FromStr for MovieKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "episode" => Ok(Self::Episode),
            _ => Err(format!("invalid movie kind: {}", s)),
        }
    }
}

/// Normalize line endings of downloaded subtitle text to LF
pub fn fix_line_ending(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
