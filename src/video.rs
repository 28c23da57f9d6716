/*!
 * Local video model
 *
 * A video is either a movie or a TV episode, with kind-specific identifying
 * fields already extracted by the file-analysis stage. Providers compare
 * candidate subtitles against these fields.
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;

use crate::file_utils::FileManager;
use crate::release_guess;

/// A movie known to the local library
#[derive(Debug, Clone, Default)]
pub struct Movie {
    /// Movie title
    pub title: String,
    /// Release year, when known
    pub year: Option<i32>,
    /// IMDB identifier in `tt` form, when known
    pub imdb_id: Option<String>,
    /// Path to the video file
    pub path: PathBuf,
    /// File size in bytes
    pub size: Option<u64>,
    /// Content hashes keyed by provider name
    pub hashes: HashMap<String, String>,
}

/// A TV episode known to the local library
#[derive(Debug, Clone, Default)]
pub struct Episode {
    /// Series name
    pub series: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub episode: u32,
    /// Episode title, when known
    pub title: Option<String>,
    /// Series or episode year, when known
    pub year: Option<i32>,
    /// IMDB identifier in `tt` form, when known
    pub imdb_id: Option<String>,
    /// Path to the video file
    pub path: PathBuf,
    /// File size in bytes
    pub size: Option<u64>,
    /// Content hashes keyed by provider name
    pub hashes: HashMap<String, String>,
}

/// Tagged video variant dispatched by pattern matching in the scoring code
#[derive(Debug, Clone)]
pub enum Video {
    /// Feature film
    Movie(Movie),
    /// TV series episode
    Episode(Episode),
}

impl Video {
    /// Path to the underlying video file
    pub fn path(&self) -> &Path {
        match self {
            Self::Movie(movie) => &movie.path,
            Self::Episode(episode) => &episode.path,
        }
    }

    /// File size in bytes, when known
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::Movie(movie) => movie.size,
            Self::Episode(episode) => episode.size,
        }
    }

    /// IMDB identifier, when known
    pub fn imdb_id(&self) -> Option<&str> {
        match self {
            Self::Movie(movie) => movie.imdb_id.as_deref(),
            Self::Episode(episode) => episode.imdb_id.as_deref(),
        }
    }

    /// All known content hashes, keyed by provider name
    pub fn hashes(&self) -> &HashMap<String, String> {
        match self {
            Self::Movie(movie) => &movie.hashes,
            Self::Episode(episode) => &episode.hashes,
        }
    }

    /// Content hash computed for the given provider, when present
    pub fn provider_hash(&self, provider: &str) -> Option<&str> {
        self.hashes().get(provider).map(String::as_str)
    }

    /// Base filename of the video, used as the provider `tag` criterion
    pub fn file_name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Build a video from a local file
    ///
    /// The filename guesser decides the kind: season and episode numbers in
    /// the name make it an episode, anything else a movie. The provider
    /// content hash is computed when the file is large enough.
    pub fn from_path<P: AsRef<Path>>(path: P, provider_name: &str) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("Video file does not exist: {:?}", path));
        }

        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let guess = release_guess::guess(&file_stem, None);

        let size = std::fs::metadata(path).ok().map(|meta| meta.len());
        let mut hashes = HashMap::new();
        match FileManager::compute_provider_hash(path) {
            Ok(hash) => {
                hashes.insert(provider_name.to_string(), hash);
            }
            Err(e) => debug!("No provider hash for {:?}: {}", path, e),
        }

        let video = match (guess.season, guess.episode) {
            (Some(season), Some(episode)) => Self::Episode(Episode {
                series: guess.title.unwrap_or_default(),
                season,
                episode,
                title: guess.episode_title,
                year: guess.year,
                imdb_id: None,
                path: path.to_path_buf(),
                size,
                hashes,
            }),
            _ => Self::Movie(Movie {
                title: guess.title.unwrap_or(file_stem),
                year: guess.year,
                imdb_id: None,
                path: path.to_path_buf(),
                size,
                hashes,
            }),
        };

        debug!("Built video from path {:?}: {:?}", path, video);
        Ok(video)
    }
}
