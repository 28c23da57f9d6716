use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info, warn};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::SubtitleProvider;
use crate::providers::opensubdb::{OpenSubDbProvider, OpenSubDbSubtitle, PROVIDER_NAME};
use crate::video::Video;

/// Application controller: the orchestrator driving the provider
///
/// Owns the provider session for the duration of a run. Ranking among
/// candidates is out of the provider's scope, so the controller orders by
/// plain match count for display and picks the top candidate for download.
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Process a video file or a directory of videos
    pub async fn run(&self, input_path: PathBuf, download: bool) -> Result<()> {
        let videos = if input_path.is_file() {
            vec![input_path]
        } else if input_path.is_dir() {
            FileManager::find_videos(&input_path)?
        } else {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        };

        if videos.is_empty() {
            warn!("No video files found under the input path");
            return Ok(());
        }

        let mut provider = OpenSubDbProvider::new(&self.config.provider)?;
        provider.initialize().await?;

        let mut result = Ok(());
        for video_path in &videos {
            if let Err(e) = self.process_video(&provider, video_path, download).await {
                result = Err(e);
                break;
            }
        }

        // logout is best-effort, a failure does not invalidate prior work
        if let Err(e) = provider.terminate().await {
            warn!("Logout failed: {}", e);
        }

        result
    }

    async fn process_video<P>(&self, provider: &P, video_path: &Path, download: bool) -> Result<()>
    where
        P: SubtitleProvider<Subtitle = OpenSubDbSubtitle>,
    {
        info!("Processing video: {:?}", video_path);
        let video = Video::from_path(video_path, PROVIDER_NAME)?;

        let subtitles = provider
            .list_subtitles(&video, &self.config.languages)
            .await?;

        if subtitles.is_empty() {
            info!("No subtitles found for {:?}", video_path);
            return Ok(());
        }

        let mut scored = Vec::with_capacity(subtitles.len());
        for subtitle in subtitles {
            match subtitle.get_matches(&video) {
                Ok(matches) => scored.push((subtitle, matches)),
                Err(e) => {
                    warn!("Skipping subtitle {}: {}", subtitle.id(), e);
                }
            }
        }
        scored.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));

        for (subtitle, matches) in &scored {
            let mut tags = matches.iter().map(|tag| tag.to_string()).collect::<Vec<_>>();
            tags.sort();
            info!(
                "  [{}] {} ({}) matches: {}",
                subtitle.id(),
                subtitle.info(),
                subtitle.language(),
                if tags.is_empty() { "-".to_string() } else { tags.join(", ") }
            );
        }

        if download {
            if let Some((subtitle, _)) = scored.first() {
                let mut subtitle = subtitle.clone();
                provider.download_subtitle(&mut subtitle).await?;

                let output_path =
                    FileManager::subtitle_output_path(video_path, subtitle.language());
                let content = subtitle
                    .content()
                    .ok_or_else(|| anyhow!("Download returned no content"))?;
                FileManager::write_to_file(&output_path, content)?;
                info!("Saved subtitle to {:?}", output_path);
            }
        } else {
            debug!("Download not requested, listing only");
        }

        Ok(())
    }
}
