use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

// File discovery and content hashing for local videos

// The provider hash covers the first and last chunk of this size
const HASH_CHUNK_SIZE: u64 = 65536;

// Common video file extensions
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ogv", "ts", "mts",
    "m2ts",
];

/// File operations utility
pub struct FileManager;

impl FileManager {
    /// Check whether a path looks like a video file by extension
    pub fn is_video_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        if !path.is_file() {
            return false;
        }

        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                VIDEO_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Find all video files under a directory
    pub fn find_videos<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            if Self::is_video_file(entry.path()) {
                result.push(entry.path().to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    /// Build the output path for a downloaded subtitle: `<stem>.<lang>.srt`
    /// next to the video file
    pub fn subtitle_output_path<P: AsRef<Path>>(video_path: P, language: &str) -> PathBuf {
        let video_path = video_path.as_ref();
        let stem = video_path.file_stem().unwrap_or_default().to_string_lossy();
        let filename = format!("{}.{}.srt", stem, language);

        video_path
            .parent()
            .map(|parent| parent.join(&filename))
            .unwrap_or_else(|| PathBuf::from(filename))
    }

    /// Compute the service's 64-bit content hash of a video file
    ///
    /// File size plus the wrapping sum of little-endian u64 words of the
    /// first and last 64 KiB, rendered as 16 lowercase hex digits. Files
    /// smaller than two chunks cannot be hashed.
    pub fn compute_provider_hash<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let mut file =
            File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let size = file.metadata()?.len();

        if size < 2 * HASH_CHUNK_SIZE {
            return Err(anyhow!("File too small to hash: {} bytes", size));
        }

        let mut hash = size;
        hash = hash.wrapping_add(Self::sum_chunk(&mut file, 0)?);
        hash = hash.wrapping_add(Self::sum_chunk(&mut file, size - HASH_CHUNK_SIZE)?);

        Ok(format!("{:016x}", hash))
    }

    fn sum_chunk(file: &mut File, offset: u64) -> Result<u64> {
        file.seek(SeekFrom::Start(offset))?;

        let mut buffer = [0u8; 8];
        let mut sum = 0u64;
        for _ in 0..(HASH_CHUNK_SIZE / 8) {
            file.read_exact(&mut buffer)?;
            sum = sum.wrapping_add(u64::from_le_bytes(buffer));
        }

        Ok(sum)
    }
}
