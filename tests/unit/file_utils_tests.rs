/*!
 * Tests for file discovery and content hashing
 */

use std::path::PathBuf;

use subseeker::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file};

/// Video files are recognized by extension
#[test]
fn test_is_video_file_withVariousExtensions_shouldDetectVideos() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let mkv = create_test_file(&dir, "movie.mkv", b"x").unwrap();
    let mp4 = create_test_file(&dir, "movie.MP4", b"x").unwrap();
    let srt = create_test_file(&dir, "movie.srt", b"x").unwrap();
    let none = create_test_file(&dir, "movie", b"x").unwrap();

    assert!(FileManager::is_video_file(&mkv));
    assert!(FileManager::is_video_file(&mp4));
    assert!(!FileManager::is_video_file(&srt));
    assert!(!FileManager::is_video_file(&none));
    assert!(!FileManager::is_video_file(temp_dir.path()));
}

/// Directory scans find nested videos in sorted order
#[test]
fn test_find_videos_withNestedDirectories_shouldFindAllSorted() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    std::fs::create_dir(dir.join("season1")).unwrap();

    create_test_file(&dir, "b.mkv", b"x").unwrap();
    create_test_file(&dir.join("season1"), "a.mp4", b"x").unwrap();
    create_test_file(&dir, "notes.txt", b"x").unwrap();

    let videos = FileManager::find_videos(&dir).unwrap();
    assert_eq!(videos.len(), 2);
    assert!(videos[0].ends_with("b.mkv"));
    assert!(videos[1].ends_with("season1/a.mp4"));
}

/// The provider hash of a two-chunk zero file is just its size
#[test]
fn test_compute_provider_hash_withZeroFile_shouldEqualSize() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let zeros = vec![0u8; 131072];
    let path = create_test_file(&dir, "zeros.mkv", &zeros).unwrap();

    let hash = FileManager::compute_provider_hash(&path).unwrap();
    // 131072 == 0x20000; the chunk sums are zero
    assert_eq!(hash, "0000000000020000");
}

/// The hash changes with the content of the edge chunks
#[test]
fn test_compute_provider_hash_withDifferentContent_shouldDiffer() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let zeros = create_test_file(&dir, "zeros.mkv", &vec![0u8; 131072]).unwrap();
    let ones = create_test_file(&dir, "ones.mkv", &vec![1u8; 131072]).unwrap();

    let hash_zeros = FileManager::compute_provider_hash(&zeros).unwrap();
    let hash_ones = FileManager::compute_provider_hash(&ones).unwrap();
    assert_ne!(hash_zeros, hash_ones);
    assert_eq!(hash_zeros.len(), 16);
    assert_eq!(hash_ones.len(), 16);
}

/// Files smaller than two chunks cannot be hashed
#[test]
fn test_compute_provider_hash_withSmallFile_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let path = create_test_file(&dir, "tiny.mkv", &vec![0u8; 1024]).unwrap();
    assert!(FileManager::compute_provider_hash(&path).is_err());
}

/// Subtitle output paths sit next to the video with a language suffix
#[test]
fn test_subtitle_output_path_shouldUseStemAndLanguage() {
    let path = FileManager::subtitle_output_path("/videos/Show.S02E05.mkv", "en");
    assert_eq!(path, PathBuf::from("/videos/Show.S02E05.en.srt"));

    let bare = FileManager::subtitle_output_path("movie.mkv", "fr");
    assert_eq!(bare, PathBuf::from("movie.fr.srt"));
}
