//! Tagging and renaming of a freshly downloaded playlist directory.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::metadata::{AlbumMetadata, sanitize};

pub mod error;
pub mod write;

pub use error::TagError;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "m4a", "ogg", "aac"];

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Tags to apply to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    /// 1-based position within the album.
    pub track_number: u32,
    pub album: Option<AlbumMetadata>,
}

/// Tag-writing capability, injected so tests don't need real audio files.
pub trait TagWriter {
    fn write(&self, file: &Path, tags: &TrackTags) -> Result<(), TagError>;
}

/// Lists the audio files of a playlist directory in playlist order.
///
/// Order comes from the ordinal prefix the engine embeds in each filename,
/// not from ambient directory listing order. Files without a parsable prefix
/// sort after prefixed ones, by name.
pub fn list_playlist_files(dir: &Path) -> Result<Vec<PathBuf>, TagError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|err| TagError::Fs(err.into()))?;
        if entry.file_type().is_file() && is_audio_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort_by_key(|path| playlist_order_key(path));
    Ok(files)
}

/// Extracts the leading playlist index from names like `3 - Title.mp3`.
fn ordinal_prefix(name: &str) -> Option<u32> {
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn playlist_order_key(path: &Path) -> (bool, u32, String) {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    match ordinal_prefix(&name) {
        Some(index) => (false, index, name),
        None => (true, 0, name),
    }
}

/// Tags every audio file in `dir` and, when titles were supplied, renames
/// each file to its sanitized title.
///
/// A supplied title list must match the file count exactly; on mismatch this
/// fails before touching any file, so a bad list never half-tags an album.
pub fn apply_metadata(
    dir: &Path,
    titles: Option<&[String]>,
    album: Option<&AlbumMetadata>,
    writer: &dyn TagWriter,
) -> Result<(), TagError> {
    let files = list_playlist_files(dir)?;

    if let Some(titles) = titles {
        if titles.len() != files.len() {
            return Err(TagError::TitleCountMismatch {
                titles: titles.len(),
                files: files.len(),
            });
        }
    }

    for (index, file) in files.iter().enumerate() {
        let title = match titles {
            Some(titles) => titles[index].clone(),
            // No title list: keep whatever name the engine produced.
            None => file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
        };

        let tags = TrackTags {
            title: title.clone(),
            track_number: index as u32 + 1,
            album: album.cloned(),
        };
        writer.write(file, &tags)?;
        log::debug!("tagged {} as track {}", file.display(), index + 1);

        if titles.is_some() {
            fs::rename(file, dir.join(format!("{}.mp3", sanitize(&title))))?;
        }
    }

    Ok(())
}
