//! `yt-dlp` engine binding.
//!
//! The playlist title is probed first with a metadata-only invocation, so the
//! target directory is fully known before the download starts. The download
//! itself runs with inherited stdio, keeping the engine's own progress output
//! visible to the user.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::fetch::{DirName, FetchError, PlaylistFetcher};
use crate::metadata::sanitize;

/// Per-item output template; the ordinal prefix keeps files sortable in
/// source playlist order.
const ITEM_TEMPLATE: &str = "%(playlist_index)s - %(title)s.%(ext)s";

pub struct YtDlpFetcher {
    bin: String,
    audio_quality: String,
}

/// Subset of the engine's `--dump-single-json` output we care about.
#[derive(Debug, Deserialize)]
struct ProbeInfo {
    title: Option<String>,
}

impl YtDlpFetcher {
    pub fn new(bin: impl Into<String>, audio_quality: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            audio_quality: audio_quality.into(),
        }
    }

    /// Asks the engine for playlist-level metadata without downloading
    /// anything.
    fn probe_title(&self, url: &str) -> Result<String, FetchError> {
        let output = Command::new(&self.bin)
            .args(["--flat-playlist", "--dump-single-json", url])
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| FetchError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FetchError::ProbeFailed {
                bin: self.bin.clone(),
                url: url.to_string(),
                status: output.status,
            });
        }

        let info: ProbeInfo = serde_json::from_slice(&output.stdout)?;
        info.title
            .filter(|title| !title.is_empty())
            .ok_or_else(|| FetchError::MissingTitle {
                url: url.to_string(),
            })
    }

    fn download(&self, url: &str, out_template: &str) -> Result<(), FetchError> {
        let status = Command::new(&self.bin)
            .args([
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--audio-quality",
                self.audio_quality.as_str(),
                "--output",
                out_template,
                url,
            ])
            .status()
            .map_err(|source| FetchError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FetchError::DownloadFailed {
                bin: self.bin.clone(),
                url: url.to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl PlaylistFetcher for YtDlpFetcher {
    fn fetch(&self, url: &str, root: &Path, dir_name: &DirName) -> Result<PathBuf, FetchError> {
        let dir = match dir_name {
            DirName::Fixed(name) => root.join(name),
            DirName::PlaylistTitle => root.join(sanitize(&self.probe_title(url)?)),
        };

        log::info!("downloading playlist {} into {}", url, dir.display());
        let template = format!("{}/{}", dir.display(), ITEM_TEMPLATE);
        self.download(url, &template)?;

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_json_exposes_the_playlist_title() {
        let json = r#"{"title": "Abbey Road", "entries": [{"title": "Come Together"}]}"#;
        let info: ProbeInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.title.as_deref(), Some("Abbey Road"));
    }

    #[test]
    fn probe_json_without_a_title_is_still_valid() {
        let info: ProbeInfo = serde_json::from_str(r#"{"id": "xyz"}"#).unwrap();

        assert_eq!(info.title, None);
    }
}
