//! Parsing of the optional album metadata / track title text file.
//!
//! Format:
//! ```text
//! artist - album - year - genre
//! first track title
//! second track title
//! ```
//! The header line may carry any subset of the four fields; everything after
//! it is one track title per line, in playlist order.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read metadata file {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Replaces path separators so a tag value can be used as a file name.
pub fn sanitize(s: &str) -> String {
    s.replace('/', "_")
}

/// Album-level tags parsed from the header line of the metadata file.
///
/// Fields are trimmed and filesystem-sanitized on construction and never
/// change afterwards. Missing trailing fields stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlbumMetadata {
    pub artist: String,
    pub album: String,
    pub year: String,
    pub genre: String,
}

impl AlbumMetadata {
    /// Splits a `-`-delimited header line into the four fixed fields.
    /// Segments beyond the fourth are ignored.
    pub fn from_header_line(line: &str) -> Self {
        let mut segments = line.split('-').map(|s| sanitize(s.trim()));
        Self {
            artist: segments.next().unwrap_or_default(),
            album: segments.next().unwrap_or_default(),
            year: segments.next().unwrap_or_default(),
            genre: segments.next().unwrap_or_default(),
        }
    }

    pub fn non_empty_fields(&self) -> usize {
        [&self.artist, &self.album, &self.year, &self.genre]
            .iter()
            .filter(|field| !field.is_empty())
            .count()
    }

    /// Directory name for the downloaded album: `[year] album` when both are
    /// known, otherwise the bare (possibly empty) album name.
    pub fn dir_name(&self) -> String {
        if !self.year.is_empty() && !self.album.is_empty() {
            format!("[{}] {}", self.year, self.album)
        } else {
            self.album.clone()
        }
    }
}

/// Parses album metadata from the first line of the file at `path`.
/// No path means no metadata was supplied, which is fine.
pub fn parse_album_metadata(path: Option<&Path>) -> Result<Option<AlbumMetadata>, MetadataError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let contents = read(path)?;
    let header = contents.lines().next().unwrap_or("");
    Ok(Some(AlbumMetadata::from_header_line(header)))
}

/// Parses per-track titles: every line after the header, trimmed, in order.
/// A file with only a header yields an empty list, not `None`.
pub fn parse_track_titles(path: Option<&Path>) -> Result<Option<Vec<String>>, MetadataError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let contents = read(path)?;
    Ok(Some(
        contents
            .lines()
            .skip(1)
            .map(|line| line.trim().to_string())
            .collect(),
    ))
}

fn read(path: &Path) -> Result<String, MetadataError> {
    fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_with_all_four_fields_is_fully_populated() {
        let meta = AlbumMetadata::from_header_line("The Beatles - Abbey Road - 1969 - Rock");

        assert_eq!(meta.artist, "The Beatles");
        assert_eq!(meta.album, "Abbey Road");
        assert_eq!(meta.year, "1969");
        assert_eq!(meta.genre, "Rock");
    }

    #[test]
    fn missing_trailing_fields_are_empty() {
        let meta = AlbumMetadata::from_header_line("Artist - Album");

        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.album, "Album");
        assert_eq!(meta.year, "");
        assert_eq!(meta.genre, "");
    }

    #[test]
    fn slashes_are_replaced_in_every_field() {
        let meta = AlbumMetadata::from_header_line("AC/DC - Back in Black - 1980 - Rock/Metal");

        assert_eq!(meta.artist, "AC_DC");
        assert_eq!(meta.genre, "Rock_Metal");
    }

    #[test]
    fn extra_segments_are_ignored() {
        let meta = AlbumMetadata::from_header_line("a - b - c - d - e - f");

        assert_eq!(meta.genre, "d");
    }

    #[test]
    fn dir_name_combines_year_and_album() {
        let meta = AlbumMetadata::from_header_line("The Beatles - Abbey Road - 1969 - Rock");
        assert_eq!(meta.dir_name(), "[1969] Abbey Road");
    }

    #[test]
    fn dir_name_without_year_is_bare_album() {
        let meta = AlbumMetadata::from_header_line("Artist - Album");
        assert_eq!(meta.dir_name(), "Album");
    }

    #[test]
    fn dir_name_without_album_is_empty() {
        let meta = AlbumMetadata::from_header_line("Artist");
        assert_eq!(meta.dir_name(), "");
    }

    #[test]
    fn absent_path_yields_no_metadata() {
        assert_eq!(parse_album_metadata(None).unwrap(), None);
        assert_eq!(parse_track_titles(None).unwrap(), None);
    }

    #[test]
    fn track_titles_skip_the_header_line() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("album.txt");
        std::fs::write(&file, "Artist - Album - 1999 - Pop\nFirst Song\n  Second Song  \n").unwrap();

        let titles = parse_track_titles(Some(&file)).unwrap().unwrap();

        assert_eq!(titles, vec!["First Song".to_string(), "Second Song".to_string()]);
    }

    #[test]
    fn header_only_file_yields_empty_title_list() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("album.txt");
        std::fs::write(&file, "Artist - Album\n").unwrap();

        let titles = parse_track_titles(Some(&file)).unwrap().unwrap();

        assert!(titles.is_empty());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let missing = Path::new("/definitely/not/here.txt");

        assert!(parse_album_metadata(Some(missing)).is_err());
        assert!(parse_track_titles(Some(missing)).is_err());
    }
}
