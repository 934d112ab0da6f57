//! ID3v2 tag writer for the downloaded mp3s.

use std::path::Path;

use id3::{Tag, TagLike, Version};

use crate::tag::{TagError, TagWriter, TrackTags};

pub struct Id3Writer;

impl Id3Writer {
    fn load_tag(file: &Path) -> Result<Tag, TagError> {
        match Tag::read_from_path(file) {
            Ok(tag) => Ok(tag),
            // Freshly transcoded files may carry no tag at all.
            Err(id3::Error {
                kind: id3::ErrorKind::NoTag,
                ..
            }) => Ok(Tag::new()),
            Err(source) => Err(TagError::Container {
                path: file.display().to_string(),
                source,
            }),
        }
    }
}

impl TagWriter for Id3Writer {
    fn write(&self, file: &Path, tags: &TrackTags) -> Result<(), TagError> {
        let mut tag = Self::load_tag(file)?;

        tag.set_title(tags.title.as_str());
        tag.set_track(tags.track_number);

        if let Some(album) = &tags.album {
            tag.set_album(album.album.as_str());
            tag.set_album_artist(album.artist.as_str());
            tag.set_artist(album.artist.as_str());
            tag.set_genre(album.genre.as_str());
            // Keep the date as text; years in the metadata file are free-form.
            tag.set_text("TDRC", album.year.as_str());
        }

        tag.write_to_path(file, Version::Id3v24)
            .map_err(|source| TagError::Container {
                path: file.display().to_string(),
                source,
            })
    }
}
