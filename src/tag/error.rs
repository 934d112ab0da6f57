use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("title list has {titles} entries but the directory contains {files} audio files")]
    TitleCountMismatch { titles: usize, files: usize },

    #[error("invalid audio container {path}: {source}")]
    Container { path: String, source: id3::Error },

    #[error("filesystem error: {0}")]
    Fs(#[from] std::io::Error),
}
