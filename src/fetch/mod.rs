//! Delegation to the external download/transcode engine.

use std::path::{Path, PathBuf};

pub mod error;
pub mod ytdlp;

pub use error::FetchError;

/// How the playlist directory under the output root gets its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirName {
    /// Known up front, derived from user-supplied album metadata.
    Fixed(String),
    /// Use the title the source reports for the playlist, which the engine
    /// only learns once it has talked to the source.
    PlaylistTitle,
}

/// External fetch-and-transcode capability.
///
/// Implementations download every item of the playlist at `url` into a
/// directory under `root`, as mp3 files whose names carry an ordinal prefix
/// so they sort in source playlist order, and return the resolved directory.
pub trait PlaylistFetcher {
    fn fetch(&self, url: &str, root: &Path, dir_name: &DirName) -> Result<PathBuf, FetchError>;
}

/// Resolves the output root to an absolute path.
///
/// Precedence: explicit `--output` flag, then the configured default root,
/// then the current working directory.
pub fn resolve_output_root(
    flag: Option<&Path>,
    configured: Option<&Path>,
) -> std::io::Result<PathBuf> {
    match flag.or(configured) {
        Some(root) => std::path::absolute(root),
        None => std::env::current_dir(),
    }
}
