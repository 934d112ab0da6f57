use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        source: std::io::Error,
    },

    #[error("{bin} exited with {status} while probing {url}")]
    ProbeFailed {
        bin: String,
        url: String,
        status: ExitStatus,
    },

    #[error("{bin} exited with {status} while downloading {url}")]
    DownloadFailed {
        bin: String,
        url: String,
        status: ExitStatus,
    },

    #[error("could not parse playlist metadata reported by the engine: {0}")]
    ProbeOutput(#[from] serde_json::Error),

    #[error("playlist at {url} reported no title")]
    MissingTitle { url: String },
}
