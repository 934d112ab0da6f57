use clap::Parser;
use std::path::PathBuf;

use anyhow::Context;

use crate::config::Config;
use crate::fetch::ytdlp::YtDlpFetcher;
use crate::fetch::{DirName, PlaylistFetcher, resolve_output_root};
use crate::metadata::{self, AlbumMetadata};
use crate::tag::write::Id3Writer;
use crate::tag::{self, TagWriter};

#[derive(Parser)]
#[command(name = "albumrip")]
#[command(version = "0.1")]
#[command(about = "Downloads a playlist as a tagged mp3 album")]
pub struct Cli {
    /// URL of the playlist to download
    pub url: String,

    /// Directory to download the playlist into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text file with album metadata on line one and per-track titles below
    #[arg(short, long)]
    pub titles: Option<PathBuf>,

    /// Path to the config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let fetcher = YtDlpFetcher::new(cfg.engine.bin.clone(), cfg.engine.audio_quality.clone());
    run_pipeline(&cli, &cfg, &fetcher, &Id3Writer)
}

/// Picks the playlist directory name. Album metadata drives it when the user
/// actually filled it in, otherwise the source's own playlist title does.
fn choose_dir_name(album: Option<&AlbumMetadata>) -> DirName {
    match album {
        Some(meta) if meta.non_empty_fields() > 1 => DirName::Fixed(meta.dir_name()),
        _ => DirName::PlaylistTitle,
    }
}

/// Parse -> fetch -> tag, with no retry or rollback. The first error aborts
/// the run; a partially downloaded directory is left as-is.
fn run_pipeline(
    cli: &Cli,
    cfg: &Config,
    fetcher: &dyn PlaylistFetcher,
    writer: &dyn TagWriter,
) -> anyhow::Result<()> {
    let titles = metadata::parse_track_titles(cli.titles.as_deref())?;
    let album = metadata::parse_album_metadata(cli.titles.as_deref())?;

    let root = resolve_output_root(cli.output.as_deref(), cfg.output.root.as_deref())
        .context("failed to resolve output root")?;
    let dir_name = choose_dir_name(album.as_ref());

    let dir = fetcher.fetch(&cli.url, &root, &dir_name)?;
    log::info!("playlist downloaded to {}", dir.display());

    tag::apply_metadata(&dir, titles.as_deref(), album.as_ref(), writer)?;

    println!("Tagged album at {}", dir.display());
    Ok(())
}
