use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional user config. Every field has a default so the tool runs fine
/// without a config file at all.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub engine: Engine,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Output {
    /// Default root to download playlists into when `--output` is not given.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct Engine {
    /// Name or path of the download/transcode binary.
    #[serde(default = "default_bin")]
    pub bin: String,
    /// Passed through to the engine's --audio-quality flag.
    #[serde(default = "default_quality")]
    pub audio_quality: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            audio_quality: default_quality(),
        }
    }
}

fn default_bin() -> String {
    "yt-dlp".to_string()
}

fn default_quality() -> String {
    "192K".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[output]
root = "/home/me/Music"

[engine]
bin = "yt-dlp"
audio_quality = "320K"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.output.root, Some(PathBuf::from("/home/me/Music")));
        assert_eq!(cfg.engine.bin, "yt-dlp");
        assert_eq!(cfg.engine.audio_quality, "320K");

        Ok(())
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("version = 1")?;

        assert_eq!(cfg.output.root, None);
        assert_eq!(cfg.engine.bin, "yt-dlp");
        assert_eq!(cfg.engine.audio_quality, "192K");

        Ok(())
    }

    #[test]
    fn test_default_config_matches_empty_file() {
        let cfg = Config::default();

        assert_eq!(cfg.output.root, None);
        assert_eq!(cfg.engine.bin, "yt-dlp");
        assert_eq!(cfg.engine.audio_quality, "192K");
    }
}
