use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// Command-line flags are applied on top of the loaded settings by the runtime.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playlist: PlaylistSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions treated as playlist candidates (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "ogg".into(),
                "mp2".into(),
                "wav".into(),
                "wma".into(),
            ],
            follow_links: false,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Output format used when neither `-m` nor `-x` is given.
    pub format: PlaylistFormat,
    /// Upper bound on how many trailing bytes of an XSPF file are searched
    /// for the closing `</trackList>` tag when appending.
    pub tail_scan_bytes: u64,
    /// Size of each backward read during that search.
    pub tail_scan_chunk: u64,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            format: PlaylistFormat::M3u,
            tail_scan_bytes: 64 * 1024,
            tail_scan_chunk: 512,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaylistFormat {
    /// Line based `#EXTM3U` list.
    #[serde(alias = "m3u8", alias = "simple", alias = "simple-list")]
    M3u,
    /// XML Shareable Playlist Format.
    #[serde(alias = "xml", alias = "xml-tracklist")]
    Xspf,
}
