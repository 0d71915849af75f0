use crate::config::PlaylistFormat;
use crate::library::{M3U_TITLE_ORDER, TrackInfo, XSPF_TITLE_ORDER, assemble_title};

use super::xml::{escape, file_location};

/// One track, rendered for a specific playlist format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEntry {
    M3u {
        seconds: u64,
        title: String,
        path: String,
    },
    Xspf {
        location: String,
        title: String,
        duration_ms: u64,
    },
}

impl PlaylistEntry {
    pub fn new(track: &TrackInfo, format: PlaylistFormat) -> Self {
        // Truncate to whole seconds before any scaling.
        let seconds = track.length.max(0.0) as u64;

        match format {
            PlaylistFormat::M3u => PlaylistEntry::M3u {
                seconds,
                title: assemble_title(track, &M3U_TITLE_ORDER),
                path: track.file.to_string_lossy().into_owned(),
            },
            PlaylistFormat::Xspf => PlaylistEntry::Xspf {
                location: file_location(&track.file),
                title: assemble_title(track, &XSPF_TITLE_ORDER),
                duration_ms: seconds * 1000,
            },
        }
    }

    pub fn format(&self) -> PlaylistFormat {
        match self {
            PlaylistEntry::M3u { .. } => PlaylistFormat::M3u,
            PlaylistEntry::Xspf { .. } => PlaylistFormat::Xspf,
        }
    }

    /// The entry's lines, without a trailing newline.
    pub fn render(&self) -> String {
        match self {
            PlaylistEntry::M3u {
                seconds,
                title,
                path,
            } => format!("#EXTINF:{seconds},{title}\n{path}"),
            PlaylistEntry::Xspf {
                location,
                title,
                duration_ms,
            } => [
                "    <track>".to_string(),
                format!("      <location>{}</location>", escape(location)),
                format!("      <title>{}</title>", escape(title)),
                format!("      <duration>{duration_ms}</duration>"),
                "    </track>".to_string(),
            ]
            .join("\n"),
        }
    }
}
