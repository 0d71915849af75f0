//! Playlist rendering and output.
//!
//! Tracks are rendered into [`PlaylistEntry`] values (one per file) and a
//! [`PlaylistWriter`] flushes them to an M3U or XSPF file, either replacing
//! it or appending to what is already there.

mod entry;
mod error;
mod m3u;
mod xml;
mod xspf;

use std::path::Path;

use crate::config::{PlaylistFormat, PlaylistSettings};

pub use entry::PlaylistEntry;
pub use error::PlaylistError;
pub use xspf::TailScan;

#[derive(Debug, Clone)]
pub struct PlaylistWriter {
    pub format: PlaylistFormat,
    pub append: bool,
    pub tail_scan: TailScan,
}

impl PlaylistWriter {
    pub fn from_settings(settings: &PlaylistSettings, format: PlaylistFormat, append: bool) -> Self {
        Self {
            format,
            append,
            tail_scan: TailScan {
                max_bytes: settings.tail_scan_bytes,
                chunk: settings.tail_scan_chunk,
            },
        }
    }

    /// Write `entries` to `path` in order.
    ///
    /// Entries rendered for the other format are skipped with a warning.
    pub fn write(&self, path: &Path, entries: &[PlaylistEntry]) -> Result<(), PlaylistError> {
        let mismatched = entries.iter().filter(|e| e.format() != self.format).count();
        if mismatched > 0 {
            log::warn!(
                "Skipping {} entries rendered for a different playlist format",
                mismatched
            );
        }
        let entries = entries.iter().filter(|e| e.format() == self.format);

        match self.format {
            PlaylistFormat::M3u => m3u::write(path, entries, self.append),
            PlaylistFormat::Xspf => xspf::write(path, entries, self.append, self.tail_scan),
        }
    }
}
