//! Tag reading.
//!
//! [`read_track`] sniffs the container of a file and hands it to the MPEG/ID3
//! or Ogg Vorbis reader. It never fails outright: a file that cannot be
//! parsed still yields a bare [`TrackInfo`] so it can appear in the playlist,
//! and the error rides along for the caller to log.

mod detect;
mod error;
mod mpeg;
mod vorbis;

use std::path::Path;

use crate::library::TrackInfo;

pub use detect::{Container, detect};
pub use error::TagError;

/// What reading one file produced.
#[derive(Debug)]
pub enum TagOutcome {
    /// Stream info and tags were read (the tags themselves may be empty).
    Read(TrackInfo),
    /// The file looked like audio we handle but could not be parsed.
    /// `track` only carries the path and a zero length.
    Unreadable { track: TrackInfo, error: TagError },
    /// Neither header nor extension matched a supported container.
    Unrecognized,
}

pub fn read_track(path: &Path) -> TagOutcome {
    let container = match detect(path) {
        Ok(Some(container)) => container,
        Ok(None) => return TagOutcome::Unrecognized,
        Err(e) => {
            return TagOutcome::Unreadable {
                track: TrackInfo::new(path),
                error: e.into(),
            };
        }
    };

    let result = match container {
        Container::Mpeg => mpeg::read(path),
        Container::Ogg => vorbis::read(path),
    };

    match result {
        Ok(track) => TagOutcome::Read(track),
        Err(error) => {
            log::debug!("{} reader failed on {}", container, path.display());
            TagOutcome::Unreadable {
                track: TrackInfo::new(path),
                error,
            }
        }
    }
}
