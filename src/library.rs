//! Music library helpers: candidate file discovery, the per-track attribute
//! set and playlist title assembly.

mod model;
mod scan;
mod title;

pub use model::{TitleField, TrackInfo};
pub use scan::{is_audio_file, scan};
pub use title::{M3U_TITLE_ORDER, XSPF_TITLE_ORDER, assemble_title, pad_track_number};

#[cfg(test)]
mod tests;
