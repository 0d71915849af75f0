//! Ogg Vorbis audio.

use std::fs::File;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::ogg::{VorbisComments, VorbisFile};

use crate::library::{TitleField, TrackInfo};

use super::error::TagError;

pub fn read(path: &Path) -> Result<TrackInfo, TagError> {
    let mut file = File::open(path)?;
    let vorbis = VorbisFile::read_from(&mut file, ParseOptions::new())?;

    let mut info = TrackInfo::new(path);
    info.length = vorbis.properties().duration().as_secs_f64();
    apply_comments(&mut info, vorbis.vorbis_comments());

    Ok(info)
}

/// Copy comments verbatim; padding and zero-year rules are left to rendering.
pub(super) fn apply_comments(info: &mut TrackInfo, comments: &VorbisComments) {
    info.set(TitleField::Artist, comments.get("ARTIST"));
    info.set(TitleField::Album, comments.get("ALBUM"));
    info.set(TitleField::Year, year(comments));
    info.set(TitleField::TrackNumber, comments.get("TRACKNUMBER"));
    info.set(TitleField::Title, comments.get("TITLE"));
}

/// `YEAR` if present, otherwise the leading component of `DATE`.
fn year(comments: &VorbisComments) -> Option<&str> {
    comments
        .get("YEAR")
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            comments
                .get("DATE")
                .and_then(|date| date.trim().split('-').next())
        })
}
