//! ID3-tagged MPEG audio (`.mp3`, `.mp2`).

use std::fs::File;
use std::path::Path;

use id3::{ErrorKind, Tag, TagLike};
use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::mpeg::MpegFile;

use crate::library::{TitleField, TrackInfo, pad_track_number};

use super::error::TagError;

/// Frames tried in order for the year; the first usable one wins.
const YEAR_FRAMES: [&str; 3] = ["TDRC", "TYER", "TDAT"];

pub fn read(path: &Path) -> Result<TrackInfo, TagError> {
    let mut file = File::open(path)?;
    let mpeg = MpegFile::read_from(&mut file, ParseOptions::new())?;

    let mut info = TrackInfo::new(path);
    // Whole seconds only.
    info.length = mpeg.properties().duration().as_secs() as f64;

    // ID3v2 first, then an ID3v1 trailer.
    match id3::v1v2::read_from_path(path) {
        Ok(tag) => apply_frames(&mut info, &tag),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(info)
}

pub(super) fn apply_frames(info: &mut TrackInfo, tag: &Tag) {
    info.set(TitleField::Artist, text_frame(tag, "TPE1"));
    info.set(TitleField::Year, year(tag).as_deref());
    info.set(TitleField::Album, text_frame(tag, "TALB"));
    info.set(
        TitleField::TrackNumber,
        text_frame(tag, "TRCK").map(pad_track_number).as_deref(),
    );
    info.set(TitleField::Title, text_frame(tag, "TIT2"));
}

/// First value of a text frame, trimmed; blank frames count as missing.
fn text_frame<'a>(tag: &'a Tag, id: &str) -> Option<&'a str> {
    tag.get(id)
        .and_then(|frame| frame.content().text())
        .and_then(|text| text.split('\0').next())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn year(tag: &Tag) -> Option<String> {
    YEAR_FRAMES.iter().find_map(|&id| {
        let value = text_frame(tag, id)?;
        let lead = match id {
            "TYER" => value,
            _ => value.split('-').next().unwrap_or(value),
        };
        lead.trim()
            .parse::<i64>()
            .ok()
            .filter(|year| *year != 0)
            .map(|year| year.to_string())
    })
}
