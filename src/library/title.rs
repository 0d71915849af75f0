use crate::text::normalize;

use super::model::{TitleField, TrackInfo};

/// Separator placed between the parts of an assembled title.
pub const TITLE_SEPARATOR: &str = " - ";

/// Field order used by the M3U formatter.
pub const M3U_TITLE_ORDER: [TitleField; 5] = [
    TitleField::Artist,
    TitleField::Album,
    TitleField::Year,
    TitleField::TrackNumber,
    TitleField::Title,
];

/// Field order used by the XSPF formatter (year before album).
pub const XSPF_TITLE_ORDER: [TitleField; 5] = [
    TitleField::Artist,
    TitleField::Year,
    TitleField::Album,
    TitleField::TrackNumber,
    TitleField::Title,
];

/// Build a playlist title from the tag fields of `track` in the given order.
///
/// Every field is normalized to ASCII before use. A year of zero is dropped
/// and single-digit track numbers are padded to two digits. When nothing
/// survives, the file name without extension is used instead.
pub fn assemble_title(track: &TrackInfo, order: &[TitleField]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for &field in order {
        let Some(raw) = track.get(field) else {
            continue;
        };
        let value = normalize(raw).trim().to_string();
        if value.is_empty() {
            continue;
        }
        match field {
            TitleField::Year if is_zero_year(&value) => continue,
            TitleField::TrackNumber => parts.push(pad_track_number(&value)),
            _ => parts.push(value),
        }
    }

    if parts.is_empty() {
        track.file_stem()
    } else {
        parts.join(TITLE_SEPARATOR)
    }
}

/// A year that parses to zero means "unknown". Unparseable years are kept.
fn is_zero_year(value: &str) -> bool {
    matches!(value.parse::<i64>(), Ok(0))
}

pub fn pad_track_number(value: &str) -> String {
    format!("{value:0>2}")
}
