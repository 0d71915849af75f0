use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn track(
    artist: Option<&str>,
    album: Option<&str>,
    year: Option<&str>,
    number: Option<&str>,
    title: Option<&str>,
) -> TrackInfo {
    let mut t = TrackInfo::new("/music/Some Band/01 Song.mp3");
    t.set(TitleField::Artist, artist);
    t.set(TitleField::Album, album);
    t.set(TitleField::Year, year);
    t.set(TitleField::TrackNumber, number);
    t.set(TitleField::Title, title);
    t
}

#[test]
fn set_turns_blank_values_into_none() {
    let t = track(Some("  "), Some(""), None, Some(" 7 "), Some(" Song "));
    assert_eq!(t.artist, None);
    assert_eq!(t.album, None);
    assert_eq!(t.track_number.as_deref(), Some("7"));
    assert_eq!(t.title.as_deref(), Some("Song"));
}

#[test]
fn assemble_title_follows_each_format_order() {
    let t = track(Some("Band"), Some("Record"), Some("1999"), Some("4"), Some("Song"));
    assert_eq!(
        assemble_title(&t, &M3U_TITLE_ORDER),
        "Band - Record - 1999 - 04 - Song"
    );
    assert_eq!(
        assemble_title(&t, &XSPF_TITLE_ORDER),
        "Band - 1999 - Record - 04 - Song"
    );
}

#[test]
fn assemble_title_normalizes_and_drops_zero_year() {
    let t = track(Some("Café"), Some("Été"), Some("0"), Some("3"), Some("Déjà Vu"));
    assert_eq!(assemble_title(&t, &M3U_TITLE_ORDER), "Cafe - Ete - 03 - Deja Vu");
    assert_eq!(assemble_title(&t, &XSPF_TITLE_ORDER), "Cafe - Ete - 03 - Deja Vu");
}

#[test]
fn assemble_title_keeps_unparseable_year() {
    let t = track(None, None, Some("late 90s"), None, Some("Song"));
    assert_eq!(assemble_title(&t, &M3U_TITLE_ORDER), "late 90s - Song");
}

#[test]
fn assemble_title_falls_back_to_file_stem() {
    let t = TrackInfo::new("/music/Some Band/01 Song.mp3");
    assert_eq!(assemble_title(&t, &M3U_TITLE_ORDER), "01 Song");
    assert_eq!(assemble_title(&t, &XSPF_TITLE_ORDER), "01 Song");

    // Fields that normalize to nothing count as absent.
    let t = track(Some("東京"), None, Some("0"), None, None);
    assert_eq!(assemble_title(&t, &M3U_TITLE_ORDER), "01 Song");
}

#[test]
fn pad_track_number_only_pads_short_values() {
    assert_eq!(pad_track_number("3"), "03");
    assert_eq!(pad_track_number("12"), "12");
    assert_eq!(pad_track_number("123"), "123");
    assert_eq!(pad_track_number("3/12"), "3/12");
}

#[test]
fn is_audio_file_matches_candidate_extensions_case_insensitive() {
    let settings = LibrarySettings::default();
    assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.mp2"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.Ogg"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.WMA"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a.flac"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
}

#[test]
fn scan_recurses_filters_and_sorts_by_path() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("b-album");
    fs::create_dir_all(&sub).unwrap();

    fs::write(dir.path().join("c.ogg"), b"x").unwrap();
    fs::write(dir.path().join("a.MP3"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    fs::write(sub.join("01.mp3"), b"x").unwrap();
    fs::create_dir_all(dir.path().join("empty.mp3")).unwrap();

    let files = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(
        files,
        vec![
            dir.path().join("a.MP3"),
            sub.join("01.mp3"),
            dir.path().join("c.ogg"),
        ]
    );
}

#[test]
fn scan_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    let hidden_dir = dir.path().join(".cache");
    fs::create_dir_all(&hidden_dir).unwrap();
    fs::write(hidden_dir.join("inside.mp3"), b"x").unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"x").unwrap();

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    let files = scan(dir.path(), &settings);
    assert_eq!(files, vec![dir.path().join("visible.mp3")]);
}
