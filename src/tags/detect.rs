use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// The tag system a file is read with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Container {
    /// MPEG audio carrying ID3 frames.
    Mpeg,
    /// Ogg Vorbis carrying Vorbis comments.
    Ogg,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Mpeg => write!(f, "MP3"),
            Container::Ogg => write!(f, "OGG"),
        }
    }
}

/// Work out which reader handles `path`.
///
/// The first three bytes win over the extension, so a mislabelled file is
/// still read with the right tag system. `Ok(None)` means "not ours".
pub fn detect(path: &Path) -> io::Result<Option<Container>> {
    let mut head = Vec::with_capacity(3);
    File::open(path)?.take(3).read_to_end(&mut head)?;

    Ok(container_from_header(&head).or_else(|| container_from_extension(path)))
}

pub fn container_from_header(head: &[u8]) -> Option<Container> {
    if head.eq_ignore_ascii_case(b"id3") {
        Some(Container::Mpeg)
    } else if head.eq_ignore_ascii_case(b"ogg") {
        Some(Container::Ogg)
    } else {
        None
    }
}

pub fn container_from_extension(path: &Path) -> Option<Container> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp3" | "mp2" => Some(Container::Mpeg),
        "ogg" => Some(Container::Ogg),
        _ => None,
    }
}
