use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::entry::PlaylistEntry;
use super::error::PlaylistError;

pub const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<playlist version=\"1\" xmlns=\"http://xspf.org/ns/0/\">\n  <trackList>\n";
pub const FOOTER: &str = "  </trackList>\n</playlist>\n";

const CLOSING_TAG: &[u8] = b"</tracklist>";
const MAX_INDENT: u64 = 64;

/// Bounds for the backward search of `</trackList>` when appending.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TailScan {
    /// Never look further back than this many bytes from the end.
    pub max_bytes: u64,
    /// Bytes read per backward step.
    pub chunk: u64,
}

pub fn write<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = &'a PlaylistEntry>,
    append: bool,
    scan: TailScan,
) -> Result<(), PlaylistError> {
    let write_err = |source: io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let existing = append && path.is_file();
    let file = if existing {
        open_at_closing_tag(path, scan)?
    } else {
        File::create(path).map_err(|source| PlaylistError::Open {
            path: path.to_path_buf(),
            op: "writing",
            source,
        })?
    };

    let mut out = BufWriter::new(file);
    if !existing {
        out.write_all(HEADER.as_bytes()).map_err(write_err)?;
    }
    for entry in entries {
        writeln!(out, "{}", entry.render()).map_err(write_err)?;
    }
    out.write_all(FOOTER.as_bytes()).map_err(write_err)?;

    // Drop the old tail only once the new one is fully on disk.
    let mut file = out
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;
    let end = file.stream_position().map_err(write_err)?;
    file.set_len(end).map_err(write_err)?;

    Ok(())
}

fn file_len(file: &File) -> u64 {
    file.metadata().map(|m| m.len()).unwrap_or(0)
}

/// Open an existing playlist positioned just before its closing wrapper so
/// new tracks and a fresh footer overwrite it from there.
fn open_at_closing_tag(path: &Path, scan: TailScan) -> Result<File, PlaylistError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| PlaylistError::Open {
            path: path.to_path_buf(),
            op: "append",
            source,
        })?;
    let write_err = |source: io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let Some(offset) = find_closing_tag(&mut file, scan).map_err(write_err)? else {
        let scanned = file_len(&file).min(scan.max_bytes);
        return Err(PlaylistError::ClosingTagNotFound {
            path: path.to_path_buf(),
            scanned,
        });
    };
    log::debug!("Appending to {} at byte {}", path.display(), offset);

    file.seek(SeekFrom::Start(offset)).map_err(write_err)?;
    Ok(file)
}

/// Byte offset where the last `</trackList>` line starts, searching at most
/// `scan.max_bytes` back from the end, case-insensitively.
///
/// Indentation in front of the tag is included so the rewritten footer lines
/// up; anything else on that line is kept.
pub fn find_closing_tag<R: Read + Seek>(reader: &mut R, scan: TailScan) -> io::Result<Option<u64>> {
    let len = reader.seek(SeekFrom::End(0))?;
    let floor = len.saturating_sub(scan.max_bytes);
    let step = scan.chunk.max(1);

    let mut start = len;
    // Head of the chunk read last, kept so a tag split across chunks is found.
    let mut carry: Vec<u8> = Vec::new();
    while start > floor {
        let next = start.saturating_sub(step).max(floor);
        let mut window = vec![0u8; (start - next) as usize];
        reader.seek(SeekFrom::Start(next))?;
        reader.read_exact(&mut window)?;
        window.extend_from_slice(&carry);
        start = next;

        if let Some(pos) = rfind_ignore_case(&window, CLOSING_TAG) {
            let tag_at = start + pos as u64;
            return Ok(Some(tag_at - indentation_before(reader, tag_at)?));
        }

        window.truncate(CLOSING_TAG.len() - 1);
        carry = window;
    }

    Ok(None)
}

/// Count the spaces and tabs directly in front of `at`.
fn indentation_before<R: Read + Seek>(reader: &mut R, at: u64) -> io::Result<u64> {
    let from = at.saturating_sub(MAX_INDENT);
    let mut buf = vec![0u8; (at - from) as usize];
    reader.seek(SeekFrom::Start(from))?;
    reader.read_exact(&mut buf)?;
    Ok(buf
        .iter()
        .rev()
        .take_while(|b| **b == b' ' || **b == b'\t')
        .count() as u64)
}

fn rfind_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .rposition(|w| w.eq_ignore_ascii_case(needle))
}
