use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{LibrarySettings, PlaylistFormat};
use crate::library::scan;
use crate::playlist::{PlaylistEntry, PlaylistError, PlaylistWriter};
use crate::progress::{Reporter, clock, estimate_remaining, file_status};
use crate::tags::{TagOutcome, read_track};

/// Scan every directory in turn and render one entry per recognized file.
///
/// Order is directory order first, then sorted path order inside each one.
pub fn collect_entries(
    dirs: &[PathBuf],
    library: &LibrarySettings,
    format: PlaylistFormat,
    reporter: &mut dyn Reporter,
) -> Vec<PlaylistEntry> {
    let mut entries: Vec<PlaylistEntry> = Vec::new();

    for dir in dirs {
        reporter.message(&format!("Listing contents of '{}'...", dir.display()));
        let files = scan(dir, library);
        reporter.message(&format!(
            "Generating playlist content ({} files)...",
            files.len()
        ));

        let started = Instant::now();
        for (idx, path) in files.iter().enumerate() {
            match read_track(path) {
                TagOutcome::Read(track) => entries.push(PlaylistEntry::new(&track, format)),
                TagOutcome::Unreadable { track, error } => {
                    log::warn!("Unable to read tags for {}: {}", path.display(), error);
                    entries.push(PlaylistEntry::new(&track, format));
                }
                TagOutcome::Unrecognized => {
                    log::debug!("Skipping unrecognized file {}", path.display());
                }
            }

            let done = idx + 1;
            let eta = estimate_remaining(started.elapsed(), done, files.len());
            reporter.status(&file_status(done, files.len(), eta, &display_name(path)));
        }
    }

    entries
}

/// Build the playlist for `dirs` and write it with `writer`.
///
/// Returns how many entries were written. Nothing is written when no file
/// produced an entry.
pub fn generate(
    dirs: &[PathBuf],
    library: &LibrarySettings,
    writer: &PlaylistWriter,
    output: &Path,
    reporter: &mut dyn Reporter,
) -> Result<usize, PlaylistError> {
    let started = Instant::now();

    let entries = collect_entries(dirs, library, writer.format, reporter);
    let result = if entries.is_empty() {
        reporter.message("No information found");
        Ok(0)
    } else {
        log::debug!("Writing {} entries to {}", entries.len(), output.display());
        writer.write(output, &entries).map(|()| entries.len())
    };

    reporter.message(&format!("Run time: {}", clock(started.elapsed())));
    result
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
