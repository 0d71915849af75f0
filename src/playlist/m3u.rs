use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::entry::PlaylistEntry;
use super::error::PlaylistError;

pub const HEADER: &str = "#EXTM3U";

pub fn write<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = &'a PlaylistEntry>,
    append: bool,
) -> Result<(), PlaylistError> {
    let (file, op) = if append {
        (
            OpenOptions::new().create(true).append(true).open(path),
            "append",
        )
    } else {
        (File::create(path), "writing")
    };
    let file = file.map_err(|source| PlaylistError::Open {
        path: path.to_path_buf(),
        op,
        source,
    })?;

    let write_err = |source: io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    // A file created by this call gets the header even in append mode.
    let is_new = file.metadata().map_err(write_err)?.len() == 0;

    let mut out = BufWriter::new(file);
    if is_new {
        writeln!(out, "{HEADER}").map_err(write_err)?;
    }
    for entry in entries {
        writeln!(out, "{}", entry.render()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    Ok(())
}
