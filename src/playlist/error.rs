use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("can't open {} for {op}: {source}", path.display())]
    Open {
        path: PathBuf,
        op: &'static str,
        source: io::Error,
    },
    #[error("can't write to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    /// Appending to an XSPF file whose tail has no `</trackList>`.
    #[error(
        "can't find closing trackList tag in the last {scanned} bytes of {}; can't append",
        path.display()
    )]
    ClosingTagNotFound { path: PathBuf, scanned: u64 },
}
